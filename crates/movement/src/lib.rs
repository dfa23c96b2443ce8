use bevy::prelude::{App, IntoSystemConfigs, Plugin, Update};
use physics::{apply_velocity_to_kinematic_controller, clear_velocity_if_kinematic_on_ground};

pub mod physics;

#[derive(Debug, Default)]
pub struct MovementPlugin {}

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                apply_velocity_to_kinematic_controller,
                clear_velocity_if_kinematic_on_ground,
            )
                .chain(),
        );
    }
}
