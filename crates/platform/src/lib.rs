use bevy::prelude::{App, IntoSystemConfigs, Plugin, Update};
use collapse::tick_collapse_timers;
use contact::derive_platform_contacts;
use conveyor::apply_conveyor_drift;
use recycle::recycle_offscreen_platforms;
use sd_movement::physics::{
    apply_velocity_to_kinematic_controller, clear_velocity_if_kinematic_on_ground,
};

pub mod collapse;
pub mod contact;
pub mod conveyor;
pub mod motion;
pub mod recycle;

#[derive(Debug, Default)]
pub struct PlatformPlugin {}

impl Plugin for PlatformPlugin {
    fn build(&self, app: &mut App) {
        // Contact dispatch and drift must land on Velocity before it gets
        // integrated into the character controller this frame.
        app.add_systems(
            Update,
            (derive_platform_contacts, apply_conveyor_drift)
                .chain()
                .before(apply_velocity_to_kinematic_controller),
        )
        .add_systems(
            Update,
            (tick_collapse_timers, recycle_offscreen_platforms)
                .chain()
                .after(clear_velocity_if_kinematic_on_ground),
        );
    }
}
