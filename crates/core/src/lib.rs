use bevy::{
    input::common_conditions::input_toggle_active,
    prelude::{App, KeyCode, Plugin},
};
use bevy_inspector_egui::quick::WorldInspectorPlugin;
use bevy_tweening::TweeningPlugin;
use camera::CameraPlugin;
use physics::PhysicsPlugin;

pub mod audio;
pub mod camera;
pub mod physics;

#[derive(Debug, Default)]
pub struct CorePlugin {}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(
            WorldInspectorPlugin::default().run_if(input_toggle_active(false, KeyCode::Grave)),
        )
        .add_plugins(TweeningPlugin)
        .add_plugins(CameraPlugin {})
        .add_plugins(PhysicsPlugin {});
    }
}
