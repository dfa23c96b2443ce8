use bevy::prelude::{App, Plugin};
use components::player::Player;

pub mod components;

#[derive(Debug, Default)]
pub struct CommonPlugin {}

impl Plugin for CommonPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Player>();
    }
}
