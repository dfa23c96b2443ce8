use bevy::prelude::{Query, With};
use sd_common::components::{platform::Platform, player::Player, velocity::Velocity};

/// Reapplies the conveyor drift every frame while the player stands on one.
/// Has to run before velocity integration, damping would otherwise erode the
/// drift between frames.
pub fn apply_conveyor_drift(
    mut q_player: Query<&mut Velocity, With<Player>>,
    q_platforms: Query<&Platform>,
) {
    for mut velocity in q_player.iter_mut() {
        for platform in q_platforms.iter() {
            if let Some(drift) = platform.drift() {
                // Horizontal only, gravity owns the vertical axis.
                velocity.current.x = drift;
            }
        }
    }
}
