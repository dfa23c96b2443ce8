use bevy::prelude::*;
use bevy_rapier2d::prelude::ColliderDisabled;
use bevy_tweening::Animator;
use rand::{thread_rng, Rng};
use sd_common::components::platform::{Platform, PlatformKind};
use sd_util::constants::{PLATFORM_RECYCLE_DISTANCE, PLATFORM_RESPAWN_DEPTH, SHAFT_HALF_WIDTH};

use crate::motion::spawn_motion_tween;

/// The off-screen check plus the object pool. The camera only descends, so a
/// platform far enough above it has scrolled out of play for good and gets
/// reset and moved below the view instead of despawned.
pub fn recycle_offscreen_platforms(
    q_camera: Query<&Transform, With<Camera>>,
    mut q_platforms: Query<
        (
            Entity,
            &mut Platform,
            &mut Transform,
            Option<&mut Animator<Transform>>,
        ),
        Without<Camera>,
    >,
    mut commands: Commands,
) {
    let camera = match q_camera.get_single() {
        Ok(camera) => camera,
        Err(..) => return,
    };

    let mut rng = thread_rng();

    for (entity, mut platform, mut transform, animator) in q_platforms.iter_mut() {
        if transform.translation.y - camera.translation.y < PLATFORM_RECYCLE_DISTANCE {
            continue;
        }

        platform.reset();
        commands.entity(entity).remove::<ColliderDisabled>();

        // Conveyors re-roll their direction every time they come back.
        if platform.kind == PlatformKind::Conveyor {
            platform.set_drift_dir(if rng.gen_bool(0.5) { 1.0 } else { -1.0 });
        }

        transform.translation.x = rng.gen_range(-SHAFT_HALF_WIDTH..SHAFT_HALF_WIDTH);
        transform.translation.y = camera.translation.y - PLATFORM_RESPAWN_DEPTH;

        // A stale patrol tween would drag the platform back to its old spot,
        // so the motion is re-rolled around the new origin. The idle tween
        // also undoes a crumbled scale.
        if let Some(mut animator) = animator {
            animator.set_tweenable(spawn_motion_tween(platform.kind, transform.translation));
        }
    }
}
