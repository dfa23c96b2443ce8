use std::time::Duration;

use bevy::prelude::{Transform, Vec3};
use bevy_tweening::{
    lens::{TransformPositionLens, TransformScaleLens},
    EaseFunction, RepeatCount, RepeatStrategy, Tween,
};
use rand::{thread_rng, Rng};
use sd_common::components::platform::PlatformKind;

/// Chance that a freshly spawned or recycled normal platform patrols back
/// and forth instead of sitting still.
pub const PATROL_CHANCE: f64 = 0.2;

const PATROL_DISTANCE: f32 = 50.0;
const PATROL_PERIOD: f32 = 2.0;

const IDLE_DURATION: f32 = 0.2;

/// Placeholder tween so every platform carries a live animator for the
/// contact dispatch to retarget. The animator ticks it from the first frame,
/// so it must have a real duration. Targeting unit scale also snaps a
/// recycled crumbled platform back to full size.
pub fn idle_tween() -> Tween<Transform> {
    Tween::new(
        EaseFunction::BounceOut,
        Duration::from_secs_f32(IDLE_DURATION),
        TransformScaleLens {
            start: Vec3::ONE,
            end: Vec3::ONE,
        },
    )
}

/// Back-and-forth patrol for the occasional normal platform, one 50 px leg
/// mirrored forever, horizontal or vertical.
pub fn patrol_tween(origin: Vec3, horizontal: bool) -> Tween<Transform> {
    let offset = if horizontal {
        Vec3::new(PATROL_DISTANCE, 0.0, 0.0)
    } else {
        Vec3::new(0.0, PATROL_DISTANCE, 0.0)
    };

    Tween::new(
        EaseFunction::SineInOut,
        Duration::from_secs_f32(PATROL_PERIOD),
        TransformPositionLens {
            start: origin,
            end: origin + offset,
        },
    )
    .with_repeat_count(RepeatCount::Infinite)
    .with_repeat_strategy(RepeatStrategy::MirroredRepeat)
}

/// Rolls the motion a platform starts with at spawn or recycle. Only normal
/// platforms ever patrol, everything else idles in place.
pub fn spawn_motion_tween(kind: PlatformKind, origin: Vec3) -> Tween<Transform> {
    let mut rng = thread_rng();

    if kind == PlatformKind::Normal && rng.gen_bool(PATROL_CHANCE) {
        patrol_tween(origin, rng.gen_bool(0.5))
    } else {
        idle_tween()
    }
}
