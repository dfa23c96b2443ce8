use bevy::prelude::*;
use bevy_rapier2d::prelude::{Collider, RigidBody};
use rand::{thread_rng, Rng};
use sd_common::components::platform::{Platform, PlatformKind};
use sd_core::audio::ContactSound;
use sd_platform::motion::spawn_motion_tween;
use sd_util::constants::SHAFT_HALF_WIDTH;

const PLATFORM_SPACING: f32 = 60.0;
const INITIAL_PLATFORM_ROWS: usize = 12;

pub fn spawn_initial_platforms(mut commands: Commands, asset_server: Res<AssetServer>) {
    let mut rng = thread_rng();

    for row in 0..INITIAL_PLATFORM_ROWS {
        let kind = match row % 5 {
            0 => PlatformKind::Normal,
            1 => PlatformKind::Conveyor,
            2 => PlatformKind::Trampoline,
            3 => PlatformKind::Fake,
            _ => PlatformKind::Nails,
        };

        let x = if row == 0 {
            // First platform sits under the spawn point.
            0.0
        } else {
            rng.gen_range(-SHAFT_HALF_WIDTH..SHAFT_HALF_WIDTH)
        };

        spawn_platform(
            &mut commands,
            &asset_server,
            kind,
            Vec2::new(x, -(row as f32) * PLATFORM_SPACING),
        );
    }
}

pub fn spawn_platform(
    commands: &mut Commands,
    asset_server: &AssetServer,
    kind: PlatformKind,
    pos: Vec2,
) {
    let mut platform = Platform::new(kind);

    if kind == PlatformKind::Conveyor {
        let dir = if thread_rng().gen_bool(0.5) { 1.0 } else { -1.0 };
        platform.set_drift_dir(dir);
    }

    // Normal platforms occasionally patrol, everything else gets the idle
    // placeholder the contact dispatch retargets.
    let tween = spawn_motion_tween(kind, pos.extend(0.0));

    commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(pos.x, pos.y, 0.0)),
        Collider::cuboid(24.0, 4.0),
        RigidBody::Fixed,
        platform,
        ContactSound(sound_for(asset_server, kind)),
        bevy_tweening::Animator::new(tween),
    ));
}

fn sound_for(asset_server: &AssetServer, kind: PlatformKind) -> Option<Handle<AudioSource>> {
    let path = match kind {
        PlatformKind::Normal => "audio/land_normal.ogg",
        PlatformKind::Fake => "audio/land_fake.ogg",
        PlatformKind::Nails => "audio/land_nails.ogg",
        PlatformKind::Trampoline => "audio/land_trampoline.ogg",
        PlatformKind::Conveyor => "audio/land_conveyor.ogg",
    };

    Some(asset_server.load(path))
}
