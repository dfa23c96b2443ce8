use bevy::{
    diagnostic::FrameTimeDiagnosticsPlugin,
    ecs::schedule::ExecutorKind,
    prelude::*,
    window::{PresentMode, Window, WindowPlugin, WindowResolution},
};
use bevy_framepace::{FramepacePlugin, FramepaceSettings, Limiter};
use bevy_rapier2d::prelude::{
    Collider, KinematicCharacterController, QueryFilterFlags, RigidBody,
};
use sd_common::{
    components::{player::Player, velocity::Velocity},
    CommonPlugin,
};
use sd_core::CorePlugin;
use sd_movement::MovementPlugin;
use sd_platform::PlatformPlugin;
use sd_util::constants::{
    CAMERA_DESCENT_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, PLAYER_MAX_HEALTH,
    WINDOW_TITLE,
};
use spawn_shaft::spawn_initial_platforms;

pub mod spawn_shaft;

fn main() {
    let mut app = App::new();

    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: WINDOW_TITLE.to_string(),
                    resizable: true,
                    resolution: WindowResolution::new(INITIAL_WINDOW_WIDTH, INITIAL_WINDOW_HEIGHT),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins(FrameTimeDiagnosticsPlugin)
    .add_plugins(FramepacePlugin)
    .add_plugins(CommonPlugin {})
    .add_plugins(CorePlugin {})
    .add_plugins(MovementPlugin {})
    .add_plugins(PlatformPlugin {})
    .insert_resource(FramepaceSettings {
        limiter: Limiter::from_framerate(60.0),
    })
    .edit_schedule(Update, |schedule| {
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
    });

    app.add_systems(Startup, (spawn_player, spawn_initial_platforms));
    app.add_systems(Update, follow_player_descent);

    app.run();
}

fn spawn_player(mut commands: Commands) {
    commands.spawn((
        SpatialBundle::from_transform(Transform::from_xyz(0.0, 60.0, 0.0)),
        RigidBody::KinematicVelocityBased,
        Collider::cuboid(6.0, 9.0),
        Velocity {
            damping: 0.1,
            ..default()
        },
        KinematicCharacterController {
            filter_flags: QueryFilterFlags::EXCLUDE_SENSORS,
            ..default()
        },
        Player {
            health: PLAYER_MAX_HEALTH,
            max_health: PLAYER_MAX_HEALTH,
        },
    ));
}

pub fn follow_player_descent(
    q_player: Query<&Transform, (With<Player>, Without<Camera>)>,
    mut q_camera: Query<&mut Transform, With<Camera>>,
) {
    let player = if let Ok(player) = q_player.get_single() {
        player
    } else {
        return;
    };

    let mut camera = if let Ok(camera) = q_camera.get_single_mut() {
        camera
    } else {
        return;
    };

    // The shaft scrolls one way, the camera never climbs back up.
    let target = player.translation.y + CAMERA_DESCENT_MARGIN;

    if target < camera.translation.y {
        camera.translation.y = target;
    }
}
