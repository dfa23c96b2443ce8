use bevy::prelude::{Query, Vec2, With};
use bevy_rapier2d::prelude::{KinematicCharacterController, KinematicCharacterControllerOutput};
use sd_common::components::{player::Player, velocity::Velocity};
use sd_util::constants::{PLAYER_GRAVITY, PLAYER_GROUND_STICK_SPEED};

pub fn apply_velocity_to_kinematic_controller(
    mut q_kinematic_controller: Query<(&mut KinematicCharacterController, &mut Velocity)>,
) {
    for (mut kcc, mut velocity) in q_kinematic_controller.iter_mut() {
        // Gravity
        velocity.current += Vec2::new(0.0, -PLAYER_GRAVITY);

        velocity.current = velocity.current.clamp(-velocity.max, velocity.max);

        if kcc.translation.is_none() {
            kcc.translation = Some(Vec2::new(
                velocity.current.x * (1.0 / 60.0),
                velocity.current.y * (1.0 / 60.0),
            ));
        }

        // Damp horizontal velocity. The conveyor drift is reapplied every
        // frame before this runs, so damping never wins while riding one.
        velocity.current.x *= 1.0 - velocity.damping;

        if velocity.current.x.abs() < 0.1 {
            velocity.current.x = 0.0;
        }
    }
}

pub fn clear_velocity_if_kinematic_on_ground(
    mut q_kinematic: Query<(&KinematicCharacterControllerOutput, &mut Velocity), With<Player>>,
) {
    for (kcco, mut velocity) in q_kinematic.iter_mut() {
        // Only kill downward speed, an upward trampoline impulse must survive
        // the frame it was applied on.
        if kcco.grounded && velocity.current.y < 0.0 {
            velocity.current.y = PLAYER_GROUND_STICK_SPEED;
        }
    }
}
