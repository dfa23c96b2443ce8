use std::time::Duration;

use bevy::{prelude::*, utils::HashMap};
use bevy_rapier2d::prelude::KinematicCharacterControllerOutput;
use bevy_tweening::{lens::TransformScaleLens, EaseFunction, Tween};
use sd_common::components::{
    platform::{
        CollapseTask, ContactEffects, ContactEpisode, Platform, PlatformKind,
        CONTACT_NORMAL_MIN_Y,
    },
    player::Player,
    velocity::Velocity,
};
use sd_core::audio::{play_effect, ContactSound};
use sd_util::constants::FAKE_COLLAPSE_DELAY;

/// Turns the character controller's per-frame collision list into contact
/// episodes and dispatches the platform effects. Runs before the conveyor
/// drift and before velocity integration.
pub fn derive_platform_contacts(
    mut q_player: Query<(
        &KinematicCharacterControllerOutput,
        &mut Player,
        &mut Velocity,
    )>,
    mut q_platforms: Query<(Entity, &mut Platform, Option<&ContactSound>)>,
    mut q_animators: Query<&mut bevy_tweening::Animator<Transform>>,
    mut commands: Commands,
) {
    for (kcco, mut player, mut velocity) in q_player.iter_mut() {
        // Steepest surface normal per platform touched this frame. normal1
        // points out of the character shape, flipping it gives the normal the
        // platform presents, (0, 1) for a clean landing.
        let mut touched: HashMap<Entity, f32> = HashMap::new();

        for collision in kcco.collisions.iter() {
            let normal_y = -collision.toi.normal1.y;

            let entry = touched.entry(collision.entity).or_insert(f32::MIN);
            *entry = entry.max(normal_y);
        }

        for (&entity, &normal_y) in touched.iter() {
            let platform = q_platforms.get_mut(entity);

            // Bumping into walls or other bodies is a normal non-event.
            let (_, mut platform, sound) = match platform {
                Ok(platform) => platform,
                Err(..) => continue,
            };

            let effects = match platform.begin_contact(normal_y) {
                Some(effects) => effects,
                // Side or underside hit, nothing fires.
                None => continue,
            };

            apply_begin_effects(
                effects,
                entity,
                &mut platform,
                &mut player,
                &mut velocity,
                sound,
                &mut q_animators,
                &mut commands,
            );
        }

        // Platforms whose valid contact did not show up this frame close
        // their episode.
        for (entity, mut platform, _) in q_platforms.iter_mut() {
            if platform.episode != ContactEpisode::ValidContact {
                continue;
            }

            let still_touching = touched
                .get(&entity)
                .map_or(false, |normal_y| *normal_y >= CONTACT_NORMAL_MIN_Y);

            if still_touching {
                continue;
            }

            if platform.end_contact().stop_drift {
                velocity.current.x = 0.0;
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn apply_begin_effects(
    effects: ContactEffects,
    entity: Entity,
    platform: &mut Platform,
    player: &mut Player,
    velocity: &mut Velocity,
    sound: Option<&ContactSound>,
    q_animators: &mut Query<&mut bevy_tweening::Animator<Transform>>,
    commands: &mut Commands,
) {
    if effects.damage {
        player.damage();
    }

    if effects.heal {
        player.recover();
    }

    if effects.play_sound {
        if let Some(sound) = sound {
            play_effect(commands, sound);
        }
    }

    if let Some(spring) = effects.spring {
        // Horizontal velocity survives the bounce.
        velocity.current.y = spring;
    }

    if effects.play_animation {
        // Platforms without a visual simply skip this facet.
        if let Ok(mut animator) = q_animators.get_mut(entity) {
            animator.set_tweenable(contact_tween(platform.kind));
        }
    }

    if let Some(handle) = effects.collapse {
        platform.collapse_timer = Some(CollapseTask {
            timer: Timer::from_seconds(FAKE_COLLAPSE_DELAY, TimerMode::Once),
            handle,
        });
    }
}

fn contact_tween(kind: PlatformKind) -> Tween<Transform> {
    match kind {
        // Squash on landing, spring back up.
        PlatformKind::Trampoline => Tween::new(
            EaseFunction::BounceOut,
            Duration::from_secs_f32(0.2),
            TransformScaleLens {
                start: Vec3::new(1.0, 0.6, 1.0),
                end: Vec3::ONE,
            },
        ),
        // Crumble flat while the collapse timer runs.
        _ => Tween::new(
            EaseFunction::QuadraticIn,
            Duration::from_secs_f32(0.2),
            TransformScaleLens {
                start: Vec3::ONE,
                end: Vec3::new(1.1, 0.2, 1.0),
            },
        ),
    }
}
