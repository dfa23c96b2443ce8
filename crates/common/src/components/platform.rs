use bevy::{prelude::Component, time::Timer};

/// Minimum vertical component of the contact normal for a landing to count.
/// Anything flatter is a side or underside hit and applies nothing.
pub const CONTACT_NORMAL_MIN_Y: f32 = 0.7;

pub const SPRING_VELOCITY: f32 = 320.0;
pub const CONVEYOR_DRIFT_SPEED: f32 = 100.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlatformKind {
    #[default]
    Normal,
    Fake,
    Nails,
    Trampoline,
    Conveyor,
}

/// Contact episode for the platform/player pair. `ValidContact` also serves
/// as the "player is resting on this platform" flag the conveyor drift reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ContactEpisode {
    #[default]
    NoContact,
    ValidContact,
}

/// Ticket for a scheduled fake-platform collapse. Carries the generation it
/// was issued under so a task that outlives a recycle is detected and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CollapseHandle {
    generation: u32,
}

#[derive(Debug)]
pub struct CollapseTask {
    pub timer: Timer,
    pub handle: CollapseHandle,
}

/// What a valid contact-begin asks the caller to do. All booleans are already
/// deduplicated against the platform's one-shot flags.
#[derive(Debug, Default, PartialEq)]
pub struct ContactEffects {
    pub damage: bool,
    pub heal: bool,
    pub play_sound: bool,
    /// Upward velocity to impose on the player, horizontal left untouched.
    pub spring: Option<f32>,
    pub play_animation: bool,
    /// Collapse to schedule after `FAKE_COLLAPSE_DELAY`.
    pub collapse: Option<CollapseHandle>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct EndEffects {
    /// Zero the player's horizontal velocity, the conveyor let go of them.
    pub stop_drift: bool,
}

#[derive(Component, Debug)]
pub struct Platform {
    pub kind: PlatformKind,
    pub episode: ContactEpisode,
    /// Mirrors the rapier collider. Only the fake-platform collapse turns it
    /// off, `reset()` turns it back on.
    pub collider_enabled: bool,
    pub drift_velocity: f32,
    pub spring_velocity: f32,
    pub collapse_timer: Option<CollapseTask>,
    damage_applied: bool,
    heal_applied: bool,
    trampoline_heal_applied: bool,
    sound_played: bool,
    generation: u32,
}

impl Platform {
    pub fn new(kind: PlatformKind) -> Self {
        Self {
            kind,
            episode: ContactEpisode::NoContact,
            collider_enabled: true,
            drift_velocity: CONVEYOR_DRIFT_SPEED,
            spring_velocity: SPRING_VELOCITY,
            collapse_timer: None,
            damage_applied: false,
            heal_applied: false,
            trampoline_heal_applied: false,
            sound_played: false,
            generation: 0,
        }
    }

    /// Mirror the conveyor direction, `dir` is expected to be 1.0 or -1.0.
    pub fn set_drift_dir(&mut self, dir: f32) {
        self.drift_velocity = CONVEYOR_DRIFT_SPEED * dir;
    }

    pub fn with_drift_dir(mut self, dir: f32) -> Self {
        self.set_drift_dir(dir);
        self
    }

    /// Contact-begin for this platform/player pair. Returns `None` when the
    /// normal fails the top-surface filter, in which case the caller must not
    /// apply anything. A begin while the episode is already open returns
    /// empty effects, the one-shot flags never fire twice per episode.
    pub fn begin_contact(&mut self, normal_y: f32) -> Option<ContactEffects> {
        if normal_y < CONTACT_NORMAL_MIN_Y {
            return None;
        }

        let mut effects = ContactEffects::default();

        if self.episode == ContactEpisode::ValidContact {
            return Some(effects);
        }

        self.episode = ContactEpisode::ValidContact;

        // Trampolines thud on every landing, everything else only the first
        // time until the platform is recycled.
        if self.kind == PlatformKind::Trampoline {
            effects.play_sound = true;
        } else if !self.sound_played {
            effects.play_sound = true;
            self.sound_played = true;
        }

        if self.kind == PlatformKind::Nails {
            if !self.damage_applied {
                effects.damage = true;
                self.damage_applied = true;
            }
            return Some(effects);
        }

        match self.kind {
            // Per-touch flag, cleared again at contact end so that bouncing
            // repeatedly keeps healing.
            PlatformKind::Trampoline => {
                if !self.trampoline_heal_applied {
                    effects.heal = true;
                    self.trampoline_heal_applied = true;
                }
            }
            _ => {
                if !self.heal_applied {
                    effects.heal = true;
                    self.heal_applied = true;
                }
            }
        }

        match self.kind {
            PlatformKind::Trampoline => {
                effects.spring = Some(self.spring_velocity);
                effects.play_animation = true;
            }
            PlatformKind::Fake => {
                effects.play_animation = true;
                effects.collapse = Some(CollapseHandle {
                    generation: self.generation,
                });
            }
            _ => {}
        }

        Some(effects)
    }

    /// The continuous conveyor effect. Reapplied every frame before velocity
    /// integration because damping erodes whatever was set last frame.
    pub fn drift(&self) -> Option<f32> {
        if self.kind == PlatformKind::Conveyor && self.episode == ContactEpisode::ValidContact {
            Some(self.drift_velocity)
        } else {
            None
        }
    }

    pub fn end_contact(&mut self) -> EndEffects {
        let was_touching = self.episode == ContactEpisode::ValidContact;
        self.episode = ContactEpisode::NoContact;

        if self.kind == PlatformKind::Trampoline {
            self.trampoline_heal_applied = false;
        }

        EndEffects {
            stop_drift: self.kind == PlatformKind::Conveyor && was_touching,
        }
    }

    /// Fire a scheduled collapse. Returns false for a stale handle (the
    /// platform was recycled since it was issued) or when the collider is
    /// already off, so disablement happens exactly once.
    pub fn try_collapse(&mut self, handle: CollapseHandle) -> bool {
        if handle.generation != self.generation {
            return false;
        }

        if !self.collider_enabled {
            return false;
        }

        self.collider_enabled = false;
        true
    }

    /// Pool recycle. Clears every one-shot flag, closes the episode, restores
    /// the collider and invalidates any in-flight collapse task.
    pub fn reset(&mut self) {
        self.damage_applied = false;
        self.heal_applied = false;
        self.trampoline_heal_applied = false;
        self.sound_played = false;
        self.episode = ContactEpisode::NoContact;
        self.collider_enabled = true;
        self.collapse_timer = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn begin(platform: &mut Platform) -> ContactEffects {
        platform
            .begin_contact(1.0)
            .expect("top-surface contact should be valid")
    }

    #[test]
    fn shallow_normal_applies_nothing() {
        for kind in [
            PlatformKind::Normal,
            PlatformKind::Fake,
            PlatformKind::Nails,
            PlatformKind::Trampoline,
            PlatformKind::Conveyor,
        ] {
            let mut platform = Platform::new(kind);

            assert_eq!(platform.begin_contact(0.69), None);
            assert_eq!(platform.begin_contact(0.0), None);
            assert_eq!(platform.begin_contact(-1.0), None);
            assert_eq!(platform.episode, ContactEpisode::NoContact);
            assert_eq!(platform.drift(), None);
        }
    }

    #[test]
    fn normal_at_threshold_is_valid() {
        let mut platform = Platform::new(PlatformKind::Normal);

        let effects = platform.begin_contact(0.7).unwrap();
        assert!(effects.heal);
        assert_eq!(platform.episode, ContactEpisode::ValidContact);
    }

    #[test]
    fn nails_damage_once_across_repeated_begins() {
        let mut platform = Platform::new(PlatformKind::Nails);

        let first = begin(&mut platform);
        assert!(first.damage);
        assert!(!first.heal);

        // Two more begins without an intervening end.
        assert!(!begin(&mut platform).damage);
        assert!(!begin(&mut platform).damage);

        // Even across touches the damage flag persists until reset.
        platform.end_contact();
        assert!(!begin(&mut platform).damage);

        platform.reset();
        assert!(begin(&mut platform).damage);
    }

    #[test]
    fn nails_never_heal_or_spring() {
        let mut platform = Platform::new(PlatformKind::Nails);

        let effects = begin(&mut platform);
        assert!(!effects.heal);
        assert_eq!(effects.spring, None);
        assert_eq!(effects.collapse, None);
    }

    #[test]
    fn normal_heals_once_until_reset() {
        let mut platform = Platform::new(PlatformKind::Normal);

        assert!(begin(&mut platform).heal);
        platform.end_contact();
        assert!(!begin(&mut platform).heal);
        platform.end_contact();

        platform.reset();
        assert!(begin(&mut platform).heal);
    }

    #[test]
    fn trampoline_heals_and_springs_per_touch() {
        let mut platform = Platform::new(PlatformKind::Trampoline);

        let first = begin(&mut platform);
        assert!(first.heal);
        assert_eq!(first.spring, Some(SPRING_VELOCITY));
        assert!(!first.damage);

        platform.end_contact();

        let second = begin(&mut platform);
        assert!(second.heal);
        assert_eq!(second.spring, Some(SPRING_VELOCITY));
        assert!(!second.damage);
    }

    #[test]
    fn trampoline_effects_fire_once_within_open_episode() {
        let mut platform = Platform::new(PlatformKind::Trampoline);

        let first = begin(&mut platform);
        assert!(first.heal);
        assert!(first.spring.is_some());

        let duplicate = begin(&mut platform);
        assert!(!duplicate.heal);
        assert_eq!(duplicate.spring, None);
        assert!(!duplicate.play_sound);
    }

    #[test]
    fn trampoline_sound_plays_every_touch_others_once() {
        let mut trampoline = Platform::new(PlatformKind::Trampoline);
        assert!(begin(&mut trampoline).play_sound);
        trampoline.end_contact();
        assert!(begin(&mut trampoline).play_sound);

        let mut nails = Platform::new(PlatformKind::Nails);
        assert!(begin(&mut nails).play_sound);
        nails.end_contact();
        assert!(!begin(&mut nails).play_sound);
    }

    #[test]
    fn conveyor_drifts_only_while_touched() {
        let mut platform = Platform::new(PlatformKind::Conveyor).with_drift_dir(-1.0);

        assert_eq!(platform.drift(), None);

        begin(&mut platform);
        assert_eq!(platform.drift(), Some(-CONVEYOR_DRIFT_SPEED));

        let end = platform.end_contact();
        assert!(end.stop_drift);
        assert_eq!(platform.drift(), None);
    }

    #[test]
    fn non_conveyor_end_does_not_stop_drift() {
        let mut platform = Platform::new(PlatformKind::Normal);

        begin(&mut platform);
        assert!(!platform.end_contact().stop_drift);
    }

    #[test]
    fn fake_collapse_fires_exactly_once() {
        let mut platform = Platform::new(PlatformKind::Fake);

        let effects = begin(&mut platform);
        let handle = effects.collapse.expect("fake platform schedules collapse");
        assert!(effects.play_animation);

        assert!(platform.try_collapse(handle));
        assert!(!platform.collider_enabled);

        // The same handle firing again is a no-op.
        assert!(!platform.try_collapse(handle));
    }

    #[test]
    fn stale_collapse_after_reset_is_dropped() {
        let mut platform = Platform::new(PlatformKind::Fake);

        let handle = begin(&mut platform).collapse.unwrap();

        platform.reset();

        assert!(!platform.try_collapse(handle));
        assert!(platform.collider_enabled);
    }

    #[test]
    fn collapse_waits_out_the_full_delay() {
        use bevy::time::TimerMode;
        use std::time::Duration;

        let mut platform = Platform::new(PlatformKind::Fake);
        let handle = begin(&mut platform).collapse.unwrap();
        platform.collapse_timer = Some(CollapseTask {
            timer: Timer::from_seconds(0.2, TimerMode::Once),
            handle,
        });

        // Halfway through the delay the task goes back untouched.
        let mut task = platform.collapse_timer.take().unwrap();
        task.timer.tick(Duration::from_secs_f32(0.1));
        assert!(!task.timer.just_finished());
        platform.collapse_timer = Some(task);
        assert!(platform.collider_enabled);

        // Past the delay it fires and the collider drops.
        let mut task = platform.collapse_timer.take().unwrap();
        task.timer.tick(Duration::from_secs_f32(0.15));
        assert!(task.timer.just_finished());
        assert!(platform.try_collapse(task.handle));
        assert!(!platform.collider_enabled);
    }

    #[test]
    fn fake_schedules_collapse_once_per_episode() {
        let mut platform = Platform::new(PlatformKind::Fake);

        assert!(begin(&mut platform).collapse.is_some());
        assert_eq!(begin(&mut platform).collapse, None);
    }

    #[test]
    fn reset_restores_collider_and_flags() {
        let mut platform = Platform::new(PlatformKind::Fake);

        let handle = begin(&mut platform).collapse.unwrap();
        assert!(platform.try_collapse(handle));
        assert!(!platform.collider_enabled);

        platform.reset();

        assert!(platform.collider_enabled);
        assert_eq!(platform.episode, ContactEpisode::NoContact);
        assert!(platform.begin_contact(1.0).unwrap().heal);
    }

    #[test]
    fn trampoline_double_bounce_example() {
        // Spawn a trampoline, land, leave, land again: heal and spring twice,
        // damage never.
        let mut platform = Platform::new(PlatformKind::Trampoline);
        let mut heals = 0;
        let mut springs = 0;
        let mut damages = 0;

        for _ in 0..2 {
            let effects = begin(&mut platform);
            heals += effects.heal as u32;
            springs += effects.spring.is_some() as u32;
            damages += effects.damage as u32;
            platform.end_contact();
        }

        assert_eq!(heals, 2);
        assert_eq!(springs, 2);
        assert_eq!(damages, 0);
    }

    #[test]
    fn nails_triple_begin_example() {
        // Three consecutive begins without an end: exactly one damage call.
        let mut platform = Platform::new(PlatformKind::Nails);
        let mut damages = 0;

        for _ in 0..3 {
            damages += begin(&mut platform).damage as u32;
        }

        assert_eq!(damages, 1);
    }
}
