use bevy::{prelude::Component, reflect::Reflect};
use bevy_inspector_egui::{prelude::ReflectInspectorOptions, InspectorOptions};

const NAILS_HIT_DAMAGE: i32 = 3;
const LANDING_RECOVERY: i32 = 1;

#[derive(Component, InspectorOptions, Reflect)]
#[reflect(InspectorOptions)]
pub struct Player {
    pub health: i32,
    pub max_health: i32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            health: 10,
            max_health: 10,
        }
    }
}

impl Player {
    pub fn damage(&mut self) {
        self.health = (self.health - NAILS_HIT_DAMAGE).max(0);
    }

    pub fn recover(&mut self) {
        self.health = (self.health + LANDING_RECOVERY).min(self.max_health);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_never_drops_below_zero() {
        let mut player = Player {
            health: 2,
            max_health: 10,
        };

        player.damage();
        assert_eq!(player.health, 0);

        player.damage();
        assert_eq!(player.health, 0);
    }

    #[test]
    fn recover_caps_at_max_health() {
        let mut player = Player {
            health: 10,
            max_health: 10,
        };

        player.recover();
        assert_eq!(player.health, 10);

        player.damage();
        player.recover();
        assert_eq!(player.health, 8);
    }
}
