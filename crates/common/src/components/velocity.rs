use bevy::prelude::{Component, Vec2};

#[derive(Debug, Component)]
pub struct Velocity {
    pub current: Vec2,
    pub max: Vec2,
    pub damping: f32,
}

impl Default for Velocity {
    fn default() -> Self {
        Self {
            current: Default::default(),
            // Falling down the shaft is much faster than walking.
            max: Vec2::new(120.0, 400.0),
            damping: 0.0,
        }
    }
}
