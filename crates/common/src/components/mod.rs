pub mod platform;
pub mod player;
pub mod velocity;
