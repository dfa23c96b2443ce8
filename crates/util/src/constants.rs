pub const WINDOW_TITLE: &str = "Shaft Drop";
pub const INITIAL_WINDOW_WIDTH: f32 = 1024.0;
pub const INITIAL_WINDOW_HEIGHT: f32 = 768.0;

pub const ASPECT_RATIO_X: f32 = 512.0 / 1.5;
pub const ASPECT_RATIO_Y: f32 = 364.0 / 1.5;

pub const SHAFT_HALF_WIDTH: f32 = 140.0;

pub const PLAYER_MAX_HEALTH: i32 = 10;
pub const PLAYER_GRAVITY: f32 = 15.0;
pub const PLAYER_GROUND_STICK_SPEED: f32 = -40.0;

pub const FAKE_COLLAPSE_DELAY: f32 = 0.2;

// How far above the camera a platform may scroll before it is recycled,
// and how far below the view a recycled one reappears.
pub const PLATFORM_RECYCLE_DISTANCE: f32 = 190.0;
pub const PLATFORM_RESPAWN_DEPTH: f32 = 220.0;

pub const CAMERA_DESCENT_MARGIN: f32 = 40.0;
