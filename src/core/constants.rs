// Playing field (world pixels)
pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 400;
pub const GROUND_HEIGHT: i32 = FIELD_HEIGHT - 70; // y of the walking surface

// Frame timing
pub const FPS: u32 = 60;

// Player physics
pub const GRAVITY: i32 = 1;
pub const JUMP_STRENGTH: i32 = 15;

// Player geometry
pub const PLAYER_X: i32 = 50;
pub const PLAYER_WIDTH: i32 = 10;
pub const PLAYER_HEIGHT: i32 = 50;

// Obstacle geometry
pub const OBSTACLE_WIDTH: i32 = 20;
pub const OBSTACLE_HEIGHT: i32 = 20;
pub const WIDE_OBSTACLE_WIDTH: i32 = 40;
pub const TALL_OBSTACLE_HEIGHT: i32 = 40;

// Scrolling
pub const SPEED: i32 = 3;

// Spawn spacing, in frames between consecutive obstacles
pub const MIN_SPAWN_DISTANCE: u32 = 150;
pub const MAX_SPAWN_DISTANCE: u32 = 300;
