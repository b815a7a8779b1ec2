//! Endless runner data structures.
//!
//! All coordinates are world pixels with y growing downward, so "above the
//! ground" means a smaller y than `GameConfig::ground_height`.

use crate::core::config::GameConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// The player-controlled marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub rect: Rect,
    /// Vertical velocity in pixels/frame (negative = upward).
    pub velocity_y: i32,
    /// True from a jump until the player lands again.
    pub is_jumping: bool,
}

impl Player {
    /// A player standing on the ground at the configured column.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            rect: Rect::new(
                config.player_x,
                config.player_ground_y(),
                config.player_width,
                config.player_height,
            ),
            velocity_y: 0,
            is_jumping: false,
        }
    }

    /// Start a jump. Ignored while airborne: no double jump, no buffering.
    pub fn jump(&mut self, jump_strength: i32) {
        if !self.is_jumping {
            self.velocity_y = -jump_strength;
            self.is_jumping = true;
        }
    }

    /// Apply gravity, move, and land on `ground_height`.
    pub fn update(&mut self, gravity: i32, ground_height: i32) {
        self.velocity_y += gravity;
        self.rect.y += self.velocity_y;

        let ground_y = ground_height - self.rect.height;
        if self.rect.y >= ground_y {
            self.rect.y = ground_y;
            self.is_jumping = false;
            self.velocity_y = 0;
        }
    }

    /// Distance between the player's feet and the ground line.
    pub fn height_above_ground(&self, ground_height: i32) -> i32 {
        ground_height - self.rect.bottom()
    }
}

/// The three obstacle shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Standard, // base width and height
    Wide,     // double width, base height
    Tall,     // base width, double height
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Standard,
        ObstacleKind::Wide,
        ObstacleKind::Tall,
    ];

    /// Uniform pick among the three shapes.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    pub fn width(&self, config: &GameConfig) -> i32 {
        match self {
            Self::Standard | Self::Tall => config.obstacle_width,
            Self::Wide => config.wide_obstacle_width,
        }
    }

    pub fn height(&self, config: &GameConfig) -> i32 {
        match self {
            Self::Standard | Self::Wide => config.obstacle_height,
            Self::Tall => config.tall_obstacle_height,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Wide => "Wide",
            Self::Tall => "Tall",
        }
    }
}

/// A single obstacle scrolling toward the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Obstacle {
    /// Spawn order within the session, starting at 0.
    pub id: u64,
    pub kind: ObstacleKind,
    pub rect: Rect,
}

impl Obstacle {
    /// Create an obstacle with its left edge at `x`, base on the ground.
    pub fn spawn(id: u64, kind: ObstacleKind, x: i32, config: &GameConfig) -> Self {
        let width = kind.width(config);
        let height = kind.height(config);
        Self {
            id,
            kind,
            rect: Rect::new(x, config.ground_height - height, width, height),
        }
    }

    pub fn update(&mut self, speed: i32) {
        self.rect.x -= speed;
    }
}

/// Which half of the state machine the session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    GameOver,
}
