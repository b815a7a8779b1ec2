//! Runtime-tunable game parameters.
//!
//! `GameConfig::default()` reproduces the reference constants exactly, so
//! the interactive game always plays with these values. The simulator can
//! load an alternative set from JSON to explore spawn spacing and speed.

use super::constants::*;
use serde::{Deserialize, Serialize};

/// Every constant that shapes a play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: i32,
    pub field_height: i32,
    /// y coordinate of the walking surface; entities rest their base on it.
    pub ground_height: i32,
    pub fps: u32,

    pub gravity: i32,
    pub jump_strength: i32,

    pub player_x: i32,
    pub player_width: i32,
    pub player_height: i32,

    pub obstacle_width: i32,
    pub obstacle_height: i32,
    pub wide_obstacle_width: i32,
    pub tall_obstacle_height: i32,

    /// Leftward scroll per frame.
    pub speed: i32,

    pub min_spawn_distance: u32,
    pub max_spawn_distance: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            fps: FPS,
            gravity: GRAVITY,
            jump_strength: JUMP_STRENGTH,
            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,
            wide_obstacle_width: WIDE_OBSTACLE_WIDTH,
            tall_obstacle_height: TALL_OBSTACLE_HEIGHT,
            speed: SPEED,
            min_spawn_distance: MIN_SPAWN_DISTANCE,
            max_spawn_distance: MAX_SPAWN_DISTANCE,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the parameters describe a playable field.
    pub fn validate(&self) -> Result<(), String> {
        if self.field_width <= 0 || self.field_height <= 0 {
            return Err(format!(
                "Field must have positive size, got {}x{}",
                self.field_width, self.field_height
            ));
        }
        if self.ground_height <= 0 || self.ground_height > self.field_height {
            return Err(format!(
                "Ground height {} must lie within the field (1..={})",
                self.ground_height, self.field_height
            ));
        }
        if self.fps == 0 {
            return Err("Frame rate must be at least 1".to_string());
        }
        if self.gravity <= 0 {
            return Err("Gravity must be positive or the player never lands".to_string());
        }
        if self.jump_strength < 0 {
            return Err("Jump strength cannot be negative".to_string());
        }
        let sizes = [
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("wide_obstacle_width", self.wide_obstacle_width),
            ("tall_obstacle_height", self.tall_obstacle_height),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                return Err(format!("{} must be positive, got {}", name, value));
            }
        }
        if self.player_height > self.ground_height {
            return Err("Player is taller than the space above the ground".to_string());
        }
        if self.speed <= 0 {
            return Err("Scroll speed must be positive".to_string());
        }
        if self.min_spawn_distance == 0 {
            return Err("Minimum spawn distance must be at least 1 frame".to_string());
        }
        if self.min_spawn_distance > self.max_spawn_distance {
            return Err(format!(
                "Spawn distance range is empty ({} > {})",
                self.min_spawn_distance, self.max_spawn_distance
            ));
        }
        Ok(())
    }

    /// y of the player's top edge when standing on the ground.
    pub fn player_ground_y(&self) -> i32 {
        self.ground_height - self.player_height
    }

    /// Obstacles whose right edge falls below this x are dropped. Using the
    /// widest variant keeps every shape fully off-screen before removal.
    pub fn prune_threshold(&self) -> i32 {
        -self.obstacle_width.max(self.wide_obstacle_width)
    }
}
