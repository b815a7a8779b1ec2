//! Simulation configuration.

use crate::core::config::GameConfig;

/// How the scripted player reacts to obstacles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutopilotConfig {
    /// Jump once the gap between the player's right edge and the next
    /// obstacle is at most this many pixels.
    pub jump_distance: i32,
    /// Probability (0.0..=1.0) of ignoring an obstacle entirely.
    pub miss_chance: f64,
}

impl Default for AutopilotConfig {
    fn default() -> Self {
        Self {
            jump_distance: 20,
            miss_chance: 0.0,
        }
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated sessions
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Frames per session before the run counts as survived
    pub max_frames_per_run: u64,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    pub game: GameConfig,

    pub autopilot: AutopilotConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_frames_per_run: 60 * 60 * 5, // five minutes at 60 fps
            verbosity: 1,
            game: GameConfig::default(),
            autopilot: AutopilotConfig::default(),
        }
    }
}

impl SimConfig {
    /// Quick check that the spawn spacing is survivable by a perfect player.
    pub fn perfect_play_test() -> Self {
        Self {
            num_runs: 100,
            max_frames_per_run: 20_000,
            ..Default::default()
        }
    }

    /// Sloppy player: misses roughly one obstacle in `miss_one_in`.
    pub fn sloppy_play_test(miss_one_in: u32) -> Self {
        Self {
            num_runs: 500,
            autopilot: AutopilotConfig {
                miss_chance: 1.0 / miss_one_in.max(1) as f64,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.num_runs == 0 {
            return Err("At least one run is required".to_string());
        }
        if !(0.0..=1.0).contains(&self.autopilot.miss_chance) {
            return Err(format!(
                "Miss chance must be between 0 and 1, got {}",
                self.autopilot.miss_chance
            ));
        }
        self.game.validate()
    }
}
