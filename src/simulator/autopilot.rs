//! Scripted player for headless runs.

use super::config::AutopilotConfig;
use crate::runner::{RunnerGame, RunnerInput};
use rand::Rng;

/// Jumps when the next obstacle gets close, judging each obstacle once.
#[derive(Debug, Clone)]
pub struct Autopilot {
    config: AutopilotConfig,
    /// Id of the last obstacle a decision was made for.
    last_judged: Option<u64>,
    /// Obstacles deliberately ignored so far.
    pub misses: u64,
}

impl Autopilot {
    pub fn new(config: AutopilotConfig) -> Self {
        Self {
            config,
            last_judged: None,
            misses: 0,
        }
    }

    /// Input for the coming frame, if any.
    pub fn decide<R: Rng>(&mut self, game: &RunnerGame, rng: &mut R) -> Option<RunnerInput> {
        if game.player.is_jumping {
            return None;
        }

        let player_right = game.player.rect.right();
        let next = game
            .obstacles
            .iter()
            .find(|obstacle| obstacle.rect.x >= player_right)?;

        let gap = next.rect.x - player_right;
        if gap > self.config.jump_distance || self.last_judged == Some(next.id) {
            return None;
        }

        self.last_judged = Some(next.id);
        if rng.gen_bool(self.config.miss_chance) {
            self.misses += 1;
            log::debug!("Autopilot ignores obstacle #{}", next.id);
            return None;
        }
        Some(RunnerInput::Jump)
    }
}
