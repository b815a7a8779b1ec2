//! Main simulation runner.
//!
//! Each run drives a real `RunnerGame` through `process_input` and
//! `step_frame`, exactly as the interactive loop does, with the autopilot
//! standing in for the keyboard.

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::runner::{process_input, step_frame, Phase, RunnerGame, RunnerInput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - score {}, spawned {}, {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.spawned_total(),
                if stats.survived { "survived" } else { "crashed" }
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs, config.max_frames_per_run)
}

/// Play one session until GameOver or the frame cap.
pub fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let mut game = RunnerGame::new(config.game, rng);
    let mut pilot = Autopilot::new(config.autopilot);
    let mut stats = RunStats::default();

    let mut last_spawn_frame: Option<u64> = None;
    let mut frame: u64 = 0;

    while frame < config.max_frames_per_run {
        if let Some(input) = pilot.decide(&game, rng) {
            if input == RunnerInput::Jump {
                stats.jumps += 1;
            }
            process_input(&mut game, input, rng);
        }

        let report = step_frame(&mut game, rng);
        frame += 1;

        if let Some(kind) = report.spawned {
            stats.record_spawn(kind);
            // Frames since the session began count as the first interval
            let interval = frame - last_spawn_frame.unwrap_or(0);
            stats.record_interval(interval);
            last_spawn_frame = Some(frame);
        }

        if report.collided {
            stats.killer = game
                .obstacles
                .iter()
                .find(|o| o.rect.intersects(&game.player.rect))
                .map(|o| o.kind);
            break;
        }
    }

    stats.score = game.score;
    stats.frames = frame;
    stats.survived = game.phase == Phase::Playing;
    stats.misses = pilot.misses;
    stats
}
