//! Headless simulator for spawn-pacing analysis.
//!
//! Plays thousands of sessions with a scripted player to check that:
//! - spawn intervals stay inside the configured window
//! - every obstacle shape is clearable by a well-timed jump
//! - the shape mix is roughly uniform
//!
//! Sessions run through the same `process_input`/`step_frame` pair as the
//! interactive game, so results match real play frame for frame.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::{AutopilotConfig, SimConfig};
pub use report::{RunStats, SimReport};
pub use runner::{run_simulation, simulate_single_run};
