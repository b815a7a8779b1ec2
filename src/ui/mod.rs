//! Terminal rendering for the runner.

pub mod canvas;
pub mod game_common;
pub mod runner_scene;

pub use runner_scene::{render_game_over_scene, render_runner_scene};
