//! Endless Runner - terminal side-scroller library.
//!
//! The simulation (`runner`) is independent of the terminal: the `ui` and
//! `input` modules adapt it to ratatui/crossterm, and `simulator` drives it
//! headlessly.

pub mod build_info;
pub mod core;
pub mod input;
pub mod runner;
pub mod simulator;
pub mod ui;

pub use crate::core::config::GameConfig;
pub use runner::{process_input, restart, step_frame, LoopControl, Phase, RunnerGame, RunnerInput};
