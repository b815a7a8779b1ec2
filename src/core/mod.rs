//! Constants, tunable configuration and frame pacing.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod pacing;

pub use config::GameConfig;
pub use constants::*;
pub use pacing::FrameClock;
