//! Endless runner.
//!
//! The player jumps over obstacles that scroll in from the right at a
//! constant speed. Obstacles come in three shapes and appear after a random
//! number of frames; touching one ends the session, and the score counts
//! the frames survived.

pub mod collision;
pub mod logic;
pub mod spawner;
pub mod types;

pub use collision::{first_collision, rects_overlap};
pub use logic::*;
pub use spawner::Spawner;
pub use types::*;
