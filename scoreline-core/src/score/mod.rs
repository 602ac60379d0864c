//! Score state
//!
//! Two bounded counters and the display projection derived from them.

pub mod counter;
pub mod frame;

pub use counter::{Player, Score, Scores, MAX_SCORE};
pub use frame::{DisplayFrame, DIGITS_PER_PLAYER, FRAME_DIGITS};
