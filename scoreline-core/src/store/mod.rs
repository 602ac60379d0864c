//! Score store
//!
//! The in-memory scores plus the three surfaces kept in step with them:
//! display, persistent storage and feedback output.

pub mod report;
pub mod scoreboard;

pub use report::{Outcome, Report, Startup};
pub use scoreboard::Scoreboard;

#[cfg(test)]
pub(crate) use scoreboard::mocks;
