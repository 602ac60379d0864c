//! Hardware abstraction traits
//!
//! These traits define the interface between the scoreboard logic and the
//! hardware-specific implementations in `scoreline-drivers`. Tests drive the
//! logic through in-memory implementations.

pub mod display;
pub mod feedback;
pub mod input;
pub mod persistence;

pub use display::{DisplayError, SegmentDisplay};
pub use feedback::Feedback;
pub use input::{ButtonPanel, CommandSource};
pub use persistence::{PersistError, ScorePersistence};
