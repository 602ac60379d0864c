//! Input handling
//!
//! Maps buttons and wireless commands onto score actions, with time-based
//! debouncing for the buttons.

pub mod action;
pub mod debounce;
pub mod router;

pub use action::{Action, Button};
pub use debounce::{Debouncer, DEFAULT_SETTLE_MS};
pub use router::{InputRouter, Routed, MAX_ROUTED_PER_POLL};
