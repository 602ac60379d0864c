//! Board-agnostic core logic for the scoreboard firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Score state and its display projection
//! - The score store that keeps display, storage and buzzer in step
//! - Button debouncing and input routing
//! - The control-loop body
//! - Hardware abstraction traits and configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod input;
pub mod score;
pub mod store;
pub mod traits;

pub use controller::{Controller, Event};
pub use score::{Player, Score, Scores};
pub use store::{Outcome, Report, Scoreboard};
