//! Scoreline Wireless Command Protocol
//!
//! This crate defines the text protocol spoken over the Bluetooth serial
//! link. A phone or laptop paired with the scoreboard sends one ASCII
//! command per line:
//!
//! ```text
//! P1+\n      Player 1 score up
//! P2+\n      Player 2 score up
//! P1-\n      Player 1 score down
//! P2-\n      Player 2 score down
//! RESET\n    Both scores to zero
//! ```
//!
//! Lines end with `\n` or `\r`. Surrounding whitespace is ignored, matching
//! is exact and case-sensitive. There are no replies on the link.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod command;
pub mod line;

pub use command::Command;
pub use line::{Line, LineError, LineParser, MAX_LINE_LEN};
