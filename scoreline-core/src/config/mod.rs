//! Configuration types
//!
//! Board-agnostic settings for the scoreboard. The firmware fills these from
//! an embedded TOML file at boot and falls back to the defaults if the file
//! does not validate.

pub mod types;

pub use types::*;
