//! Scoreline Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that chip-specific HALs
//! implement. Drivers in `scoreline-drivers` are written against these traits
//! so they can be exercised on the host with mock pins and in-memory storage.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  scoreline-firmware / scoreline-drivers │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  scoreline-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ scoreline-hal-    │
//!           │      rp2040       │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`flash::FlashStorage`] - Persistent key-value storage
//!
//! [`uart::UartConfig`] describes the serial link to the wireless module.

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use gpio::{InputPin, OutputPin};
pub use uart::UartConfig;
