//! RP2040-specific HAL for the scoreboard firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `scoreline-hal` traits:
//!
//! - GPIO wrappers (implement `scoreline_hal::InputPin` / `OutputPin`)
//! - UART configuration mapping for the wireless link
//! - Flash storage driver (implements `scoreline_hal::FlashStorage`)

#![no_std]

pub mod flash;
pub mod gpio;
pub mod uart;
