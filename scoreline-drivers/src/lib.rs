//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in scoreline-core for the scoreboard hardware:
//!
//! - MAX7219 eight-digit display
//! - GPIO buzzer
//! - Active-low push buttons
//! - Score persistence over the HAL key-value store

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod feedback;
pub mod input;
pub mod storage;
