//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

use scoreline_protocol::Line;

/// Channel capacity for lines from the wireless link
const LINK_CHANNEL_SIZE: usize = 8;

/// Complete lines received from the Bluetooth module
pub static LINK_LINES: Channel<CriticalSectionRawMutex, Line, LINK_CHANNEL_SIZE> = Channel::new();
