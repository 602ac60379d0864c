//! Input source traits
//!
//! Both sources are polled; neither may block.

use scoreline_protocol::Line;

use crate::input::Button;

/// Source of complete text lines from the wireless link
pub trait CommandSource {
    /// Take the next complete line, if one has arrived
    fn poll_line(&mut self) -> Option<Line>;
}

/// The three push buttons
pub trait ButtonPanel {
    /// Check whether a button is currently held down
    fn is_pressed(&mut self, button: Button) -> bool;
}
