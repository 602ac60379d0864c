//! Segmented display trait

use crate::score::DisplayFrame;

/// Maximum intensity level accepted by the display driver
pub const MAX_INTENSITY: u8 = 15;

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Writing to the driver chip failed
    Bus,
    /// Intensity outside `0..=MAX_INTENSITY`
    InvalidIntensity,
}

/// Trait for an 8-digit seven-segment display
///
/// The display has one driver chip with eight digit positions. Brightness is
/// set once at startup; after that the scoreboard only clears and redraws.
pub trait SegmentDisplay {
    /// Leave shutdown mode and start scanning the digits
    fn wake(&mut self) -> Result<(), DisplayError>;

    /// Set the brightness level (`0..=MAX_INTENSITY`)
    fn set_intensity(&mut self, level: u8) -> Result<(), DisplayError>;

    /// Blank every digit
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Show a frame, one decimal digit per position
    fn show(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError>;

    /// Clear, then show a frame
    fn redraw(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError> {
        self.clear()?;
        self.show(frame)
    }
}
