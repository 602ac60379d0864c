//! MAX7219 eight-digit display
//!
//! One chip, Code-B decode. Frame position `p` lands on digit register
//! `p + 1`, so position 0 is the rightmost digit on a standard module.

use embedded_hal_02::digital::v2::OutputPin;
use ::max7219::connectors::{Connector, PinConnector};
use ::max7219::MAX7219;
use scoreline_core::score::{DisplayFrame, FRAME_DIGITS};
use scoreline_core::traits::display::MAX_INTENSITY;
use scoreline_core::traits::{DisplayError, SegmentDisplay};

/// Chip index in the daisy chain
const ADDR: usize = 0;

/// Display driver over a single MAX7219
pub struct Max7219Display<C> {
    chip: MAX7219<C>,
}

impl<DATA, CS, SCK> Max7219Display<PinConnector<DATA, CS, SCK>>
where
    DATA: OutputPin,
    CS: OutputPin,
    SCK: OutputPin,
{
    /// Bit-bang the chip over three GPIO pins
    ///
    /// The chip is left in shutdown until [`SegmentDisplay::wake`] is called.
    pub fn from_pins(data: DATA, cs: CS, sck: SCK) -> Result<Self, DisplayError> {
        let chip = MAX7219::from_pins(1, data, cs, sck).map_err(|_| DisplayError::Bus)?;
        Ok(Self::new(chip))
    }
}

impl<C: Connector> Max7219Display<C> {
    /// Wrap an initialized chip
    pub fn new(chip: MAX7219<C>) -> Self {
        Self { chip }
    }

    /// Release the chip
    pub fn release(self) -> MAX7219<C> {
        self.chip
    }
}

/// Order a frame for `write_bcd`, which fills digit 8 first
///
/// Digits are sent as ASCII; Code-B decode only looks at the low nibble.
pub fn bcd_bytes(frame: &DisplayFrame) -> [u8; FRAME_DIGITS] {
    let digits = frame.digits();
    let mut bytes = [0u8; FRAME_DIGITS];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = b'0' + digits[FRAME_DIGITS - 1 - i];
    }
    bytes
}

impl<C: Connector> SegmentDisplay for Max7219Display<C> {
    fn wake(&mut self) -> Result<(), DisplayError> {
        self.chip.power_on().map_err(|_| DisplayError::Bus)
    }

    fn set_intensity(&mut self, level: u8) -> Result<(), DisplayError> {
        if level > MAX_INTENSITY {
            return Err(DisplayError::InvalidIntensity);
        }
        self.chip
            .set_intensity(ADDR, level)
            .map_err(|_| DisplayError::Bus)
    }

    fn clear(&mut self) -> Result<(), DisplayError> {
        self.chip.clear_display(ADDR).map_err(|_| DisplayError::Bus)
    }

    fn show(&mut self, frame: &DisplayFrame) -> Result<(), DisplayError> {
        self.chip
            .write_bcd(ADDR, &bcd_bytes(frame))
            .map_err(|_| DisplayError::Bus)
    }
}
