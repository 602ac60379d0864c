//! GPIO wrappers
//!
//! Newtypes over the embassy pin drivers so they can be handed to the
//! board-agnostic drivers through the `scoreline-hal` traits.

use embassy_rp::gpio::{Input, Output};

/// Input pin
pub struct Rp2040Input<'d>(pub Input<'d>);

impl<'d> scoreline_hal::InputPin for Rp2040Input<'d> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// Push-pull output pin
pub struct Rp2040Output<'d>(pub Output<'d>);

impl<'d> scoreline_hal::OutputPin for Rp2040Output<'d> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
