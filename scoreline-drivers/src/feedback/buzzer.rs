//! GPIO buzzer
//!
//! Active-high buzzer on a single pin. A pulse drives the pin high, waits,
//! then drives it low again. The wait is awaited, so the caller does not
//! continue until the pulse is over.

use embedded_hal_async::delay::DelayNs;
use scoreline_core::traits::Feedback;
use scoreline_hal::OutputPin;

/// Buzzer driven from a GPIO pin
pub struct GpioBuzzer<P, D> {
    pin: P,
    delay: D,
    pulse_ms: u32,
}

impl<P: OutputPin, D: DelayNs> GpioBuzzer<P, D> {
    /// Create a new buzzer, starting silent
    ///
    /// # Arguments
    /// - `pin`: Output pin wired to the buzzer
    /// - `delay`: Async delay used to time the pulse
    /// - `pulse_ms`: Length of one pulse
    pub fn new(mut pin: P, delay: D, pulse_ms: u32) -> Self {
        pin.set_low();
        Self { pin, delay, pulse_ms }
    }

    /// Pulse length in milliseconds
    pub fn pulse_ms(&self) -> u32 {
        self.pulse_ms
    }

    /// Check if the buzzer is sounding
    pub fn is_sounding(&self) -> bool {
        self.pin.is_set_high()
    }
}

impl<P: OutputPin, D: DelayNs> Feedback for GpioBuzzer<P, D> {
    async fn pulse(&mut self) {
        self.pin.set_high();
        self.delay.delay_ms(self.pulse_ms).await;
        self.pin.set_low();
    }
}
