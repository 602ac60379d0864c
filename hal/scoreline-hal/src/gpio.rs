//! GPIO pin abstractions
//!
//! Provides traits for digital input and output pins that can be implemented
//! by chip-specific HALs.

/// Digital output pin
///
/// Used for the buzzer line. Implementations drive the actual hardware
/// register for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Used for the push buttons. Reads must not block.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockOutput {
        high: bool,
    }

    impl OutputPin for MockOutput {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockInput(bool);

    impl InputPin for MockInput {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_set_state() {
        let mut pin = MockOutput { high: false };

        pin.set_state(true);
        assert!(pin.is_set_high());

        pin.set_state(false);
        assert!(pin.is_set_low());
    }

    #[test]
    fn test_input_is_low_default() {
        assert!(MockInput(false).is_low());
        assert!(!MockInput(true).is_low());
    }
}
