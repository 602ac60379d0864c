//! Push buttons
//!
//! Three momentary buttons wired to ground with internal pull-ups. A low
//! reading means pressed. Debouncing happens in the core input router.

use scoreline_core::input::Button;
use scoreline_core::traits::ButtonPanel;
use scoreline_hal::InputPin;

/// Button panel over three active-low inputs
pub struct ActiveLowButtons<A, B, R> {
    player1: A,
    player2: B,
    reset: R,
}

impl<A: InputPin, B: InputPin, R: InputPin> ActiveLowButtons<A, B, R> {
    /// Create a panel from the player 1, player 2 and reset inputs
    pub fn new(player1: A, player2: B, reset: R) -> Self {
        Self {
            player1,
            player2,
            reset,
        }
    }
}

impl<A: InputPin, B: InputPin, R: InputPin> ButtonPanel for ActiveLowButtons<A, B, R> {
    fn is_pressed(&mut self, button: Button) -> bool {
        match button {
            Button::Player1 => self.player1.is_low(),
            Button::Player2 => self.player2.is_low(),
            Button::Reset => self.reset.is_low(),
        }
    }
}
