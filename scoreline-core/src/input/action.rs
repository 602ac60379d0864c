//! Buttons and the score actions they trigger

use scoreline_protocol::Command;

use crate::score::Player;

/// Physical push buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    /// Player 1 score up
    Player1,
    /// Player 2 score up
    Player2,
    /// Both scores to zero
    Reset,
}

impl Button {
    /// All buttons, in polling order
    pub const ALL: [Button; 3] = [Button::Player1, Button::Player2, Button::Reset];

    /// Index into per-button tables
    pub fn index(self) -> usize {
        match self {
            Button::Player1 => 0,
            Button::Player2 => 1,
            Button::Reset => 2,
        }
    }
}

/// A score mutation requested by an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Add one point to a player
    Increment(Player),
    /// Remove one point from a player
    Decrement(Player),
    /// Both scores to zero
    Reset,
}

impl Action {
    /// Action bound to a push button
    ///
    /// There are no decrement buttons; decrements only arrive over the link.
    pub fn for_button(button: Button) -> Self {
        match button {
            Button::Player1 => Action::Increment(Player::One),
            Button::Player2 => Action::Increment(Player::Two),
            Button::Reset => Action::Reset,
        }
    }

    /// Check if the action sounds the buzzer when it takes effect
    pub fn sounds_feedback(&self) -> bool {
        !matches!(self, Action::Decrement(_))
    }
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        match command {
            Command::Player1Up => Action::Increment(Player::One),
            Command::Player2Up => Action::Increment(Player::Two),
            Command::Player1Down => Action::Decrement(Player::One),
            Command::Player2Down => Action::Decrement(Player::Two),
            Command::Reset => Action::Reset,
        }
    }
}
