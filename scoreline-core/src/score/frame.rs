//! Display frame projection
//!
//! The 8-digit display shows Player 2 on positions 0-3 and Player 1 on
//! positions 4-7, each least-significant digit first. On a MAX7219 module
//! position 0 is the rightmost digit, so Player 1 reads on the left.

use heapless::String;

use super::counter::{Player, Scores};

/// Total digit positions on the display
pub const FRAME_DIGITS: usize = 8;

/// Digit positions per player
pub const DIGITS_PER_PLAYER: usize = 4;

/// Eight decimal digits derived from the current scores
///
/// Always a pure function of [`Scores`]; recomputed on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayFrame {
    digits: [u8; FRAME_DIGITS],
}

impl DisplayFrame {
    /// Project both scores onto the display positions
    pub fn from_scores(scores: &Scores) -> Self {
        let mut digits = [0u8; FRAME_DIGITS];
        for player in Player::ALL {
            let start = Self::first_position(player);
            digits[start..start + DIGITS_PER_PLAYER]
                .copy_from_slice(&scores.get(player).digits());
        }
        Self { digits }
    }

    /// First display position used by a player
    pub fn first_position(player: Player) -> usize {
        match player {
            Player::Two => 0,
            Player::One => DIGITS_PER_PLAYER,
        }
    }

    /// Digit at a display position (0-7)
    pub fn digit(&self, position: usize) -> Option<u8> {
        self.digits.get(position).copied()
    }

    /// All eight digits, indexed by display position
    pub fn digits(&self) -> &[u8; FRAME_DIGITS] {
        &self.digits
    }

    /// A player's four digits, least-significant first
    pub fn player_digits(&self, player: Player) -> [u8; DIGITS_PER_PLAYER] {
        let start = Self::first_position(player);
        let mut out = [0u8; DIGITS_PER_PLAYER];
        out.copy_from_slice(&self.digits[start..start + DIGITS_PER_PLAYER]);
        out
    }

    /// A player's digits as they read on the display, e.g. "0007"
    pub fn player_text(&self, player: Player) -> String<DIGITS_PER_PLAYER> {
        let mut text = String::new();
        for &digit in self.player_digits(player).iter().rev() {
            let _ = text.push((b'0' + digit) as char);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::Score;
    use proptest::prelude::*;

    fn scores(p1: u16, p2: u16) -> Scores {
        Scores::new(
            Score::from_raw(p1 as u32).unwrap(),
            Score::from_raw(p2 as u32).unwrap(),
        )
    }

    #[test]
    fn test_player_positions() {
        let frame = DisplayFrame::from_scores(&scores(42, 1234));

        // Player 2 on positions 0-3, least-significant first
        assert_eq!(&frame.digits()[..4], &[4, 3, 2, 1]);
        // Player 1 on positions 4-7
        assert_eq!(&frame.digits()[4..], &[2, 4, 0, 0]);
    }

    #[test]
    fn test_no_leading_zero_suppression() {
        let frame = DisplayFrame::from_scores(&scores(7, 0));
        assert_eq!(frame.player_text(Player::One).as_str(), "0007");
        assert_eq!(frame.player_text(Player::Two).as_str(), "0000");
    }

    #[test]
    fn test_player_digits() {
        let frame = DisplayFrame::from_scores(&scores(42, 9999));
        assert_eq!(frame.player_digits(Player::One), [2, 4, 0, 0]);
        assert_eq!(frame.player_digits(Player::Two), [9, 9, 9, 9]);
    }

    #[test]
    fn test_digit_out_of_range() {
        let frame = DisplayFrame::from_scores(&Scores::zero());
        assert_eq!(frame.digit(7), Some(0));
        assert_eq!(frame.digit(8), None);
    }

    proptest! {
        #[test]
        fn prop_text_matches_value(p1 in 0u16..=9999, p2 in 0u16..=9999) {
            let frame = DisplayFrame::from_scores(&scores(p1, p2));
            let p1_text = frame.player_text(Player::One);
            let p2_text = frame.player_text(Player::Two);
            prop_assert_eq!(p1_text.as_str().parse::<u16>().unwrap(), p1);
            prop_assert_eq!(p2_text.as_str().parse::<u16>().unwrap(), p2);
            prop_assert_eq!(p1_text.len(), 4);
        }
    }
}
