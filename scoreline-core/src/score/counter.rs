//! Bounded score counters

/// Highest representable score (four display digits)
pub const MAX_SCORE: u16 = 9999;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Both players, Player 1 first
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Player number as shown to humans (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

/// A score clamped to `0..=MAX_SCORE`
///
/// Mutations at a bound leave the value unchanged and report `false`;
/// there is no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Score(u16);

impl Score {
    /// Score of zero
    pub const ZERO: Score = Score(0);

    /// Score at the upper bound
    pub const MAX: Score = Score(MAX_SCORE);

    /// Create a score from a stored value
    ///
    /// Returns `None` for values above [`MAX_SCORE`].
    pub fn from_raw(value: u32) -> Option<Self> {
        if value <= MAX_SCORE as u32 {
            Some(Score(value as u16))
        } else {
            None
        }
    }

    /// Current value
    pub fn value(self) -> u16 {
        self.0
    }

    /// Add one point
    ///
    /// Returns `false` (and leaves the score unchanged) at [`MAX_SCORE`].
    pub fn increment(&mut self) -> bool {
        if self.0 < MAX_SCORE {
            self.0 += 1;
            true
        } else {
            false
        }
    }

    /// Remove one point
    ///
    /// Returns `false` (and leaves the score unchanged) at zero.
    pub fn decrement(&mut self) -> bool {
        if self.0 > 0 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }


    /// Decimal digits, least-significant first
    ///
    /// Always four digits; leading zeros are kept.
    pub fn digits(self) -> [u8; 4] {
        let mut digits = [0u8; 4];
        let mut remaining = self.0;
        for digit in digits.iter_mut() {
            *digit = (remaining % 10) as u8;
            remaining /= 10;
        }
        digits
    }
}

/// Both players' scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scores {
    pub player1: Score,
    pub player2: Score,
}

impl Scores {
    /// Both scores at zero
    pub const fn zero() -> Self {
        Self {
            player1: Score::ZERO,
            player2: Score::ZERO,
        }
    }

    /// Create from two scores
    pub const fn new(player1: Score, player2: Score) -> Self {
        Self { player1, player2 }
    }

    /// Get a player's score
    pub fn get(&self, player: Player) -> Score {
        match player {
            Player::One => self.player1,
            Player::Two => self.player2,
        }
    }

    /// Get mutable access to a player's score
    pub fn get_mut(&mut self, player: Player) -> &mut Score {
        match player {
            Player::One => &mut self.player1,
            Player::Two => &mut self.player2,
        }
    }

    /// Replace a player's score
    pub fn set(&mut self, player: Player, score: Score) {
        *self.get_mut(player) = score;
    }

    /// Values as a `(player1, player2)` tuple
    pub fn values(&self) -> (u16, u16) {
        (self.player1.value(), self.player2.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn score(value: u16) -> Score {
        Score::from_raw(value as u32).unwrap()
    }

    #[test]
    fn test_increment_stops_at_max() {
        let mut s = score(9998);
        assert!(s.increment());
        assert_eq!(s.value(), 9999);

        assert!(!s.increment());
        assert_eq!(s, Score::MAX);
    }

    #[test]
    fn test_decrement_stops_at_zero() {
        let mut s = score(1);
        assert!(s.decrement());
        assert_eq!(s, Score::ZERO);

        assert!(!s.decrement());
        assert_eq!(s.value(), 0);
    }

    #[test]
    fn test_from_raw_bounds() {
        assert_eq!(Score::from_raw(0), Some(Score::ZERO));
        assert_eq!(Score::from_raw(9999), Some(Score::MAX));
        assert_eq!(Score::from_raw(10_000), None);
        assert_eq!(Score::from_raw(u32::MAX), None);
    }

    #[test]
    fn test_digits_least_significant_first() {
        assert_eq!(score(42).digits(), [2, 4, 0, 0]);
        assert_eq!(score(7).digits(), [7, 0, 0, 0]);
        assert_eq!(score(1234).digits(), [4, 3, 2, 1]);
        assert_eq!(score(9999).digits(), [9, 9, 9, 9]);
        assert_eq!(Score::ZERO.digits(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_scores_accessors() {
        let mut scores = Scores::zero();
        scores.get_mut(Player::One).increment();
        scores.set(Player::Two, score(5));

        assert_eq!(scores.get(Player::One).value(), 1);
        assert_eq!(scores.get(Player::Two).value(), 5);
        assert_eq!(scores.values(), (1, 5));
    }

    #[test]
    fn test_player_numbers() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
    }

    proptest! {
        #[test]
        fn prop_digits_recompose(value in 0u16..=MAX_SCORE) {
            let d = score(value).digits();
            let recomposed =
                d[0] as u16 + d[1] as u16 * 10 + d[2] as u16 * 100 + d[3] as u16 * 1000;
            prop_assert_eq!(recomposed, value);
            prop_assert!(d.iter().all(|&x| x < 10));
        }

        #[test]
        fn prop_mutations_stay_in_bounds(
            start in 0u16..=MAX_SCORE,
            ops in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut s = score(start);
            for up in ops {
                let before = s.value();
                let changed = if up { s.increment() } else { s.decrement() };
                prop_assert!(s.value() <= MAX_SCORE);
                if changed {
                    prop_assert_eq!(before.abs_diff(s.value()), 1);
                } else {
                    prop_assert_eq!(before, s.value());
                }
            }
        }
    }
}
