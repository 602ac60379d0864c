//! Score store operations
//!
//! Every successful mutation redraws the display, writes both scores to
//! storage and, for increments and reset, pulses the buzzer, in that order.
//! Each step finishes before the operation returns. A mutation at a bound
//! does nothing beyond reporting the boundary.

use super::report::{Outcome, Report, Startup};
use crate::input::Action;
use crate::score::{DisplayFrame, Player, Scores};
use crate::traits::{DisplayError, Feedback, ScorePersistence, SegmentDisplay};

/// Owner of the score state and its output surfaces
pub struct Scoreboard<D, P, F> {
    scores: Scores,
    display: D,
    persistence: P,
    feedback: F,
}

impl<D, P, F> Scoreboard<D, P, F>
where
    D: SegmentDisplay,
    P: ScorePersistence,
    F: Feedback,
{
    /// Create a scoreboard at (0, 0)
    ///
    /// Call [`Scoreboard::restore`] before use to pick up stored scores.
    pub fn new(display: D, persistence: P, feedback: F) -> Self {
        Self {
            scores: Scores::zero(),
            display,
            persistence,
            feedback,
        }
    }

    /// Wake the display and apply the startup brightness
    pub fn init_display(&mut self, intensity: u8) -> Result<(), DisplayError> {
        self.display.wake()?;
        self.display.set_intensity(intensity)?;
        self.display.clear()
    }

    /// Load stored scores and show them
    ///
    /// Scores never written load as zero. If storage cannot be read the
    /// board starts at (0, 0) and the fault is reported.
    pub async fn restore(&mut self) -> Startup {
        let load_fault = match self.persistence.load().await {
            Ok(scores) => {
                self.scores = scores;
                None
            }
            Err(e) => {
                self.scores = Scores::zero();
                Some(e)
            }
        };

        let display_fault = self.display.redraw(&self.frame()).err();

        Startup {
            scores: self.scores,
            load_fault,
            display_fault,
        }
    }

    /// Current scores
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Frame for the current scores
    pub fn frame(&self) -> DisplayFrame {
        DisplayFrame::from_scores(&self.scores)
    }

    /// Add one point to a player
    pub async fn increment(&mut self, player: Player) -> Report {
        let action = Action::Increment(player);
        if !self.scores.get_mut(player).increment() {
            return Report::boundary(action, Outcome::AtMaximum, self.scores);
        }
        self.commit(action, Outcome::Incremented).await
    }

    /// Remove one point from a player
    pub async fn decrement(&mut self, player: Player) -> Report {
        let action = Action::Decrement(player);
        if !self.scores.get_mut(player).decrement() {
            return Report::boundary(action, Outcome::AtMinimum, self.scores);
        }
        self.commit(action, Outcome::Decremented).await
    }

    /// Set both scores to zero
    ///
    /// Always redraws, saves and pulses, even if the scores were already zero.
    pub async fn reset(&mut self) -> Report {
        self.scores = Scores::zero();
        self.commit(Action::Reset, Outcome::Reset).await
    }

    /// Perform an action
    pub async fn apply(&mut self, action: Action) -> Report {
        match action {
            Action::Increment(player) => self.increment(player).await,
            Action::Decrement(player) => self.decrement(player).await,
            Action::Reset => self.reset().await,
        }
    }

    /// Shared display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Shared persistence store
    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Shared feedback output
    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    /// Release the hardware handles
    pub fn into_parts(self) -> (D, P, F) {
        (self.display, self.persistence, self.feedback)
    }

    async fn commit(&mut self, action: Action, outcome: Outcome) -> Report {
        let display_fault = self.display.redraw(&self.frame()).err();
        let storage_fault = self.persistence.save(&self.scores).await.err();

        if action.sounds_feedback() {
            self.feedback.pulse().await;
        }

        Report {
            action,
            outcome,
            scores: self.scores,
            display_fault,
            storage_fault,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::mocks::*;
    use super::*;
    use crate::score::{Score, MAX_SCORE};
    use crate::traits::PersistError;
    use embassy_futures::block_on;
    use proptest::prelude::*;

    fn scores(p1: u16, p2: u16) -> Scores {
        Scores::new(
            Score::from_raw(p1 as u32).unwrap(),
            Score::from_raw(p2 as u32).unwrap(),
        )
    }

    fn board_over(persistence: MemoryPersistence) -> TestBoard {
        Scoreboard::new(
            RecordingDisplay::default(),
            persistence,
            CountingFeedback::default(),
        )
    }

    fn board_with(p1: u16, p2: u16) -> TestBoard {
        let persistence = MemoryPersistence {
            stored: Some(scores(p1, p2)),
            ..Default::default()
        };
        let mut b = board_over(persistence);
        block_on(b.restore());
        b
    }

    #[test]
    fn test_first_boot_starts_at_zero() {
        let mut b = board();
        let startup = block_on(b.restore());

        assert_eq!(startup.scores, Scores::zero());
        assert_eq!(startup.load_fault, None);
        assert_eq!(b.display().last_frame(), Some(&DisplayFrame::default()));
    }

    #[test]
    fn test_init_display_sets_intensity() {
        let mut b = board();
        b.init_display(8).unwrap();

        assert!(b.display().awake);
        assert_eq!(b.display().intensity, Some(8));
        assert_eq!(b.display().clears, 1);
    }

    #[test]
    fn test_increment_updates_all_surfaces() {
        let mut b = board();
        let report = block_on(b.increment(Player::One));

        assert_eq!(report.outcome, Outcome::Incremented);
        assert_eq!(report.scores.values(), (1, 0));
        assert_eq!(report.display_fault, None);
        assert_eq!(report.storage_fault, None);
        assert_eq!(b.display().last_frame(), Some(&DisplayFrame::from_scores(&scores(1, 0))));
        assert_eq!(b.persistence().stored, Some(scores(1, 0)));
        assert_eq!(b.feedback().pulses, 1);
    }

    #[test]
    fn test_decrement_does_not_pulse() {
        let mut b = board_with(3, 3);
        let report = block_on(b.decrement(Player::Two));

        assert_eq!(report.outcome, Outcome::Decremented);
        assert_eq!(b.scores().values(), (3, 2));
        assert_eq!(b.persistence().stored, Some(scores(3, 2)));
        assert_eq!(b.feedback().pulses, 0);
    }

    #[test]
    fn test_increment_at_max_is_noop() {
        let mut b = board_with(MAX_SCORE, 0);
        let frames_before = b.display().frames.len();

        let report = block_on(b.increment(Player::One));

        assert_eq!(report.outcome, Outcome::AtMaximum);
        assert_eq!(b.scores().values(), (9999, 0));
        assert_eq!(b.display().frames.len(), frames_before);
        assert_eq!(b.persistence().saves, 0);
        assert_eq!(b.feedback().pulses, 0);
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        let mut b = board();
        block_on(b.restore());

        let report = block_on(b.decrement(Player::One));

        assert_eq!(report.outcome, Outcome::AtMinimum);
        assert_eq!(b.scores(), Scores::zero());
        assert_eq!(b.persistence().saves, 0);
    }

    #[test]
    fn test_reset_always_pulses() {
        let mut b = board_with(12, 34);
        let report = block_on(b.reset());
        assert_eq!(report.scores, Scores::zero());
        assert_eq!(b.feedback().pulses, 1);

        // Already zero: still redraws, saves and pulses
        let report = block_on(b.reset());
        assert_eq!(report.outcome, Outcome::Reset);
        assert_eq!(b.feedback().pulses, 2);
        assert_eq!(b.persistence().saves, 2);
    }

    #[test]
    fn test_redraw_clears_first() {
        let mut b = board();
        block_on(b.increment(Player::Two));
        block_on(b.increment(Player::Two));

        assert_eq!(b.display().clears, b.display().frames.len());
    }

    #[test]
    fn test_restart_reloads_same_scores() {
        let mut b = board();
        block_on(b.increment(Player::One));
        block_on(b.increment(Player::One));
        block_on(b.increment(Player::Two));

        let (_, persistence, _) = b.into_parts();
        let mut rebooted = Scoreboard::new(
            RecordingDisplay::default(),
            persistence,
            CountingFeedback::default(),
        );
        let startup = block_on(rebooted.restore());

        assert_eq!(startup.scores.values(), (2, 1));
        assert_eq!(rebooted.scores().values(), (2, 1));
    }

    #[test]
    fn test_load_failure_starts_at_zero() {
        let persistence = MemoryPersistence {
            stored: Some(scores(5, 5)),
            fail_load: true,
            ..Default::default()
        };
        let mut b = board_over(persistence);

        let startup = block_on(b.restore());

        assert_eq!(startup.load_fault, Some(PersistError::Storage));
        assert_eq!(b.scores(), Scores::zero());
    }

    #[test]
    fn test_storage_fault_keeps_memory_state() {
        let persistence = MemoryPersistence {
            fail_save: true,
            ..Default::default()
        };
        let mut b = board_over(persistence);

        let report = block_on(b.increment(Player::One));

        assert_eq!(report.storage_fault, Some(PersistError::Storage));
        assert_eq!(b.scores().values(), (1, 0));
        assert_eq!(b.feedback().pulses, 1);
    }

    #[test]
    fn test_display_fault_reported() {
        let display = RecordingDisplay {
            fail: true,
            ..Default::default()
        };
        let mut b = Scoreboard::new(
            display,
            MemoryPersistence::default(),
            CountingFeedback::default(),
        );

        let report = block_on(b.increment(Player::Two));

        assert_eq!(report.display_fault, Some(DisplayError::Bus));
        assert_eq!(b.persistence().stored, Some(scores(0, 1)));
    }

    #[test]
    fn test_apply_dispatches() {
        let mut b = board();
        block_on(b.apply(Action::Increment(Player::One)));
        block_on(b.apply(Action::Increment(Player::Two)));
        block_on(b.apply(Action::Decrement(Player::One)));
        assert_eq!(b.scores().values(), (0, 1));

        block_on(b.apply(Action::Reset));
        assert_eq!(b.scores(), Scores::zero());
    }

    fn action_strategy() -> impl Strategy<Value = Action> {
        prop_oneof![
            Just(Action::Increment(Player::One)),
            Just(Action::Increment(Player::Two)),
            Just(Action::Decrement(Player::One)),
            Just(Action::Decrement(Player::Two)),
            Just(Action::Reset),
        ]
    }

    proptest! {
        #[test]
        fn prop_surfaces_match_memory(
            p1 in 0u16..=MAX_SCORE,
            p2 in 0u16..=MAX_SCORE,
            actions in proptest::collection::vec(action_strategy(), 0..64),
        ) {
            let mut b = board_with(p1, p2);
            for action in actions {
                let report = block_on(b.apply(action));
                let (s1, s2) = b.scores().values();
                prop_assert!(s1 <= MAX_SCORE && s2 <= MAX_SCORE);
                prop_assert_eq!(report.scores, b.scores());
                prop_assert_eq!(b.display().last_frame(), Some(&b.frame()));
                if report.outcome.changed() {
                    prop_assert_eq!(b.persistence().stored, Some(b.scores()));
                }
            }
        }
    }
}
