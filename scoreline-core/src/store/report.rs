//! Results of score operations

use crate::input::Action;
use crate::score::Scores;
use crate::traits::{DisplayError, PersistError};

/// What an operation did to the scores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Score went up by one
    Incremented,
    /// Score went down by one
    Decremented,
    /// Both scores set to zero
    Reset,
    /// Score already at the maximum; nothing changed
    AtMaximum,
    /// Score already at zero; nothing changed
    AtMinimum,
}

impl Outcome {
    /// Check if the scores changed
    pub fn changed(&self) -> bool {
        !self.is_boundary()
    }

    /// Check if the operation hit a bound and was ignored
    pub fn is_boundary(&self) -> bool {
        matches!(self, Outcome::AtMaximum | Outcome::AtMinimum)
    }
}

/// Full account of one operation, for the diagnostic log
///
/// Display and storage faults are reported here only; they never undo the
/// in-memory change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report {
    /// The requested action
    pub action: Action,
    /// What happened
    pub outcome: Outcome,
    /// Scores after the operation
    pub scores: Scores,
    /// Set if redrawing the display failed
    pub display_fault: Option<DisplayError>,
    /// Set if writing to storage failed
    pub storage_fault: Option<PersistError>,
}

impl Report {
    /// Report for an operation that hit a bound
    pub(crate) fn boundary(action: Action, outcome: Outcome, scores: Scores) -> Self {
        Self {
            action,
            outcome,
            scores,
            display_fault: None,
            storage_fault: None,
        }
    }
}

/// Result of restoring state at power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Startup {
    /// Scores now in effect
    pub scores: Scores,
    /// Set if the stored scores could not be read; scores start at zero
    pub load_fault: Option<PersistError>,
    /// Set if the first redraw failed
    pub display_fault: Option<DisplayError>,
}
