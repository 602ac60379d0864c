//! Time-based button debouncing
//!
//! Each input line remembers when it last fired. An active reading fires
//! again only once the settle window has elapsed, so a held button repeats
//! once per window and contact bounce inside the window is ignored. The
//! control loop never sleeps to debounce.

/// Settle window after a button fires
pub const DEFAULT_SETTLE_MS: u32 = 300;

/// Debounce state for one input line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    settle_ms: u32,
    last_trigger_ms: Option<u64>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_MS)
    }
}

impl Debouncer {
    /// Create a debouncer with the given settle window
    pub const fn new(settle_ms: u32) -> Self {
        Self {
            settle_ms,
            last_trigger_ms: None,
        }
    }

    /// Feed one reading of the line
    ///
    /// - `active`: the line reads as pressed
    /// - `now_ms`: monotonic time in milliseconds
    ///
    /// Returns `true` if the press should be acted on.
    pub fn poll(&mut self, active: bool, now_ms: u64) -> bool {
        if !active {
            return false;
        }

        if let Some(last) = self.last_trigger_ms {
            if now_ms.saturating_sub(last) < self.settle_ms as u64 {
                return false;
            }
        }

        self.last_trigger_ms = Some(now_ms);
        true
    }
}
