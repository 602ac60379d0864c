//! Score persistence trait

use crate::score::Scores;

/// Errors from the persistence store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Underlying storage failed to read or write
    Storage,
    /// A stored value was malformed or out of range
    Corrupted,
}

/// Trait for durable score storage
///
/// Absent values (first boot) load as zero. `save` writes both scores but
/// gives no atomicity across the pair.
pub trait ScorePersistence {
    /// Read both scores
    fn load(&mut self) -> impl core::future::Future<Output = Result<Scores, PersistError>>;

    /// Write both scores
    fn save(
        &mut self,
        scores: &Scores,
    ) -> impl core::future::Future<Output = Result<(), PersistError>>;
}
