//! Scores in the key-value flash store
//!
//! Each score lives under its own key as a little-endian `u32`. A key that
//! was never written reads as zero. Saving writes player 1 then player 2;
//! the two writes are independent, so a failure between them leaves the
//! stored pair out of step until the next successful save.

use scoreline_core::score::{Player, Score, Scores};
use scoreline_core::traits::{PersistError, ScorePersistence};
use scoreline_hal::{FlashError, FlashStorage, StorageKey};

/// Size of one stored score
const VALUE_LEN: usize = 4;

/// Storage key for a player's score
pub fn key_for(player: Player) -> StorageKey {
    match player {
        Player::One => StorageKey::Player1Score,
        Player::Two => StorageKey::Player2Score,
    }
}

fn persist_error(e: FlashError) -> PersistError {
    match e {
        FlashError::Corrupted | FlashError::BufferTooSmall => PersistError::Corrupted,
        _ => PersistError::Storage,
    }
}

/// [`ScorePersistence`] over a [`FlashStorage`]
pub struct KvScoreStore<S> {
    storage: S,
}

impl<S: FlashStorage> KvScoreStore<S> {
    /// Create a store over the given flash storage
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Release the underlying storage
    pub fn into_inner(self) -> S {
        self.storage
    }

    async fn load_score(&mut self, player: Player) -> Result<Score, PersistError> {
        let mut buffer = [0u8; VALUE_LEN];
        match self.storage.read(key_for(player), &mut buffer).await {
            Ok(VALUE_LEN) => {
                Score::from_raw(u32::from_le_bytes(buffer)).ok_or(PersistError::Corrupted)
            }
            Ok(_) => Err(PersistError::Corrupted),
            Err(FlashError::NotFound) => Ok(Score::ZERO),
            Err(e) => Err(persist_error(e)),
        }
    }

    async fn save_score(&mut self, player: Player, score: Score) -> Result<(), PersistError> {
        let bytes = (score.value() as u32).to_le_bytes();
        self.storage
            .write(key_for(player), &bytes)
            .await
            .map_err(persist_error)
    }
}

impl<S: FlashStorage> ScorePersistence for KvScoreStore<S> {
    async fn load(&mut self) -> Result<Scores, PersistError> {
        let player1 = self.load_score(Player::One).await?;
        let player2 = self.load_score(Player::Two).await?;
        Ok(Scores::new(player1, player2))
    }

    async fn save(&mut self, scores: &Scores) -> Result<(), PersistError> {
        self.save_score(Player::One, scores.player1).await?;
        self.save_score(Player::Two, scores.player2).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::block_on;
    use std::vec::Vec;

    /// In-memory flash keyed by `StorageKey::as_u8`
    #[derive(Default)]
    struct MemoryFlash {
        slots: [Option<Vec<u8>>; 2],
        /// Writes that succeed before every later write fails
        writes_left: Option<usize>,
        fail_reads: bool,
    }

    impl FlashStorage for MemoryFlash {
        async fn read(&mut self, key: StorageKey, buffer: &mut [u8]) -> Result<usize, FlashError> {
            if self.fail_reads {
                return Err(FlashError::Storage);
            }
            let data = self.slots[key.as_u8() as usize]
                .as_ref()
                .ok_or(FlashError::NotFound)?;
            if buffer.len() < data.len() {
                return Err(FlashError::BufferTooSmall);
            }
            buffer[..data.len()].copy_from_slice(data);
            Ok(data.len())
        }

        async fn write(&mut self, key: StorageKey, data: &[u8]) -> Result<(), FlashError> {
            if let Some(left) = self.writes_left.as_mut() {
                if *left == 0 {
                    return Err(FlashError::Full);
                }
                *left -= 1;
            }
            self.slots[key.as_u8() as usize] = Some(data.to_vec());
            Ok(())
        }

    }

    fn scores(p1: u16, p2: u16) -> Scores {
        Scores::new(
            Score::from_raw(p1 as u32).unwrap(),
            Score::from_raw(p2 as u32).unwrap(),
        )
    }

    #[test]
    fn test_never_written_loads_zero() {
        let mut store = KvScoreStore::new(MemoryFlash::default());
        assert_eq!(block_on(store.load()), Ok(Scores::zero()));
    }

    #[test]
    fn test_save_then_load() {
        let mut store = KvScoreStore::new(MemoryFlash::default());
        block_on(store.save(&scores(9999, 12))).unwrap();

        assert_eq!(block_on(store.load()), Ok(scores(9999, 12)));
    }

    #[test]
    fn test_value_layout_is_little_endian_u32() {
        let mut store = KvScoreStore::new(MemoryFlash::default());
        block_on(store.save(&scores(258, 1))).unwrap();

        let flash = store.storage();
        assert_eq!(flash.slots[0].as_deref(), Some(&[0x02, 0x01, 0x00, 0x00][..]));
        assert_eq!(flash.slots[1].as_deref(), Some(&[0x01, 0x00, 0x00, 0x00][..]));
    }

    #[test]
    fn test_one_key_present() {
        let mut flash = MemoryFlash::default();
        flash.slots[1] = Some(7u32.to_le_bytes().to_vec());
        let mut store = KvScoreStore::new(flash);

        assert_eq!(block_on(store.load()), Ok(scores(0, 7)));
    }

    #[test]
    fn test_out_of_range_is_corrupted() {
        let mut flash = MemoryFlash::default();
        flash.slots[0] = Some(10_000u32.to_le_bytes().to_vec());
        let mut store = KvScoreStore::new(flash);

        assert_eq!(block_on(store.load()), Err(PersistError::Corrupted));
    }

    #[test]
    fn test_short_value_is_corrupted() {
        let mut flash = MemoryFlash::default();
        flash.slots[1] = Some(vec![1, 2]);
        let mut store = KvScoreStore::new(flash);

        assert_eq!(block_on(store.load()), Err(PersistError::Corrupted));
    }

    #[test]
    fn test_oversized_value_is_corrupted() {
        let mut flash = MemoryFlash::default();
        flash.slots[0] = Some(vec![0; 8]);
        let mut store = KvScoreStore::new(flash);

        assert_eq!(block_on(store.load()), Err(PersistError::Corrupted));
    }

    #[test]
    fn test_read_failure_is_storage_error() {
        let flash = MemoryFlash {
            fail_reads: true,
            ..Default::default()
        };
        let mut store = KvScoreStore::new(flash);

        assert_eq!(block_on(store.load()), Err(PersistError::Storage));
    }

    #[test]
    fn test_interrupted_save_leaves_pair_inconsistent() {
        let mut store = KvScoreStore::new(MemoryFlash::default());
        block_on(store.save(&scores(1, 1))).unwrap();

        // Player 1 is written, player 2 fails
        let mut flash = store.into_inner();
        flash.writes_left = Some(1);
        let mut store = KvScoreStore::new(flash);

        assert_eq!(block_on(store.save(&scores(2, 2))), Err(PersistError::Storage));
        assert_eq!(block_on(store.load()), Ok(scores(2, 1)));
    }

    #[test]
    fn test_full_partition_is_storage_error() {
        let flash = MemoryFlash {
            writes_left: Some(0),
            ..Default::default()
        };
        let mut store = KvScoreStore::new(flash);

        assert_eq!(block_on(store.save(&scores(3, 0))), Err(PersistError::Storage));
        assert_eq!(block_on(store.load()), Ok(Scores::zero()));
    }

    #[test]
    fn test_keys_per_player() {
        assert_eq!(key_for(Player::One).name(), "player1Score");
        assert_eq!(key_for(Player::Two).name(), "player2Score");
    }
}
