//! Best score persistence
//!
//! Stored as a decimal string under a single fixed key, the way the browser
//! version keeps it in LocalStorage.

use crate::persistence::ScoreStore;

/// Store key for the best score
pub const BEST_SCORE_KEY: &str = "flappyBonkHighScore";

/// Read the best score; anything missing, unreadable or malformed counts as 0
pub fn load_best(store: &dyn ScoreStore) -> u32 {
    match store.get(BEST_SCORE_KEY) {
        Ok(Some(raw)) => match raw.trim().parse::<u32>() {
            Ok(best) => {
                log::info!("Loaded best score {}", best);
                best
            }
            Err(_) => {
                log::warn!("Ignoring malformed best score {:?}", raw);
                0
            }
        },
        Ok(None) => {
            log::info!("No best score found, starting fresh");
            0
        }
        Err(e) => {
            log::warn!("Best score unavailable ({}), starting fresh", e);
            0
        }
    }
}

/// Write the best score; failures are logged and otherwise ignored
pub fn save_best(store: &mut dyn ScoreStore, best: u32) -> bool {
    match store.set(BEST_SCORE_KEY, &best.to_string()) {
        Ok(()) => {
            log::info!("Best score saved ({})", best);
            true
        }
        Err(e) => {
            log::warn!("Could not save best score {}: {}", best, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{MemoryStore, StoreError};

    struct BrokenStore;

    impl ScoreStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable)
        }
    }

    #[test]
    fn test_absent_is_zero() {
        assert_eq!(load_best(&MemoryStore::new()), 0);
    }

    #[test]
    fn test_roundtrip() {
        let mut store = MemoryStore::new();
        assert!(save_best(&mut store, 17));
        assert_eq!(load_best(&store), 17);
    }

    #[test]
    fn test_malformed_is_zero() {
        let mut store = MemoryStore::new();
        store.set(BEST_SCORE_KEY, "lots").unwrap();
        assert_eq!(load_best(&store), 0);
    }

    #[test]
    fn test_broken_store_is_not_fatal() {
        assert_eq!(load_best(&BrokenStore), 0);
        assert!(!save_best(&mut BrokenStore, 5));
    }
}
