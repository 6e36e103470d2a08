//! Lifetime tally bound to a key in a store.

use tally_tictactoe::Mark;
use tracing::{info, instrument, warn};

use crate::store::{KeyValueStore, StoreError, Tally};

/// Key the tally is kept under by default.
pub const DEFAULT_TALLY_KEY: &str = "lifetimeWins";

/// Running tally, read once from a store and written back after each win.
#[derive(Debug)]
pub struct TallyBook<S> {
    store: S,
    key: String,
    tally: Tally,
}

impl<S: KeyValueStore> TallyBook<S> {
    /// Reads the tally under `key`.
    ///
    /// An absent value is `0,0`. A malformed value is logged and also
    /// treated as `0,0`; it is overwritten by the next recorded win.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be read.
    #[instrument(skip(store, key), fields(key = %key.as_ref()))]
    pub fn open(store: S, key: impl AsRef<str>) -> Result<Self, StoreError> {
        let key = key.as_ref().to_string();

        let tally = match store.get(&key)? {
            None => Tally::default(),
            Some(raw) => raw.parse::<Tally>().unwrap_or_else(|err| {
                warn!(error = %err, "Ignoring stored tally");
                Tally::default()
            }),
        };

        info!(%tally, "Tally loaded");
        Ok(Self { store, key, tally })
    }

    /// Current counts.
    pub fn tally(&self) -> Tally {
        self.tally
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Counts a win for `mark` and rewrites the whole pair.
    ///
    /// The in-memory count is kept even if the write fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the store cannot be written.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn record_win(&mut self, mark: Mark) -> Result<Tally, StoreError> {
        self.tally.record(mark);
        info!(tally = %self.tally, "Win recorded");
        self.store.set(&self.key, self.tally.to_string())?;
        Ok(self.tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_absent_value_is_zero() {
        let book = TallyBook::open(MemoryStore::new(), DEFAULT_TALLY_KEY).unwrap();
        assert_eq!(book.tally(), Tally::default());
    }

    #[test]
    fn test_malformed_value_is_zero() {
        let mut store = MemoryStore::new();
        store.set(DEFAULT_TALLY_KEY, "NaN,NaN".to_string()).unwrap();
        let book = TallyBook::open(store, DEFAULT_TALLY_KEY).unwrap();
        assert_eq!(book.tally(), Tally::default());
    }

    #[test]
    fn test_record_win_writes_pair() {
        let mut store = MemoryStore::new();
        store.set(DEFAULT_TALLY_KEY, "2,5".to_string()).unwrap();
        let mut book = TallyBook::open(store, DEFAULT_TALLY_KEY).unwrap();

        let tally = book.record_win(Mark::X).unwrap();

        assert_eq!(tally, Tally::new(3, 5));
        assert_eq!(
            book.store().get(DEFAULT_TALLY_KEY).unwrap(),
            Some("3,5".to_string())
        );
    }
}
