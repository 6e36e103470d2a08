//! Persistence for the lifetime win tally.

mod book;
mod error;
mod kv;
mod tally;

pub use book::{DEFAULT_TALLY_KEY, TallyBook};
pub use error::StoreError;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use tally::{Tally, TallyParseError};
