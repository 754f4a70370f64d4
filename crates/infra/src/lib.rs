//! `tally-infra` — storage behind the HTTP layer.
//!
//! Nothing here knows how receipts are scored; it only keeps values by key.

pub mod store;

pub use store::{InMemoryStore, KeyValueStore, StoreError};
