//! Persisted text-source settings for the parsha reader.
//!
//! The viewer picks one *main* text source for primary display and chooses
//! which sources appear in the verse details view. Those choices survive
//! restarts and are reconciled at startup against the sources the backend
//! currently offers.
//!
//! # Storage Format
//!
//! The whole configuration is written as one JSON document under the
//! [`STORAGE_KEY`] key on every change:
//!
//! ```text
//! {"main": "fg", "enabledInDetails": {"fg": true, "onk": false}}
//! ```
//!
//! # Example
//!
//! ```ignore
//! use parsha_settings::{MemorySlot, TextSourcesStore};
//!
//! let store = TextSourcesStore::new(MemorySlot::new());
//! store.initialize(&metadata)?;
//! store.subscribe(|config| println!("main source: {}", config.main))?;
//! store.toggle(&"onk".into())?;
//! ```
//!
//! # Architecture
//!
//! - `config.rs` - the `TextSourcesConfig` value and its pure transitions
//! - `slot/` - durable key-value slots (in-memory, file-backed)
//! - `store.rs` - the observable store that persists and publishes changes
//! - `error.rs` - error types with user-friendly messages

mod config;
mod error;
mod slot;
mod store;

pub use config::{DEFAULT_MAIN_TEXT_SOURCE, STORAGE_KEY, TextSourcesConfig};
pub use error::{Result, SettingsError};
pub use slot::{FileSlot, KeyValueSlot, MemorySlot};
pub use store::{SubscriptionId, TextSourcesStore};
