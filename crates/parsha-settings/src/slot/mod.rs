//! Durable key-value slots the settings store persists into.
//!
//! - `MemorySlot` - shared in-memory map, for tests and embedding
//! - `FileSlot` - one JSON file per key with atomic writes

mod file;
mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::error::Result;

/// String-keyed storage holding one string value per key.
pub trait KeyValueSlot {
    /// Read the value under `key`; `Ok(None)` when nothing was stored yet.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
