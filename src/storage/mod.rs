//! Storage backends for taskgrid
//!
//! The store persists through a minimal synchronous key-value seam: one
//! string value per fixed key. Two backends are provided:
//! - [`MemoryBackend`]: HashMap-backed, for tests and hosts that keep
//!   persistence elsewhere
//! - [`FileBackend`]: one JSON file per key under a base directory

mod file;
mod memory;

pub use file::FileBackend;
pub use memory::MemoryBackend;

use crate::error::Result;

/// Synchronous key-value storage seam.
///
/// A missing key reads as `Ok(None)` and removes as a no-op; `Err` is
/// reserved for a backend that is unavailable or misbehaving (the
/// store catches and logs those, never propagates them).
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the value stored under `key`, if any.
    fn remove(&mut self, key: &str) -> Result<()>;
}
