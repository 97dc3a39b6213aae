//! Error types for the cuckoo table engine.

use thiserror::Error;

/// Convenience alias for results produced by table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by [`CuckooTable`](crate::CuckooTable) operations.
///
/// All variants are recoverable: the engine remains fully usable after
/// returning any of them, and the tables can always be inspected alongside
/// the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// No free slot was found within `size` displacement steps. The caller
    /// is expected to invoke [`rehash`](crate::CuckooTable::rehash) and retry.
    #[error("Cycle detected! Rehash needed.")]
    CycleDetected,
    /// The key was absent from both of its hashed positions.
    #[error("Key not found.")]
    KeyNotFound,
    /// The key is already resident in one of the tables.
    #[error("Key {0} already present.")]
    DuplicateKey(u64),
}
