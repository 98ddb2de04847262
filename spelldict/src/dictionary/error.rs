//! Dictionary error types.

use smol_str::SmolStr;

/// Errors reported by dictionary operations.
///
/// Every failing operation leaves the dictionary exactly as it was.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// Word is already stored; inserts reject rather than overwrite.
    #[error("'{0}' already exists")]
    Duplicate(SmolStr),

    /// Word exceeds the fixed per-word capacity.
    #[error("word of {len} bytes exceeds the {limit} byte limit")]
    WordTooLong {
        /// Byte length of the rejected word
        len: usize,
        /// The enforced limit
        limit: usize,
    },

    /// Underlying file could not be opened, read or written.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
