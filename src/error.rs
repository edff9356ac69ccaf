//! Error types for the positional index codec.

use thiserror::Error;

/// Error variants for container decoding and byte sources.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is shorter than the fixed container header.
    #[error("truncated container: {len} bytes, header needs {needed}")]
    Truncated {
        /// Length of the offending input.
        len: usize,
        /// Bytes required for the header.
        needed: usize,
    },

    /// The decoded positions disagree with the maximum stored in the header.
    #[error("header declares max position {declared}, payload decodes to max {decoded:?}")]
    MaxMismatch {
        /// `max_value` read from the header.
        declared: u64,
        /// Largest decoded position, `None` when the payload holds none.
        decoded: Option<u64>,
    },

    /// An I/O error occurred while reading input bytes.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Return true if this error describes a malformed container encoding.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Truncated { .. } | Error::MaxMismatch { .. })
    }
}

/// A specialized Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;
