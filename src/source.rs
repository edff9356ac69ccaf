//! Byte sources feeding the index.
//!
//! Random generation and file loading sit behind [`ByteSource`] so the index
//! itself only ever sees an owned byte buffer.

use std::fs;
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::Result;

/// Anything that can produce the bytes to index.
pub trait ByteSource {
    /// Produce the full input.
    fn bytes(&mut self) -> Result<Vec<u8>>;
}

impl ByteSource for Vec<u8> {
    fn bytes(&mut self) -> Result<Vec<u8>> {
        Ok(std::mem::take(self))
    }
}

/// Uniformly random bytes in `0..=max_byte`.
///
/// A small `max_byte` gives the low symbol diversity the index packs well.
#[derive(Debug, Clone)]
pub struct RandomBytes {
    /// Number of bytes to generate.
    pub len: usize,
    /// Largest byte value generated.
    pub max_byte: u8,
    /// Fixed seed for reproducible output; entropy-seeded when `None`.
    pub seed: Option<u64>,
}

impl RandomBytes {
    /// Default alphabet bound: bytes in `0..=3`.
    pub const DEFAULT_MAX_BYTE: u8 = 3;

    /// Create a source of `len` bytes in `0..=3`.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            max_byte: Self::DEFAULT_MAX_BYTE,
            seed: None,
        }
    }

    /// Use a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a different alphabet bound.
    #[must_use]
    pub fn with_max_byte(mut self, max_byte: u8) -> Self {
        self.max_byte = max_byte;
        self
    }
}

impl ByteSource for RandomBytes {
    fn bytes(&mut self) -> Result<Vec<u8>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let out: Vec<u8> = (0..self.len)
            .map(|_| rng.gen_range(0..=self.max_byte))
            .collect();
        debug!(len = out.len(), max_byte = self.max_byte, seed = ?self.seed, "generated random bytes");
        Ok(out)
    }
}

/// The whole contents of a file.
#[derive(Debug, Clone)]
pub struct FileBytes {
    /// File to read.
    pub path: PathBuf,
}

impl FileBytes {
    /// Create a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ByteSource for FileBytes {
    fn bytes(&mut self) -> Result<Vec<u8>> {
        let out = fs::read(&self.path)?;
        debug!(path = %self.path.display(), len = out.len(), "read input file");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_random_bytes_respects_bound() {
        let bytes = RandomBytes::new(4096).with_seed(7).bytes().unwrap();
        assert_eq!(bytes.len(), 4096);
        assert!(bytes.iter().all(|&b| b <= 3));
    }

    #[test]
    fn test_random_bytes_seeded_is_deterministic() {
        let a = RandomBytes::new(256).with_seed(42).with_max_byte(200).bytes().unwrap();
        let b = RandomBytes::new(256).with_seed(42).with_max_byte(200).bytes().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vec_source() {
        let mut src = vec![1u8, 2, 3];
        assert_eq!(src.bytes().unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_file_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[9, 8, 7]).unwrap();
        let bytes = FileBytes::new(file.path()).bytes().unwrap();
        assert_eq!(bytes, vec![9, 8, 7]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileBytes::new(dir.path().join("missing.bin"))
            .bytes()
            .unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
        assert!(!err.is_format());
    }
}
