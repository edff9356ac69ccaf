//! Positional inverted index over 16-bit symbols.
//!
//! Each distinct symbol maps to a [`VarBitContainer`] holding every position at
//! which it occurs. Built in one forward pass, so each container's positions
//! are strictly ascending and every position `0..N` lands in exactly one
//! container.
//!
//! # Packed size
//!
//! The reported size charges each symbol its payload plus a 2-byte key:
//!
//! $$ \sum_s \left\lceil \frac{w_s \cdot n_s}{8} \right\rceil + 2 \sigma $$
//!
//! where $\sigma$ is the number of distinct symbols. Container headers are not
//! counted. The figure only measures how well low-diversity input packs.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use crate::container::VarBitContainer;
use crate::symbols::{group16, Symbol, SYMBOL_BYTES};

/// Mapping from each distinct symbol to its occurrence positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolIndex {
    entries: BTreeMap<Symbol, VarBitContainer>,
    symbol_count: usize,
}

impl SymbolIndex {
    /// Build the index from a symbol sequence.
    pub fn build(symbols: &[Symbol]) -> Self {
        let mut entries: BTreeMap<Symbol, VarBitContainer> = BTreeMap::new();
        for (i, &symbol) in symbols.iter().enumerate() {
            entries.entry(symbol).or_default().add(i as u64);
        }
        Self {
            entries,
            symbol_count: symbols.len(),
        }
    }

    /// Group raw bytes into symbols, then build the index.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::build(&group16(bytes))
    }

    /// Return the container for `symbol`, if it occurs.
    pub fn get(&self, symbol: Symbol) -> Option<&VarBitContainer> {
        self.entries.get(&symbol)
    }

    /// Return the number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return true if the index holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the length of the symbol sequence the index was built from.
    pub fn symbol_count(&self) -> usize {
        self.symbol_count
    }

    /// Iterate entries in ascending symbol order.
    pub fn iter(&self) -> btree_map::Iter<'_, Symbol, VarBitContainer> {
        self.entries.iter()
    }

    /// Collect entries in ascending symbol order.
    pub fn entries(&self) -> Vec<(Symbol, &VarBitContainer)> {
        self.entries.iter().map(|(&s, c)| (s, c)).collect()
    }

    /// Return the packed payload size plus one symbol key per entry.
    pub fn packed_size_in_bytes(&self) -> usize {
        let payload: usize = self.entries.values().map(|c| c.size_in_bytes()).sum();
        payload + self.entries.len() * SYMBOL_BYTES
    }

    /// Summarize sizes against an input of `original_bytes` bytes.
    pub fn report(&self, original_bytes: usize) -> Report {
        Report {
            original_bytes,
            symbols: self.symbol_count,
            distinct_symbols: self.entries.len(),
            packed_bytes: self.packed_size_in_bytes(),
        }
    }
}

impl<'a> IntoIterator for &'a SymbolIndex {
    type Item = (&'a Symbol, &'a VarBitContainer);
    type IntoIter = btree_map::Iter<'a, Symbol, VarBitContainer>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Size statistics for one indexed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// Raw input length in bytes.
    pub original_bytes: usize,
    /// Number of symbols after grouping.
    pub symbols: usize,
    /// Number of distinct symbols.
    pub distinct_symbols: usize,
    /// Packed payload plus symbol keys, in bytes.
    pub packed_bytes: usize,
}

impl Report {
    /// Packed size as a percentage of the original, 0 for empty input.
    pub fn ratio_percent(&self) -> f64 {
        if self.original_bytes == 0 {
            return 0.0;
        }
        100.0 * self.packed_bytes as f64 / self.original_bytes as f64
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original size: {}", self.original_bytes)?;
        writeln!(
            f,
            "Symbols: {} ({} distinct)",
            self.symbols, self.distinct_symbols
        )?;
        writeln!(f, "Total size in bytes: {}", self.packed_bytes)?;
        write!(f, "Result size (of original): {:.6}%", self.ratio_percent())
    }
}
