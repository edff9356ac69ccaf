//! # Variable-Bit-Width Positional Index
//!
//! *Where each symbol occurs, in as few bits as its positions need.*
//!
//! ## Intuition First
//!
//! Read a byte stream two bytes at a time and write down, for every distinct
//! pair, the list of places it shows up. If the stream uses only a handful of
//! pairs, those lists cover everything, and each list only needs enough bits
//! per entry to spell out its own largest position.
//!
//! ## The Problem
//!
//! A raw stream spends 16 bits per symbol no matter how repetitive it is. An
//! inverted index spends bits on positions instead, which pays off when the
//! alphabet actually used is small relative to the stream length.
//!
//! ## Mathematical Formulation
//!
//! For a symbol sequence $S$ of length $N$ and a symbol $s$ occurring at
//! positions $P_s = \{ i : S[i] = s \}$:
//!
//! - width: $w_s = \lfloor \log_2 \max P_s \rfloor + 1$ (and $1$ when $\max P_s = 0$),
//! - payload: $\lceil w_s |P_s| / 8 \rceil$ bytes.
//!
//! The sets $P_s$ partition $\{0, \dots, N-1\}$.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(N \log \sigma)$ for $\sigma$ distinct symbols (ordered map).
//! - **Encode / decode**: $O(w \cdot n)$ bit operations per container.
//!
//! ## What Could Go Wrong
//!
//! 1. **Outliers**: one late position raises the width of the whole list.
//! 2. **High diversity**: with many distinct symbols the per-symbol keys and
//!    partial bytes outweigh the savings.
//! 3. **No count field**: a container's length is inferred from its payload, so
//!    trailing zero positions after the first cannot be told from padding.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`bit_width`**: exact integer minimal width.
//! - **`VarBitContainer`**: per-symbol packed position list with serialize/deserialize.
//! - **`group16`**: byte stream to 16-bit symbols.
//! - **`SymbolIndex`**: symbol to container mapping, plus a size [`Report`].
//! - **`ByteSource`**: injected input (random or file).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bit_width;
pub mod container;
pub mod error;
pub mod index;
pub mod source;
pub mod symbols;

pub use bit_width::bit_width;
pub use container::{VarBitContainer, HEADER_SIZE};
pub use error::{Error, Result};
pub use index::{Report, SymbolIndex};
pub use source::{ByteSource, FileBytes, RandomBytes};
pub use symbols::{group16, Symbol};
