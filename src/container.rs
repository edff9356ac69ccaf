//! Variable-bit-width position container.
//!
//! Stores the positions at which one symbol occurs. Every position is packed
//! with the same width, $w = \lfloor \log_2 m \rfloor + 1$ where $m$ is the
//! largest position held, so a container of $n$ positions costs
//! $\lceil w n / 8 \rceil$ payload bytes.
//!
//! # Layout
//!
//! ```text
//! offset 0   u64 LE     max_value
//! offset 8   [u8; P]    positions, w bits each, LSB-first, no inter-value padding
//! ```
//!
//! `P = ceil(w * n / 8)`. The width is not stored: the decoder recomputes it
//! from `max_value`. Padding bits in the final byte are written as zero.
//!
//! # Count recovery
//!
//! The layout has no count field. When $w < 8$ the final byte's padding can hold
//! whole slots, which decode as zero. Those trailing zero slots are dropped, but
//! never slot 0 and never a slot the payload length proves real. Positions coming
//! from a [`crate::SymbolIndex`] are strictly ascending, so only the first can be
//! zero and the round trip is exact. A hand-built container whose tail (after the
//! first entry) ends in zeros loses those zeros on decode.

use std::fmt;

use crate::bit_width::{bit_width, packed_len};
use crate::error::{Error, Result};

/// Size of the fixed header holding `max_value`.
pub const HEADER_SIZE: usize = 8;

/// Positions sharing one symbol, packed at one minimal bit width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarBitContainer {
    max_value: u64,
    positions: Vec<u64>,
}

impl VarBitContainer {
    /// Create an empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a position, raising `max_value` if needed.
    pub fn add(&mut self, position: u64) {
        if position > self.max_value {
            self.max_value = position;
        }
        self.positions.push(position);
    }

    /// Return the largest position added, or 0 when empty.
    pub fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Return the positions in insertion order.
    pub fn positions(&self) -> &[u64] {
        &self.positions
    }

    /// Return the number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Return true if no position has been added.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Return the width in bits used for every position.
    pub fn bit_width(&self) -> u32 {
        bit_width(self.max_value)
    }

    /// Return the packed payload size, excluding the header.
    pub fn size_in_bytes(&self) -> usize {
        packed_len(self.bit_width(), self.positions.len())
    }

    /// Return the full encoded size, header included.
    pub fn serialized_len(&self) -> usize {
        HEADER_SIZE + self.size_in_bytes()
    }

    /// Encode the container as header plus packed payload.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = vec![0u8; self.serialized_len()];
        out[..HEADER_SIZE].copy_from_slice(&self.max_value.to_le_bytes());
        pack(
            &self.positions,
            self.bit_width() as usize,
            &mut out[HEADER_SIZE..],
        );
        out
    }

    /// Decode a container from `serialize()` output.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::Truncated {
                len: bytes.len(),
                needed: HEADER_SIZE,
            });
        }

        let mut header = [0u8; HEADER_SIZE];
        header.copy_from_slice(&bytes[..HEADER_SIZE]);
        let max_value = u64::from_le_bytes(header);
        let payload = &bytes[HEADER_SIZE..];

        let width = bit_width(max_value) as usize;
        let slots = payload.len() * 8 / width;
        let mut positions: Vec<u64> = (0..slots).map(|i| unpack(payload, width, i)).collect();

        if !payload.is_empty() {
            // Fewest slots that still need every payload byte.
            let min_count = 8 * (payload.len() - 1) / width + 1;
            while positions.len() > min_count && positions.last() == Some(&0) {
                positions.pop();
            }
        }

        let decoded = positions.iter().copied().max();
        if decoded.unwrap_or(0) != max_value {
            return Err(Error::MaxMismatch {
                declared: max_value,
                decoded,
            });
        }

        Ok(Self {
            max_value,
            positions,
        })
    }
}

impl Extend<u64> for VarBitContainer {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        for position in iter {
            self.add(position);
        }
    }
}

impl FromIterator<u64> for VarBitContainer {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut container = Self::new();
        container.extend(iter);
        container
    }
}

impl fmt::Display for VarBitContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bit width: {}, positions: [", self.bit_width())?;
        for (i, p) in self.positions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{p}")?;
        }
        f.write_str("]")
    }
}

/// Write each value as `width` bits, LSB-first, into a zeroed buffer.
fn pack(values: &[u64], width: usize, out: &mut [u8]) {
    let mut bit_pos = 0usize;
    for &value in values {
        let mut val = value;
        let mut remaining = width;
        let mut byte_idx = bit_pos / 8;
        let mut bit_offset = bit_pos % 8;

        while remaining > 0 {
            let bits_in_byte = (8 - bit_offset).min(remaining);
            let mask = ((1u16 << bits_in_byte) - 1) as u8;
            out[byte_idx] |= ((val as u8) & mask) << bit_offset;
            val >>= bits_in_byte;
            remaining -= bits_in_byte;
            byte_idx += 1;
            bit_offset = 0;
        }

        bit_pos += width;
    }
}

/// Read slot `index` of `width` bits. The slot must lie inside `input`.
fn unpack(input: &[u8], width: usize, index: usize) -> u64 {
    let mut bit_pos = index * width;
    let mut value = 0u64;
    let mut shift = 0usize;
    let mut remaining = width;

    while remaining > 0 {
        let bit_offset = bit_pos % 8;
        let bits_in_byte = (8 - bit_offset).min(remaining);
        let mask = ((1u16 << bits_in_byte) - 1) as u8;
        let bits = (input[bit_pos / 8] >> bit_offset) & mask;
        value |= u64::from(bits) << shift;
        shift += bits_in_byte;
        remaining -= bits_in_byte;
        bit_pos += bits_in_byte;
    }
    value
}
