//! Grouping of raw bytes into 16-bit symbols.

/// A 16-bit symbol: two consecutive input bytes, most significant first.
pub type Symbol = u16;

/// Width of one symbol in bytes.
pub const SYMBOL_BYTES: usize = 2;

/// Pair consecutive bytes into big-endian 16-bit symbols.
///
/// An odd trailing byte is paired with an implicit zero, so the output holds
/// `ceil(bytes.len() / 2)` symbols. The input is never modified.
pub fn group16(bytes: &[u8]) -> Vec<Symbol> {
    bytes
        .chunks(SYMBOL_BYTES)
        .map(|pair| {
            let hi = pair[0];
            let lo = pair.get(1).copied().unwrap_or(0);
            u16::from_be_bytes([hi, lo])
        })
        .collect()
}
