//! Minimal bit widths for unsigned integers.
//!
//! $w(v) = \lfloor \log_2 v \rfloor + 1$ for $v > 0$, and $w(0) = 1$ so that
//! zero still occupies a one-bit field. Computed with integer arithmetic only:
//! a float `log2` rounds incorrectly near large powers of two.

/// Return the number of bits needed to store `value` in an unsigned field.
///
/// Always in `1..=64`.
#[inline]
pub fn bit_width(value: u64) -> u32 {
    if value == 0 {
        return 1;
    }
    u64::BITS - value.leading_zeros()
}

/// Return the number of bytes needed to hold `count` fields of `width` bits.
#[inline]
pub fn packed_len(width: u32, count: usize) -> usize {
    (width as usize * count).div_ceil(8)
}
