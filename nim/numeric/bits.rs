//! Bit twiddling helpers used by the winning move search

/// Place value of the most significant `1` in the binary representation of `z`,
/// i.e. the power of two `p` such that `p <= z < 2p`.
///
/// Zero has no set bits so its most significant bit is `0`.
///
/// # Examples
///
/// ```
/// use nim::numeric::bits::most_significant_bit;
///
/// assert_eq!(most_significant_bit(0), 0);
/// assert_eq!(most_significant_bit(5), 4);
/// assert_eq!(most_significant_bit(u32::MAX), 1 << 31);
/// ```
#[inline]
pub const fn most_significant_bit(z: u32) -> u32 {
    if z == 0 {
        0
    } else {
        1 << (u32::BITS - 1 - z.leading_zeros())
    }
}

/// Check if the bit with place value `bit` is set in `value`. `bit` must be a power of two.
#[inline]
pub const fn is_bit_set(value: u32, bit: u32) -> bool {
    debug_assert!(bit.is_power_of_two());
    value & bit != 0
}
