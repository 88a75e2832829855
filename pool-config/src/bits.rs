use alloy_primitives::U256;

/// Bitwise complement of a 256-bit word against the all-ones word.
///
/// Turns a stored clear mask (all ones except the field) into the matching
/// field mask (only the field), and back.
#[inline]
pub fn bitwise_negation(m: U256) -> U256 {
    m ^ U256::MAX
}

/// Returns true if exactly one bit of `x` is set
#[inline]
pub fn is_single_bit(x: U256) -> bool {
    !x.is_zero() && (x & (x - U256::from(1))).is_zero()
}

const fn range_limbs(start: usize, width: usize) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    let mut bit = start;
    while bit < start + width {
        limbs[bit / 64] |= 1u64 << (bit % 64);
        bit += 1;
    }
    limbs
}

/// Build a mask with every bit set except the bits in `[start, start + width)`.
pub const fn clear_mask(start: usize, width: usize) -> U256 {
    let limbs = range_limbs(start, width);
    U256::from_limbs([!limbs[0], !limbs[1], !limbs[2], !limbs[3]])
}
