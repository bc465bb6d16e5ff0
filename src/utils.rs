use num_traits::PrimInt;

/// Converts an integer coordinate or extent to `usize`.
/// Negative values, and values too large for `usize`, give `None`.
#[inline(always)]
pub fn to_usize<I: PrimInt>(value: I) -> Option<usize> {
    value.to_usize()
}

/// Widens any primitive integer for error reports. Only `u128` values above
/// `i128::MAX` saturate.
#[inline(always)]
pub fn to_i128<I: PrimInt>(value: I) -> i128 {
    value.to_i128().unwrap_or(i128::MAX)
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use crate::utils::{to_i128, to_usize};

    #[test]
    fn test_to_usize() {
        assert_eq!(to_usize(3i32), Some(3));
        assert_eq!(to_usize(0u8), Some(0));
        assert_eq!(to_usize(-1i64), None);
        assert_eq!(to_usize(isize::MIN), None);
        assert_eq!(to_usize(u128::MAX), None);
    }

    #[test]
    fn test_to_i128() {
        assert_eq!(to_i128(-10i32), -10);
        assert_eq!(to_i128(usize::MAX), usize::MAX as i128);
        assert_eq!(to_i128(u128::MAX), i128::MAX);
    }
}
