//! Internal arithmetic helpers.
//!
//! These utilities are **not** part of the public API.

/// Divides in i128, rounding half away from zero.
///
/// `denominator` must be positive; callers normalize signs first.
pub(crate) fn div_rounded(numerator: i128, denominator: i128) -> i128 {
    debug_assert!(denominator > 0);
    if numerator >= 0 {
        (2 * numerator + denominator) / (2 * denominator)
    } else {
        (2 * numerator - denominator) / (2 * denominator)
    }
}
