//! Penny-exact equal splitting.
//!
//! Dividing a total by a head count in decimal arithmetic loses cents
//! (`100.00 / 3` three times adds up to `99.99`). The allocator instead
//! hands everyone the floored share and reports the leftover cents
//! separately so the caller can pin them on a single member.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, ResultEngine};

/// Result of splitting a total equally.
///
/// `base * member_count + remainder == total` always holds; `remainder`
/// is non-negative and smaller than `member_count` cents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EqualSplit {
    /// Per-member share, rounded down to the cent.
    pub base: Money,
    /// Leftover cents to assign to exactly one member (by convention the
    /// payer).
    pub remainder: Money,
}

/// Splits `total` equally among `member_count` members.
///
/// Fails with [`EngineError::InvalidArgument`] when `member_count` is 0.
/// Negative totals floor toward negative infinity, matching the usual
/// "nobody ever over-collects" direction of the positive case.
///
/// # Examples
///
/// ```rust
/// use engine::{Money, split_equally};
///
/// let split = split_equally(Money::new(100_00), 3).unwrap();
/// assert_eq!(split.base, Money::new(33_33));
/// assert_eq!(split.remainder, Money::new(1));
/// ```
pub fn split_equally(total: Money, member_count: usize) -> ResultEngine<EqualSplit> {
    if member_count == 0 {
        return Err(EngineError::InvalidArgument(
            "member_count must be > 0".to_string(),
        ));
    }
    let count = i64::try_from(member_count).map_err(|_| {
        EngineError::InvalidArgument("member_count out of range".to_string())
    })?;

    let base = Money::new(total.cents().div_euclid(count));
    let remainder = Money::new(total.cents().rem_euclid(count));
    Ok(EqualSplit { base, remainder })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_evenly_without_remainder() {
        let split = split_equally(Money::new(90_00), 3).unwrap();
        assert_eq!(split.base, Money::new(30_00));
        assert_eq!(split.remainder, Money::ZERO);
    }

    #[test]
    fn leftover_cents_go_to_the_remainder() {
        let split = split_equally(Money::new(100_00), 3).unwrap();
        assert_eq!(split.base, Money::new(33_33));
        assert_eq!(split.remainder, Money::new(1));
        assert_eq!(split.base * 3 + split.remainder, Money::new(100_00));

        let split = split_equally(Money::new(10_01), 2).unwrap();
        assert_eq!(split.base, Money::new(5_00));
        assert_eq!(split.remainder, Money::new(1));
    }

    #[test]
    fn single_member_takes_everything() {
        let split = split_equally(Money::new(47_13), 1).unwrap();
        assert_eq!(split.base, Money::new(47_13));
        assert_eq!(split.remainder, Money::ZERO);
    }

    #[test]
    fn zero_members_is_an_error() {
        let split = split_equally(Money::new(100_00), 0);
        assert_eq!(
            split.unwrap_err(),
            EngineError::InvalidArgument("member_count must be > 0".to_string())
        );
    }

    #[test]
    fn negative_totals_floor_downward() {
        let split = split_equally(Money::new(-100_00), 3).unwrap();
        assert_eq!(split.base, Money::new(-33_34));
        assert_eq!(split.remainder, Money::new(2));
        assert_eq!(split.base * 3 + split.remainder, Money::new(-100_00));
    }
}
