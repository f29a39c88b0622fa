//! Harmonized Sales Tax on integer cent amounts.

/// Amounts at or below this many cents are tax-exempt.
pub const EXEMPT_THRESHOLD_CENTS: i64 = 75;

/// HST rate in whole percent.
pub const HST_RATE_PERCENT: i64 = 13;

/// Add 13% HST to an amount in cents.
///
/// Amounts of 75 cents or less are exempt and pass through unchanged.
/// Above the threshold the tax is computed in integer arithmetic and
/// fractional tax cents are dropped: 76 cents owes 9 cents of tax (9.88
/// truncated), for a total of 85.
pub fn add_hst(cents: i64) -> i64 {
    if cents <= EXEMPT_THRESHOLD_CENTS {
        return cents;
    }
    cents + cents * HST_RATE_PERCENT / 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_at_threshold() {
        assert_eq!(add_hst(75), 75);
    }

    #[test]
    fn test_exempt_at_zero() {
        assert_eq!(add_hst(0), 0);
    }

    #[test]
    fn test_just_above_threshold() {
        assert_eq!(add_hst(76), 85);
    }

    #[test]
    fn test_one_dollar() {
        assert_eq!(add_hst(100), 113);
    }

    #[test]
    fn test_monotonic_non_decreasing() {
        let mut previous = add_hst(0);
        for cents in 1..=500 {
            let total = add_hst(cents);
            assert!(total >= previous, "add_hst({}) = {} < {}", cents, total, previous);
            previous = total;
        }
    }
}
