//! Minor-unit conversion

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{HarnessError, Result};

/// Convert a decimal amount string (e.g. `"10.00"`) to integer minor units.
///
/// Rounds half away from zero after scaling by 100. Amounts too large for
/// the decimal range are rejected rather than overflowing.
pub fn to_minor_units(amount: &str) -> Result<i64> {
    let invalid = || HarnessError::InvalidAmount(amount.to_string());
    let trimmed = amount.trim();
    // number inputs accept exponent notation ("1e3")
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| invalid())?;

    value
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(invalid)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_whole_and_fractional_amounts() {
        assert_eq!(to_minor_units("10.00").unwrap(), 1000);
        assert_eq!(to_minor_units("10").unwrap(), 1000);
        assert_eq!(to_minor_units(" 0.99 ").unwrap(), 99);
        assert_eq!(to_minor_units("1234.5").unwrap(), 123_450);
    }

    #[test]
    fn test_rounds_sub_cent_values() {
        assert_eq!(to_minor_units("0.015").unwrap(), 2);
        assert_eq!(to_minor_units("0.014").unwrap(), 1);
        assert_eq!(to_minor_units("19.999").unwrap(), 2000);
    }

    #[test]
    fn test_no_float_drift() {
        // 1.005 * 100 is 100.49999... in binary floating point
        assert_eq!(to_minor_units("1.005").unwrap(), 101);
        assert_eq!(dec!(1.005) * Decimal::ONE_HUNDRED, dec!(100.500));
    }

    #[test]
    fn test_rejects_garbage() {
        for input in ["", "abc", "10,00", "$10"] {
            assert!(
                matches!(to_minor_units(input), Err(HarnessError::InvalidAmount(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_exponent_notation() {
        assert_eq!(to_minor_units("1e3").unwrap(), 100_000);
        assert_eq!(to_minor_units("2.5E1").unwrap(), 2500);
    }

    #[test]
    fn test_out_of_range_amounts_are_rejected() {
        for input in ["1000000000000000000000000000", "1e27", "1e40"] {
            assert!(
                matches!(to_minor_units(input), Err(HarnessError::InvalidAmount(_))),
                "{input:?} should be rejected"
            );
        }
    }
}
