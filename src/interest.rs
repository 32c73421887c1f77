//! Rate conversion and accrual primitives.
//!
//! Everything here is pure and unit-agnostic: `effective_interest_rate` works
//! whenever the term and the compounding frequency share a time unit (both
//! months, or both years), so the same compounding formula serves the month-
//! and year-denominated policies, and the simple-interest functions cover
//! non-compounding remainder periods.

use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{Result, TermDepositError};

/// effective (compounded) rate over a term: (1 + r/f)^(f*term) - 1
///
/// `rate_per_period` must be denominated in the same unit as `term`.
/// A compounding frequency of zero is rejected rather than dividing by it.
pub fn effective_interest_rate(
    rate_per_period: Rate,
    term: u32,
    compounding_frequency: u32,
) -> Result<Rate> {
    if compounding_frequency == 0 {
        return Err(TermDepositError::InvalidCompoundingFrequency {
            frequency: compounding_frequency,
        });
    }

    let period_rate = rate_per_period.as_decimal() / Decimal::from(compounding_frequency);
    let base = Decimal::ONE + period_rate;

    // calculate (1 + r/f)^(f*term) using iteration
    let periods = u64::from(compounding_frequency) * u64::from(term);
    let mut compound_factor = Decimal::ONE;
    for _ in 0..periods {
        compound_factor *= base;
    }

    Ok(Rate::from_decimal(compound_factor - Decimal::ONE))
}

/// monthly period rate from a nominal annual percentage
pub fn monthly_interest_rate(nominal_percent: Decimal) -> Rate {
    Rate::from_decimal(nominal_percent / Decimal::from(100) / Decimal::from(12))
}

/// annual period rate from a nominal annual percentage
pub fn annual_interest_rate(nominal_percent: Decimal) -> Rate {
    Rate::from_decimal(nominal_percent / Decimal::from(100))
}

/// simple interest over whole years: rate * balance * years
pub fn interest_earned_on_years(annual_rate: Rate, balance: Money, years: i32) -> Money {
    balance * (annual_rate.as_decimal() * Decimal::from(years))
}

/// simple interest over whole months: rate * balance * months
pub fn interest_earned_on_months(monthly_rate: Rate, balance: Money, months: i32) -> Money {
    balance * (monthly_rate.as_decimal() * Decimal::from(months))
}

/// compound interest earned over whole years
///
/// Zero years earns nothing; a negative year count is a domain error.
pub fn compound_interest_after_years(
    annual_rate: Rate,
    balance: Money,
    years: i32,
    compounding_frequency: u32,
) -> Result<Money> {
    if years == 0 {
        return Ok(Money::ZERO);
    }
    if years < 0 {
        return Err(TermDepositError::InvalidTerm { count: years });
    }

    let rate = effective_interest_rate(annual_rate, years as u32, compounding_frequency)?;
    Ok(balance * rate.as_decimal())
}

/// compound interest earned over whole months
///
/// Zero months earns nothing; a negative month count is a domain error.
pub fn compound_interest_after_months(
    monthly_rate: Rate,
    balance: Money,
    months: i32,
    compounding_frequency: u32,
) -> Result<Money> {
    if months == 0 {
        return Ok(Money::ZERO);
    }
    if months < 0 {
        return Err(TermDepositError::InvalidTerm { count: months });
    }

    let rate = effective_interest_rate(monthly_rate, months as u32, compounding_frequency)?;
    Ok(balance * rate.as_decimal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_effective_interest_rate() {
        let rate = effective_interest_rate(Rate::from_decimal(dec!(0.0325)), 5, 12).unwrap();
        assert_eq!(rate.as_decimal().round_dp(5), dec!(0.17619));
    }

    #[test]
    fn test_effective_interest_rate_zero_term() {
        let rate = effective_interest_rate(Rate::from_decimal(dec!(0.05)), 0, 12).unwrap();
        assert_eq!(rate, Rate::ZERO);
    }

    #[test]
    fn test_effective_interest_rate_rejects_zero_frequency() {
        let err = effective_interest_rate(Rate::from_decimal(dec!(0.05)), 5, 0).unwrap_err();
        assert!(matches!(
            err,
            TermDepositError::InvalidCompoundingFrequency { frequency: 0 }
        ));
    }

    #[test]
    fn test_monthly_interest_rate() {
        let rate = monthly_interest_rate(dec!(2.9));
        assert_eq!(rate.as_decimal().round_dp(5), dec!(0.00242));
    }

    #[test]
    fn test_annual_interest_rate() {
        let rate = annual_interest_rate(dec!(2.9));
        assert_eq!(rate.as_decimal().round_dp(5), dec!(0.02900));
    }

    #[test]
    fn test_simple_interest_on_years() {
        let earned = interest_earned_on_years(
            Rate::from_decimal(dec!(0.029)),
            Money::from_major(1000),
            5,
        );
        assert_eq!(earned, Money::from_major(145));
    }

    #[test]
    fn test_simple_interest_on_months() {
        let earned = interest_earned_on_months(
            Rate::from_decimal(dec!(0.00242)),
            Money::from_major(1000),
            6,
        );
        assert_eq!(earned, Money::from_str_exact("14.52").unwrap());
    }

    #[test]
    fn test_compound_interest_after_years() {
        let earned = compound_interest_after_years(
            Rate::from_decimal(dec!(0.02900)),
            Money::from_major(1000),
            5,
            1,
        )
        .unwrap();
        assert_eq!(earned.round_dp(0), Money::from_major(154));
    }

    #[test]
    fn test_compound_interest_after_months() {
        let earned = compound_interest_after_months(
            Rate::from_decimal(dec!(0.00242)),
            Money::from_major(1000),
            60,
            1,
        )
        .unwrap();
        assert_eq!(earned.round_dp(0), Money::from_major(156));
    }

    #[test]
    fn test_compound_interest_zero_term_earns_nothing() {
        let rate = Rate::from_decimal(dec!(0.029));
        let balance = Money::from_major(1000);
        assert_eq!(
            compound_interest_after_years(rate, balance, 0, 1).unwrap(),
            Money::ZERO
        );
        assert_eq!(
            compound_interest_after_months(rate, balance, 0, 1).unwrap(),
            Money::ZERO
        );
    }

    #[test]
    fn test_compound_interest_rejects_negative_term() {
        let rate = Rate::from_decimal(dec!(0.029));
        let balance = Money::from_major(1000);

        let err = compound_interest_after_years(rate, balance, -1, 1).unwrap_err();
        assert!(matches!(err, TermDepositError::InvalidTerm { count: -1 }));

        let err = compound_interest_after_months(rate, balance, -7, 1).unwrap_err();
        assert!(matches!(err, TermDepositError::InvalidTerm { count: -7 }));
    }
}
