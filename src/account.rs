use log::info;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use crate::decimal::Money;
use crate::errors::{Result, TermDepositError};
use crate::interest::{
    annual_interest_rate, compound_interest_after_months, compound_interest_after_years,
    interest_earned_on_months, interest_earned_on_years, monthly_interest_rate,
};
use crate::types::{PaymentFrequency, Term};

/// a fixed-term deposit account
///
/// Validated at construction and immutable afterwards. The only operation is
/// [`balance_at_maturity`](TermDepositAccount::balance_at_maturity), which
/// never mutates the account.
#[derive(Debug, Clone, Serialize)]
pub struct TermDepositAccount {
    initial_deposit: Money,
    /// nominal annual rate as a percentage, e.g. 1.1 for 1.10%
    nominal_rate: Decimal,
    term: Term,
    payment_frequency: PaymentFrequency,
}

impl TermDepositAccount {
    /// open a term deposit account
    ///
    /// Validation runs in order: deposit amount, then rate, then frequency.
    /// Term components are deliberately not validated here; a negative count
    /// surfaces as [`TermDepositError::InvalidTerm`] from the accrual layer.
    pub fn new(
        initial_deposit: Money,
        nominal_rate: f64,
        term_years: i32,
        term_months: i32,
        payment_frequency: &str,
    ) -> Result<Self> {
        let minimum = Money::from_major(1_000);
        if initial_deposit < minimum {
            return Err(TermDepositError::MinimumDeposit {
                minimum,
                deposit: initial_deposit,
            });
        }

        // the rate arrives as an approximate real; everything downstream is exact decimal
        let rate = Decimal::from_f64(nominal_rate)
            .filter(|r| *r > Decimal::ZERO && *r <= dec!(5))
            .ok_or(TermDepositError::InvalidInterestRate { rate: nominal_rate })?;

        let payment_frequency: PaymentFrequency = payment_frequency.parse()?;

        Ok(Self {
            initial_deposit,
            nominal_rate: rate,
            term: Term::new(term_years, term_months),
            payment_frequency,
        })
    }

    pub fn initial_deposit(&self) -> Money {
        self.initial_deposit
    }

    pub fn nominal_rate(&self) -> Decimal {
        self.nominal_rate
    }

    pub fn term(&self) -> Term {
        self.term
    }

    pub fn payment_frequency(&self) -> PaymentFrequency {
        self.payment_frequency
    }

    /// final balance at the end of the term, rounded to whole currency units
    /// with exact halves rounding down
    ///
    /// MONTHLY, QUARTERLY and ANNUALLY accrue remainder-period interest on the
    /// running balance left after compounding. AT_MATURITY computes both of
    /// its components against the original deposit instead; the asymmetry is
    /// deliberate and covered by the expected values in the test suite.
    pub fn balance_at_maturity(&self) -> Result<Money> {
        info!(
            "calculating balance at maturity: deposit {} at {}% over {}, frequency {}",
            self.initial_deposit, self.nominal_rate, self.term, self.payment_frequency
        );

        let initial = self.initial_deposit;
        let monthly_rate = monthly_interest_rate(self.nominal_rate);
        let annual_rate = annual_interest_rate(self.nominal_rate);

        let final_balance = match self.payment_frequency {
            PaymentFrequency::Monthly => {
                let total_months = self.term.total_months();
                let compounded =
                    compound_interest_after_months(monthly_rate, initial, total_months, 1)?;
                initial + compounded
            }
            PaymentFrequency::Quarterly => {
                // whole quarters compound, leftover months earn simple interest
                // on the grown balance
                let total_months = self.term.total_months();
                let extra_months = total_months % 4;
                let months_within_quarters = total_months - extra_months;

                let compounded = compound_interest_after_months(
                    monthly_rate,
                    initial,
                    months_within_quarters,
                    4,
                )?;
                let running_balance = initial + compounded;
                let remainder =
                    interest_earned_on_months(monthly_rate, running_balance, extra_months);
                initial + compounded + remainder
            }
            PaymentFrequency::Annually => {
                // only whole years compound; the month component never does
                let compounded =
                    compound_interest_after_years(annual_rate, initial, self.term.years, 1)?;
                let running_balance = initial + compounded;
                let remainder =
                    interest_earned_on_months(monthly_rate, running_balance, self.term.months);
                initial + compounded + remainder
            }
            PaymentFrequency::AtMaturity => {
                // both components accrue against the untouched original deposit
                let annual = interest_earned_on_years(annual_rate, initial, self.term.years);
                let monthly = interest_earned_on_months(monthly_rate, initial, self.term.months);
                initial + annual + monthly
            }
        };

        Ok(final_balance.round_dp_half_down(0))
    }

    /// pretty-printed json view of the account
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("JSON error: {}", e))
    }
}
