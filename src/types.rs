use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::TermDepositError;

/// how often earned interest is paid back into the deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentFrequency {
    /// interest compounds every month
    Monthly,
    /// interest compounds every quarter
    Quarterly,
    /// interest compounds every year
    Annually,
    /// no compounding, interest paid once at the end of the term
    AtMaturity,
}

impl PaymentFrequency {
    /// canonical wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "MONTHLY",
            PaymentFrequency::Quarterly => "QUARTERLY",
            PaymentFrequency::Annually => "ANNUALLY",
            PaymentFrequency::AtMaturity => "AT_MATURITY",
        }
    }
}

impl FromStr for PaymentFrequency {
    type Err = TermDepositError;

    /// parse case-insensitively from the wire strings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MONTHLY" => Ok(PaymentFrequency::Monthly),
            "QUARTERLY" => Ok(PaymentFrequency::Quarterly),
            "ANNUALLY" => Ok(PaymentFrequency::Annually),
            "AT_MATURITY" => Ok(PaymentFrequency::AtMaturity),
            _ => Err(TermDepositError::InvalidPaymentFrequency {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// deposit term as whole years plus leftover months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub years: i32,
    pub months: i32,
}

impl Term {
    pub fn new(years: i32, months: i32) -> Self {
        Term { years, months }
    }

    /// term normalized to a single month count
    pub fn total_months(&self) -> i32 {
        self.years * 12 + self.months
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m", self.years, self.months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_parsing_is_case_insensitive() {
        assert_eq!(
            "monthly".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Monthly
        );
        assert_eq!(
            "QUARTERLY".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Quarterly
        );
        assert_eq!(
            "Annually".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::Annually
        );
        assert_eq!(
            "at_maturity".parse::<PaymentFrequency>().unwrap(),
            PaymentFrequency::AtMaturity
        );
    }

    #[test]
    fn test_unknown_frequency_is_rejected() {
        let err = "weekly".parse::<PaymentFrequency>().unwrap_err();
        assert!(matches!(
            err,
            TermDepositError::InvalidPaymentFrequency { ref value } if value == "weekly"
        ));
    }

    #[test]
    fn test_frequency_round_trips_through_display() {
        for freq in [
            PaymentFrequency::Monthly,
            PaymentFrequency::Quarterly,
            PaymentFrequency::Annually,
            PaymentFrequency::AtMaturity,
        ] {
            assert_eq!(freq.to_string().parse::<PaymentFrequency>().unwrap(), freq);
        }
    }

    #[test]
    fn test_term_normalization() {
        assert_eq!(Term::new(2, 11).total_months(), 35);
        assert_eq!(Term::new(0, 4).total_months(), 4);
        assert_eq!(Term::new(5, 0).total_months(), 60);
        assert_eq!(Term::new(0, 0).total_months(), 0);
    }
}
