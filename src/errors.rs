use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum TermDepositError {
    #[error("minimum deposit not met: a term deposit requires an initial deposit of at least {minimum}, got {deposit}")]
    MinimumDeposit {
        minimum: Money,
        deposit: Money,
    },

    #[error("invalid interest rate: '{rate}' needs to be greater than 0 and at most 5")]
    InvalidInterestRate {
        rate: f64,
    },

    #[error("invalid payment frequency: '{value}' was misspelled or is not a recognized frequency")]
    InvalidPaymentFrequency {
        value: String,
    },

    #[error("invalid term: period count {count} is negative")]
    InvalidTerm {
        count: i32,
    },

    #[error("invalid compounding frequency: {frequency} must be at least one period")]
    InvalidCompoundingFrequency {
        frequency: u32,
    },
}

pub type Result<T> = std::result::Result<T, TermDepositError>;
