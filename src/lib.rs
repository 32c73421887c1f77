pub mod account;
pub mod decimal;
pub mod errors;
pub mod interest;
pub mod types;

// re-export key types
pub use account::TermDepositAccount;
pub use decimal::{Money, Rate};
pub use errors::{Result, TermDepositError};
pub use types::{PaymentFrequency, Term};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
