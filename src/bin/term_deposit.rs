//! Term deposit maturity calculator.
//!
//! Prints the final balance for a deposit held to maturity, e.g.
//! `term_deposit 10000 1.10 5 0 monthly`. Set `RUST_LOG=info` to see the
//! calculation summary record.

use clap::Parser;

use term_deposit_rs::{Money, TermDepositAccount};

#[derive(Parser)]
#[command(name = "term_deposit", about = "Calculate a term deposit balance at maturity")]
struct Args {
    /// starting deposit amount (minimum 1000.00)
    initial_deposit: Money,
    /// nominal annual interest rate as a percentage, greater than 0 and at most 5
    interest_rate: f64,
    /// whole years in the term
    term_years: i32,
    /// leftover months in the term
    term_months: i32,
    /// one of monthly, quarterly, annually, at_maturity (case-insensitive)
    payment_frequency: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let account = TermDepositAccount::new(
        args.initial_deposit,
        args.interest_rate,
        args.term_years,
        args.term_months,
        &args.payment_frequency,
    )?;

    println!("Final balance: {}", account.balance_at_maturity()?);
    Ok(())
}
