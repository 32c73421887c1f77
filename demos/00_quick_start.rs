/// quick start - minimal example to get started
use term_deposit_rs::{Money, TermDepositAccount};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // open a $10,000 deposit at 1.10% for 3 years, compounding monthly
    let account = TermDepositAccount::new(Money::from_major(10_000), 1.10, 3, 0, "monthly")?;

    println!("Balance at maturity: {}", account.balance_at_maturity()?);

    // print the account inputs
    println!("{}", account.json());

    Ok(())
}
