/// compare the four payment frequencies over the same term
use term_deposit_rs::{Money, TermDepositAccount};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let deposit = Money::from_major(10_000);

    for frequency in ["MONTHLY", "QUARTERLY", "ANNUALLY", "AT_MATURITY"] {
        let account = TermDepositAccount::new(deposit, 1.10, 2, 11, frequency)?;
        let balance = account.balance_at_maturity()?;
        println!("{:<12} {}", frequency, balance);
    }

    Ok(())
}
