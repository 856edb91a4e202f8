use std::fs::File;

use anyhow::{Context, Result, bail};
use bank_account::{Account, bin_utils::Service, clock::SystemClock};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [] => demo(),
        [owner, opening_balance, filename] => {
            let opening_balance: Decimal = opening_balance
                .parse()
                .with_context(|| format!("Invalid opening balance `{opening_balance}`"))?;
            let file =
                File::open(filename).with_context(|| format!("Failed to open `{filename}`"))?;

            let service = Service {
                owner: owner.clone(),
                opening_balance,
                clock: SystemClock,
                input: file,
                output: &mut std::io::stdout(),
                error_printer: Box::new(|line, err| eprintln!("Error at line {line}: {err}")),
            };
            service.run()
        }
        _ => bail!("Usage: bank-account [<owner> <opening-balance> <operations.csv>]"),
    }
}

fn demo() -> Result<()> {
    let mut account = Account::open("Alice", Decimal::from(1000))?;
    account.deposit(Decimal::from(500))?;
    account.withdraw(Decimal::from(200))?;
    account.deposit(Decimal::new(13075, 2))?;
    account
        .print_statement()
        .context("Failed to print statement")
}
