//! Drives a single [`Account`] from a CSV script of operations. Used by the
//! `bank-account` binary and by integration tests.

use std::io::{Read, Write};

use crate::{
    account::{Account, AccountError},
    clock::Clock,
    command::AccountCommand,
};
use anyhow::{Context, Result};
use csv_parser::CsvOperationParser;
use rust_decimal::Decimal;
use thiserror::Error;
pub mod csv_parser;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Malformed operation: {0}")]
    Parse(#[from] csv::Error),
    #[error(transparent)]
    Account(#[from] AccountError),
}

pub struct Service<'w, R, W: 'w, C> {
    pub owner: String,
    pub opening_balance: Decimal,
    pub clock: C,
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, ServiceError)>,
}

impl<'w, R, W, C> Service<'w, R, W, C>
where
    R: Read,
    W: Write + 'w,
    C: Clock,
{
    /// Rejected or malformed rows go to `error_printer` and processing
    /// continues. Fails only if the account cannot be opened or the
    /// statement cannot be written.
    pub fn run(mut self) -> Result<()> {
        let mut account =
            Account::open_with_clock(self.owner, self.opening_balance, self.clock)?;

        for (line, row) in CsvOperationParser::new(self.input) {
            let result = row.map_err(ServiceError::from).and_then(|op| {
                let command = AccountCommand::new(op.kind, op.amount)?;
                account.execute(command)?;
                Ok(())
            });
            if let Err(err) = result {
                (self.error_printer)(line, err);
            }
        }

        account
            .write_statement(self.output)
            .context("Failed to write statement")
    }
}
