use std::io::Read;

use crate::command::TransactionKind;
use csv::{DeserializeRecordsIntoIter, Trim};
use rust_decimal::Decimal;
use serde::Deserialize;

/// One row of an operations script: `type,amount`.
#[derive(Debug, Deserialize)]
pub struct Operation {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Decimal,
}

/// Reads an operations script: a `type,amount` header followed by one
/// `deposit` or `withdraw` (also spelled `withdrawal`) row per operation.
/// Surrounding whitespace is ignored. Each row comes back with the line it
/// started on, and a row that does not deserialize is yielded as an error
/// so the caller can report it and keep going.
pub struct CsvOperationParser<R> {
    iter: DeserializeRecordsIntoIter<R, Operation>,
}

impl<R> CsvOperationParser<R>
where
    R: Read,
{
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            iter: reader.into_deserialize(),
        }
    }
}

impl<R> Iterator for CsvOperationParser<R>
where
    R: Read,
{
    type Item = (u64, csv::Result<Operation>);

    fn next(&mut self) -> Option<Self::Item> {
        let curr_line = self.iter.reader().position().line();
        self.iter.next().map(|row| (curr_line, row))
    }
}
