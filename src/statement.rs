use std::io::{self, Write};

use rust_decimal::Decimal;

use crate::{
    account::{Account, Transaction},
    clock::Clock,
};

/// Presentation options for [`Account::render_statement_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementFormat {
    pub currency_symbol: String,
    /// `chrono` strftime pattern.
    pub timestamp_format: String,
    /// Line printed under the header.
    pub separator: String,
}

impl Default for StatementFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            separator: "-".repeat(30),
        }
    }
}

/// Two decimal places, rounded half to even, prefixed with `symbol`.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{symbol}{:.2}", amount.round_dp(2))
}

impl StatementFormat {
    fn transaction_line(&self, tx: &Transaction) -> String {
        format!(
            "{} | {} | {}",
            tx.timestamp().format(&self.timestamp_format),
            tx.kind(),
            format_money(tx.amount(), &self.currency_symbol)
        )
    }
}

impl<C: Clock> Account<C> {
    pub fn render_statement(&self) -> Vec<String> {
        self.render_statement_with(&StatementFormat::default())
    }

    pub fn render_statement_with(&self, format: &StatementFormat) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.transactions().len() + 3);
        lines.push(format!("Statement for {}:", self.owner()));
        lines.push(format.separator.clone());
        lines.extend(
            self.transactions()
                .iter()
                .map(|tx| format.transaction_line(tx)),
        );
        lines.push(format!(
            "Current Balance: {}",
            format_money(self.balance(), &format.currency_symbol)
        ));
        lines
    }

    pub fn write_statement<W>(&self, output: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        for line in self.render_statement() {
            writeln!(output, "{line}")?;
        }
        output.flush()
    }

    pub fn print_statement(&self) -> io::Result<()> {
        self.write_statement(&mut io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};

    use crate::clock::{FixedClock, SteppingClock};

    use super::*;

    fn alice() -> Account<SteppingClock> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap();
        let mut acc = Account::open_with_clock(
            "Alice",
            Decimal::from(1000),
            SteppingClock::new(start, TimeDelta::minutes(1)),
        )
        .unwrap();
        acc.deposit(Decimal::from(500)).unwrap();
        acc.withdraw(Decimal::from(200)).unwrap();
        acc.deposit(Decimal::new(13075, 2)).unwrap();
        acc
    }

    #[test]
    fn money_formatting() {
        assert_eq!(format_money(Decimal::from(500), "$"), "$500.00");
        assert_eq!(format_money(Decimal::new(13075, 2), "$"), "$130.75");
        assert_eq!(format_money(Decimal::new(5, 1), "€"), "€0.50");
        assert_eq!(format_money(Decimal::new(12345, 3), "$"), "$12.34");
        assert_eq!(format_money(Decimal::new(12355, 3), "$"), "$12.36");
        assert_eq!(format_money(Decimal::ZERO, "$"), "$0.00");
    }

    #[test]
    fn render_statement() {
        let lines = alice().render_statement();
        assert_eq!(
            lines,
            vec![
                "Statement for Alice:",
                "------------------------------",
                "2024-01-15 09:05:07 | DEPOSIT | $500.00",
                "2024-01-15 09:06:07 | WITHDRAW | $200.00",
                "2024-01-15 09:07:07 | DEPOSIT | $130.75",
                "Current Balance: $1430.75",
            ]
        );
    }

    #[test]
    fn render_empty_statement() {
        let instant = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let acc = Account::with_clock("Bob", FixedClock(instant));
        assert_eq!(
            acc.render_statement(),
            vec![
                "Statement for Bob:",
                "------------------------------",
                "Current Balance: $0.00",
            ]
        );
    }

    #[test]
    fn render_with_custom_format() {
        let format = StatementFormat {
            currency_symbol: "£".to_string(),
            timestamp_format: "%d/%m/%Y".to_string(),
            separator: "=".repeat(10),
        };
        let lines = alice().render_statement_with(&format);
        assert_eq!(lines[1], "==========");
        assert_eq!(lines[2], "15/01/2024 | DEPOSIT | £500.00");
        assert_eq!(lines.last().unwrap(), "Current Balance: £1430.75");
    }

    #[test]
    fn write_statement_lines() {
        let acc = alice();
        let mut output = Vec::new();
        acc.write_statement(&mut output).unwrap();
        let written = String::from_utf8(output).unwrap();
        assert_eq!(written.lines().count(), 6);
        assert!(written.ends_with("Current Balance: $1430.75\n"));
        // rendering does not touch the account
        assert_eq!(acc.transactions().len(), 3);
        assert_eq!(acc.balance(), Decimal::new(143075, 2));
    }
}
