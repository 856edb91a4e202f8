use std::fmt;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::account::AccountError;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    #[serde(alias = "withdrawal")]
    Withdraw,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("DEPOSIT"),
            TransactionKind::Withdraw => f.write_str("WITHDRAW"),
        }
    }
}

/// Deposit or withdrawal whose amount is known to be strictly positive.
/// Whether the account can cover it is decided by [`crate::account::Account::execute`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountCommand {
    kind: TransactionKind,
    amount: Decimal,
}

impl AccountCommand {
    pub fn new(kind: TransactionKind, amount: Decimal) -> Result<Self, AccountError> {
        if amount > Decimal::ZERO {
            Ok(Self { kind, amount })
        } else {
            Err(AccountError::InvalidAmount { kind, amount })
        }
    }

    pub fn deposit(amount: Decimal) -> Result<Self, AccountError> {
        Self::new(TransactionKind::Deposit, amount)
    }

    pub fn withdraw(amount: Decimal) -> Result<Self, AccountError> {
        Self::new(TransactionKind::Withdraw, amount)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positive_amounts() {
        let cmd = AccountCommand::deposit(Decimal::new(1, 2)).unwrap();
        assert_eq!(cmd.kind(), TransactionKind::Deposit);
        assert_eq!(cmd.amount(), Decimal::new(1, 2));

        let cmd = AccountCommand::withdraw(Decimal::from(200)).unwrap();
        assert_eq!(cmd.kind(), TransactionKind::Withdraw);
        assert_eq!(cmd.amount(), Decimal::from(200));
    }

    #[test]
    fn reject_zero_and_negative_amounts() {
        let err = AccountCommand::deposit(Decimal::ZERO).unwrap_err();
        assert!(matches!(
            err,
            AccountError::InvalidAmount {
                kind: TransactionKind::Deposit,
                ..
            }
        ));

        let err = AccountCommand::withdraw(Decimal::from(-5)).unwrap_err();
        assert!(matches!(
            err,
            AccountError::InvalidAmount {
                kind: TransactionKind::Withdraw,
                ..
            }
        ));
        assert_eq!(
            err.to_string(),
            "WITHDRAW amount must be positive, got -5"
        );
    }

    #[test]
    fn kind_display() {
        assert_eq!(TransactionKind::Deposit.to_string(), "DEPOSIT");
        assert_eq!(TransactionKind::Withdraw.to_string(), "WITHDRAW");
    }
}
