use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    clock::{Clock, SystemClock},
    command::{AccountCommand, TransactionKind},
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("{kind} amount must be positive, got {amount}")]
    InvalidAmount {
        kind: TransactionKind,
        amount: Decimal,
    },
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },
    #[error("Opening balance must not be negative, got {0}")]
    NegativeOpeningBalance(Decimal),
    #[error("Deposit of {amount} would overflow the balance")]
    BalanceOverflow { amount: Decimal },
    #[error("{kind} of {amount} cannot be applied to the balance without rounding")]
    PrecisionLoss {
        kind: TransactionKind,
        amount: Decimal,
    },
}

/// One recorded deposit or withdrawal. Never modified once recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: NaiveDateTime,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    /// Always positive, the direction is carried by [`Transaction::kind`].
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }
}

#[derive(Debug, Clone)]
pub struct Account<C = SystemClock> {
    owner: String,
    balance: Decimal,
    transactions: Vec<Transaction>,
    clock: C,
}

impl Account {
    pub fn new(owner: impl Into<String>) -> Self {
        Self::with_clock(owner, SystemClock)
    }

    pub fn open(owner: impl Into<String>, opening_balance: Decimal) -> Result<Self, AccountError> {
        Self::open_with_clock(owner, opening_balance, SystemClock)
    }
}

impl<C: Clock> Account<C> {
    pub fn with_clock(owner: impl Into<String>, clock: C) -> Self {
        Self {
            owner: owner.into(),
            balance: Decimal::ZERO,
            transactions: Vec::new(),
            clock,
        }
    }

    /// The opening balance is not recorded as a transaction.
    pub fn open_with_clock(
        owner: impl Into<String>,
        opening_balance: Decimal,
        clock: C,
    ) -> Result<Self, AccountError> {
        if opening_balance < Decimal::ZERO {
            return Err(AccountError::NegativeOpeningBalance(opening_balance));
        }
        Ok(Self {
            balance: opening_balance,
            ..Self::with_clock(owner, clock)
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Recorded transactions, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let command = AccountCommand::deposit(amount).inspect_err(|err| self.log_rejected(err))?;
        self.execute(command)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        let command = AccountCommand::withdraw(amount).inspect_err(|err| self.log_rejected(err))?;
        self.execute(command)
    }

    /// Applies a validated command. On error nothing is changed.
    pub fn execute(&mut self, command: AccountCommand) -> Result<(), AccountError> {
        let amount = command.amount();
        let kind = command.kind();
        let new_balance = match kind {
            TransactionKind::Deposit => self
                .balance
                .checked_add(amount)
                .ok_or(AccountError::BalanceOverflow { amount }),
            TransactionKind::Withdraw => {
                if amount <= self.balance {
                    Ok(self.balance - amount)
                } else {
                    Err(AccountError::InsufficientFunds {
                        requested: amount,
                        available: self.balance,
                    })
                }
            }
        }
        .and_then(|new_balance| {
            // Decimal rounds once a result needs more than 28 digits
            let applied = match kind {
                TransactionKind::Deposit => new_balance - self.balance,
                TransactionKind::Withdraw => self.balance - new_balance,
            };
            if applied == amount {
                Ok(new_balance)
            } else {
                Err(AccountError::PrecisionLoss { kind, amount })
            }
        })
        .inspect_err(|err| self.log_rejected(err))?;

        self.balance = new_balance;
        self.record_transaction(kind, amount);
        Ok(())
    }

    fn record_transaction(&mut self, kind: TransactionKind, amount: Decimal) {
        let timestamp = self.clock.now();
        self.transactions.push(Transaction {
            kind,
            amount,
            timestamp,
        });
        debug!(
            owner = %self.owner,
            %kind,
            %amount,
            balance = %self.balance,
            "transaction recorded"
        );
    }

    fn log_rejected(&self, err: &AccountError) {
        warn!(owner = %self.owner, %err, "operation rejected");
    }
}
