/// The account itself: balance, append-only transaction log and the
/// validation that keeps the balance from going negative.
pub mod account;

/// Validated deposit/withdraw requests, later executed by [`account`].
pub mod command;

/// Time sources used to stamp transactions.
pub mod clock;

/// Human-readable statement rendering.
pub mod statement;

/// Bootstraps an account from a CSV script for the binary and
/// integration tests.
pub mod bin_utils;

pub use account::{Account, AccountError, Transaction};
pub use command::{AccountCommand, TransactionKind};
