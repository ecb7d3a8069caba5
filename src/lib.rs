/// A single bank account: balance, history and the deposit/withdraw rules.
pub mod account;

/// Transaction records and their `"<code> <amount>"` line format.
pub mod transaction;

/// Registry of accounts, plus applying transaction lines to them,
/// one by one or in bulk from a line source.
pub mod teller;

pub mod error;

/// Bootstraps the library for the `bank-teller` binary. It lives here so the
/// integration tests can drive it too.
pub mod bin_utils;

pub use account::{Account, AccountError};
pub use error::ErrorKind;
pub use teller::{Teller, TellerError};
pub use transaction::{Transaction, TransactionKind, TransactionParseError};
