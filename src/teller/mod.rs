use std::{io, path::PathBuf};

use indexmap::{IndexMap, map::Entry};
use thiserror::Error;
use tracing::debug;

use crate::{
    account::{Account, AccountError},
    error::ErrorKind,
    transaction::{Transaction, TransactionParseError},
};

pub mod bulk_load;

#[derive(Debug, Error)]
pub enum TellerError {
    #[error("Account `{id}` is already registered")]
    DuplicateAccount { id: String },
    #[error("No account could be found with id `{id}`")]
    AccountNotFound { id: String },
    #[error("Transaction source `{}` does not exist", path.display())]
    SourceNotFound { path: PathBuf },
    #[error("Failed to read transaction source")]
    Source(#[source] io::Error),
    #[error(transparent)]
    ParseErr(#[from] TransactionParseError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

impl TellerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TellerError::DuplicateAccount { .. } => ErrorKind::DuplicateKey,
            TellerError::AccountNotFound { .. } => ErrorKind::NotFound,
            TellerError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            TellerError::Source(_) => ErrorKind::Io,
            TellerError::ParseErr(err) => err.kind(),
            TellerError::AccountErr(err) => err.kind(),
        }
    }
}

/// Registry of accounts, keyed by id in registration order.
#[derive(Debug, Default)]
pub struct Teller {
    accounts: IndexMap<String, Account>,
}

impl Teller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_account(&mut self, account: Account) -> Result<(), TellerError> {
        match self.accounts.entry(account.id().to_string()) {
            Entry::Occupied(entry) => Err(TellerError::DuplicateAccount {
                id: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                debug!(id = entry.key().as_str(), "account registered");
                entry.insert(account);
                Ok(())
            }
        }
    }

    pub fn find_account(&self, id: &str) -> Result<&Account, TellerError> {
        self.accounts
            .get(id)
            .ok_or_else(|| TellerError::AccountNotFound { id: id.to_string() })
    }

    pub fn find_account_mut(&mut self, id: &str) -> Result<&mut Account, TellerError> {
        self.accounts
            .get_mut(id)
            .ok_or_else(|| TellerError::AccountNotFound { id: id.to_string() })
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Parses one `"<code> <amount>"` line and applies it to `account`.
    ///
    /// Parse failures and account failures are returned as they are; the
    /// account is left untouched on error. No teller state is read.
    pub fn apply_transaction(
        &self,
        line: &str,
        account: &mut Account,
    ) -> Result<(), TellerError> {
        apply_line(line, account)
    }

    pub fn apply_transaction_to(&mut self, id: &str, line: &str) -> Result<(), TellerError> {
        let account = self.find_account_mut(id)?;
        apply_line(line, account)
    }
}

fn apply_line(line: &str, account: &mut Account) -> Result<(), TellerError> {
    let tx: Transaction = line.parse()?;
    account.execute(tx)?;
    debug!(id = account.id(), %tx, balance = account.balance(), "transaction applied");
    Ok(())
}
