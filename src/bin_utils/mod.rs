//! Bootstraps [`bank_teller`](crate) for the command line binary: opens one
//! account, bulk-loads a transaction stream into it and prints a CSV summary.

use std::io::{BufRead, Write};

use crate::{
    account::Account,
    teller::{Teller, bulk_load::LoadSummary},
    transaction::Amount,
};
use anyhow::{Context, Result};
use csv_printer::{AccountSummary, print_accounts};
pub mod csv_printer;

pub const DEFAULT_ACCOUNT_ID: &str = "ACCOUNT-1";
pub const DEFAULT_OPENING_BALANCE: Amount = 10;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub account_id: String,
    pub opening_balance: Amount,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(self) -> Result<LoadSummary> {
        let mut teller = Teller::new();
        let mut account = Account::open(self.account_id.as_str(), self.opening_balance)
            .with_context(|| format!("Failed to open account `{}`", self.account_id))?;

        let summary = teller
            .load_transactions_from_reader(self.input, &mut account)
            .context("Failed to load transactions")?;
        teller.add_account(account)?;

        print_accounts(self.output, teller.accounts().map(AccountSummary::from))?;
        Ok(summary)
    }
}
