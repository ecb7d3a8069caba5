//! Best-effort import of transaction lines.
//!
//! Every line is applied on its own. A line that fails for any reason is
//! skipped and the import carries on with the next one.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str,
};

use tracing::{debug, info};

use crate::account::Account;

use super::{Teller, TellerError, apply_line};

/// Outcome of a bulk load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub applied: usize,
    pub skipped: usize,
}

// `load_transactions` and `load_transactions_from_reader` read no teller
// state; they are reached through a `Teller` like every other operation.
impl Teller {
    /// Loads the transactions stored in the file at `path` into `account`.
    pub fn load_transactions(
        &self,
        path: impl AsRef<Path>,
        account: &mut Account,
    ) -> Result<LoadSummary, TellerError> {
        let file = open_source(path.as_ref())?;
        load_lines(BufReader::new(file), account)
    }

    /// Same as [`Self::load_transactions`], with the target looked up by id.
    pub fn load_transactions_into(
        &mut self,
        id: &str,
        path: impl AsRef<Path>,
    ) -> Result<LoadSummary, TellerError> {
        let account = self.find_account_mut(id)?;
        let file = open_source(path.as_ref())?;
        load_lines(BufReader::new(file), account)
    }

    /// Loads from any line reader, e.g. stdin or an in-memory buffer.
    ///
    /// Only a failure of the reader itself is returned as an error.
    pub fn load_transactions_from_reader<R: BufRead>(
        &self,
        reader: R,
        account: &mut Account,
    ) -> Result<LoadSummary, TellerError> {
        load_lines(reader, account)
    }
}

fn load_lines<R: BufRead>(reader: R, account: &mut Account) -> Result<LoadSummary, TellerError> {
    let mut summary = LoadSummary::default();
    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(TellerError::Source)?;
        let bytes = raw.strip_suffix(b"\r").unwrap_or(raw.as_slice());
        let line = match str::from_utf8(bytes) {
            Ok(line) => line,
            Err(err) => {
                debug!(line = index + 1, %err, "transaction skipped, not valid UTF-8");
                summary.skipped += 1;
                continue;
            }
        };
        match apply_line(line, account) {
            Ok(()) => summary.applied += 1,
            Err(err) => {
                debug!(line = index + 1, kind = %err.kind(), %err, "transaction skipped");
                summary.skipped += 1;
            }
        }
    }
    info!(
        id = account.id(),
        applied = summary.applied,
        skipped = summary.skipped,
        balance = account.balance(),
        "transactions loaded"
    );
    Ok(summary)
}

fn open_source(path: &Path) -> Result<File, TellerError> {
    if !path.is_file() {
        return Err(TellerError::SourceNotFound {
            path: path.to_path_buf(),
        });
    }
    File::open(path).map_err(TellerError::Source)
}
