use std::io::Write;

use csv::Writer;
use serde::Serialize;

use crate::{account::Account, transaction::Amount};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AccountSummary {
    pub id: String,
    pub balance: Amount,
    pub transactions: usize,
    /// Most recent first, joined by `;`.
    pub recent: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        let recent: Vec<String> = account
            .recent_transactions()
            .iter()
            .flatten()
            .map(ToString::to_string)
            .collect();
        Self {
            id: account.id().to_string(),
            balance: account.balance(),
            transactions: account.transaction_count(),
            recent: recent.join(";"),
        }
    }
}

pub fn print_accounts<W>(
    output: &mut W,
    accounts: impl Iterator<Item = AccountSummary>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for acc in accounts {
        if let Err(err) = writer.serialize(acc) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_account() {
        let mut acc = Account::open("0001", 20).unwrap();
        acc.withdraw(10).unwrap();
        assert_eq!(
            AccountSummary::from(&acc),
            AccountSummary {
                id: "0001".to_string(),
                balance: 10,
                transactions: 2,
                recent: "0 10;1 20".to_string(),
            }
        );
    }

    #[test]
    fn print_summaries() {
        let a = Account::open("0001", 20).unwrap();
        let b = Account::open("0002", 30).unwrap();
        let mut output = Vec::new();
        print_accounts(&mut output, [&a, &b].into_iter().map(AccountSummary::from)).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "id,balance,transactions,recent\n0001,20,1,1 20\n0002,30,1,1 30\n"
        );
    }
}
