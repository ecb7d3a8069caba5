use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::error::ErrorKind;

pub type Amount = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Leading code of the line format: `1` deposits, `0` withdraws.
    pub fn code(self) -> char {
        match self {
            TransactionKind::Deposit => '1',
            TransactionKind::Withdrawal => '0',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(TransactionKind::Deposit),
            '0' => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }
}

/// A single entry of an account's history.
///
/// Displays as `"<code> <amount>"`, the same form accepted by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Amount,
}

impl Transaction {
    pub fn deposit(amount: Amount) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Amount) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.code(), self.amount)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransactionParseError {
    #[error("Transaction line is empty")]
    Empty,
    #[error("Transaction amount `{token}` should consist of digits only")]
    NonNumericAmount { token: String },
    #[error("Transaction amount `{token}` is out of range")]
    AmountOutOfRange { token: String },
    #[error("Transaction code `{code}` does not indicate a deposit or a withdrawal")]
    UnknownCode { code: char },
}

impl TransactionParseError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::MalformedInput
    }
}

impl FromStr for Transaction {
    type Err = TransactionParseError;

    /// The last space-separated token is the amount, the first character picks
    /// the operation. Anything between them is ignored.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let Some(code) = line.chars().next() else {
            return Err(TransactionParseError::Empty);
        };

        let token = line.rsplit(' ').next().unwrap_or(line);
        if !token.chars().all(|c| c.is_ascii_digit()) {
            return Err(TransactionParseError::NonNumericAmount {
                token: token.to_string(),
            });
        }
        let amount = token
            .parse::<Amount>()
            .map_err(|_| TransactionParseError::AmountOutOfRange {
                token: token.to_string(),
            })?;

        let kind =
            TransactionKind::from_code(code).ok_or(TransactionParseError::UnknownCode { code })?;
        Ok(Self { kind, amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_line_format() {
        assert_eq!(Transaction::deposit(20).to_string(), "1 20");
        assert_eq!(Transaction::withdrawal(10).to_string(), "0 10");
    }

    #[test]
    fn parse_valid_lines() {
        assert_eq!("1 20".parse::<Transaction>(), Ok(Transaction::deposit(20)));
        assert_eq!("  0 30 \n".parse::<Transaction>(), Ok(Transaction::withdrawal(30)));
        // only the first character and the last token matter
        assert_eq!("1  40".parse::<Transaction>(), Ok(Transaction::deposit(40)));
        assert_eq!("0 0".parse::<Transaction>(), Ok(Transaction::withdrawal(0)));
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert_eq!(
            "bogus".parse::<Transaction>(),
            Err(TransactionParseError::NonNumericAmount {
                token: "bogus".to_string()
            })
        );
        assert_eq!(
            "1 -5".parse::<Transaction>(),
            Err(TransactionParseError::NonNumericAmount {
                token: "-5".to_string()
            })
        );
        assert_eq!(
            "2 10".parse::<Transaction>(),
            Err(TransactionParseError::UnknownCode { code: '2' })
        );
        assert_eq!(
            "   ".parse::<Transaction>(),
            Err(TransactionParseError::Empty)
        );
        assert!(matches!(
            "1 99999999999999999999".parse::<Transaction>(),
            Err(TransactionParseError::AmountOutOfRange { .. })
        ));
    }

    #[test]
    fn amount_is_checked_before_code() {
        let err = "x 1y".parse::<Transaction>().unwrap_err();
        assert!(matches!(err, TransactionParseError::NonNumericAmount { .. }));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert_eq!(
            err.to_string(),
            "Transaction amount `1y` should consist of digits only"
        );
    }
}
