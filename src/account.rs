use thiserror::Error;

use crate::{
    error::ErrorKind,
    transaction::{Amount, Transaction, TransactionKind},
};

/// Smallest balance an account can be opened with.
pub const MIN_OPENING_BALANCE: Amount = 10;

/// Withdrawals must be a multiple of this.
pub const WITHDRAWAL_UNIT: Amount = 10;

/// Number of slots returned by [`Account::recent_transactions`].
pub const RECENT_TRANSACTIONS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("Initial balance must be at least {min}, got {balance}", min = MIN_OPENING_BALANCE)]
    OpeningBalanceTooLow { balance: Amount },
    #[error("Deposit amount must not be negative, got {amount}")]
    NegativeDeposit { amount: Amount },
    #[error("Deposit of {amount} would overflow the balance")]
    BalanceOverflow { amount: Amount },
    #[error(
        "Withdraw amount must not be negative and must be a multiple of {unit}, got {amount}",
        unit = WITHDRAWAL_UNIT
    )]
    InvalidWithdrawal { amount: Amount },
    #[error("Insufficient funds: requested {requested}, balance is {balance}")]
    InsufficientFunds { requested: Amount, balance: Amount },
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::OpeningBalanceTooLow { .. }
            | AccountError::NegativeDeposit { .. }
            | AccountError::BalanceOverflow { .. } => ErrorKind::InvalidArgument,
            AccountError::InvalidWithdrawal { .. } => ErrorKind::MalformedInput,
            AccountError::InsufficientFunds { .. } => ErrorKind::InsufficientFunds,
        }
    }
}

/// A bank account with an append-only history.
///
/// Two accounts are equal when their ids are equal, whatever their balances.
#[derive(Debug, Clone)]
pub struct Account {
    id: String,
    balance: Amount,
    transactions: Vec<Transaction>,
}

impl Account {
    pub fn open(id: impl Into<String>, initial_balance: Amount) -> Result<Self, AccountError> {
        if initial_balance < MIN_OPENING_BALANCE {
            return Err(AccountError::OpeningBalanceTooLow {
                balance: initial_balance,
            });
        }
        Ok(Self {
            id: id.into(),
            balance: initial_balance,
            transactions: vec![Transaction::deposit(initial_balance)],
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    /// Full history, oldest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Up to five latest transactions, most recent first. Missing slots are `None`.
    pub fn recent_transactions(&self) -> [Option<Transaction>; RECENT_TRANSACTIONS] {
        let mut recent = [None; RECENT_TRANSACTIONS];
        for (slot, tx) in recent.iter_mut().zip(self.transactions.iter().rev()) {
            *slot = Some(*tx);
        }
        recent
    }

    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountError> {
        let tx = self.handle_deposit(amount)?;
        self.apply(tx);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountError> {
        let tx = self.handle_withdrawal(amount)?;
        self.apply(tx);
        Ok(())
    }

    /// Runs a parsed transaction through the same checks as [`Self::deposit`]
    /// and [`Self::withdraw`].
    pub fn execute(&mut self, tx: Transaction) -> Result<(), AccountError> {
        match tx.kind {
            TransactionKind::Deposit => self.deposit(tx.amount),
            TransactionKind::Withdrawal => self.withdraw(tx.amount),
        }
    }

    fn handle_deposit(&self, amount: Amount) -> Result<Transaction, AccountError> {
        if amount < 0 {
            return Err(AccountError::NegativeDeposit { amount });
        }
        if self.balance.checked_add(amount).is_none() {
            return Err(AccountError::BalanceOverflow { amount });
        }
        Ok(Transaction::deposit(amount))
    }

    fn handle_withdrawal(&self, amount: Amount) -> Result<Transaction, AccountError> {
        if amount < 0 || amount % WITHDRAWAL_UNIT != 0 {
            return Err(AccountError::InvalidWithdrawal { amount });
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientFunds {
                requested: amount,
                balance: self.balance,
            });
        }
        Ok(Transaction::withdrawal(amount))
    }

    // validated by handle_* beforehand
    fn apply(&mut self, tx: Transaction) {
        match tx.kind {
            TransactionKind::Deposit => self.balance += tx.amount,
            TransactionKind::Withdrawal => self.balance -= tx.amount,
        }
        self.transactions.push(tx);
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Account {}
