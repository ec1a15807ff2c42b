use rust_decimal::{Decimal, prelude::Zero};
use thiserror::Error;

pub type AccountId = u32;

/// One entry in an account's history. Correlation data lives on the
/// variant that needs it: `to` only exists for outgoing transfers,
/// `from` only for incoming ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionRecord {
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
    Transfer { amount: Decimal, to: String },
    Received { amount: Decimal, from: String },
}

impl TransactionRecord {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Deposit { amount }
            | Self::Withdrawal { amount }
            | Self::Transfer { amount, .. }
            | Self::Received { amount, .. } => *amount,
        }
    }
}

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Deposit amount must not be negative")]
    NegativeDeposit,
    #[error("Withdrawal amount must not be negative")]
    NegativeWithdrawal,
    #[error("Insufficient funds")]
    InsufficientFunds,
}

#[derive(Debug)]
pub struct Account {
    id: AccountId,
    name: String,
    balance: Decimal,
    history: Vec<TransactionRecord>,
}

impl Account {
    pub fn new(id: AccountId, name: &str, initial_balance: Decimal) -> Self {
        Self {
            id,
            name: name.to_owned(),
            balance: initial_balance,
            history: Vec::new(),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Successful operations append here in the order they happened;
    /// rejected operations leave no trace.
    pub fn history(&self) -> &[TransactionRecord] {
        &self.history
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount < Decimal::zero() {
            tracing::warn!(account = %self.name, %amount, "deposit rejected");
            return Err(AccountError::NegativeDeposit);
        }
        self.balance += amount;
        self.record(TransactionRecord::Deposit { amount });
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        // sign is checked before sufficiency
        if amount < Decimal::zero() {
            tracing::warn!(account = %self.name, %amount, "withdrawal rejected");
            return Err(AccountError::NegativeWithdrawal);
        }
        if self.balance < amount {
            tracing::warn!(account = %self.name, %amount, "withdrawal exceeds balance");
            return Err(AccountError::InsufficientFunds);
        }
        self.balance -= amount;
        self.record(TransactionRecord::Withdrawal { amount });
        Ok(())
    }

    /// Moves `amount` from this account into `recipient`, appending a
    /// `Transfer` record here and a `Received` record on the recipient.
    ///
    /// Only the sender's funds are checked. The amount itself is not
    /// sign-checked, so a negative transfer that the balance covers is
    /// accepted and moves funds in the opposite direction; the recipient
    /// side is credited directly, without its own deposit validation.
    pub fn transfer(
        &mut self,
        amount: Decimal,
        recipient: &mut Account,
    ) -> Result<(), AccountError> {
        if self.balance < amount {
            tracing::warn!(
                from = %self.name,
                to = %recipient.name,
                %amount,
                "transfer exceeds balance"
            );
            return Err(AccountError::InsufficientFunds);
        }
        self.balance -= amount;
        self.record(TransactionRecord::Transfer {
            amount,
            to: recipient.name.clone(),
        });
        recipient.balance += amount;
        recipient.record(TransactionRecord::Received {
            amount,
            from: self.name.clone(),
        });
        Ok(())
    }

    fn record(&mut self, tx: TransactionRecord) {
        self.history.push(tx);
    }
}
