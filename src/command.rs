use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Open,
    Deposit,
    Withdrawal,
    Transfer,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Amount is required for {kind:?}")]
    AmountRequired { kind: OperationKind },
    #[error("Counterparty account is required for {kind:?}")]
    CounterpartyRequired { kind: OperationKind },
}

/// One validated bank operation, addressed by account name.
#[derive(Debug, Clone)]
pub enum BankCommand {
    Open {
        name: String,
        initial_balance: Decimal,
    },
    Deposit {
        name: String,
        amount: Decimal,
    },
    Withdraw {
        name: String,
        amount: Decimal,
    },
    Transfer {
        name: String,
        counterparty: String,
        amount: Decimal,
    },
}

impl BankCommand {
    /// Builds a command from one raw driver row. Presence of the
    /// optional columns is validated here; the sign and sufficiency
    /// rules stay with [`crate::account::Account`] so their ordering is
    /// untouched.
    pub fn parse(
        kind: OperationKind,
        account: String,
        counterparty: Option<String>,
        amount: Option<Decimal>,
    ) -> Result<Self, CommandError> {
        match kind {
            OperationKind::Open => Ok(Self::Open {
                name: account,
                // an omitted opening amount means an empty account
                initial_balance: amount.unwrap_or_default(),
            }),
            OperationKind::Deposit => Ok(Self::Deposit {
                name: account,
                amount: Self::require_amount(kind, amount)?,
            }),
            OperationKind::Withdrawal => Ok(Self::Withdraw {
                name: account,
                amount: Self::require_amount(kind, amount)?,
            }),
            OperationKind::Transfer => {
                let Some(counterparty) = counterparty else {
                    return Err(CommandError::CounterpartyRequired { kind });
                };
                Ok(Self::Transfer {
                    name: account,
                    counterparty,
                    amount: Self::require_amount(kind, amount)?,
                })
            }
        }
    }

    fn require_amount(
        kind: OperationKind,
        amount: Option<Decimal>,
    ) -> Result<Decimal, CommandError> {
        amount.ok_or(CommandError::AmountRequired { kind })
    }
}
