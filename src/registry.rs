use std::collections::HashMap;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{
    account::{Account, AccountError, AccountId},
    command::{BankCommand, CommandError},
};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Account `{0}` already exists")]
    DuplicateName(String),
    #[error("Unknown account `{0}`")]
    UnknownAccount(String),
    #[error("Cannot transfer from an account to itself")]
    SameAccount,
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error(transparent)]
    CommandErr(#[from] CommandError),
    #[error(transparent)]
    RegistryErr(#[from] RegistryError),
    #[error(transparent)]
    AccountErr(#[from] AccountError),
}

/// Owns every account. Accounts are stored under a surrogate id assigned
/// at creation; names are unique (case-sensitive) and resolved through a
/// separate index.
#[derive(Debug, Default)]
pub struct AccountRegistry {
    accounts: HashMap<AccountId, Account>,
    names: HashMap<String, AccountId>,
    next_id: AccountId,
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_account(
        &mut self,
        name: &str,
        initial_balance: Decimal,
    ) -> Result<AccountId, RegistryError> {
        if self.names.contains_key(name) {
            return Err(RegistryError::DuplicateName(name.to_owned()));
        }
        self.next_id += 1;
        let id = self.next_id;
        self.accounts
            .insert(id, Account::new(id, name, initial_balance));
        self.names.insert(name.to_owned(), id);
        tracing::debug!(account = name, id, "account opened");
        Ok(id)
    }

    pub fn id_of(&self, name: &str) -> Option<AccountId> {
        self.names.get(name).copied()
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.get(&id)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.get_mut(&id)
    }

    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    fn account_by_name_mut(&mut self, name: &str) -> Result<&mut Account, RegistryError> {
        let id = self
            .id_of(name)
            .ok_or_else(|| RegistryError::UnknownAccount(name.to_owned()))?;
        self.account_mut(id)
            .ok_or_else(|| RegistryError::UnknownAccount(name.to_owned()))
    }

    /// Resolves two distinct accounts at once, for the two sides of a
    /// transfer. Identical names are rejected up front since the two
    /// mutable borrows must not alias.
    pub fn pair_by_name_mut(
        &mut self,
        first: &str,
        second: &str,
    ) -> Result<(&mut Account, &mut Account), RegistryError> {
        let first_id = self
            .id_of(first)
            .ok_or_else(|| RegistryError::UnknownAccount(first.to_owned()))?;
        let second_id = self
            .id_of(second)
            .ok_or_else(|| RegistryError::UnknownAccount(second.to_owned()))?;
        if first_id == second_id {
            return Err(RegistryError::SameAccount);
        }
        let [Some(first_acc), Some(second_acc)] =
            self.accounts.get_disjoint_mut([&first_id, &second_id])
        else {
            // both ids come from the name index, so this cannot be reached
            return Err(RegistryError::UnknownAccount(first.to_owned()));
        };
        Ok((first_acc, second_acc))
    }

    /// Applies one parsed command. Failures leave the registry and every
    /// account exactly as they were.
    pub fn execute(&mut self, cmd: BankCommand) -> Result<(), BankError> {
        match cmd {
            BankCommand::Open {
                name,
                initial_balance,
            } => {
                self.create_account(&name, initial_balance)?;
            }
            BankCommand::Deposit { name, amount } => {
                self.account_by_name_mut(&name)?.deposit(amount)?;
            }
            BankCommand::Withdraw { name, amount } => {
                self.account_by_name_mut(&name)?.withdraw(amount)?;
            }
            BankCommand::Transfer {
                name,
                counterparty,
                amount,
            } => {
                let (from, to) = self.pair_by_name_mut(&name, &counterparty)?;
                from.transfer(amount, to)?;
            }
        }
        Ok(())
    }
}
