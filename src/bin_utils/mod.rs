//! This module could be a separate crate on its own, to bootstrap [`tiny_bank`] within binary
//! but for simplicity purposes, I include this module directly in binary.

use std::io::{Read, Write};

use crate::{
    command::BankCommand,
    registry::{AccountRegistry, BankError},
};
use anyhow::Result;
use csv_parser::CsvOperationParser;
use csv_printer::{AccountStatement, print_statements};
pub mod csv_parser;
pub mod csv_printer;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
    pub error_printer: Box<dyn FnMut(u64, BankError)>,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: Read,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let parser = CsvOperationParser::new(self.input);

        let mut registry = AccountRegistry::new();

        for (line, row) in parser {
            let outcome = BankCommand::parse(row.op, row.account, row.to, row.amount)
                .map_err(BankError::from)
                .and_then(|cmd| registry.execute(cmd));
            if let Err(err) = outcome {
                (self.error_printer)(line, err);
            }
        }

        // statement rows come out in creation order
        let mut accounts: Vec<_> = registry.accounts().collect();
        accounts.sort_by_key(|acc| acc.id());

        print_statements(
            self.output,
            accounts.into_iter().map(|acc| AccountStatement {
                account: acc.name().to_owned(),
                balance: acc.balance(),
                transactions: acc.history().len(),
            }),
        )
    }
}
