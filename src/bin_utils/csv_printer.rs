use std::io::Write;

use csv::Writer;
use rust_decimal::Decimal;
use serde::Serialize;

/// Final state of one account: closing balance plus the number of
/// history entries it accumulated.
#[derive(Debug, Serialize)]
pub struct AccountStatement {
    pub account: String,
    pub balance: Decimal,
    pub transactions: usize,
}

pub fn print_statements<W>(
    output: &mut W,
    statements: impl Iterator<Item = AccountStatement>,
) -> anyhow::Result<()>
where
    W: Write,
{
    let mut writer = Writer::from_writer(output);
    for statement in statements {
        if let Err(err) = writer.serialize(statement) {
            anyhow::bail!("Failed to write to CSV: {err}")
        }
    }
    // Ensure all data is flushed to the output
    if let Err(err) = writer.flush() {
        anyhow::bail!("Failed to flush CSV writer: {err}")
    }
    Ok(())
}
