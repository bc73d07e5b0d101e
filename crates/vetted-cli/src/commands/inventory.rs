//! `vetted inventory` - display the stock listed in an inventory file.

use serde::Serialize;
use vetted_adapters::{InventoryReader, InventoryRecord};

use crate::{cli::InventoryArgs, error::CliResult, output::OutputManager};

/// A record with the display id assigned while listing.
#[derive(Debug, Serialize)]
struct Listed<'a> {
    id: usize,
    #[serde(flatten)]
    record: &'a InventoryRecord,
}

pub fn execute(args: InventoryArgs, output: OutputManager) -> CliResult<()> {
    let reader = InventoryReader::open(&args.file)?;

    if output.is_json() {
        let records = reader.collect::<Result<Vec<_>, _>>()?;
        let listed: Vec<Listed<'_>> = records
            .iter()
            .enumerate()
            .map(|(i, record)| Listed { id: i + 1, record })
            .collect();
        let json = serde_json::to_string_pretty(&listed).map_err(std::io::Error::from)?;
        output.data(&json)?;
        return Ok(());
    }

    for (id, record) in (1..).zip(reader) {
        output.data(&describe(id, &record?)?)?;
    }
    Ok(())
}

fn describe(id: usize, record: &InventoryRecord) -> CliResult<String> {
    Ok(format!(
        "We have {} of {} in stock. With an id of {id}",
        record.require("count")?,
        record.require("name")?,
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::CliError;

    fn first(text: &str) -> InventoryRecord {
        InventoryReader::new(Cursor::new(text.to_owned()))
            .next()
            .unwrap()
            .unwrap()
    }

    #[test]
    fn describes_stock_line() {
        let record = first("#name,count\nSword,3\n");
        assert_eq!(
            describe(1, &record).unwrap(),
            "We have 3 of Sword in stock. With an id of 1"
        );
    }

    #[test]
    fn missing_count_column_is_an_error() {
        let record = first("#name\nSword\n");
        assert!(matches!(describe(1, &record), Err(CliError::Inventory(_))));
    }
}
