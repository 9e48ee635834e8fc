//! Comma-separated score table
//!
//! Layout:
//!
//! ```text
//! Name,Highscore,Pastgames
//! Alice,75,3
//! ```
//!
//! Columns are located by header name, so their order in the file is free.
//! Quoting follows RFC 4180, so names may contain commas, quotes and line
//! breaks.

use super::{LedgerError, PlayerRecord};
use std::io::{Read, Write};

pub const NAME_COLUMN: &str = "Name";
pub const HIGHSCORE_COLUMN: &str = "Highscore";
pub const PASTGAMES_COLUMN: &str = "Pastgames";

const COLUMNS: [&str; 3] = [NAME_COLUMN, HIGHSCORE_COLUMN, PASTGAMES_COLUMN];

/// Parse a score table
///
/// An empty input (no header) yields no records. When a name appears twice
/// the later row wins.
///
/// # Errors
///
/// Returns [`LedgerError::MissingColumn`] if the header lacks a required
/// column and [`LedgerError::Malformed`] for rows that cannot be parsed.
pub fn parse_table<R: Read>(input: R) -> Result<Vec<PlayerRecord>, LedgerError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let headers = reader.headers().map_err(malformed)?.clone();
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    if let Some(missing) = COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|h| h == *column))
    {
        return Err(LedgerError::MissingColumn(missing));
    }

    let mut records: Vec<PlayerRecord> = Vec::new();
    for row in reader.deserialize::<PlayerRecord>() {
        let record = row.map_err(malformed)?;
        if let Some(existing) = records.iter_mut().find(|r| r.name == record.name) {
            *existing = record;
        } else {
            records.push(record);
        }
    }

    Ok(records)
}

/// Write the header followed by one row per record
///
/// # Errors
///
/// Propagates any error from the underlying writer.
pub fn write_table<'a, W, I>(out: W, records: I) -> csv::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a PlayerRecord>,
{
    // Header written by hand so an empty ledger still has one
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    writer.write_record(COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

fn malformed(source: csv::Error) -> LedgerError {
    LedgerError::Malformed {
        line: source.position().map_or(0, csv::Position::line),
        source,
    }
}
