//! CSV output for record tables.
//!
//! The serialized column set — `timestamp`, `sender`, `raw_text` — is the
//! contract downstream enrichment and persistence read back.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::table::RecordTable;

const HEADER: [&str; 3] = ["timestamp", "sender", "raw_text"];

/// Serializes a table to a CSV string.
///
/// Multi-line bodies are quoted by the writer, so rows stay one record each.
pub fn to_csv(table: &RecordTable) -> Result<String> {
    let mut buf = Vec::new();
    {
        let mut writer = csv::Writer::from_writer(&mut buf);
        write_rows(&mut writer, table)?;
        writer.flush()?;
    }
    Ok(String::from_utf8(buf)?)
}

/// Writes a table to a CSV file at `path`.
pub fn write_csv(table: &RecordTable, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);
    write_rows(&mut writer, table)?;
    writer.flush()?;
    Ok(())
}

fn write_rows<W: Write>(writer: &mut csv::Writer<W>, table: &RecordTable) -> Result<()> {
    writer.write_record(HEADER)?;
    for record in table {
        writer.write_record([
            record.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            record.sender.clone(),
            record.raw_text.clone(),
        ])?;
    }
    Ok(())
}
