//! CSV table helpers shared by variable tables, the day log and exports.
//!
//! Variable tables have a header of `ID` plus the category labels while data
//! rows always hold two fields, so every reader and writer here is flexible
//! about record lengths.

use crate::domain::{EntryCount, ENTRY_COUNT_CAP};
use crate::error::Result;
use csv::{Reader, ReaderBuilder, StringRecord, Writer, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::BufWriter;
use std::path::Path;

/// Open a table for reading, header row included as the first record
pub fn open_reader(path: &Path) -> Result<Reader<File>> {
    let file = File::open(path)?;
    Ok(ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file))
}

fn writer_for(file: File) -> Writer<BufWriter<File>> {
    WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(BufWriter::new(file))
}

/// Create a new table containing only its header row.
/// Fails if the file already exists.
pub fn create_table(path: &Path, header: &[&str]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = OpenOptions::new().write(true).create_new(true).open(path)?;
    let mut writer = writer_for(file);
    writer.write_record(header)?;
    writer.flush()?;
    Ok(())
}

/// Append one row to an existing table
pub fn append_row(path: &Path, fields: &[&str]) -> Result<()> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut writer = writer_for(file);
    writer.write_record(fields)?;
    writer.flush()?;
    Ok(())
}

/// Write a whole table, either replacing the file or appending to it
pub fn write_table(path: &Path, rows: &[Vec<String>], append: bool) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut options = OpenOptions::new();
    if append {
        options.append(true).create(true);
    } else {
        options.write(true).create(true).truncate(true);
    }

    let mut writer = writer_for(options.open(path)?);
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Header fields after the leading `ID` column
pub fn read_header_labels(path: &Path) -> Result<Vec<String>> {
    let mut reader = open_reader(path)?;
    let mut record = StringRecord::new();

    if !reader.read_record(&mut record)? {
        return Ok(Vec::new());
    }

    Ok(record
        .iter()
        .skip(1)
        .map(|label| label.trim().to_string())
        .filter(|label| !label.is_empty())
        .collect())
}

/// Count data rows, giving up once the count passes `ENTRY_COUNT_CAP`
pub fn count_rows(path: &Path) -> Result<EntryCount> {
    let mut reader = open_reader(path)?;
    let mut record = StringRecord::new();
    let mut count = 0usize;

    // header
    if !reader.read_record(&mut record)? {
        return Ok(EntryCount::Exact(0));
    }

    while reader.read_record(&mut record)? {
        count += 1;
        if count > ENTRY_COUNT_CAP {
            return Ok(EntryCount::MoreThanCap);
        }
    }

    Ok(EntryCount::Exact(count))
}

/// Current length of a file in bytes
pub fn file_len(path: &Path) -> Result<u64> {
    Ok(fs::metadata(path)?.len())
}

/// Cut a file back to `len` bytes
pub fn truncate_to(path: &Path, len: u64) -> Result<()> {
    let file = OpenOptions::new().write(true).open(path)?;
    file.set_len(len)?;
    Ok(())
}
