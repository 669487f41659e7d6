//! Export of structured records to CSV lines.
//!
//! A type opts in by implementing [`CsvRecord`] with an explicit, ordered
//! list of its exported columns; [`write_records`] and [`export`] then
//! stream any iterator of such records through the formatter, one encoded
//! line per record.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::codec::dialect::CsvDialect;
use crate::codec::formatter::CsvFormatter;
use crate::common::error::Result;
use crate::table::CsvRow;

/// A record type that projects itself onto a CSV row.
///
/// Implementations list their columns explicitly, in order:
///
/// ```
/// use longan::{CsvRecord, CsvRow};
///
/// struct User {
///     name: String,
///     age: u32,
/// }
///
/// impl CsvRecord for User {
///     fn csv_row(&self) -> CsvRow {
///         CsvRow::from(vec![self.name.clone(), self.age.to_string()])
///     }
/// }
/// ```
pub trait CsvRecord {
    /// The row of string cells representing this record.
    fn csv_row(&self) -> CsvRow;
}

impl<T: CsvRecord + ?Sized> CsvRecord for &T {
    fn csv_row(&self) -> CsvRow {
        (**self).csv_row()
    }
}

/// Write `records` to `writer`, one encoded line per record.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if writing fails.
pub fn write_records<W, I, R>(mut writer: W, records: I, dialect: &CsvDialect) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = R>,
    R: CsvRecord,
{
    let formatter = CsvFormatter::new(dialect);
    for record in records {
        writer.write_all(formatter.format_row(&record.csv_row()).as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Write `records` to a file at `path`, creating or truncating it.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the file cannot be written.
pub fn export<P, I, R>(path: P, records: I, dialect: &CsvDialect) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = R>,
    R: CsvRecord,
{
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_records(&mut writer, records, dialect)?;
    writer.flush()?;
    Ok(())
}
