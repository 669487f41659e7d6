//! Table container: an ordered sequence of rows with an attached dialect.

use std::fmt;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::ops::Index;
use std::path::Path;
use std::str::FromStr;

use crate::codec::dialect::CsvDialect;
use crate::codec::formatter::CsvFormatter;
use crate::codec::parser::CsvParser;
use crate::common::error::{Error, Result};

use super::row::CsvRow;

/// An ordered sequence of [`CsvRow`]s.
///
/// The table carries the dialect used by [`Csv::to_lines`], `Display` and
/// [`Csv::export`]; parsing constructors attach the dialect they decoded
/// with. Equality and hashing compare the rows only, never the attached
/// dialect.
#[derive(Debug, Clone, Default)]
pub struct Csv {
    rows: Vec<CsvRow>,
    dialect: CsvDialect,
}

impl Csv {
    /// Create an empty table with the default dialect.
    pub fn new() -> Self {
        Csv {
            rows: Vec::new(),
            dialect: CsvDialect::SEMICOLON,
        }
    }

    /// Attach the dialect used when rendering this table.
    pub fn configure(mut self, dialect: CsvDialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// The dialect this table renders with.
    pub fn dialect(&self) -> &CsvDialect {
        &self.dialect
    }

    /// Decode a sequence of pre-split lines with the given dialect.
    ///
    /// The returned table keeps `dialect` attached, so it renders back to
    /// the text it was decoded from.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed text and
    /// [`Error::InvalidValue`] for a forbidden control character outside
    /// quotes.
    pub fn parse<I>(lines: I, dialect: &CsvDialect) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        CsvParser::new(dialect).parse(lines)
    }

    /// Encode every row with the attached dialect, one line per row.
    ///
    /// Lines carry no trailing separator; a cell holding a newline stays
    /// inside its quoted span within its line.
    pub fn to_lines(&self) -> Vec<String> {
        CsvFormatter::new(&self.dialect).format_table(self)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row.
    pub fn push(&mut self, row: CsvRow) {
        self.rows.push(row);
    }

    /// Insert a row at `position`, shifting everything after it.
    ///
    /// # Panics
    ///
    /// Panics if `position > len`.
    pub fn insert(&mut self, position: usize, row: CsvRow) {
        self.rows.insert(position, row);
    }

    /// Insert several rows at `position`, preserving their order.
    ///
    /// # Panics
    ///
    /// Panics if `position > len`.
    pub fn insert_all<I>(&mut self, position: usize, rows: I)
    where
        I: IntoIterator<Item = CsvRow>,
    {
        self.rows.splice(position..position, rows);
    }

    /// Replace the row at `index`, returning the previous one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, row: CsvRow) -> CsvRow {
        std::mem::replace(&mut self.rows[index], row)
    }

    /// The row at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&CsvRow> {
        self.rows.get(index)
    }

    /// Mutable access to the row at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut CsvRow> {
        self.rows.get_mut(index)
    }

    /// The first row, if any.
    pub fn first(&self) -> Option<&CsvRow> {
        self.rows.first()
    }

    /// The last row, if any.
    pub fn last(&self) -> Option<&CsvRow> {
        self.rows.last()
    }

    /// Remove and return the row at `index`, shifting everything after it.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> CsvRow {
        self.rows.remove(index)
    }

    /// Keep only the rows for which `f` returns `true`.
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&CsvRow) -> bool,
    {
        self.rows.retain(f);
    }

    /// Whether any row equals `row`.
    pub fn contains(&self, row: &CsvRow) -> bool {
        self.rows.contains(row)
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, CsvRow> {
        self.rows.iter()
    }

    /// Iterate mutably over the rows.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, CsvRow> {
        self.rows.iter_mut()
    }

    /// Replace every row with the result of `f` applied to it.
    pub fn map<F>(&mut self, mut f: F)
    where
        F: FnMut(&CsvRow) -> CsvRow,
    {
        for row in &mut self.rows {
            *row = f(row);
        }
    }

    /// Read a file with the default dialect.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, plus the parse
    /// conditions of [`Csv::parse`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_path(path, &CsvDialect::SEMICOLON)
    }

    /// Read a file with the given dialect.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Csv::open`].
    pub fn from_path<P: AsRef<Path>>(path: P, dialect: &CsvDialect) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file), dialect)
    }

    /// Decode lines from a buffered reader with the given dialect.
    ///
    /// A UTF-8 byte order mark at the start of the input and a `\r` at the
    /// end of each line (CRLF input) are stripped before parsing.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Csv::open`].
    pub fn from_reader<R: BufRead>(reader: R, dialect: &CsvDialect) -> Result<Self> {
        let mut lines = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let mut line = line?;
            if index == 0 {
                if let Some(stripped) = line.strip_prefix('\u{feff}') {
                    line = stripped.to_string();
                }
            }
            if line.ends_with('\r') {
                line.pop();
            }
            lines.push(line);
        }
        Self::parse(&lines, dialect)
    }

    /// Decode an in-memory byte buffer with the given dialect.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Csv::open`].
    pub fn from_bytes(bytes: &[u8], dialect: &CsvDialect) -> Result<Self> {
        Self::from_reader(std::io::Cursor::new(bytes), dialect)
    }

    /// Write every row to `writer` with the attached dialect, `\n` after
    /// each row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let formatter = CsvFormatter::new(&self.dialect);
        for row in &self.rows {
            writer.write_all(formatter.format_row(row).as_bytes())?;
            writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Write the table to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be written.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

impl PartialEq for Csv {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl Eq for Csv {}

impl Hash for Csv {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
    }
}

impl Index<usize> for Csv {
    type Output = CsvRow;

    fn index(&self, index: usize) -> &CsvRow {
        &self.rows[index]
    }
}

impl FromIterator<CsvRow> for Csv {
    fn from_iter<I: IntoIterator<Item = CsvRow>>(iter: I) -> Self {
        Csv {
            rows: iter.into_iter().collect(),
            dialect: CsvDialect::SEMICOLON,
        }
    }
}

impl Extend<CsvRow> for Csv {
    fn extend<I: IntoIterator<Item = CsvRow>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}

impl From<Vec<CsvRow>> for Csv {
    fn from(rows: Vec<CsvRow>) -> Self {
        Csv {
            rows,
            dialect: CsvDialect::SEMICOLON,
        }
    }
}

impl IntoIterator for Csv {
    type Item = CsvRow;
    type IntoIter = std::vec::IntoIter<CsvRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a Csv {
    type Item = &'a CsvRow;
    type IntoIter = std::slice::Iter<'a, CsvRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<'a> IntoIterator for &'a mut Csv {
    type Item = &'a mut CsvRow;
    type IntoIter = std::slice::IterMut<'a, CsvRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter_mut()
    }
}

/// Renders every row with the attached dialect, `\n` after each row.
impl fmt::Display for Csv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatter = CsvFormatter::new(&self.dialect);
        for row in &self.rows {
            f.write_str(&formatter.format_row(row))?;
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Parses with the default dialect ([`CsvDialect::SEMICOLON`]).
impl FromStr for Csv {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text.lines(), &CsvDialect::SEMICOLON)
    }
}
