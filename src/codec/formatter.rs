//! Row serializer: the structural inverse of the parser.

use memchr::memchr;

use crate::table::Csv;

use super::dialect::{CsvDialect, is_forbidden};

/// Formatter for rows of cells under a fixed dialect.
///
/// A cell is emitted verbatim unless it contains the quote, the delimiter or
/// a forbidden control character; such cells are wrapped in quotes with every
/// embedded quote doubled. Formatting never fails: a forbidden character that
/// found its way into a cell is quoted, not rejected.
pub struct CsvFormatter {
    dialect: CsvDialect,
}

impl CsvFormatter {
    /// Create a formatter for the given dialect.
    pub fn new(dialect: &CsvDialect) -> Self {
        CsvFormatter { dialect: *dialect }
    }

    /// Encode one row as a single line, cells joined by the delimiter.
    ///
    /// No trailing row separator is appended; the caller owns line
    /// termination.
    pub fn format_row<I>(&self, cells: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut line = String::new();
        let mut first = true;
        for cell in cells {
            if !first {
                line.push(self.dialect.delimiter());
            }
            first = false;
            self.format_cell(cell.as_ref(), &mut line);
        }
        line
    }

    /// Encode every row of a table, one line per row.
    pub fn format_table(&self, csv: &Csv) -> Vec<String> {
        csv.iter().map(|row| self.format_row(row)).collect()
    }

    fn format_cell(&self, value: &str, out: &mut String) {
        if !self.needs_quoting(value) {
            out.push_str(value);
            return;
        }
        let quote = self.dialect.quote();
        out.push(quote);
        for c in value.chars() {
            if c == quote {
                out.push(quote);
            }
            out.push(c);
        }
        out.push(quote);
    }

    /// Fast check whether a cell must be wrapped in quotes.
    #[inline]
    fn needs_quoting(&self, value: &str) -> bool {
        match (
            ascii_byte(self.dialect.delimiter()),
            ascii_byte(self.dialect.quote()),
        ) {
            (Some(delimiter), Some(quote)) => {
                // Every candidate is a single byte; scan bytes directly.
                let bytes = value.as_bytes();
                memchr(delimiter, bytes).is_some()
                    || memchr(quote, bytes).is_some()
                    || memchr(b'\n', bytes).is_some()
                    || memchr(b'\r', bytes).is_some()
                    || memchr(0x08, bytes).is_some()
                    || memchr(0x0c, bytes).is_some()
                    || memchr(b'\0', bytes).is_some()
            }
            _ => value.chars().any(|c| {
                c == self.dialect.delimiter() || c == self.dialect.quote() || is_forbidden(c)
            }),
        }
    }
}

#[inline]
fn ascii_byte(c: char) -> Option<u8> {
    c.is_ascii().then_some(c as u8)
}
