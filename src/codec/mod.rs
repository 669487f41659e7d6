//! The CSV codec: quoting-aware tokenizer and its inverse serializer.
//!
//! Parsing and formatting are parameterized by a [`CsvDialect`], the pair of
//! delimiter and quote characters. The parser runs a three-state quoting
//! automaton over pre-split input lines and reassembles quoted fields that
//! span several physical lines; the formatter emits lines that parse back to
//! the exact original cells.
//!
//! # Example
//!
//! ```
//! use longan::codec::{CsvDialect, CsvFormatter, CsvParser};
//!
//! let dialect = CsvDialect::COMMA;
//! let row = CsvParser::new(&dialect).parse_row("a,\"b,c\"")?;
//! assert_eq!(row.get(1), Some("b,c"));
//!
//! let line = CsvFormatter::new(&dialect).format_row(&row);
//! assert_eq!(line, "a,\"b,c\"");
//! # Ok::<(), longan::Error>(())
//! ```

pub mod dialect;
pub mod formatter;
pub mod parser;

pub use dialect::{CsvDialect, validate_cell, validate_cell_char};
pub use formatter::CsvFormatter;
pub use parser::CsvParser;

#[cfg(test)]
mod tests;
