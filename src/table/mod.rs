//! Mutable row and table containers.
//!
//! A [`Csv`] is an ordered sequence of [`CsvRow`]s, and a [`CsvRow`] an
//! ordered sequence of string cells. The parser produces into these types
//! and the formatter consumes from them; order is preserved end to end, so a
//! parsed table formats back to the text it came from.
//!
//! # Example
//!
//! ```
//! use longan::table::{Csv, CsvRow};
//!
//! let mut csv = Csv::new();
//! csv.push(CsvRow::from(["Hello", "world"]));
//! csv.push(CsvRow::from(["Bonjour", "monde"]));
//!
//! csv.map(|row| {
//!     let mut shouted = row.clone();
//!     shouted.map(|cell| cell.to_uppercase());
//!     shouted
//! });
//!
//! assert_eq!(csv.to_string(), "HELLO;WORLD\nBONJOUR;MONDE\n");
//! ```

pub mod row;
pub mod table;

pub use row::CsvRow;
pub use table::Csv;
