//! Longan - A Rust library for encoding and decoding delimited text
//!
//! This library converts between textual CSV and an in-memory table of
//! string cells, under a configurable dialect (delimiter and quote
//! characters).
//!
//! # Features
//!
//! - **Quoting-aware parser**: Single-pass tokenizer that handles quoted
//!   fields, escaped (doubled) quotes, and quoted fields spanning multiple
//!   physical lines
//! - **Inverse formatter**: Emits encoded lines that parse back to the exact
//!   original cells
//! - **Configurable dialects**: Semicolon and comma presets, or any validated
//!   delimiter/quote pair
//! - **Mutable containers**: Ordered row and table types with the usual
//!   insert/remove/iterate surface
//! - **Record export**: Project your own types onto CSV rows through the
//!   [`CsvRecord`] trait
//!
//! # Example - Parsing lines
//!
//! ```
//! use longan::{Csv, CsvDialect};
//!
//! let csv = Csv::parse(["name;age", "Ada;36"], &CsvDialect::SEMICOLON)?;
//!
//! assert_eq!(csv.len(), 2);
//! assert_eq!(csv[1].get(0), Some("Ada"));
//! # Ok::<(), longan::Error>(())
//! ```
//!
//! # Example - Building and encoding a table
//!
//! ```
//! use longan::{Csv, CsvRow};
//!
//! let mut csv = Csv::new();
//! csv.push(CsvRow::from(["Hello", "world", "!"]));
//!
//! assert_eq!(csv.to_string(), "Hello;world;!\n");
//! ```
//!
//! # Example - Reading a file with a custom dialect
//!
//! ```no_run
//! use longan::{Csv, CsvDialect};
//!
//! let dialect = CsvDialect::new('|', '\'')?;
//! let csv = Csv::from_path("data.csv", &dialect)?;
//!
//! for row in &csv {
//!     println!("{} cells", row.len());
//! }
//! # Ok::<(), longan::Error>(())
//! ```

/// The CSV codec: quoting-aware parser and its inverse formatter
///
/// This module contains the dialect configuration and the two halves of the
/// codec. Most callers go through the [`table`] containers instead of using
/// [`codec::CsvParser`] and [`codec::CsvFormatter`] directly.
pub mod codec;

/// Common types shared across the crate
pub mod common;

/// Export of structured records to CSV lines
pub mod record;

/// Mutable row and table containers
pub mod table;

// Re-export commonly used types for convenience
pub use codec::{CsvDialect, CsvFormatter, CsvParser, validate_cell, validate_cell_char};
pub use common::error::{Error, Result};
pub use record::CsvRecord;
pub use table::{Csv, CsvRow};
