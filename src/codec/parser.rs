//! Quoting-aware tokenizer for delimited text.

use crate::common::error::{Error, Result};
use crate::table::{Csv, CsvRow};

use super::dialect::{CsvDialect, validate_cell_char};

/// Quoting automaton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    /// Not inside a quoted field.
    Out,
    /// Inside a quoted field.
    In,
    /// Saw one quote while `In`; closing or escaped, the next character
    /// decides.
    Encountered,
}

/// Accumulator for the row under construction.
struct RowBuffer {
    row: CsvRow,
    cell: String,
}

impl RowBuffer {
    fn new() -> Self {
        RowBuffer {
            row: CsvRow::new(),
            cell: String::new(),
        }
    }

    fn push_char(&mut self, c: char) {
        self.cell.push(c);
    }

    fn push_cell(&mut self) {
        self.row.push(std::mem::take(&mut self.cell));
    }

    fn has_pending(&self) -> bool {
        !self.cell.is_empty()
    }

    fn take_row(&mut self) -> CsvRow {
        std::mem::take(&mut self.row)
    }
}

/// Parser for delimited text under a fixed dialect.
///
/// The automaton distinguishes three states: outside any quoted field,
/// inside one, and having just seen a quote while inside one (which is
/// either the closing quote or the first half of an escaped pair). Each
/// parse call starts from a fresh state, so one parser can decode any number
/// of inputs.
pub struct CsvParser {
    dialect: CsvDialect,
    state: QuoteState,
}

impl CsvParser {
    /// Create a parser for the given dialect.
    pub fn new(dialect: &CsvDialect) -> Self {
        CsvParser {
            dialect: *dialect,
            state: QuoteState::Out,
        }
    }

    /// Parse a sequence of pre-split lines into a table.
    ///
    /// A quoted field left open at the end of a line continues on the next
    /// line, with a literal `\n` joining the two halves. Every line outside
    /// such a span yields exactly one row; an empty line yields a row with a
    /// single empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed text (a quote not at field
    /// start, content other than the delimiter after a closing quote, or a
    /// quote left unterminated at the end of the input) and
    /// [`Error::InvalidValue`] for a forbidden control character outside
    /// quotes.
    pub fn parse<I>(&mut self, lines: I) -> Result<Csv>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.state = QuoteState::Out;
        let mut csv = Csv::new().configure(self.dialect);
        let mut buffer = RowBuffer::new();
        for line in lines {
            let line = line.as_ref();
            for c in line.chars() {
                self.feed(c, &mut buffer, line)?;
            }
            if self.state == QuoteState::In {
                // The quoted field spans into the next physical line.
                buffer.push_char('\n');
            } else {
                buffer.push_cell();
                csv.push(buffer.take_row());
                self.state = QuoteState::Out;
            }
        }
        if self.state == QuoteState::In {
            buffer.push_cell();
            return Err(Error::Parse(buffer.row.to_line(&self.dialect)));
        }
        Ok(csv)
    }

    /// Parse a single encoded line into a row.
    ///
    /// Runs the same automaton as [`CsvParser::parse`] but never consumes
    /// further input: a quote still open at the end of the line is an error
    /// instead of a continuation.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CsvParser::parse`].
    pub fn parse_row(&mut self, line: &str) -> Result<CsvRow> {
        self.state = QuoteState::Out;
        let mut buffer = RowBuffer::new();
        for c in line.chars() {
            self.feed(c, &mut buffer, line)?;
        }
        if self.state == QuoteState::In {
            return Err(Error::Parse(line.to_string()));
        }
        buffer.push_cell();
        Ok(buffer.take_row())
    }

    fn feed(&mut self, c: char, buffer: &mut RowBuffer, line: &str) -> Result<()> {
        if c == self.dialect.quote() {
            self.feed_quote(buffer, line)
        } else if c == self.dialect.delimiter() {
            self.feed_delimiter(buffer);
            Ok(())
        } else {
            self.feed_plain(c, buffer, line)
        }
    }

    fn feed_quote(&mut self, buffer: &mut RowBuffer, line: &str) -> Result<()> {
        match self.state {
            QuoteState::Out => {
                // A quote may only open a field.
                if buffer.has_pending() {
                    return Err(Error::Parse(line.to_string()));
                }
                self.state = QuoteState::In;
            }
            QuoteState::In => self.state = QuoteState::Encountered,
            QuoteState::Encountered => {
                // Doubled pair: one literal quote.
                buffer.push_char(self.dialect.quote());
                self.state = QuoteState::In;
            }
        }
        Ok(())
    }

    fn feed_delimiter(&mut self, buffer: &mut RowBuffer) {
        match self.state {
            QuoteState::Out => buffer.push_cell(),
            QuoteState::In => buffer.push_char(self.dialect.delimiter()),
            QuoteState::Encountered => {
                buffer.push_cell();
                self.state = QuoteState::Out;
            }
        }
    }

    fn feed_plain(&mut self, c: char, buffer: &mut RowBuffer, line: &str) -> Result<()> {
        match self.state {
            QuoteState::Out => {
                validate_cell_char(c)?;
                buffer.push_char(c);
            }
            QuoteState::In => buffer.push_char(c),
            QuoteState::Encountered => return Err(Error::Parse(line.to_string())),
        }
        Ok(())
    }
}
