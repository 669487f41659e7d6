//! Dialect configuration and cell character rules.

use crate::common::error::{Error, Result};

/// Returns the symbolic name of a forbidden control character, or `None`
/// for any character that may appear unquoted.
///
/// The forbidden set is dialect-independent: line feed, carriage return,
/// backspace, form feed and NUL. Inside a quoted field the parser captures
/// these verbatim; everywhere else they are rejected.
pub(crate) fn control_name(character: char) -> Option<&'static str> {
    match character {
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\u{8}' => Some("\\b"),
        '\u{c}' => Some("\\f"),
        '\0' => Some("\\0"),
        _ => None,
    }
}

/// Whether a character belongs to the forbidden control set.
#[inline]
pub(crate) fn is_forbidden(character: char) -> bool {
    control_name(character).is_some()
}

/// Validate a single character for use outside quotes.
///
/// # Errors
///
/// Returns [`Error::InvalidValue`] carrying the symbolic name of the
/// character (e.g. `"\\n"`) if it belongs to the forbidden control set.
#[inline]
pub fn validate_cell_char(character: char) -> Result<()> {
    match control_name(character) {
        Some(name) => Err(Error::InvalidValue(name)),
        None => Ok(()),
    }
}

/// Validate a whole cell value for use outside quotes.
///
/// The containers themselves accept any string (the formatter quotes
/// forbidden characters defensively); this check is for callers that want to
/// reject such values at their own API boundary.
pub fn validate_cell(value: &str) -> Result<()> {
    for character in value.chars() {
        validate_cell_char(character)?;
    }
    Ok(())
}

/// The delimiter and quote character pair that parameterizes the codec.
///
/// Immutable once constructed: [`CsvDialect::new`] rejects pairs where the
/// two characters are equal or where either belongs to the forbidden control
/// set, so a value of this type is always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvDialect {
    delimiter: char,
    quote: char,
}

impl CsvDialect {
    /// Semicolon-delimited with double quotes. The default dialect.
    pub const SEMICOLON: CsvDialect = CsvDialect {
        delimiter: ';',
        quote: '"',
    };

    /// Comma-delimited with double quotes.
    pub const COMMA: CsvDialect = CsvDialect {
        delimiter: ',',
        quote: '"',
    };

    /// Create a dialect from a delimiter and quote pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDialect`] if the characters are equal or if
    /// either is a forbidden control character.
    pub fn new(delimiter: char, quote: char) -> Result<Self> {
        if let Some(name) = control_name(delimiter).or_else(|| control_name(quote)) {
            return Err(Error::InvalidDialect(format!(
                "control character '{name}' cannot act as delimiter or quote"
            )));
        }
        if delimiter == quote {
            return Err(Error::InvalidDialect(
                "delimiter should be different than quotes".to_string(),
            ));
        }
        Ok(CsvDialect { delimiter, quote })
    }

    /// The character separating cells within a line.
    #[inline]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// The character wrapping quoted fields.
    #[inline]
    pub fn quote(&self) -> char {
        self.quote
    }
}

impl Default for CsvDialect {
    fn default() -> Self {
        Self::SEMICOLON
    }
}
