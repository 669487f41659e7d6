//! Tests for the codec: parser automaton, formatter, and their inverse laws.

use super::*;
use crate::common::error::Error;
use crate::table::{Csv, CsvRow};

fn parse_row(line: &str) -> crate::common::error::Result<CsvRow> {
    CsvParser::new(&CsvDialect::SEMICOLON).parse_row(line)
}

#[test]
fn test_simple_row() {
    let row = parse_row("a;b;c").unwrap();
    assert_eq!(row, CsvRow::from(["a", "b", "c"]));
}

#[test]
fn test_comma_dialect() {
    let row = CsvParser::new(&CsvDialect::COMMA).parse_row("a,b;c").unwrap();
    assert_eq!(row, CsvRow::from(["a", "b;c"]));
}

#[test]
fn test_empty_line_yields_single_empty_cell() {
    let row = parse_row("").unwrap();
    assert_eq!(row.len(), 1);
    assert_eq!(row.get(0), Some(""));
}

#[test]
fn test_trailing_delimiter_yields_trailing_empty_cell() {
    let row = parse_row("a;b;").unwrap();
    assert_eq!(row, CsvRow::from(["a", "b", ""]));
}

#[test]
fn test_leading_delimiter() {
    assert_eq!(parse_row(";a").unwrap(), CsvRow::from(["", "a"]));
    assert_eq!(parse_row(";").unwrap(), CsvRow::from(["", ""]));
}

#[test]
fn test_quoted_field_carries_delimiter() {
    let row = parse_row("\"a;b\";c").unwrap();
    assert_eq!(row, CsvRow::from(["a;b", "c"]));
}

#[test]
fn test_empty_quoted_field() {
    assert_eq!(parse_row("\"\"").unwrap(), CsvRow::from([""]));
    assert_eq!(parse_row("a;\"\";b").unwrap(), CsvRow::from(["a", "", "b"]));
}

#[test]
fn test_doubled_quotes_decode_to_one() {
    let row = parse_row("\"a\"\"b\"").unwrap();
    assert_eq!(row, CsvRow::from(["a\"b"]));
}

#[test]
fn test_quadrupled_quotes_decode_to_lone_quote() {
    let row = parse_row("\"\"\"\"").unwrap();
    assert_eq!(row, CsvRow::from(["\""]));
}

#[test]
fn test_quote_must_open_field() {
    assert!(matches!(parse_row("ab\"cd"), Err(Error::Parse(line)) if line == "ab\"cd"));
}

#[test]
fn test_content_after_closing_quote_rejected() {
    assert!(matches!(parse_row("\"ab\"cd"), Err(Error::Parse(_))));
}

#[test]
fn test_delimiter_after_closing_quote_accepted() {
    let row = parse_row("\"ab\";cd").unwrap();
    assert_eq!(row, CsvRow::from(["ab", "cd"]));
}

#[test]
fn test_unterminated_quote_single_row() {
    assert!(matches!(parse_row("\"ab"), Err(Error::Parse(line)) if line == "\"ab"));
}

#[test]
fn test_forbidden_char_outside_quotes() {
    assert!(matches!(
        parse_row("a\u{8}b"),
        Err(Error::InvalidValue("\\b"))
    ));
    assert!(matches!(
        parse_row("a\u{c};b"),
        Err(Error::InvalidValue("\\f"))
    ));
    // A raw newline handed to the parser as part of one line, not as a
    // line boundary.
    assert!(matches!(
        parse_row("Hello\nWorld"),
        Err(Error::InvalidValue("\\n"))
    ));
}

#[test]
fn test_forbidden_char_inside_quotes_is_captured() {
    let row = parse_row("\"a\u{8}b\"").unwrap();
    assert_eq!(row.get(0), Some("a\u{8}b"));
}

#[test]
fn test_two_rows() {
    let csv = Csv::parse(["a;b", "c;d"], &CsvDialect::SEMICOLON).unwrap();
    assert_eq!(csv.len(), 2);
    assert_eq!(csv[0], CsvRow::from(["a", "b"]));
    assert_eq!(csv[1], CsvRow::from(["c", "d"]));
}

#[test]
fn test_blank_line_between_rows() {
    let csv = Csv::parse(["a", "", "b"], &CsvDialect::SEMICOLON).unwrap();
    assert_eq!(csv.len(), 3);
    assert_eq!(csv[1], CsvRow::from([""]));
}

#[test]
fn test_no_lines_no_rows() {
    let csv = Csv::parse(std::iter::empty::<&str>(), &CsvDialect::SEMICOLON).unwrap();
    assert!(csv.is_empty());
}

#[test]
fn test_quoted_field_spans_lines() {
    let csv = Csv::parse(["\"ab", "cd\""], &CsvDialect::SEMICOLON).unwrap();
    assert_eq!(csv.len(), 1);
    assert_eq!(csv[0], CsvRow::from(["ab\ncd"]));
}

#[test]
fn test_quoted_field_spans_three_lines() {
    let csv = Csv::parse(["\"a", "b", "c\""], &CsvDialect::SEMICOLON).unwrap();
    assert_eq!(csv[0], CsvRow::from(["a\nb\nc"]));
}

#[test]
fn test_spanning_field_keeps_neighbours() {
    let csv = Csv::parse(["x;\"ab", "cd\";y"], &CsvDialect::SEMICOLON).unwrap();
    assert_eq!(csv.len(), 1);
    assert_eq!(csv[0], CsvRow::from(["x", "ab\ncd", "y"]));
}

#[test]
fn test_unterminated_quote_at_end_of_input() {
    assert!(matches!(
        Csv::parse(["\"ab", "cd"], &CsvDialect::SEMICOLON),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_lone_quote_is_unterminated() {
    assert!(matches!(
        Csv::parse(["\""], &CsvDialect::SEMICOLON),
        Err(Error::Parse(_))
    ));
}

#[test]
fn test_state_resets_between_rows() {
    let csv = Csv::parse(["\"a\"", "b"], &CsvDialect::SEMICOLON).unwrap();
    assert_eq!(csv.len(), 2);
    assert_eq!(csv[0], CsvRow::from(["a"]));
    assert_eq!(csv[1], CsvRow::from(["b"]));
}

#[test]
fn test_custom_dialect() {
    let dialect = CsvDialect::new('|', '\'').unwrap();
    let row = CsvParser::new(&dialect).parse_row("'a|b'|c").unwrap();
    assert_eq!(row, CsvRow::from(["a|b", "c"]));
}

#[test]
fn test_parse_attaches_dialect() {
    let csv = Csv::parse(["a,b"], &CsvDialect::COMMA).unwrap();
    assert_eq!(csv.to_string(), "a,b\n");
}

#[test]
fn test_format_plain_cells_verbatim() {
    let formatter = CsvFormatter::new(&CsvDialect::SEMICOLON);
    assert_eq!(formatter.format_row(["a", "b", "!"]), "a;b;!");
}

#[test]
fn test_format_empty_cells() {
    let formatter = CsvFormatter::new(&CsvDialect::SEMICOLON);
    assert_eq!(formatter.format_row(std::iter::empty::<&str>()), "");
    assert_eq!(formatter.format_row([""]), "");
    assert_eq!(formatter.format_row(["", ""]), ";");
}

#[test]
fn test_format_quotes_delimiter() {
    let formatter = CsvFormatter::new(&CsvDialect::SEMICOLON);
    assert_eq!(formatter.format_row(["a;b", "c"]), "\"a;b\";c");
}

#[test]
fn test_format_doubles_quotes() {
    let formatter = CsvFormatter::new(&CsvDialect::SEMICOLON);
    assert_eq!(formatter.format_row(["a\"b"]), "\"a\"\"b\"");
}

#[test]
fn test_format_quotes_control_characters() {
    let formatter = CsvFormatter::new(&CsvDialect::SEMICOLON);
    assert_eq!(formatter.format_row(["a\nb"]), "\"a\nb\"");
    assert_eq!(formatter.format_row(["a\rb"]), "\"a\rb\"");
    assert_eq!(formatter.format_row(["a\u{8}b"]), "\"a\u{8}b\"");
}

#[test]
fn test_format_non_ascii_dialect() {
    let dialect = CsvDialect::new('→', '\'').unwrap();
    let formatter = CsvFormatter::new(&dialect);
    assert_eq!(formatter.format_row(["plain"]), "plain");
    assert_eq!(formatter.format_row(["a→b"]), "'a→b'");
}

#[test]
fn test_format_table() {
    let csv = Csv::parse(["a;b", "c"], &CsvDialect::SEMICOLON).unwrap();
    let formatter = CsvFormatter::new(&CsvDialect::SEMICOLON);
    assert_eq!(formatter.format_table(&csv), vec!["a;b", "c"]);
}

#[test]
fn test_round_trip_hostile_row() {
    let dialect = CsvDialect::SEMICOLON;
    let original = CsvRow::from(["semi;colon", "qu\"ote", "multi\nline", "plain", ""]);

    let line = CsvFormatter::new(&dialect).format_row(&original);
    let csv = Csv::parse([line.as_str()], &dialect).unwrap();

    assert_eq!(csv.len(), 1);
    assert_eq!(csv[0], original);
}

#[test]
fn test_escaping_not_applied_twice() {
    let dialect = CsvDialect::SEMICOLON;
    let formatter = CsvFormatter::new(&dialect);

    let once = formatter.format_row(["a\"b"]);
    let twice = formatter.format_row([once.as_str()]);

    let parsed = CsvParser::new(&dialect).parse_row(&twice).unwrap();
    assert_eq!(parsed.get(0), Some(once.as_str()));
}

mod properties {
    use proptest::prelude::*;

    use super::*;

    /// Strategy for a single cell: plain text, or text salted with the
    /// characters that force quoting.
    fn cell_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            "[a-z0-9 ]{0,8}",
            "[ -~]{0,8}",
            "[a-z;,'\"\\n\\r]{0,8}",
        ]
    }

    fn rows_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
        prop::collection::vec(prop::collection::vec(cell_strategy(), 1..5), 0..5)
    }

    fn assert_round_trip(rows: Vec<Vec<String>>, dialect: CsvDialect) -> Result<(), TestCaseError> {
        let csv: Csv = rows
            .iter()
            .map(|cells| cells.iter().map(String::as_str).collect::<CsvRow>())
            .collect::<Csv>()
            .configure(dialect);

        let lines = csv.to_lines();
        let reparsed = Csv::parse(&lines, &dialect).unwrap();

        prop_assert_eq!(reparsed, csv);
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        #[test]
        fn prop_round_trip_semicolon(rows in rows_strategy()) {
            assert_round_trip(rows, CsvDialect::SEMICOLON)?;
        }

        #[test]
        fn prop_round_trip_comma(rows in rows_strategy()) {
            assert_round_trip(rows, CsvDialect::COMMA)?;
        }

        #[test]
        fn prop_doubling_invariant(cell in "[a-z\"]{0,16}") {
            let quotes = cell.matches('"').count();
            let line = CsvFormatter::new(&CsvDialect::SEMICOLON).format_row([cell.as_str()]);
            if quotes > 0 {
                // Every literal quote doubled, plus the two wrapping quotes.
                prop_assert_eq!(line.matches('"').count(), 2 * quotes + 2);
            }

            let parsed = CsvParser::new(&CsvDialect::SEMICOLON).parse_row(&line).unwrap();
            prop_assert_eq!(parsed.get(0), Some(cell.as_str()));
        }

        #[test]
        fn prop_escaping_idempotent(cell in "[ -~]{0,16}") {
            let formatter = CsvFormatter::new(&CsvDialect::SEMICOLON);
            let once = formatter.format_row([cell.as_str()]);
            let twice = formatter.format_row([once.as_str()]);

            let parsed = CsvParser::new(&CsvDialect::SEMICOLON).parse_row(&twice).unwrap();
            prop_assert_eq!(parsed.get(0), Some(once.as_str()));
        }

        #[test]
        fn prop_quote_must_open_field(prefix in "[a-z]{1,6}", suffix in "[a-z]{0,6}") {
            let line = format!("{prefix}\"{suffix}");
            prop_assert!(CsvParser::new(&CsvDialect::SEMICOLON).parse_row(&line).is_err());
        }
    }
}
