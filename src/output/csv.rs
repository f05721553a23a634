//! CSV output, one row per calculation.

use super::display::{DisplayFields, FIELD_KEYS};
use crate::error::ValidationError;

/// Quote a value as a CSV field, doubling embedded double quotes.
fn quote_field<T: ToString>(value: T) -> String {
    format!("\"{}\"", value.to_string().replace('"', "\"\""))
}

/// Header row: `input`, `status`, `message`, then every display field key.
pub fn csv_header() -> String {
    ["input", "status", "message"]
        .iter()
        .chain(FIELD_KEYS.iter())
        .map(quote_field)
        .collect::<Vec<String>>()
        .join(",")
}

/// Row for a successful calculation.
pub fn csv_row(input: &str, fields: &DisplayFields) -> String {
    let mut cells = vec![
        quote_field(input.trim()),
        quote_field("ok"),
        quote_field(""),
    ];
    cells.extend(
        FIELD_KEYS
            .iter()
            .map(|key| quote_field(fields.get(key).unwrap_or_default())),
    );
    cells.join(",")
}

/// Row for a rejected input; the field columns stay empty.
pub fn csv_error_row(input: &str, error: &ValidationError) -> String {
    let mut cells = vec![
        quote_field(input.trim()),
        quote_field(error.kind()),
        quote_field(error),
    ];
    cells.extend(FIELD_KEYS.iter().map(|_| quote_field("")));
    cells.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate;
    use crate::output::format_report;

    #[test]
    fn test_quote_field() {
        assert_eq!(quote_field("test"), "\"test\"");
        assert_eq!(quote_field(42), "\"42\"");
        assert_eq!(quote_field(""), "\"\"");
        assert_eq!(quote_field("a\"b"), "\"a\"\"b\"");
        assert_eq!(quote_field("16,777,214"), "\"16,777,214\"");
    }

    #[test]
    fn test_csv_header() {
        let header = csv_header();
        assert!(header.starts_with(r#""input","status","message","address-decimal","#));
        assert!(header.ends_with(r#""network-class-badge""#));
    }

    #[test]
    fn test_csv_row() {
        let fields = format_report(&calculate("10.0.0.1/8").unwrap(), ',');
        let row = csv_row("10.0.0.1/8", &fields);
        assert!(row.starts_with(r#""10.0.0.1/8","ok","","10.0.0.1","#));
        assert!(row.contains(r#""16,777,214 (of 16,777,216 total)""#));
        assert_eq!(
            row.matches("\",\"").count(),
            csv_header().matches("\",\"").count()
        );
    }

    #[test]
    fn test_csv_error_row() {
        let row = csv_error_row("999.1.1.1/24", &calculate("999.1.1.1/24").unwrap_err());
        assert!(row.starts_with(r#""999.1.1.1/24","octet-out-of-range","Invalid IP address","#));
        assert!(row.ends_with(r#","""#));
    }

    #[test]
    fn test_csv_error_row_escapes_input() {
        let input = "10.0.0.\"1/8";
        let row = csv_error_row(input, &calculate(input).unwrap_err());
        assert!(row.starts_with(r#""10.0.0.""1/8","format-invalid","#));
    }
}
