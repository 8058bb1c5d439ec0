//! Parsing of raw series text into a history vector
//!
//! Each line holds `label;value`. The label is ignored and the value may
//! use a decimal comma.

use forecast_spi::{ForecastError, Result};

/// Parse `label;value` lines into values, oldest first
///
/// Trailing blank lines are ignored.
///
/// # Errors
///
/// [`ForecastError::EmptyInput`] when there are no lines, and
/// [`ForecastError::MalformedInput`] with the 1-based line number when a
/// line is not exactly two `;`-separated fields or its value is not a
/// finite number.
pub fn parse_series(text: &str) -> Result<Vec<f64>> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }
    if lines.is_empty() {
        return Err(ForecastError::EmptyInput);
    }

    lines
        .iter()
        .enumerate()
        .map(|(i, line)| parse_line(i + 1, line))
        .collect()
}

fn parse_line(number: usize, line: &str) -> Result<f64> {
    let malformed = |reason: String| ForecastError::MalformedInput {
        line: number,
        reason,
    };

    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != 2 {
        return Err(malformed(format!(
            "expected 'label;value', found {} field(s)",
            fields.len()
        )));
    }

    let raw = fields[1].trim().replace(',', ".");
    let value: f64 = raw
        .parse()
        .map_err(|_| malformed(format!("'{}' is not a number", fields[1].trim())))?;
    if !value.is_finite() {
        return Err(malformed(format!("'{}' is not finite", fields[1].trim())));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_series_basic() {
        let text = "2024-01-01;245\n2024-01-02;247.5\n2024-01-03;256";
        assert_eq!(parse_series(text).unwrap(), vec![245.0, 247.5, 256.0]);
    }

    #[test]
    fn test_parse_series_decimal_comma_and_whitespace() {
        let text = " mon ; 1,5 \r\n tue ; -2,25\r\n";
        assert_eq!(parse_series(text).unwrap(), vec![1.5, -2.25]);
    }

    #[test]
    fn test_parse_series_trailing_blank_lines() {
        let text = "a;1\nb;2\n\n   \n";
        assert_eq!(parse_series(text).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_parse_series_empty() {
        assert_eq!(parse_series("").unwrap_err(), ForecastError::EmptyInput);
        assert_eq!(parse_series("\n\n").unwrap_err(), ForecastError::EmptyInput);
    }

    #[test]
    fn test_parse_series_wrong_field_count() {
        let err = parse_series("a;1\nb;2;3\n").unwrap_err();
        match err {
            ForecastError::MalformedInput { line, .. } => assert_eq!(line, 2),
            other => panic!("Expected MalformedInput, got {:?}", other),
        }
        assert!(matches!(
            parse_series("no separator").unwrap_err(),
            ForecastError::MalformedInput { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_series_bad_values() {
        assert!(matches!(
            parse_series("a;1\nb;abc").unwrap_err(),
            ForecastError::MalformedInput { line: 2, .. }
        ));
        assert!(matches!(
            parse_series("a;NaN").unwrap_err(),
            ForecastError::MalformedInput { line: 1, .. }
        ));
        assert!(matches!(
            parse_series("a;inf").unwrap_err(),
            ForecastError::MalformedInput { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_series_blank_line_in_middle_is_malformed() {
        assert!(matches!(
            parse_series("a;1\n\nb;2").unwrap_err(),
            ForecastError::MalformedInput { line: 2, .. }
        ));
    }
}
