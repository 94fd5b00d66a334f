//! JSON output format.

use kurus_types::PricePoint;
use std::io::Write;

use crate::{FormatError, Formatter};

/// JSON output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// JSON array (standard JSON).
    #[default]
    Array,
    /// Newline-delimited JSON (NDJSON/JSONL).
    Ndjson,
}

/// JSON formatter.
///
/// The array style is the persisted artifact format: a JSON array of
/// two-key objects in chronological order.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Output style.
    style: JsonStyle,
    /// Whether to pretty-print (only for array style).
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter with default settings (array style).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            style: JsonStyle::Array,
            pretty: false,
        }
    }

    /// Creates a new NDJSON formatter.
    #[must_use]
    pub const fn ndjson() -> Self {
        Self {
            style: JsonStyle::Ndjson,
            pretty: false,
        }
    }

    /// Sets whether to pretty-print output (array style only).
    #[must_use]
    pub const fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Formatter for JsonFormatter {
    fn write_series<W: Write + Send>(
        &self,
        series: &[PricePoint],
        mut writer: W,
    ) -> Result<(), FormatError> {
        match self.style {
            JsonStyle::Array => {
                if self.pretty {
                    serde_json::to_writer_pretty(&mut writer, series)?;
                } else {
                    serde_json::to_writer(&mut writer, series)?;
                }
                writeln!(writer)?;
            }
            JsonStyle::Ndjson => {
                for point in series {
                    serde_json::to_writer(&mut writer, point)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }

    fn extension(&self) -> &str {
        match self.style {
            JsonStyle::Array => "json",
            JsonStyle::Ndjson => "ndjson",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    fn create_test_point() -> PricePoint {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        PricePoint::new(date, 699.9)
    }

    #[test]
    fn test_json_array() {
        let formatter = JsonFormatter::new();
        let series = vec![create_test_point()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_series(&series, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.starts_with('['));
        assert!(result.contains(r#""date":"10-01-2024""#));
        assert!(result.contains(r#""price":699.9"#));
    }

    #[test]
    fn test_ndjson() {
        let formatter = JsonFormatter::ndjson();
        let series = vec![create_test_point(), create_test_point()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_series(&series, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let lines: Vec<_> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('{'));
    }

    #[test]
    fn test_pretty_json() {
        let formatter = JsonFormatter::new().with_pretty(true);
        let series = vec![create_test_point()];
        let mut output = Cursor::new(Vec::new());

        formatter.write_series(&series, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        assert!(result.contains('\n'));
        assert!(result.contains("  ")); // Indentation
    }

    #[test]
    fn test_array_order_preserved() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 9).unwrap();
        let d2 = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let series = vec![PricePoint::new(d1, 1.0), PricePoint::new(d2, 2.0)];
        let mut output = Cursor::new(Vec::new());

        JsonFormatter::new().write_series(&series, &mut output).unwrap();

        let result = String::from_utf8(output.into_inner()).unwrap();
        let first = result.find("09-01-2024").unwrap();
        let second = result.find("10-01-2024").unwrap();
        assert!(first < second);
    }
}
