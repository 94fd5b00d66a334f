//! Timestamped-pair series decoding.
//!
//! Alternative decoder for payloads already expressed as explicit
//! (timestamp, price) pairs: either a JSON object with parallel `d`/`y`
//! arrays, a JSON array of two-element pairs, or free text with pair
//! literals embedded in otherwise-unparseable wrapping.

use std::sync::OnceLock;

use chrono::DateTime;
use kurus_types::{DedupMode, PricePoint};
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

/// Timestamps above this magnitude are millisecond-resolution.
const MS_THRESHOLD: f64 = 1e11;

/// Errors that can occur while decoding timestamped pairs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairDecodeError {
    /// Neither structured parse nor pattern extraction found any pairs.
    ///
    /// The caller should preserve the raw text for offline inspection.
    #[error("No recognized pair format in payload")]
    NoRecognizedFormat,
}

/// A recovered (timestamp, price) pair before date conversion.
///
/// The timestamp is in epoch seconds or milliseconds as found upstream;
/// normalization happens during decoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPair {
    /// Epoch timestamp, second or millisecond resolution.
    pub timestamp: f64,
    /// Price in currency units (already decimal, no kuruş scaling).
    pub price: f64,
}

impl RawPair {
    /// Creates a new raw pair.
    #[must_use]
    pub const fn new(timestamp: f64, price: f64) -> Self {
        Self { timestamp, price }
    }

    /// Timestamp normalized to epoch seconds.
    #[must_use]
    pub fn seconds(&self) -> i64 {
        if self.timestamp > MS_THRESHOLD {
            (self.timestamp / 1000.0) as i64
        } else {
            self.timestamp as i64
        }
    }
}

static PAIR_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Pattern for bracketed `[<10-13 digit timestamp>, <decimal>]` literals.
fn pair_pattern() -> &'static Regex {
    PAIR_PATTERN.get_or_init(|| {
        Regex::new(r"\[\s*(\d{10,13})\s*,\s*(\d+(?:\.\d+)?)\s*\]").expect("valid pair pattern")
    })
}

/// Attempts a structured parse of the payload.
///
/// Recognizes a JSON object with equal-length parallel `d` (timestamps)
/// and `y` (values) arrays, paired positionally, or a JSON array of
/// two-element numeric pairs. Returns `None` when the text is not valid
/// JSON or carries neither shape.
#[must_use]
pub fn structured_pairs(text: &str) -> Option<Vec<RawPair>> {
    let value: Value = serde_json::from_str(text.trim()).ok()?;

    match value {
        Value::Object(map) => {
            let days = map.get("d")?.as_array()?;
            let values = map.get("y")?.as_array()?;
            if days.len() != values.len() {
                return None;
            }
            let pairs = days
                .iter()
                .zip(values)
                .filter_map(|(d, y)| Some(RawPair::new(d.as_f64()?, y.as_f64()?)))
                .collect();
            Some(pairs)
        }
        Value::Array(items) => {
            let pairs: Vec<RawPair> = items
                .iter()
                .filter_map(|item| {
                    let pair = item.as_array()?;
                    if pair.len() != 2 {
                        return None;
                    }
                    Some(RawPair::new(pair[0].as_f64()?, pair[1].as_f64()?))
                })
                .collect();
            (!pairs.is_empty()).then_some(pairs)
        }
        _ => None,
    }
}

/// Scans free text for embedded `[timestamp, price]` literals.
///
/// This recovers series data wrapped in markup or other noise that the
/// structured parse cannot handle.
#[must_use]
pub fn extract_pairs(text: &str) -> Vec<RawPair> {
    pair_pattern()
        .captures_iter(text)
        .filter_map(|caps| {
            let timestamp = caps[1].parse().ok()?;
            let price = caps[2].parse().ok()?;
            Some(RawPair::new(timestamp, price))
        })
        .collect()
}

/// Decodes timestamped pairs from raw text into chronological price points.
///
/// Tries the structured parse first, then falls back to pattern
/// extraction. Millisecond timestamps are normalized to seconds, pairs
/// are sorted ascending by timestamp, and dates are taken at UTC day
/// granularity.
///
/// Duplicate calendar dates are kept under [`DedupMode::KeepAll`] (the
/// default upstream behavior); [`DedupMode::KeepLast`] collapses each
/// date to its last-seen pair.
///
/// # Errors
///
/// Returns [`PairDecodeError::NoRecognizedFormat`] when neither path
/// yields any pairs; the caller should preserve the raw text rather than
/// discard it.
pub fn decode_pairs(text: &str, dedup: DedupMode) -> Result<Vec<PricePoint>, PairDecodeError> {
    let mut pairs = structured_pairs(text).unwrap_or_else(|| extract_pairs(text));
    if pairs.is_empty() {
        return Err(PairDecodeError::NoRecognizedFormat);
    }

    pairs.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    let points = pairs.iter().map(|pair| {
        let date = DateTime::from_timestamp(pair.seconds(), 0)
            .unwrap_or_default()
            .date_naive();
        PricePoint::new(date, pair.price)
    });

    let points = match dedup {
        DedupMode::KeepAll => points.collect(),
        DedupMode::KeepLast => {
            let mut collapsed: Vec<PricePoint> = Vec::new();
            for point in points {
                match collapsed.last_mut() {
                    Some(last) if last.date == point.date => *last = point,
                    _ => collapsed.push(point),
                }
            }
            collapsed
        }
    };

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_structured_d_y_object() {
        let text = r#"{"d": [1700000000, 1700086400], "y": [45.5, 46.0]}"#;
        let pairs = structured_pairs(text).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_relative_eq!(pairs[0].price, 45.5);
    }

    #[test]
    fn test_structured_length_mismatch_disqualifies() {
        let text = r#"{"d": [1700000000, 1700086400], "y": [45.5]}"#;
        assert!(structured_pairs(text).is_none());
    }

    #[test]
    fn test_structured_array_of_pairs() {
        let text = "[[1700000000, 45.5], [1700086400, 46.0]]";
        let pairs = structured_pairs(text).unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn test_extract_from_noisy_text() {
        let text = "var chart = {data: [[1709424000000, 459.9], [1709510400000, 461.5]]};";
        let pairs = extract_pairs(text);
        assert_eq!(pairs.len(), 2);
        assert_relative_eq!(pairs[0].timestamp, 1709424000000.0);
        assert_relative_eq!(pairs[1].price, 461.5);
    }

    #[test]
    fn test_extract_ignores_short_numbers() {
        // First element must be a 10-13 digit epoch, not an array index.
        let pairs = extract_pairs("[1, 45.5] [1700000000, 46.0]");
        assert_eq!(pairs.len(), 1);
        assert_relative_eq!(pairs[0].price, 46.0);
    }

    #[test]
    fn test_millisecond_normalization() {
        let ms = RawPair::new(1700000000000.0, 45.5);
        let secs = RawPair::new(1700000000.0, 45.5);
        assert_eq!(ms.seconds(), secs.seconds());
    }

    #[test]
    fn test_two_pairs_one_day_apart() {
        let points =
            decode_pairs("[[1700000000, 45.5],[1700086400, 46.0]]", DedupMode::KeepAll).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, date(2023, 11, 14));
        assert_eq!(points[1].date, date(2023, 11, 15));
        assert_eq!(points[1].date - points[0].date, chrono::TimeDelta::days(1));
    }

    #[test]
    fn test_decode_sorts_unordered_pairs() {
        let points =
            decode_pairs("[[1700086400, 46.0],[1700000000, 45.5]]", DedupMode::KeepAll).unwrap();
        assert!(points[0].date < points[1].date);
        assert_relative_eq!(points[0].price, 45.5);
    }

    #[test]
    fn test_keep_all_preserves_same_day_pairs() {
        // Two pairs three hours apart on the same UTC day (2023-11-14).
        let text = "[[1699930000, 45.5],[1699940800, 46.0]]";
        let points = decode_pairs(text, DedupMode::KeepAll).unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, points[1].date);
    }

    #[test]
    fn test_keep_last_collapses_same_day_pairs() {
        let text = "[[1699930000, 45.5],[1699940800, 46.0],[1700086400, 47.0]]";
        let points = decode_pairs(text, DedupMode::KeepLast).unwrap();
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].price, 46.0);
        assert_relative_eq!(points[1].price, 47.0);
    }

    #[test]
    fn test_unrecognized_payload() {
        let result = decode_pairs("<html>bot check</html>", DedupMode::KeepAll);
        assert_eq!(result, Err(PairDecodeError::NoRecognizedFormat));
    }

    #[test]
    fn test_structured_fallback_to_extraction() {
        // Valid JSON object without d/y arrays, but with embedded literals
        // in a string field: the scan still recovers them.
        let text = r#"{"chart": "[1700000000, 45.5]"}"#;
        let points = decode_pairs(text, DedupMode::KeepAll).unwrap();
        assert_eq!(points.len(), 1);
    }
}
