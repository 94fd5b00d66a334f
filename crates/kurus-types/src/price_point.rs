//! Price point representation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format used in the persisted output (day-month-year).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Number of kuruş in one lira.
const KURUS_PER_LIRA: f64 = 100.0;

/// A single day's price in a decoded series.
///
/// Serializes as an object with exactly two keys, a `DD-MM-YYYY` date
/// string and a decimal price:
///
/// ```json
/// {"date": "10-01-2024", "price": 699.9}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Calendar date (day granularity).
    #[serde(with = "day_month_year")]
    pub date: NaiveDate,
    /// Price in currency units.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[must_use]
    pub const fn new(date: NaiveDate, price: f64) -> Self {
        Self { date, price }
    }

    /// Creates a price point from an integer kuruş amount.
    ///
    /// The source encoding carries prices as integers with two implied
    /// fractional digits, e.g. 69990 kuruş is 699.90 lira.
    #[must_use]
    pub fn from_kurus(date: NaiveDate, kurus: u64) -> Self {
        Self {
            date,
            price: kurus as f64 / KURUS_PER_LIRA,
        }
    }

    /// Returns the date formatted as `DD-MM-YYYY`.
    #[must_use]
    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl std::fmt::Display for PricePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | {:.2}", self.formatted_date(), self.price)
    }
}

/// Serde adapter for `DD-MM-YYYY` date strings.
pub mod day_month_year {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    use super::DATE_FORMAT;

    /// Serializes a date as a `DD-MM-YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    /// Deserializes a date from a `DD-MM-YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not match the format.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&s, DATE_FORMAT).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_from_kurus_scaling() {
        let point = PricePoint::from_kurus(date(2024, 1, 10), 69990);
        assert_relative_eq!(point.price, 699.90);
    }

    #[test]
    fn test_formatted_date() {
        let point = PricePoint::new(date(2024, 3, 5), 1.0);
        assert_eq!(point.formatted_date(), "05-03-2024");
    }

    #[test]
    fn test_serialize_two_keys() {
        let point = PricePoint::from_kurus(date(2024, 1, 10), 45990);
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"date":"10-01-2024","price":459.9}"#);
    }

    #[test]
    fn test_deserialize_round_trip() {
        let json = r#"{"date":"28-02-2023","price":123.45}"#;
        let point: PricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(point.date, date(2023, 2, 28));
        assert_relative_eq!(point.price, 123.45);
    }

    #[test]
    fn test_deserialize_rejects_iso_dates() {
        let json = r#"{"date":"2023-02-28","price":1.0}"#;
        assert!(serde_json::from_str::<PricePoint>(json).is_err());
    }
}
