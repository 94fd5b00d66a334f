//! Compact-token series decoding.

use chrono::{Days, NaiveDate};
use kurus_types::{PricePoint, SeriesOrder};

use crate::token::{DecodeError, Token};

/// Expands a raw compact series into one kuruş price per day, in token order.
///
/// Index 0 of the result corresponds to the first token's price, running
/// through the last token's with run-length expansions inline. The length
/// of the result equals the sum over tokens of (1 + repeat count).
///
/// # Errors
///
/// Returns [`DecodeError::MalformedToken`] on the first token that fails
/// to parse; no partial output is produced.
pub fn expand_kurus(raw: &str) -> Result<Vec<u64>, DecodeError> {
    let mut prices = Vec::new();

    for (index, text) in raw.trim().split(',').enumerate() {
        let token = Token::parse(index, text)?;
        let days = token.total_days() as usize;
        prices.extend(std::iter::repeat_n(token.kurus(), days));
    }

    Ok(prices)
}

/// Decodes a compact series into chronological price points.
///
/// `reference_date` anchors the calendar assignment: under
/// [`SeriesOrder::OldestFirst`] the last expanded value falls on the
/// reference date, under [`SeriesOrder::NewestFirst`] the first one does.
/// The caller supplies the clock; the decoder never reads it, so decoding
/// is reproducible for a fixed date.
///
/// The output is always oldest-date-first, one point per calendar day
/// covered, dates stepping by exactly one day with no gaps or repeats.
///
/// # Errors
///
/// Returns [`DecodeError::MalformedToken`] when any token fails to parse.
pub fn decode_compact(
    raw: &str,
    reference_date: NaiveDate,
    order: SeriesOrder,
) -> Result<Vec<PricePoint>, DecodeError> {
    let expanded = expand_kurus(raw)?;
    let n = expanded.len();

    let mut points = Vec::with_capacity(n);
    for (i, &kurus) in expanded.iter().enumerate() {
        // Days back from the reference date for this list position.
        let age = match order {
            SeriesOrder::OldestFirst => (n - 1 - i) as u64,
            SeriesOrder::NewestFirst => i as u64,
        };
        let date = reference_date - Days::new(age);
        points.push(PricePoint::from_kurus(date, kurus));
    }

    if order == SeriesOrder::NewestFirst {
        points.reverse();
    }

    Ok(points)
}
