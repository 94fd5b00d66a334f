//! Payload classification for decoder selection.
//!
//! The two decoders stay independent strategies; the only coupling is
//! here, where a fetched payload is routed to one of them. Structured
//! JSON markers win first, then compact-series shape markers.

use chrono::NaiveDate;
use kurus_types::{DedupMode, KurusError, PricePoint, Result, SeriesOrder};

use crate::compact::decode_compact;
use crate::pairs::decode_pairs;

/// The decoder a payload should be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    /// Run-length compact token stream.
    CompactSeries,
    /// JSON or embedded timestamped pairs.
    PairSeries,
    /// Neither shape recognized.
    Unknown,
}

/// Sniffs a payload and routes it to the matching decoder.
///
/// Convenience for the common case where the caller does not force a
/// decoder. Compact payloads are decoded against the reference date and
/// order; pair payloads against the dedup mode.
///
/// # Errors
///
/// Returns [`KurusError::Decode`] when a compact payload carries a
/// malformed token, and [`KurusError::UnrecognizedPayload`] when the text
/// matches no known shape (callers should preserve the raw text).
pub fn decode_auto(
    text: &str,
    reference_date: NaiveDate,
    order: SeriesOrder,
    dedup: DedupMode,
) -> Result<Vec<PricePoint>> {
    match sniff(text) {
        PayloadKind::CompactSeries => decode_compact(text, reference_date, order)
            .map_err(|e| KurusError::Decode(e.to_string())),
        PayloadKind::PairSeries => {
            decode_pairs(text, dedup).map_err(|_| KurusError::UnrecognizedPayload)
        }
        PayloadKind::Unknown => Err(KurusError::UnrecognizedPayload),
    }
}

/// Classifies raw upstream text.
///
/// Text opening with a JSON bracket belongs to the pair decoder. Text
/// made of nothing but digits, commas, dots, and the run marker letter
/// is a compact series. Everything else is unknown; callers should keep
/// the raw text for manual follow-up.
#[must_use]
pub fn sniff(text: &str) -> PayloadKind {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return PayloadKind::Unknown;
    }

    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return PayloadKind::PairSeries;
    }

    let compact_charset = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | 'n'));
    if compact_charset && trimmed.chars().any(|c| c.is_ascii_digit()) {
        return PayloadKind::CompactSeries;
    }

    PayloadKind::Unknown
}
