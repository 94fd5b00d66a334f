//! Series orientation and deduplication policy.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Which end of a compact series is treated as most recent.
///
/// The upstream encoding does not declare its orientation. The observed
/// convention is that the last token is "today", but nothing in the data
/// confirms it, so the orientation stays a caller-visible knob instead of
/// a hidden constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesOrder {
    /// The series runs oldest to newest; the last value is the reference date.
    #[default]
    OldestFirst,
    /// The series runs newest to oldest; the first value is the reference date.
    NewestFirst,
}

impl SeriesOrder {
    /// Returns the order as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OldestFirst => "oldest-first",
            Self::NewestFirst => "newest-first",
        }
    }
}

impl std::fmt::Display for SeriesOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing a series order string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid series order: {0} (expected oldest-first or newest-first)")]
pub struct SeriesOrderParseError(pub String);

impl FromStr for SeriesOrder {
    type Err = SeriesOrderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "oldest-first" => Ok(Self::OldestFirst),
            "newest-first" => Ok(Self::NewestFirst),
            _ => Err(SeriesOrderParseError(s.to_string())),
        }
    }
}

/// Same-day collapsing policy for decoded timestamped pairs.
///
/// The upstream occasionally reports several prices for one calendar day.
/// The observed behavior keeps every pair, so that is the default;
/// collapsing to the day's last price is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DedupMode {
    /// Keep every recovered pair, duplicate dates included.
    #[default]
    KeepAll,
    /// Keep only the last-seen pair for each calendar date.
    KeepLast,
}

impl DedupMode {
    /// Returns the mode as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KeepAll => "keep-all",
            Self::KeepLast => "keep-last",
        }
    }
}

impl std::fmt::Display for DedupMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing a dedup mode string fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid dedup mode: {0} (expected keep-all or keep-last)")]
pub struct DedupModeParseError(pub String);

impl FromStr for DedupMode {
    type Err = DedupModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "keep-all" => Ok(Self::KeepAll),
            "keep-last" => Ok(Self::KeepLast),
            _ => Err(DedupModeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_str() {
        assert_eq!(
            "oldest-first".parse::<SeriesOrder>().unwrap(),
            SeriesOrder::OldestFirst
        );
        assert_eq!(
            "NEWEST_FIRST".parse::<SeriesOrder>().unwrap(),
            SeriesOrder::NewestFirst
        );
        assert!("sideways".parse::<SeriesOrder>().is_err());
    }

    #[test]
    fn test_order_default() {
        assert_eq!(SeriesOrder::default(), SeriesOrder::OldestFirst);
    }

    #[test]
    fn test_dedup_from_str() {
        assert_eq!("keep-all".parse::<DedupMode>().unwrap(), DedupMode::KeepAll);
        assert_eq!(
            "keep_last".parse::<DedupMode>().unwrap(),
            DedupMode::KeepLast
        );
        assert!("first".parse::<DedupMode>().is_err());
    }

    #[test]
    fn test_dedup_default_keeps_all() {
        assert_eq!(DedupMode::default(), DedupMode::KeepAll);
    }
}
