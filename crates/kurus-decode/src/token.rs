//! Token grammar for the compact series encoding.

use thiserror::Error;

/// Errors that can occur while decoding a compact series.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A token matched none of the three lexical shapes.
    #[error("Malformed token {token:?} at position {index}")]
    MalformedToken {
        /// Zero-based position of the token in the stream.
        index: usize,
        /// The offending token text.
        token: String,
    },
}

/// A parsed token from the compact series encoding.
///
/// The upstream mixes three shapes token-by-token with no declared schema:
///
/// - `51991n3` - run marker: price 519.91 repeated for 1 + 3 days
/// - `69990..` - dot run: price 699.90 repeated for 1 + 2 days (the dots
///   are pure repeat markers, not decimal separators)
/// - `46118` - bare: price 461.18 for a single day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `<digits>n<digits>` - explicit additional-day count after the marker.
    RunMarker {
        /// Price in kuruş.
        kurus: u64,
        /// Days the price repeats beyond the first.
        extra_days: u32,
    },
    /// `<digits><dots>` - one additional day per dot.
    DotRun {
        /// Price in kuruş, dots stripped.
        kurus: u64,
        /// Number of dots.
        extra_days: u32,
    },
    /// `<digits>` - a single day.
    Bare {
        /// Price in kuruş.
        kurus: u64,
    },
}

impl Token {
    /// Classifies and parses a single token.
    ///
    /// The run marker takes precedence when `n` is present, then dot-run
    /// when any dot is present, else bare.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::MalformedToken`] when a numeric group fails
    /// to parse as an integer. There is no silent skipping.
    pub fn parse(index: usize, raw: &str) -> Result<Self, DecodeError> {
        let malformed = || DecodeError::MalformedToken {
            index,
            token: raw.to_string(),
        };

        if let Some((price, count)) = raw.split_once('n') {
            let kurus = price.parse().map_err(|_| malformed())?;
            let extra_days = count.parse().map_err(|_| malformed())?;
            Ok(Self::RunMarker { kurus, extra_days })
        } else if raw.contains('.') {
            let extra_days = raw.matches('.').count() as u32;
            let digits: String = raw.chars().filter(|c| *c != '.').collect();
            let kurus = digits.parse().map_err(|_| malformed())?;
            Ok(Self::DotRun { kurus, extra_days })
        } else {
            let kurus = raw.parse().map_err(|_| malformed())?;
            Ok(Self::Bare { kurus })
        }
    }

    /// Price in kuruş, regardless of shape.
    #[must_use]
    pub const fn kurus(&self) -> u64 {
        match self {
            Self::RunMarker { kurus, .. } | Self::DotRun { kurus, .. } | Self::Bare { kurus } => {
                *kurus
            }
        }
    }

    /// Total consecutive days covered: 1 + the encoded repeat count.
    #[must_use]
    pub const fn total_days(&self) -> u32 {
        match self {
            Self::RunMarker { extra_days, .. } | Self::DotRun { extra_days, .. } => 1 + *extra_days,
            Self::Bare { .. } => 1,
        }
    }
}
