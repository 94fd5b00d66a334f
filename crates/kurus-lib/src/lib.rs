//! Price history decoder for a compact run-length series encoding.
//!
//! This is a facade crate that re-exports functionality from the kurus
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use kurus_lib::prelude::*;
//!
//! let reference = chrono::NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let series = decode_compact("100,200n1,300..", reference, SeriesOrder::OldestFirst)?;
//!
//! assert_eq!(series.len(), 6);
//! assert_eq!(series.last().unwrap().date, reference);
//! # Ok::<(), kurus_lib::DecodeError>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/kurus-rs/kurus/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use kurus_types::*;

// Re-export decoders
pub use kurus_decode::{
    DecodeError, PairDecodeError, PayloadKind, Token, decode_auto, decode_compact, decode_pairs,
    expand_kurus, sniff,
};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use kurus_fetch::{
    ClientConfig, FetchError, HistoryClient, Payload,
    extract::extract_inline_series,
    url::{DEFAULT_VERSION, history_url},
};

// Re-export formatters
#[cfg(feature = "format")]
pub use kurus_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, OutputFormat};

/// Prelude module for convenient imports.
///
/// ```
/// use kurus_lib::prelude::*;
/// ```
pub mod prelude {
    pub use kurus_types::{DedupMode, KurusError, PricePoint, Result, SeriesOrder};

    pub use kurus_decode::{PayloadKind, decode_auto, decode_compact, decode_pairs, sniff};

    #[cfg(feature = "fetch")]
    pub use kurus_fetch::{ClientConfig, HistoryClient, Payload};

    #[cfg(feature = "format")]
    pub use kurus_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};
}
