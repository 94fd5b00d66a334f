//! Output formatters for the kurus price history decoder.
//!
//! Decoded series are persisted as a JSON array by default; NDJSON and
//! CSV are available behind the same [`Formatter`] trait.

#![doc(issue_tracker_base_url = "https://github.com/kurus-rs/kurus/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod json;

pub use csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat};
pub use json::{JsonFormatter, JsonStyle};
