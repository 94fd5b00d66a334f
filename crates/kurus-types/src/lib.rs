//! Core types for the kurus price history decoder.
//!
//! This crate provides the fundamental data structures used throughout kurus:
//!
//! - [`PricePoint`] - A single day's price with its calendar date
//! - [`SeriesOrder`] - Which end of a compact series is "most recent"
//! - [`DedupMode`] - Same-day collapsing policy for timestamped pairs
//! - [`KurusError`] - Workspace-wide error type

#![doc(issue_tracker_base_url = "https://github.com/kurus-rs/kurus/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod price_point;
mod series;

pub use error::{KurusError, Result};
pub use price_point::{DATE_FORMAT, PricePoint, day_month_year};
pub use series::{DedupMode, DedupModeParseError, SeriesOrder, SeriesOrderParseError};
