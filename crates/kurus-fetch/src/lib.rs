//! HTTP client and payload acquisition for the kurus price history decoder.
//!
//! This crate owns everything between the network and the decoders:
//!
//! - [`url::history_url`] - Constructs chart CDN data URLs
//! - [`HistoryClient`] - HTTP client with the required headers and retries
//! - [`extract::extract_inline_series`] - Recovers the inline series from
//!   product page HTML
//!
//! Retry responsibility lives here and nowhere else; the decoders never
//! see a transport error.

#![doc(issue_tracker_base_url = "https://github.com/kurus-rs/kurus/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
pub mod extract;
pub mod url;

pub use client::{ClientConfig, FetchError, HistoryClient, Payload};
