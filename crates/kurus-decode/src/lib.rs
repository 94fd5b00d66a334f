//! Price series decoders for the kurus price history tool.
//!
//! This crate holds the decoding pipeline, pure and free of I/O:
//!
//! - [`Token`] - The three-shape token grammar of the compact encoding
//! - [`decode_compact`] - Run-length expansion plus calendar date assignment
//! - [`decode_pairs`] - Recovery of explicit (timestamp, price) pairs
//! - [`sniff`] / [`decode_auto`] - Payload classification and routing
//!
//! Both decoders are deterministic: given the same raw text, reference
//! date, and flags, they produce the same output. The reference date is
//! always an explicit argument; the decoders never read the clock.

#![doc(issue_tracker_base_url = "https://github.com/kurus-rs/kurus/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod compact;
mod pairs;
mod sniff;
mod token;

pub use compact::{decode_compact, expand_kurus};
pub use pairs::{PairDecodeError, RawPair, decode_pairs, extract_pairs, structured_pairs};
pub use sniff::{PayloadKind, decode_auto, sniff};
pub use token::{DecodeError, Token};
