//! Decode command implementation.
//!
//! Decodes a payload that is already on disk (or piped in), sharing the
//! payload-routing logic with the fetch command.

use crate::display::{self, DedupArg, Format, OrderArg, PayloadArg};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use kurus_lib::prelude::*;
use kurus_lib::{KurusError, PairDecodeError, decode_auto, extract_inline_series};
use std::io::Read;
use std::path::PathBuf;

/// Routes a payload to the right decoder.
///
/// Returns `Ok(None)` when the payload matches no recognized format; the
/// caller is expected to preserve the raw text. A malformed compact token
/// is a hard error, never a fallback to the pair decoder.
pub(crate) fn decode_payload(
    text: &str,
    payload: PayloadArg,
    order: SeriesOrder,
    dedup: DedupMode,
    reference_date: NaiveDate,
) -> Result<Option<Vec<PricePoint>>> {
    match payload {
        PayloadArg::Compact => {
            let series = decode_compact(text, reference_date, order)
                .context("Failed to decode compact series")?;
            Ok(Some(series))
        }
        PayloadArg::Pairs => match decode_pairs(text, dedup) {
            Ok(series) => Ok(Some(series)),
            Err(PairDecodeError::NoRecognizedFormat) => Ok(None),
        },
        PayloadArg::Auto => match decode_auto(text, reference_date, order, dedup) {
            Ok(series) => Ok(Some(series)),
            Err(KurusError::UnrecognizedPayload) => {
                // Product pages carry the series inline in a script variable.
                match extract_inline_series(text) {
                    Some(series) => {
                        let series = decode_compact(&series, reference_date, order)
                            .context("Failed to decode inline series")?;
                        Ok(Some(series))
                    }
                    None => Ok(None),
                }
            }
            Err(e) => Err(e).context("Failed to decode payload"),
        },
    }
}

/// Parses the reference date flag, defaulting to today.
///
/// Production runs take the current date; tests and replays pass a fixed
/// one to keep decoding reproducible.
pub(crate) fn parse_reference_date(flag: Option<&str>) -> Result<NaiveDate> {
    match flag {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .with_context(|| format!("Invalid reference date: {s}")),
        None => Ok(chrono::Utc::now().date_naive()),
    }
}

/// Decode a local payload file ("-" for stdin).
#[allow(clippy::too_many_arguments)]
pub(crate) fn decode(
    input: &str,
    output: Option<PathBuf>,
    format: Format,
    pretty: bool,
    payload: PayloadArg,
    order: OrderArg,
    dedup: DedupArg,
    reference_date: Option<&str>,
    tail: usize,
    quiet: bool,
) -> Result<()> {
    let (text, stem) = if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        (text, "series".to_string())
    } else {
        let text = std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read input: {input}"))?;
        let stem = PathBuf::from(input)
            .file_stem()
            .map_or_else(|| "series".to_string(), |s| s.to_string_lossy().into_owned());
        (text, stem)
    };

    let reference = parse_reference_date(reference_date)?;
    let output =
        output.unwrap_or_else(|| PathBuf::from(format!("{stem}.{}", format.extension())));

    match decode_payload(&text, payload, order.into(), dedup.into(), reference)? {
        Some(series) => {
            display::write_series(&series, &output, format, pretty)?;
            if !quiet {
                println!("Decoded {} price points", series.len());
                println!("Output written to: {}", output.display());
                display::print_tail(&series, tail);
            }
        }
        None => {
            let dump = display::raw_dump_path(&output);
            display::write_raw_dump(&text, &dump)?;
            if !quiet {
                println!(
                    "Payload matches no known format; raw text kept at {}",
                    dump.display()
                );
            }
        }
    }

    Ok(())
}
