//! Fetch command implementation.
//!
//! Fetches a raw series payload from the chart CDN and hands it to the
//! same decode path the local decode command uses.

use crate::commands::decode::{decode_payload, parse_reference_date};
use crate::display::{self, DedupArg, Format, OrderArg, PayloadArg};
use anyhow::{Context, Result, bail};
use indicatif::{ProgressBar, ProgressStyle};
use kurus_lib::prelude::*;
use kurus_lib::history_url;
use std::path::PathBuf;
use std::time::Duration;

/// Fetch a series payload and decode it.
#[allow(clippy::too_many_arguments)]
pub(crate) async fn fetch(
    url: Option<&str>,
    product_id: Option<u64>,
    price_kurus: Option<u64>,
    version: &str,
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
    let url = match (url, product_id, price_kurus) {
        (Some(url), _, _) => url.to_string(),
        (None, Some(id), Some(kurus)) => history_url(id, kurus, version),
        _ => bail!("Provide a payload URL, or --product-id together with --price-kurus"),
    };

    let reference = parse_reference_date(reference_date)?;

    // Default output name follows the product when one was given.
    let output = output.unwrap_or_else(|| {
        let stem = product_id.map_or_else(|| "history".to_string(), |id| id.to_string());
        PathBuf::from(format!("{stem}.{}", format.extension()))
    });

    let progress = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("Invalid progress template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Fetching {url}"));
        pb
    };

    let client = HistoryClient::with_defaults().context("Failed to create HTTP client")?;
    let fetched = client
        .fetch_series(&url)
        .await
        .with_context(|| format!("Failed to fetch {url}"))?;

    // Precondition gate: abort before decoding on bad status or empty body.
    let text = fetched
        .usable_text()
        .with_context(|| format!("Unusable payload from {url}"))?
        .to_string();

    progress.finish_with_message(format!(
        "Fetched {} bytes (status {})",
        text.len(),
        fetched.status
    ));

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
