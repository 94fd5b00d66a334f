//! Display utilities and output writing for the kurus CLI.

use anyhow::Result;
use clap::ValueEnum;
use kurus_lib::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output format for decoded series.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum Format {
    Json,
    Ndjson,
    Csv,
}

impl Format {
    /// Returns the file extension for this format.
    pub(crate) const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Csv => "csv",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Series orientation flag.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum OrderArg {
    OldestFirst,
    NewestFirst,
}

impl From<OrderArg> for SeriesOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::OldestFirst => Self::OldestFirst,
            OrderArg::NewestFirst => Self::NewestFirst,
        }
    }
}

/// Same-day collapsing flag.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum DedupArg {
    KeepAll,
    KeepLast,
}

impl From<DedupArg> for DedupMode {
    fn from(arg: DedupArg) -> Self {
        match arg {
            DedupArg::KeepAll => Self::KeepAll,
            DedupArg::KeepLast => Self::KeepLast,
        }
    }
}

/// Payload shape override.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum PayloadArg {
    /// Sniff the payload: structured JSON first, then compact markers.
    Auto,
    /// Force the compact-token decoder.
    Compact,
    /// Force the timestamped-pair decoder.
    Pairs,
}

/// Write a decoded series to a file in the specified format.
pub(crate) fn write_series(
    series: &[PricePoint],
    output: &Path,
    format: Format,
    pretty: bool,
) -> Result<()> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);

    match format {
        Format::Json => {
            let formatter = JsonFormatter::new().with_pretty(pretty);
            formatter.write_series(series, writer)?;
        }
        Format::Ndjson => {
            let formatter = JsonFormatter::ndjson();
            formatter.write_series(series, writer)?;
        }
        Format::Csv => {
            let formatter = CsvFormatter::new();
            formatter.write_series(series, writer)?;
        }
    }

    Ok(())
}

/// Print the trailing `tail` records of a series, oldest first.
pub(crate) fn print_tail(series: &[PricePoint], tail: usize) {
    let start = series.len().saturating_sub(tail);
    for point in &series[start..] {
        println!("{point}");
    }
}

/// Path for the raw dump written when a payload matches no known format:
/// the output path with its extension replaced by `raw.txt`.
pub(crate) fn raw_dump_path(output: &Path) -> PathBuf {
    output.with_extension("raw.txt")
}

/// Write unrecognized payload text verbatim for offline inspection.
pub(crate) fn write_raw_dump(text: &str, path: &Path) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    Ok(())
}
