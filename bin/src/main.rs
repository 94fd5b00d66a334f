//! kurus CLI - price history extractor for a compact series encoding.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;

use display::{DedupArg, Format, OrderArg, PayloadArg};

#[derive(Parser)]
#[command(name = "kurus")]
#[command(about = "Price history extractor for a compact series encoding", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a series payload from the chart CDN and decode it
    Fetch {
        /// Full payload URL. Omit to build one from --product-id.
        url: Option<String>,

        /// Product identifier (builds the CDN URL with --price-kurus)
        #[arg(long, conflicts_with = "url", requires = "price_kurus")]
        product_id: Option<u64>,

        /// Product's current list price in kuruş (second URL segment)
        #[arg(long, requires = "product_id")]
        price_kurus: Option<u64>,

        /// Chart widget version used in the built URL
        #[arg(long, default_value = kurus_lib::DEFAULT_VERSION)]
        version: String,

        /// Output file path. Defaults to <product-id>.<format> or history.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Payload shape. Auto sniffs structured JSON first, then compact markers.
        #[arg(long, value_enum, default_value = "auto")]
        payload: PayloadArg,

        /// Which end of a compact series is most recent
        #[arg(long, value_enum, default_value = "oldest-first")]
        order: OrderArg,

        /// Same-day collapsing for timestamped pairs
        #[arg(long, value_enum, default_value = "keep-all")]
        dedup: DedupArg,

        /// Reference date (YYYY-MM-DD) anchoring compact date assignment.
        /// Defaults to today.
        #[arg(long)]
        reference_date: Option<String>,

        /// Number of trailing records to print after writing
        #[arg(long, default_value = "15")]
        tail: usize,
    },

    /// Decode a local payload file ("-" for stdin)
    Decode {
        /// Input path, or "-" to read stdin
        input: String,

        /// Output file path. Defaults to <input-stem>.<format>
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: Format,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Payload shape. Auto sniffs structured JSON first, then compact markers.
        #[arg(long, value_enum, default_value = "auto")]
        payload: PayloadArg,

        /// Which end of a compact series is most recent
        #[arg(long, value_enum, default_value = "oldest-first")]
        order: OrderArg,

        /// Same-day collapsing for timestamped pairs
        #[arg(long, value_enum, default_value = "keep-all")]
        dedup: DedupArg,

        /// Reference date (YYYY-MM-DD) anchoring compact date assignment.
        /// Defaults to today.
        #[arg(long)]
        reference_date: Option<String>,

        /// Number of trailing records to print after writing
        #[arg(long, default_value = "15")]
        tail: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            url,
            product_id,
            price_kurus,
            version,
            output,
            format,
            pretty,
            payload,
            order,
            dedup,
            reference_date,
            tail,
        } => {
            commands::fetch::fetch(
                url.as_deref(),
                product_id,
                price_kurus,
                &version,
                output,
                format,
                pretty,
                payload,
                order,
                dedup,
                reference_date.as_deref(),
                tail,
                cli.quiet,
            )
            .await
        }
        Commands::Decode {
            input,
            output,
            format,
            pretty,
            payload,
            order,
            dedup,
            reference_date,
            tail,
        } => commands::decode::decode(
            &input,
            output,
            format,
            pretty,
            payload,
            order,
            dedup,
            reference_date.as_deref(),
            tail,
            cli.quiet,
        ),
    }
}
