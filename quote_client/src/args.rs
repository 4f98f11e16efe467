//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;
use quote_pricing::market::{DEFAULT_STOCK_A, DEFAULT_STOCK_B, DEFAULT_THRESHOLD};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a recorded feed, one JSON array of quotes per line.
    /// Reads stdin when omitted.
    #[clap(long)]
    pub path: Option<String>,

    /// Numerator stock of the ratio.
    #[clap(long, default_value = DEFAULT_STOCK_A)]
    pub stock_a: String,

    /// Denominator stock of the ratio.
    #[clap(long, default_value = DEFAULT_STOCK_B)]
    pub stock_b: String,

    /// Distance of the alert bounds from a ratio of 1.
    #[clap(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Print every generated ratio row to stdout as one line of JSON.
    #[clap(long)]
    pub json: bool,
}
