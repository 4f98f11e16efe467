//! Quote Client — reads recorded quote snapshots and reports derived prices.
//!
//! Every snapshot is a JSON array of top-of-book quotes. For each quote the client
//! logs the bid, ask and mid price, then logs the ratio between the configured pair
//! of stocks. When both stocks of the pair are quoted in the same snapshot, a ratio
//! row is built and an alert is logged if the ratio leaves the configured bounds.
//! With `--json` every row is also printed to stdout as one line of JSON.
//!
//! Snapshots are reported as soon as their line is read, so piped input is
//! processed while it streams in.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --path ./feed.jsonl --stock-a ABC --stock-b DEF --threshold 0.05 --json
//! ```
//!
//! Without `--path` the feed is read from stdin. Log verbosity follows `RUST_LOG`.
#![warn(missing_docs)]
mod args;

use crate::args::Args;
use clap::Parser;
use log::{info, warn};
use quote_pricing::feed::FeedParser;
use quote_pricing::{Bounds, PriceBook, PricingError, Quote, Result, Row, generate_row, get_data_point};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Log one snapshot and fold its prices into `book`.
///
/// Returns the ratio row when both `stock_a` and `stock_b` are quoted in the
/// snapshot. Fails if either stock has never been priced so far.
fn report_snapshot(
    book: &mut PriceBook,
    quotes: &[Quote],
    stock_a: &str,
    stock_b: &str,
    bounds: &Bounds,
) -> Result<Option<Row>, PricingError> {
    for quote in quotes {
        let point = get_data_point(quote);
        info!(
            "Quoted {} at (bid:{}, ask:{}, price:{})",
            point.stock, point.bid_price, point.ask_price, point.price
        );
        book.record(&point);
    }

    match book.ratio(stock_a, stock_b)? {
        Some(ratio) => info!("Ratio {}", ratio),
        None => info!("Ratio undefined: {} has a zero price", stock_b),
    }

    let quote_a = quotes.iter().find(|q| q.stock == stock_a);
    let quote_b = quotes.iter().find(|q| q.stock == stock_b);
    let (Some(quote_a), Some(quote_b)) = (quote_a, quote_b) else {
        return Ok(None);
    };

    let row = generate_row(quote_a, quote_b, bounds)?;
    if let Some(ratio) = row.trigger_alert {
        warn!(
            "ALERT {}: ratio {} outside [{}, {}]",
            row.timestamp, ratio, row.lower_bound, row.upper_bound
        );
    }
    Ok(Some(row))
}

/// Report every snapshot of `reader` as it is read.
///
/// Rows are written to `out` as JSON lines when `args.json` is set. Returns the
/// number of snapshots and of triggered alerts.
fn run<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    args: &Args,
    bounds: &Bounds,
) -> Result<(usize, usize), PricingError> {
    let mut book = PriceBook::new();
    let mut processed = 0;
    let mut alerts = 0;
    for quotes in Quote::snapshots(reader) {
        let quotes = quotes?;
        processed += 1;
        let Some(row) = report_snapshot(&mut book, &quotes, &args.stock_a, &args.stock_b, bounds)?
        else {
            continue;
        };
        if row.trigger_alert.is_some() {
            alerts += 1;
        }
        if args.json {
            writeln!(out, "{}", row.to_json_line()?)?;
        }
    }
    Ok((processed, alerts))
}

fn main() -> Result<(), PricingError> {
    init_logger();
    let args = Args::parse();
    let bounds = Bounds::new(args.threshold)?;
    let mut stdout = io::stdout().lock();

    let (processed, alerts) = match &args.path {
        Some(raw) => {
            let file_path = normalize_path(raw);
            info!("Reading feed from {}", file_path.display());
            let file = File::open(file_path)?;
            run(BufReader::new(file), &mut stdout, &args, &bounds)?
        }
        None => {
            info!("Reading feed from stdin");
            run(io::stdin().lock(), &mut stdout, &args, &bounds)?
        }
    };

    info!("Processed {} snapshots, {} alerts", processed, alerts);
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}

/// Normalize a CLI-provided path string by trimming whitespace and matching quotes.
///
/// This allows passing Windows paths in quotes without breaking parsing.
fn normalize_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let no_quotes = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed);
    PathBuf::from(no_quotes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote_pricing::feed::parse_snapshot;

    const SNAPSHOT: &str = r#"[{"top_ask": {"price": 121.2, "size": 36}, "timestamp": "2019-02-11 22:06:30.572453", "top_bid": {"price": 120.48, "size": 109}, "id": "0.109974697771", "stock": "ABC"}, {"top_ask": {"price": 121.68, "size": 4}, "timestamp": "2019-02-11 22:06:30.572453", "top_bid": {"price": 117.87, "size": 81}, "id": "0.109974697771", "stock": "DEF"}]"#;

    #[test]
    fn snapshot_with_both_stocks_yields_row() {
        let quotes = parse_snapshot(SNAPSHOT).unwrap();
        let mut book = PriceBook::new();
        let row = report_snapshot(&mut book, &quotes, "ABC", "DEF", &Bounds::default())
            .unwrap()
            .unwrap();
        assert_eq!(row.ratio, book.ratio("ABC", "DEF").unwrap());
        assert_eq!(row.trigger_alert, None);
    }

    #[test]
    fn tight_bounds_raise_alert() {
        let quotes = parse_snapshot(SNAPSHOT).unwrap();
        let mut book = PriceBook::new();
        let bounds = Bounds::new(0.001).unwrap();
        let row = report_snapshot(&mut book, &quotes, "ABC", "DEF", &bounds)
            .unwrap()
            .unwrap();
        assert_eq!(row.trigger_alert, row.ratio);
    }

    #[test]
    fn earlier_prices_fill_missing_stock() {
        let quotes = parse_snapshot(SNAPSHOT).unwrap();
        let mut book = PriceBook::new();
        report_snapshot(&mut book, &quotes, "ABC", "DEF", &Bounds::default()).unwrap();
        let row = report_snapshot(&mut book, &quotes[..1], "ABC", "DEF", &Bounds::default())
            .unwrap();
        assert!(row.is_none());
    }

    #[test]
    fn unpriced_stock_fails() {
        let quotes = parse_snapshot(SNAPSHOT).unwrap();
        let mut book = PriceBook::new();
        let result = report_snapshot(&mut book, &quotes[..1], "ABC", "DEF", &Bounds::default());
        assert!(matches!(result, Err(PricingError::UnknownStock(_))));
    }

    fn client_args(json: bool) -> Args {
        Args::parse_from(
            ["quote_client", "--threshold", "0.001"]
                .into_iter()
                .chain(json.then_some("--json")),
        )
    }

    #[test]
    fn json_flag_prints_one_row_per_snapshot() {
        let input = format!("{}\n\n{}\n", SNAPSHOT, SNAPSHOT);
        let args = client_args(true);
        let bounds = Bounds::new(args.threshold).unwrap();
        let mut out = Vec::new();
        let (processed, alerts) = run(input.as_bytes(), &mut out, &args, &bounds).unwrap();
        assert_eq!((processed, alerts), (2, 2));

        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        let row: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(row["ratio"], row["trigger_alert"]);
        assert_eq!(row["timestamp"], "2019-02-11T22:06:30.572453");
    }

    #[test]
    fn rows_stay_silent_without_json_flag() {
        let args = client_args(false);
        let bounds = Bounds::new(args.threshold).unwrap();
        let mut out = Vec::new();
        let (processed, _) = run(SNAPSHOT.as_bytes(), &mut out, &args, &bounds).unwrap();
        assert_eq!(processed, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn rows_before_bad_line_are_written() {
        let input = format!("{}\nnot json\n{}\n", SNAPSHOT, SNAPSHOT);
        let args = client_args(true);
        let bounds = Bounds::new(args.threshold).unwrap();
        let mut out = Vec::new();
        let result = run(input.as_bytes(), &mut out, &args, &bounds);
        assert!(matches!(result, Err(PricingError::Snapshot { line: 2, .. })));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }

    #[test]
    fn strips_matching_quotes_from_path() {
        assert_eq!(normalize_path(" \"feed.jsonl\" "), PathBuf::from("feed.jsonl"));
        assert_eq!(normalize_path("feed.jsonl"), PathBuf::from("feed.jsonl"));
    }
}
