//! Error types shared between the pricing library and the client.
//!
//! The `PricingError` enum unifies failures while reading and decoding quote
//! snapshots as well as the few domain checks the library performs, allowing
//! callers to propagate a single error type.
use std::io;

use thiserror::Error;

/// Unified error type shared by the library and the client binary.
#[derive(Error, Debug)]
pub enum PricingError {
    /// I/O error originating from the standard library (files, stdin).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A quote record could not be decoded: missing field or non-numeric price.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// Quote timestamp does not match `market::TIMESTAMP_FORMAT`.
    #[error("Timestamp error: {0}")]
    Timestamp(#[from] chrono::ParseError),

    /// A ratio was requested for a stock that has no recorded price.
    #[error("No price recorded for stock: {0}")]
    UnknownStock(String),

    /// Alert threshold outside `[0, 1)` or not finite.
    #[error("Invalid alert threshold: {0}")]
    InvalidThreshold(f64),

    /// A feed line could not be read or decoded.
    #[error("Snapshot on line {line}: {source}")]
    Snapshot {
        /// 1-based line number in the feed.
        line: usize,
        /// Underlying failure.
        #[source]
        source: Box<PricingError>,
    },
}
