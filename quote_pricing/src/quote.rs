//! Quote data model.
//!
//! A `Quote` is one top-of-book snapshot for a stock as delivered by the feed:
//! best bid and best ask with their sizes, a timestamp string and an opaque id.
//! Decoding goes through `serde_json` (see `feed::parse_snapshot`), so a record
//! with a missing field or a non-numeric price is rejected before any pricing
//! happens.
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::error::PricingError;
use crate::market::TIMESTAMP_FORMAT;

/// One side of the top of book.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PriceLevel {
    /// Quoted price.
    pub price: f64,
    /// Quantity available at `price`.
    pub size: u64,
}

/// Top-of-book quote for a single stock.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Quote {
    /// Stock symbol (e.g., `ABC`).
    pub stock: String,
    /// Best bid.
    pub top_bid: PriceLevel,
    /// Best ask.
    pub top_ask: PriceLevel,
    /// Feed timestamp, see `market::TIMESTAMP_FORMAT`.
    pub timestamp: String,
    /// Feed-assigned identifier.
    pub id: String,
}

impl Quote {
    /// Parse `timestamp` into a calendar date and time.
    pub fn parsed_timestamp(&self) -> Result<NaiveDateTime, PricingError> {
        let ts = NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)?;
        Ok(ts)
    }
}
