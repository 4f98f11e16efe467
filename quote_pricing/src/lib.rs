//!
//! Pricing helpers for top-of-book stock quotes.
//!
//! This crate aggregates:
//! - `error` — unified error type `PricingError` used across the workspace.
//! - `result` — handy `Result<T, PricingError>` alias.
//! - `market` — default stock pair, alert threshold and timestamp layout.
//! - `quote` — the `Quote` record as delivered by the feed.
//! - `data_point` — mid price extraction and the guarded price ratio.
//! - `price_book` — latest mid price per stock.
//! - `row` — ratio row with upper/lower bounds and a trigger alert.
//! - `feed` — line-oriented reader for quote snapshots.
#![warn(missing_docs)]
pub mod data_point;
pub mod error;
pub mod feed;
pub mod market;
pub mod price_book;
pub mod quote;
pub mod result;
pub mod row;

pub use data_point::{DataPoint, get_data_point, get_ratio};
pub use error::PricingError;
pub use price_book::PriceBook;
pub use quote::{PriceLevel, Quote};
pub use result::Result;
pub use row::{Bounds, Row, generate_row};
