//! Ratio row for a pair of stocks.
//!
//! A `Row` combines the mid prices of two quotes into their ratio and compares
//! it with a fixed band around 1. When the ratio leaves the band the row carries
//! it as `trigger_alert`; inside the band the alert is empty.
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::data_point::{get_data_point, get_ratio};
use crate::error::PricingError;
use crate::market::DEFAULT_THRESHOLD;
use crate::quote::Quote;

/// Upper and lower alert bounds around a ratio of 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// `1 + threshold`.
    pub upper: f64,
    /// `1 - threshold`.
    pub lower: f64,
}

impl Bounds {
    /// Build bounds at `threshold` distance from 1.
    ///
    /// The threshold must be finite and within `[0, 1)`.
    pub fn new(threshold: f64) -> Result<Self, PricingError> {
        if !threshold.is_finite() || !(0.0..1.0).contains(&threshold) {
            return Err(PricingError::InvalidThreshold(threshold));
        }
        Ok(Self {
            upper: 1.0 + threshold,
            lower: 1.0 - threshold,
        })
    }

    /// Whether `ratio` lies within the band, edges included.
    pub fn contains(&self, ratio: f64) -> bool {
        ratio >= self.lower && ratio <= self.upper
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            upper: 1.0 + DEFAULT_THRESHOLD,
            lower: 1.0 - DEFAULT_THRESHOLD,
        }
    }
}

/// Ratio of two stocks at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// Mid price of the numerator stock.
    pub price_a: f64,
    /// Mid price of the denominator stock.
    pub price_b: f64,
    /// `price_a / price_b`, `None` when `price_b` is zero.
    pub ratio: Option<f64>,
    /// Upper alert bound.
    pub upper_bound: f64,
    /// Lower alert bound.
    pub lower_bound: f64,
    /// The later of the two quote timestamps.
    pub timestamp: NaiveDateTime,
    /// The ratio, when it lies outside the bounds.
    pub trigger_alert: Option<f64>,
}

impl Row {
    /// Encode the row as a single line of JSON.
    ///
    /// The timestamp is written in ISO 8601 form and an absent ratio or alert
    /// as `null`.
    pub fn to_json_line(&self) -> Result<String, PricingError> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }
}

/// Build a `Row` from the quotes of the numerator and denominator stocks.
pub fn generate_row(quote_a: &Quote, quote_b: &Quote, bounds: &Bounds) -> Result<Row, PricingError> {
    let price_a = get_data_point(quote_a).price;
    let price_b = get_data_point(quote_b).price;
    let ratio = get_ratio(price_a, price_b);
    let timestamp = quote_a.parsed_timestamp()?.max(quote_b.parsed_timestamp()?);
    let trigger_alert = ratio.filter(|r| !bounds.contains(*r));

    Ok(Row {
        price_a,
        price_b,
        ratio,
        upper_bound: bounds.upper,
        lower_bound: bounds.lower,
        timestamp,
        trigger_alert,
    })
}
