//! Latest mid price per stock.
//!
//! The client feeds every `DataPoint` it derives into a `PriceBook` and then
//! asks for the ratio between two named stocks. Later points overwrite earlier
//! ones for the same stock.
use std::collections::HashMap;

use crate::data_point::{DataPoint, get_ratio};
use crate::error::PricingError;

/// Mid prices keyed by stock symbol.
#[derive(Debug, Default, Clone)]
pub struct PriceBook {
    prices: HashMap<String, f64>,
}

impl PriceBook {
    /// Create an empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the mid price of `point`, replacing any previous one for its stock.
    pub fn record(&mut self, point: &DataPoint) {
        self.prices.insert(point.stock.clone(), point.price);
    }

    /// Latest mid price for `stock`.
    pub fn price(&self, stock: &str) -> Option<f64> {
        self.prices.get(stock).copied()
    }

    /// Ratio of the mid prices of `stock_a` and `stock_b`.
    ///
    /// Fails when either stock has no recorded price; a zero price for
    /// `stock_b` yields `Ok(None)`.
    pub fn ratio(&self, stock_a: &str, stock_b: &str) -> Result<Option<f64>, PricingError> {
        let price_a = self
            .price(stock_a)
            .ok_or_else(|| PricingError::UnknownStock(stock_a.to_string()))?;
        let price_b = self
            .price(stock_b)
            .ok_or_else(|| PricingError::UnknownStock(stock_b.to_string()))?;
        Ok(get_ratio(price_a, price_b))
    }
}
