//! Mid price extraction and the guarded price ratio.
//!
//! Both functions are pure: a `DataPoint` is built fresh from a `Quote` on every
//! call, and `get_ratio` signals a zero denominator with `None` instead of
//! producing an infinite or NaN value.
use crate::quote::Quote;

/// Prices derived from a single quote.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    /// Stock symbol.
    pub stock: String,
    /// Top bid price.
    pub bid_price: f64,
    /// Top ask price.
    pub ask_price: f64,
    /// Mid price, the mean of bid and ask.
    pub price: f64,
}

impl From<DataPoint> for (String, f64, f64, f64) {
    fn from(point: DataPoint) -> Self {
        (point.stock, point.bid_price, point.ask_price, point.price)
    }
}

/// Project a quote onto its symbol, bid, ask and mid price.
///
/// Bid above ask is accepted as is; the mid price is the arithmetic mean
/// whichever side is higher.
pub fn get_data_point(quote: &Quote) -> DataPoint {
    let bid_price = quote.top_bid.price;
    let ask_price = quote.top_ask.price;
    DataPoint {
        stock: quote.stock.clone(),
        bid_price,
        ask_price,
        price: (bid_price + ask_price) / 2.0,
    }
}

/// Ratio of `price_a` to `price_b`, or `None` when `price_b` is zero.
pub fn get_ratio(price_a: f64, price_b: f64) -> Option<f64> {
    if price_b == 0.0 {
        return None;
    }
    Some(price_a / price_b)
}
