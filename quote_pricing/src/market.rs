//! Shared market constants used by the library and the client.

/// Numerator stock of the default pair.
pub const DEFAULT_STOCK_A: &str = "ABC";
/// Denominator stock of the default pair.
pub const DEFAULT_STOCK_B: &str = "DEF";
/// Distance of the upper/lower alert bounds from a ratio of 1.
pub const DEFAULT_THRESHOLD: f64 = 0.05;
/// Layout of `Quote::timestamp`, e.g. `2019-02-11 22:06:30.572453`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";
