//! Result type alias shared across the workspace.
//!
//! Defaults the error type to `PricingError`, so functions can simply return
//! `Result<T>`.
use crate::error::PricingError;

/// Workspace-wide `Result` alias with `PricingError` as the default error.
pub type Result<T, E = PricingError> = std::result::Result<T, E>;
