//! Environment variable parsing with warn-level logging for invalid values.

use crate::constants::{MAX_PAGE_LIMIT, MAX_PAGE_LIMIT_ENV};

/// Parse an environment variable with a default fallback.
///
/// - If the variable is not set: returns `default` silently (expected case).
/// - If the variable is set but cannot be parsed: logs a warning and returns `default`.
pub fn env_parse_with_default<T: std::str::FromStr + std::fmt::Display>(
    var: &str,
    default: T,
) -> T {
    match std::env::var(var) {
        Ok(v) => match v.parse() {
            Ok(n) => n,
            Err(_) => {
                tracing::warn!(
                    var,
                    value = %v,
                    default = %default,
                    "invalid env var value, using default"
                );
                default
            },
        },
        Err(_) => default,
    }
}

/// Maximum accepted page size, honoring `PRODUCT_API_MAX_LIMIT`.
///
/// A zero override would reject every request, so it falls back to the default.
#[must_use]
pub fn max_page_limit() -> usize {
    match env_parse_with_default(MAX_PAGE_LIMIT_ENV, MAX_PAGE_LIMIT) {
        0 => {
            tracing::warn!(var = MAX_PAGE_LIMIT_ENV, "zero page limit ignored, using default");
            MAX_PAGE_LIMIT
        },
        n => n,
    }
}
