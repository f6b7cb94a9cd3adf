//! Threshold resolution from the environment

use super::level::LogLevel;
use std::env;

/// Resolve the effective log level from the named environment variable.
///
/// Every failure path degrades to `fallback`: a variable that is absent or
/// not readable as Unicode, a value that is not a base-10 integer, or a rank
/// outside `0..=6`. Performs a single environment read; the result is fixed
/// for the lifetime of the terminal built from it.
pub(crate) fn level_from_env(name: &str, fallback: LogLevel) -> LogLevel {
    match env::var(name) {
        Ok(raw) => raw.parse().unwrap_or(fallback),
        Err(_) => fallback,
    }
}
