//! Timestamp formatting
//!
//! The precision of the host clock is probed once per process and the result
//! reused for every write, never re-detected per call.

use chrono::{DateTime, Utc};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

static PROBED: OnceLock<ClockKind> = OnceLock::new();

/// The timestamp precision the host clock supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockKind {
    /// ISO 8601 with microseconds: `2025-01-08T10:30:45.123456Z`
    Micros,
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Millis,
}

impl ClockKind {
    /// The process-wide clock kind, probed on first use.
    #[must_use]
    pub fn probed() -> Self {
        *PROBED.get_or_init(Self::detect)
    }

    /// Sample the system clock a few times; any reading that resolves below
    /// one millisecond means the high-precision format is usable.
    fn detect() -> Self {
        for _ in 0..8 {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.subsec_nanos())
                .unwrap_or(0);
            if nanos % 1_000_000 != 0 {
                return ClockKind::Micros;
            }
        }
        ClockKind::Millis
    }

    /// Format an instant at this precision.
    #[must_use]
    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        match self {
            ClockKind::Micros => instant.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            ClockKind::Millis => instant.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        }
    }

    /// Format the current time at this precision.
    #[must_use]
    pub fn now(&self) -> String {
        self.format(&Utc::now())
    }
}
