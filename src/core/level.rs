//! Log level definitions

use std::fmt;
use std::str::FromStr;

/// Severity levels ordered by verbosity.
///
/// A terminal gated at threshold `T` keeps exactly the severities whose rank
/// is in `1..=T`. `None` is never an invokable severity; as a threshold it
/// disables every slot. The numeric ranks are the wire contract for the
/// environment variables that configure a terminal:
///
/// ```text
/// LOG_LEVEL=3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(Default)]
pub enum LogLevel {
    /// Disables all output when used as a threshold.
    None = 0,
    Critical = 1,
    Error = 2,
    Warn = 3,
    #[default]
    Info = 4,
    Debug = 5,
    Trace = 6,
}

impl LogLevel {
    /// Every severity that can appear in output, strongest first.
    /// `None` is excluded: it is a threshold, not a severity.
    pub const SEVERITIES: [LogLevel; 6] = [
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warn,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            LogLevel::None => "NONE",
            LogLevel::Critical => "CRITICAL",
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }

    /// The numeric rank used by the environment contract.
    #[must_use]
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Look a level up by rank, `None` for ranks outside `0..=6`.
    #[must_use]
    pub fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(LogLevel::None),
            1 => Some(LogLevel::Critical),
            2 => Some(LogLevel::Error),
            3 => Some(LogLevel::Warn),
            4 => Some(LogLevel::Info),
            5 => Some(LogLevel::Debug),
            6 => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    /// Parses the base-10 integer contract; names are not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid log level: '{}'", s))?;
        Self::from_rank(rank).ok_or_else(|| format!("log level out of range: '{}'", s))
    }
}
