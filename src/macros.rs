//! Logging macros for ergonomic log message formatting.
//!
//! The macros look the severity slot up before touching their format
//! arguments, so a call on a gated-off level costs a single `Option` check
//! and nothing is formatted or allocated.
//!
//! # Examples
//!
//! ```
//! use termlog::{info, LogLevel, Terminal};
//!
//! let terminal = Terminal::with_level(LogLevel::Info);
//!
//! // Basic logging
//! info!(terminal, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(terminal, "Server listening on port {}", port)?;
//! # Ok::<(), termlog::TerminalError>(())
//! ```

/// Log a message at an explicit severity.
///
/// Evaluates to `Ok(())` without building the message when the slot is
/// absent; sink faults from an enabled slot surface in the returned
/// [`Result`](crate::Result).
///
/// # Examples
///
/// ```
/// use termlog::{log, LogLevel, Terminal};
///
/// let terminal = Terminal::with_level(LogLevel::Info);
/// log!(terminal, LogLevel::Info, "simple message")?;
/// log!(terminal, LogLevel::Error, "error code: {}", 500)?;
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($terminal:expr, $severity:expr, $($arg:tt)+) => {
        match $terminal.get($severity) {
            Some(writer) => writer.write_with(|| format!($($arg)+)),
            None => Ok(()),
        }
    };
}

/// Log a critical-severity message.
///
/// # Examples
///
/// ```
/// # use termlog::{LogLevel, Terminal};
/// # let terminal = Terminal::with_level(LogLevel::Critical);
/// use termlog::critical;
/// critical!(terminal, "out of file descriptors")?;
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[macro_export]
macro_rules! critical {
    ($terminal:expr, $($arg:tt)+) => {
        $crate::log!($terminal, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Log an error-severity message.
///
/// # Examples
///
/// ```
/// # use termlog::{LogLevel, Terminal};
/// # let terminal = Terminal::with_level(LogLevel::Error);
/// use termlog::error;
/// error!(terminal, "failed to connect: {}", "refused")?;
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($terminal:expr, $($arg:tt)+) => {
        $crate::log!($terminal, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warn-severity message.
///
/// # Examples
///
/// ```
/// # use termlog::{LogLevel, Terminal};
/// # let terminal = Terminal::with_level(LogLevel::Warn);
/// use termlog::warn;
/// warn!(terminal, "retry attempt {} of {}", 3, 5)?;
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($terminal:expr, $($arg:tt)+) => {
        $crate::log!($terminal, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// # Examples
///
/// ```
/// # use termlog::{LogLevel, Terminal};
/// # let terminal = Terminal::with_level(LogLevel::Info);
/// use termlog::info;
/// info!(terminal, "processing {} items", 100)?;
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($terminal:expr, $($arg:tt)+) => {
        $crate::log!($terminal, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-severity message.
///
/// # Examples
///
/// ```
/// # use termlog::{LogLevel, Terminal};
/// # let terminal = Terminal::with_level(LogLevel::Debug);
/// use termlog::debug;
/// debug!(terminal, "counter value: {}", 10)?;
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($terminal:expr, $($arg:tt)+) => {
        $crate::log!($terminal, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log a trace-severity message.
///
/// # Examples
///
/// ```
/// # use termlog::{LogLevel, Terminal};
/// # let terminal = Terminal::with_level(LogLevel::Trace);
/// use termlog::trace;
/// trace!(terminal, "entering handler for {}", "/health")?;
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[macro_export]
macro_rules! trace {
    ($terminal:expr, $($arg:tt)+) => {
        $crate::log!($terminal, $crate::LogLevel::Trace, $($arg)+)
    };
}
