//! The process-wide application terminal
//!
//! For application developers; a library should call
//! [`create_terminal`](crate::create_terminal) instead so its host opts into
//! output through a variable the library names.

use crate::core::level::LogLevel;
use crate::core::terminal::Terminal;
use std::sync::OnceLock;

/// The environment variable the application terminal reads its level from.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

static TERMINAL: OnceLock<Terminal> = OnceLock::new();

/// The process-wide application terminal.
///
/// Built on first access from [`LOG_LEVEL_VAR`], falling back to
/// [`LogLevel::Info`] when the variable is absent or invalid; the resolved
/// level is fixed for the process lifetime.
///
/// # Examples
///
/// ```
/// use termlog::app;
///
/// if let Some(info) = app::terminal().info() {
///     info.write("Hello World!")?;
/// }
/// // ~[TIMESTAMP] [INFO] Hello World!
/// # Ok::<(), termlog::TerminalError>(())
/// ```
pub fn terminal() -> &'static Terminal {
    TERMINAL.get_or_init(|| Terminal::from_env(None, LOG_LEVEL_VAR, LogLevel::Info))
}
