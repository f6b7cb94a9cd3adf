//! # Termlog
//!
//! A lightweight logging library that writes level-gated lines straight to
//! stdout and skips building messages for excluded levels.
//!
//! ## How it works
//!
//! - Output goes directly to stdout; to keep the logs, pipe the process
//!   output to a file or another process.
//! - The log level is a number in `0..=6` read once from an environment
//!   variable (`LOG_LEVEL` for the application terminal); severities ranked
//!   above it are excluded. An absent or invalid value falls back to `Info`
//!   for the application terminal and to `None` (silent) for library
//!   terminals.
//! - Excluded severities are *absent* from the terminal rather than present
//!   as no-ops: the accessors return `Option<&SeverityWriter>`, so neither
//!   the message nor the closure that would build it is ever touched for a
//!   gated-off level. This removes the need for separate handling of
//!   expensive-to-compute logs.
//!
//! ## Basic usage
//!
//! ```
//! use termlog::app;
//!
//! if let Some(info) = app::terminal().info() {
//!     info.write("Hello World!")?;
//! }
//! // ~[TIMESTAMP] [INFO] Hello World!
//! # Ok::<(), termlog::TerminalError>(())
//! ```
//!
//! ## Library usage
//!
//! ```
//! use termlog::{create_terminal, info};
//!
//! let terminal = create_terminal("my-app", "MY_APP_LOG");
//! info!(terminal, "Hello World!")?;
//! // ~[TIMESTAMP] [INFO] [my-app] Hello World!  (only when MY_APP_LOG is 4 or more)
//! # Ok::<(), termlog::TerminalError>(())
//! ```
//!
//! ## Expensive messages
//!
//! ```
//! use termlog::{LogLevel, Message, Terminal};
//!
//! let terminal = Terminal::with_level(LogLevel::Warn);
//! if let Some(debug) = terminal.debug() {
//!     // Never reached at Warn; the sum is never computed.
//!     debug.write(Message::lazy(|| format!("total: {}", (0..1000).sum::<u32>())))?;
//! }
//! # Ok::<(), termlog::TerminalError>(())
//! ```

pub mod app;
pub mod core;
pub mod macros;
pub mod sink;

pub mod prelude {
    pub use crate::core::{
        create_terminal, ClockKind, LogLevel, Message, Result, SeverityWriter, Terminal,
        TerminalError,
    };
    pub use crate::sink::StdoutSink;
}

pub use crate::core::{
    create_terminal, ClockKind, LogLevel, Message, Result, SeverityWriter, Terminal, TerminalError,
};
pub use crate::sink::StdoutSink;
