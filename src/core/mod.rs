//! Core terminal types

pub mod clock;
mod env;
pub mod error;
pub mod level;
pub mod message;
pub mod terminal;

pub use clock::ClockKind;
pub use error::{Result, TerminalError};
pub use level::LogLevel;
pub use message::Message;
pub use terminal::{create_terminal, SeverityWriter, Terminal};
