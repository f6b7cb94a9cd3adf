//! Error types for the terminal facade

pub type Result<T> = std::result::Result<T, TerminalError>;

/// Faults a severity write can surface to its caller.
///
/// Configuration faults never appear here: an unreadable or malformed
/// environment value silently degrades to the fallback level instead.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    /// The sink rejected a write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
