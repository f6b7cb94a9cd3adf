//! The stdout sink

use crate::core::error::Result;
use std::io::{self, Write};

/// The process standard-output sink.
///
/// Each call locks stdout, writes one complete line, and flushes before
/// returning; `write_all` keeps retrying short writes until the stream has
/// accepted every byte. Nothing is buffered across calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    /// Append `line` plus a line terminator to stdout.
    pub fn write_line(&self, line: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}
