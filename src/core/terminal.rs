//! Terminal capability records and severity writers

use super::clock::ClockKind;
use super::env::level_from_env;
use super::error::Result;
use super::level::LogLevel;
use super::message::Message;
use crate::sink::StdoutSink;

/// Writes lines for one severity of one terminal.
///
/// A writer only exists for severities that survived gating, so holding one
/// is already proof the line will be written, barring sink faults.
pub struct SeverityWriter {
    prefix: String,
    clock: ClockKind,
    sink: StdoutSink,
}

impl SeverityWriter {
    fn new(severity: LogLevel, name: Option<&str>, clock: ClockKind) -> Self {
        let prefix = match name {
            Some(name) => format!("[{}] [{}] ", severity.to_str(), name),
            None => format!("[{}] ", severity.to_str()),
        };
        Self {
            prefix,
            clock,
            sink: StdoutSink,
        }
    }

    /// Resolve `message` and append it to stdout as one complete line.
    pub fn write(&self, message: impl Into<Message>) -> Result<()> {
        self.emit(message.into().resolve())
    }

    /// Like [`SeverityWriter::write`] with an unboxed producer; the logging
    /// macros route through this so format arguments stay unevaluated for
    /// gated-off levels.
    pub fn write_with<F>(&self, produce: F) -> Result<()>
    where
        F: FnOnce() -> String,
    {
        self.emit(produce())
    }

    fn emit(&self, text: String) -> Result<()> {
        self.sink.write_line(&self.format_line(&text))
    }

    /// `~[<timestamp>] [<SEVERITY>] [<name>] <message>`
    fn format_line(&self, text: &str) -> String {
        format!("~[{}] {}{}", self.clock.now(), self.prefix, text)
    }
}

/// A named bundle of optional severity-indexed writers.
///
/// Slot presence is the gating mechanism: a severity excluded by the
/// threshold is absent from the record rather than present as a no-op, so
/// call sites reach writers through `Option` accessors and skip message
/// construction entirely when a slot is gone.
///
/// # Examples
///
/// ```
/// use termlog::{LogLevel, Terminal};
///
/// let terminal = Terminal::with_level(LogLevel::Warn);
/// assert!(terminal.error().is_some());
/// assert!(terminal.debug().is_none());
///
/// if let Some(warn) = terminal.warn() {
///     warn.write("disk space low")?;
/// }
/// # Ok::<(), termlog::TerminalError>(())
/// ```
pub struct Terminal {
    name: Option<String>,
    level: LogLevel,
    critical: Option<SeverityWriter>,
    error: Option<SeverityWriter>,
    warn: Option<SeverityWriter>,
    info: Option<SeverityWriter>,
    debug: Option<SeverityWriter>,
    trace: Option<SeverityWriter>,
}

impl Terminal {
    /// Build an unnamed terminal gated at `level`.
    #[must_use]
    pub fn with_level(level: LogLevel) -> Self {
        Self::build(None, level)
    }

    /// Build a terminal that stamps `name` into every line, gated at `level`.
    #[must_use]
    pub fn named(name: impl Into<String>, level: LogLevel) -> Self {
        Self::build(Some(name.into()), level)
    }

    pub(crate) fn from_env(name: Option<String>, env_var: &str, fallback: LogLevel) -> Self {
        Self::build(name, level_from_env(env_var, fallback))
    }

    fn build(name: Option<String>, level: LogLevel) -> Self {
        let clock = ClockKind::probed();
        // A severity survives when its rank is at most the threshold; the
        // None threshold (rank 0) outranks nothing, clearing every slot.
        let writer = |severity: LogLevel| {
            (severity <= level).then(|| SeverityWriter::new(severity, name.as_deref(), clock))
        };
        let critical = writer(LogLevel::Critical);
        let error = writer(LogLevel::Error);
        let warn = writer(LogLevel::Warn);
        let info = writer(LogLevel::Info);
        let debug = writer(LogLevel::Debug);
        let trace = writer(LogLevel::Trace);
        Self {
            name,
            level,
            critical,
            error,
            warn,
            info,
            debug,
            trace,
        }
    }

    /// The writer for critical messages, absent when gated off.
    #[inline]
    #[must_use]
    pub fn critical(&self) -> Option<&SeverityWriter> {
        self.critical.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&SeverityWriter> {
        self.error.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn warn(&self) -> Option<&SeverityWriter> {
        self.warn.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn info(&self) -> Option<&SeverityWriter> {
        self.info.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn debug(&self) -> Option<&SeverityWriter> {
        self.debug.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn trace(&self) -> Option<&SeverityWriter> {
        self.trace.as_ref()
    }

    /// Look a slot up by severity. `LogLevel::None` has no slot.
    #[must_use]
    pub fn get(&self, severity: LogLevel) -> Option<&SeverityWriter> {
        match severity {
            LogLevel::None => None,
            LogLevel::Critical => self.critical.as_ref(),
            LogLevel::Error => self.error.as_ref(),
            LogLevel::Warn => self.warn.as_ref(),
            LogLevel::Info => self.info.as_ref(),
            LogLevel::Debug => self.debug.as_ref(),
            LogLevel::Trace => self.trace.as_ref(),
        }
    }

    /// The name stamped into this terminal's lines, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The threshold this terminal was gated at.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

/// Create a named terminal for library use.
///
/// The threshold is read once from `env_var`, falling back to
/// [`LogLevel::None`] so a library stays silent unless its host opts in.
/// Application developers should use [`crate::app::terminal`] instead, which
/// reads the fixed `LOG_LEVEL` variable and defaults to `Info`.
///
/// # Examples
///
/// ```
/// use termlog::create_terminal;
///
/// let terminal = create_terminal("my-app", "MY_APP_LOG");
/// if let Some(info) = terminal.info() {
///     info.write("Hello World!")?;
/// }
/// // ~[TIMESTAMP] [INFO] [my-app] Hello World!
/// # Ok::<(), termlog::TerminalError>(())
/// ```
#[must_use]
pub fn create_terminal(name: impl Into<String>, env_var: &str) -> Terminal {
    Terminal::from_env(Some(name.into()), env_var, LogLevel::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_slot_invariant_over_all_thresholds() {
        for rank in 0..=6u8 {
            let threshold = LogLevel::from_rank(rank).expect("rank in range");
            let terminal = Terminal::with_level(threshold);
            assert_eq!(terminal.level(), threshold);
            for severity in LogLevel::SEVERITIES {
                let expected = rank != 0 && severity.rank() <= rank;
                assert_eq!(
                    terminal.get(severity).is_some(),
                    expected,
                    "severity {} at threshold {}",
                    severity,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_none_threshold_clears_every_slot() {
        let terminal = Terminal::named("svc", LogLevel::None);
        assert!(terminal.critical().is_none());
        assert!(terminal.error().is_none());
        assert!(terminal.warn().is_none());
        assert!(terminal.info().is_none());
        assert!(terminal.debug().is_none());
        assert!(terminal.trace().is_none());
    }

    #[test]
    fn test_none_is_never_a_slot() {
        let terminal = Terminal::with_level(LogLevel::Trace);
        assert!(terminal.get(LogLevel::None).is_none());
    }

    #[test]
    fn test_line_shape_unnamed() {
        let terminal = Terminal::with_level(LogLevel::Trace);
        let writer = terminal.critical().expect("critical enabled at Trace");
        let line = writer.format_line("x");
        assert!(line.starts_with("~["), "line: {}", line);
        assert!(line.contains("] [CRITICAL] "), "line: {}", line);
        assert!(line.ends_with(" x"), "line: {}", line);
        assert!(!line.contains('\n'), "line: {}", line);
    }

    #[test]
    fn test_line_shape_named() {
        let terminal = Terminal::named("svc", LogLevel::Info);
        let writer = terminal.info().expect("info enabled");
        let line = writer.format_line("Hello World!");
        assert!(line.contains("] [INFO] [svc] Hello World!"), "line: {}", line);
    }

    #[test]
    fn test_ready_and_lazy_lines_match_after_timestamp() {
        let terminal = Terminal::with_level(LogLevel::Info);
        let writer = terminal.info().expect("info enabled");
        let ready = writer.format_line(&Message::from("hello").resolve());
        let lazy = writer.format_line(&Message::lazy(|| String::from("hello")).resolve());
        let tail = |line: &str| {
            let cut = line.find("] ").expect("timestamp bracket");
            line[cut..].to_string()
        };
        assert_eq!(tail(&ready), tail(&lazy));
    }

    #[test]
    fn test_gated_off_slot_never_touches_the_producer() {
        let terminal = Terminal::with_level(LogLevel::Info);
        let calls = Cell::new(0);
        if let Some(writer) = terminal.trace() {
            writer
                .write_with(|| {
                    calls.set(calls.get() + 1);
                    String::from("expensive")
                })
                .expect("write");
        }
        assert_eq!(calls.get(), 0);
    }
}
