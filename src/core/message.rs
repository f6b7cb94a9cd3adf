//! Lazy log message values

use std::borrow::Cow;
use std::fmt;

/// A value that can be written through a severity writer.
///
/// Keep the work of building an expensive message inside a [`Message::lazy`]
/// producer (or use the logging macros): the producer only runs once the
/// severity has survived gating, so suppressed calls never pay for it.
pub enum Message {
    /// A message that is already a string.
    Ready(Cow<'static, str>),
    /// A producer invoked only when the message will actually be written.
    Deferred(Box<dyn FnOnce() -> String>),
}

impl Message {
    /// Wrap a producer that builds the message on demand.
    pub fn lazy<F>(produce: F) -> Self
    where
        F: FnOnce() -> String + 'static,
    {
        Message::Deferred(Box::new(produce))
    }

    /// Resolve to the final text, running the producer if there is one.
    ///
    /// Consumes the message; resolution happens exactly once per call.
    #[must_use]
    pub fn resolve(self) -> String {
        match self {
            Message::Ready(text) => text.into_owned(),
            Message::Deferred(produce) => produce(),
        }
    }
}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Message::Ready(Cow::Borrowed(text))
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Ready(Cow::Owned(text))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(text: Cow<'static, str>) -> Self {
        Message::Ready(text)
    }
}

impl fmt::Debug for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Ready(text) => f.debug_tuple("Ready").field(text).finish(),
            Message::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
