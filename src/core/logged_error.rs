//! Errors that remember whether they have been logged
//!
//! A [`LoggedError`] carries a one-way flag that flips the first time its
//! message is rendered. Layers further up the call stack check
//! [`LoggedError::logged`] before logging it again, so an error is emitted at
//! most once while it propagates.

use super::encoder::{Encodable, FieldEncoder};
use super::error::LoggerError;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Boxed error accepted wherever a plain error is wrapped
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

struct Inner {
    tag: String,
    source: BoxError,
    logged: AtomicBool,
}

/// An error tagged with its owner and a "has been logged" flag.
///
/// Clones share the flag. Rendering the message through
/// [`LoggedError::message`] or `Display` marks every clone as logged; only
/// render it when it is actually being emitted.
#[derive(Clone)]
pub struct LoggedError {
    inner: Arc<Inner>,
}

impl LoggedError {
    /// Create a new, not yet logged, error with a message.
    ///
    /// Use [`logged_error!`](crate::logged_error) for a formatted message.
    pub fn new(tag: impl Into<String>, message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self::wrap(tag, BoxError::from(message))
    }

    fn wrap(tag: impl Into<String>, source: BoxError) -> Self {
        Self {
            inner: Arc::new(Inner {
                tag: tag.into(),
                source,
                logged: AtomicBool::new(false),
            }),
        }
    }

    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    /// Whether the message has been rendered
    pub fn logged(&self) -> bool {
        self.inner.logged.load(Ordering::Relaxed)
    }

    /// Set the flag, returning `true` only for the caller that flipped it
    pub(crate) fn claim(&self) -> bool {
        !self.inner.logged.swap(true, Ordering::AcqRel)
    }

    /// Render the wrapped error's message and mark this error as logged
    pub fn message(&self) -> String {
        self.inner.logged.store(true, Ordering::Relaxed);
        self.inner.source.to_string()
    }

    /// The wrapped error, without touching the logged flag
    pub fn inner(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.inner.source
    }

    /// Whether `other` is a clone of this error
    pub fn same_as(&self, other: &LoggedError) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

// Display is the message accessor: formatting marks the error logged.
impl fmt::Display for LoggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.inner.tag, self.message())
    }
}

impl fmt::Debug for LoggedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggedError")
            .field("tag", &self.inner.tag)
            .field("source", &self.inner.source)
            .field("logged", &self.logged())
            .finish()
    }
}

impl Error for LoggedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.inner.source)
    }
}

impl Encodable for LoggedError {
    fn encode(&self, enc: &mut dyn FieldEncoder) {
        enc.string("tag", self.tag());
        enc.string("error", &self.message());
    }
}

/// An error that either already carries the logged flag or does not.
///
/// Passed explicitly instead of probing the error's type at every layer.
#[derive(Debug)]
pub enum ErrorValue {
    Logged(LoggedError),
    Plain(BoxError),
}

impl ErrorValue {
    pub fn plain<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        ErrorValue::Plain(Box::new(err))
    }
}

impl fmt::Display for ErrorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorValue::Logged(err) => fmt::Display::fmt(err, f),
            ErrorValue::Plain(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl From<LoggedError> for ErrorValue {
    fn from(err: LoggedError) -> Self {
        ErrorValue::Logged(err)
    }
}

impl From<&LoggedError> for ErrorValue {
    fn from(err: &LoggedError) -> Self {
        ErrorValue::Logged(err.clone())
    }
}

// A LoggedError that went through a Box<dyn Error> is recovered, not re-wrapped
impl From<BoxError> for ErrorValue {
    fn from(err: BoxError) -> Self {
        match err.downcast::<LoggedError>() {
            Ok(logged) => ErrorValue::Logged(*logged),
            Err(plain) => ErrorValue::Plain(plain),
        }
    }
}

impl From<std::io::Error> for ErrorValue {
    fn from(err: std::io::Error) -> Self {
        ErrorValue::plain(err)
    }
}

impl From<LoggerError> for ErrorValue {
    fn from(err: LoggerError) -> Self {
        ErrorValue::plain(err)
    }
}

impl From<String> for ErrorValue {
    fn from(msg: String) -> Self {
        ErrorValue::Plain(BoxError::from(msg))
    }
}

impl From<&str> for ErrorValue {
    fn from(msg: &str) -> Self {
        ErrorValue::Plain(BoxError::from(msg))
    }
}

/// Wrap an error so it carries the logged flag.
///
/// An error that already is a [`LoggedError`] is returned unchanged, flag and
/// tag included, and the second element is `true`. A plain error is wrapped
/// freshly under `tag` and the second element is `false`.
pub fn wrap_error(tag: &str, err: impl Into<ErrorValue>) -> (LoggedError, bool) {
    match err.into() {
        ErrorValue::Logged(logged) => (logged, true),
        ErrorValue::Plain(plain) => (LoggedError::wrap(tag, plain), false),
    }
}
