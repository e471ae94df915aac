//! Main logger implementation

use super::{
    caller,
    config::Config,
    error::LoggerError,
    field::Field,
    level::Level,
    logged_error::{wrap_error, ErrorValue, LoggedError},
    writer::Record,
};
use std::panic::Location;
use std::sync::Arc;

/// Tagged front end over a [`Config`].
///
/// Every method is `#[track_caller]`: the location reported in the output is
/// the line that called the logger. Writing is synchronous; a call returns
/// once the writer has finished.
///
/// # Example
///
/// ```
/// use rust_field_logger::prelude::*;
///
/// let (sink, buffer) = Sink::buffer();
/// let config = Config::builder()
///     .writer(ConsoleWriter::with_sink(sink))
///     .include_caller_info(false)
///     .build();
///
/// let logger = Logger::with_config("billing", config);
/// logger.info("invoice sent", &[fields::uint64("invoice", 42)]);
///
/// assert_eq!(
///     buffer.contents(),
///     "billing [INFO] invoice sent\n\tinvoice = 42 (0x2a)\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Logger {
    tag: Arc<str>,
    config: Arc<Config>,
    standard_fields: Vec<Field>,
}

impl Logger {
    /// Logger using the process-wide [`Config::global`]
    pub fn new(tag: impl Into<Arc<str>>) -> Self {
        Self::with_config(tag, Config::global())
    }

    pub fn with_config(tag: impl Into<Arc<str>>, config: Arc<Config>) -> Self {
        Self {
            tag: tag.into(),
            config,
            standard_fields: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn standard_fields(&self) -> &[Field] {
        &self.standard_fields
    }

    /// Derived logger that also emits `fields` with every entry.
    ///
    /// The derived logger owns a copy of the field list; adding fields to
    /// either logger later does not affect the other.
    #[must_use]
    pub fn with_fields(&self, fields: impl IntoIterator<Item = Field>) -> Logger {
        let mut derived = self.clone();
        derived.standard_fields.extend(fields);
        derived
    }

    /// Append fields emitted with every entry from this logger
    pub fn add_standard_fields(&mut self, fields: impl IntoIterator<Item = Field>) {
        self.standard_fields.extend(fields);
    }

    /// Log at `Error` and return the logged error for propagation.
    ///
    /// The returned error is marked as logged once the entry has been written.
    #[track_caller]
    pub fn error(&self, message: impl Into<String>, fields: &[Field]) -> LoggedError {
        let site = Location::caller();
        let err = LoggedError::new(self.tag.as_ref(), message);
        self.dispatch(Level::Error, site, fields, || err.message());
        err
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Warn, message, fields);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Info, message, fields);
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, fields: &[Field]) {
        self.log(Level::Debug, message, fields);
    }

    #[track_caller]
    pub fn log(&self, level: Level, message: impl Into<String>, fields: &[Field]) {
        let site = Location::caller();
        self.dispatch(level, site, fields, || message.into());
    }

    /// Log `err` unless it has been logged already.
    ///
    /// A plain error is logged by its message under this logger's tag. An
    /// existing [`LoggedError`] is logged as `"<its tag>: <message>"`, so the
    /// owner stays visible when another logger emits it. When several threads
    /// race on one unlogged error, exactly one of them writes the entry.
    ///
    /// Always returns the [`LoggedError`], pre-existing or new, so callers
    /// can keep propagating it without a second entry further up.
    #[track_caller]
    pub fn errore(&self, err: impl Into<ErrorValue>) -> LoggedError {
        let site = Location::caller();
        let (logged, was_logged_error) = wrap_error(&self.tag, err);
        if self.accepts(Level::Error) && logged.claim() {
            if was_logged_error {
                self.dispatch(Level::Error, site, &[], || logged.to_string());
            } else {
                self.dispatch(Level::Error, site, &[], || logged.message());
            }
        }
        logged
    }

    /// Log a new error `"<desc>: <err>"`.
    ///
    /// Unlike [`Logger::errore`] this always emits: the added description
    /// makes it a new, more specific error.
    #[track_caller]
    pub fn errorex(
        &self,
        desc: &str,
        err: impl Into<ErrorValue>,
        fields: &[Field],
    ) -> LoggedError {
        let site = Location::caller();
        let err: ErrorValue = err.into();
        let message = format!("{}: {}", desc, err);
        let (logged, _) = wrap_error(&self.tag, message);
        self.dispatch(Level::Error, site, fields, || logged.message());
        logged
    }

    // An entry at `level` would reach a writer
    fn accepts(&self, level: Level) -> bool {
        self.config.enabled(level) && self.config.writer().is_some()
    }

    fn dispatch(
        &self,
        level: Level,
        site: &'static Location<'static>,
        fields: &[Field],
        message: impl FnOnce() -> String,
    ) {
        let Some(writer) = self.config.writer() else {
            return;
        };
        if !self.config.enabled(level) {
            return;
        }

        let message = message();
        let record = Record {
            tag: &self.tag,
            level,
            message: &message,
            standard_fields: &self.standard_fields,
            fields,
            location: self.config.include_caller_info().then_some(site),
        };

        match caller::with_site(site, || writer.write(&self.config, &record)) {
            Ok(()) => {}
            Err(err @ LoggerError::UnsupportedFieldType { .. }) => {
                panic!("[LOGGER FATAL] {}", err);
            }
            Err(err) => {
                eprintln!("[LOGGER ERROR] Writer '{}' failed: {}", writer.name(), err);
            }
        }
    }
}
