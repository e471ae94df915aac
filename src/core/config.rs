//! Logger configuration
//!
//! A [`Config`] holds the threshold level, the caller-info toggle and the
//! writer. Loggers share a config through an `Arc`; changing it affects every
//! logger holding it. [`Config::global`] is the process-wide default used by
//! [`Logger::new`](crate::Logger::new).

use super::level::Level;
use super::writer::Writer;
use crate::writers::ConsoleWriter;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

static GLOBAL: OnceLock<Arc<Config>> = OnceLock::new();

pub struct Config {
    level: RwLock<Level>,
    include_caller_info: AtomicBool,
    writer: RwLock<Option<Arc<dyn Writer>>>,
}

impl Config {
    /// Caller info on, `Debug` threshold, console writer on stderr
    pub fn new() -> Self {
        Self {
            level: RwLock::new(Level::Debug),
            include_caller_info: AtomicBool::new(true),
            writer: RwLock::new(Some(Arc::new(ConsoleWriter::new()))),
        }
    }

    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// The process-wide config, created with defaults on first use
    pub fn global() -> Arc<Config> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(Config::new())))
    }

    /// Build a config from deserialized settings, with the console writer
    pub fn from_settings(settings: &Settings) -> Arc<Config> {
        Config::builder()
            .level(settings.level)
            .include_caller_info(settings.include_caller_info)
            .build()
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    /// Whether an entry at `level` passes the current threshold
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        level.enabled(self.level())
    }

    pub fn include_caller_info(&self) -> bool {
        self.include_caller_info.load(Ordering::Relaxed)
    }

    pub fn set_include_caller_info(&self, include: bool) {
        self.include_caller_info.store(include, Ordering::Relaxed);
    }

    pub fn writer(&self) -> Option<Arc<dyn Writer>> {
        self.writer.read().clone()
    }

    /// Replace the writer; `None` silences every logger using this config
    pub fn set_writer(&self, writer: Option<Arc<dyn Writer>>) {
        *self.writer.write() = writer;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("level", &self.level())
            .field("include_caller_info", &self.include_caller_info())
            .field("writer", &self.writer.read().as_ref().map(|w| w.name().to_string()))
            .finish()
    }
}

/// Serializable subset of [`Config`], for embedding in application config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub level: Level,
    pub include_caller_info: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            include_caller_info: true,
        }
    }
}

/// Builder for constructing a [`Config`] with a fluent API
///
/// # Example
/// ```
/// use rust_field_logger::prelude::*;
///
/// let (sink, _buffer) = Sink::buffer();
/// let config = Config::builder()
///     .level(Level::Info)
///     .include_caller_info(false)
///     .writer(ConsoleWriter::with_sink(sink))
///     .build();
///
/// assert_eq!(config.level(), Level::Info);
/// ```
pub struct ConfigBuilder {
    level: Level,
    include_caller_info: bool,
    writer: Option<Arc<dyn Writer>>,
}

impl ConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
            include_caller_info: true,
            writer: Some(Arc::new(ConsoleWriter::new())),
        }
    }

    /// Set the threshold level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn include_caller_info(mut self, include: bool) -> Self {
        self.include_caller_info = include;
        self
    }

    /// Set the writer
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Arc::new(writer));
        self
    }

    /// Set a writer that is also held elsewhere
    #[must_use = "builder methods return a new value"]
    pub fn shared_writer(mut self, writer: Arc<dyn Writer>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Drop all output
    #[must_use = "builder methods return a new value"]
    pub fn no_writer(mut self) -> Self {
        self.writer = None;
        self
    }

    /// Build the Config
    pub fn build(self) -> Arc<Config> {
        Arc::new(Config {
            level: RwLock::new(self.level),
            include_caller_info: AtomicBool::new(self.include_caller_info),
            writer: RwLock::new(self.writer),
        })
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
