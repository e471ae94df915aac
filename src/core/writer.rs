//! Writer trait for log output

use super::config::Config;
use super::error::Result;
use super::field::Field;
use super::level::Level;
use std::panic::Location;

/// Everything a writer needs to render one entry
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub tag: &'a str,
    pub level: Level,
    pub message: &'a str,
    /// Fields attached to the logger, emitted before `fields`
    pub standard_fields: &'a [Field],
    pub fields: &'a [Field],
    /// Call site of the log statement; `None` when caller info is disabled
    pub location: Option<&'static Location<'static>>,
}

impl<'a> Record<'a> {
    pub fn new(tag: &'a str, level: Level, message: &'a str) -> Self {
        Self {
            tag,
            level,
            message,
            standard_fields: &[],
            fields: &[],
            location: None,
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: &'a [Field]) -> Self {
        self.fields = fields;
        self
    }

    /// Standard fields followed by call fields, in the order given
    pub fn all_fields(&self) -> impl Iterator<Item = &'a Field> {
        self.standard_fields.iter().chain(self.fields.iter())
    }
}

/// Renders records to some destination.
///
/// Writers run synchronously on the logging thread. They decide for
/// themselves whether a record passes `config`'s threshold.
pub trait Writer: Send + Sync {
    fn write(&self, config: &Config, record: &Record<'_>) -> Result<()>;
    fn name(&self) -> &str;
}
