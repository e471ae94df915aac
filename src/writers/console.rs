//! Console writer implementation

use crate::core::caller::basename;
use crate::core::{stringify, Config, Record, Result, Sink, Writer};
use std::fmt::Write as _;
use std::sync::OnceLock;

/// Line-oriented text writer, stderr by default.
///
/// Output per entry:
///
/// ```text
/// <tag>[/<file>:<line>] [<LEVEL>] <message>
/// \t<name> = <value>
/// ```
///
/// When the sink is a terminal the level token is preceded by
/// `\x1b[0;<code>m` and the entry ends with `\x1b[0m`. The terminal probe
/// runs once per writer and is never repeated.
pub struct ConsoleWriter {
    sink: Sink,
    colors: OnceLock<bool>,
}

impl ConsoleWriter {
    pub fn new() -> Self {
        Self::with_sink(Sink::stderr())
    }

    pub fn with_sink(sink: Sink) -> Self {
        Self {
            sink,
            colors: OnceLock::new(),
        }
    }

    /// Force colors on or off instead of probing the sink
    ///
    /// # Example
    ///
    /// ```
    /// use rust_field_logger::writers::ConsoleWriter;
    ///
    /// let writer = ConsoleWriter::new().with_colors(false);
    /// ```
    #[must_use]
    pub fn with_colors(self, use_colors: bool) -> Self {
        let colors = OnceLock::new();
        let _ = colors.set(use_colors);
        Self {
            sink: self.sink,
            colors,
        }
    }

    fn use_colors(&self) -> bool {
        *self.colors.get_or_init(|| self.sink.is_terminal())
    }

    /// Render a record to the exact text this writer would emit
    pub fn format(&self, record: &Record<'_>) -> Result<String> {
        let colors = self.use_colors();
        let mut out = String::with_capacity(64 + record.message.len());

        out.push_str(record.tag);
        if let Some(site) = record.location {
            let _ = write!(out, "/{}:{}", basename(site.file()), site.line());
        }
        if colors {
            let _ = write!(out, "\x1b[0;{}m", record.level.color().to_fg_str());
        }
        let _ = writeln!(out, " [{}] {}", record.level.name(), record.message);

        for field in record.all_fields() {
            for (name, value) in stringify::render(field)? {
                let _ = writeln!(out, "\t{} = {}", name, value);
            }
        }

        if colors {
            out.push_str("\x1b[0m");
        }
        Ok(out)
    }
}

impl Default for ConsoleWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for ConsoleWriter {
    fn write(&self, config: &Config, record: &Record<'_>) -> Result<()> {
        if !config.enabled(record.level) {
            return Ok(());
        }
        // Rendered fully before locking, so a failing field writes nothing
        let entry = self.format(record)?;
        self.sink.write_entry(entry.as_bytes())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Level, LoggerError};
    use crate::fields;
    use std::panic::Location;

    #[test]
    fn test_plain_format() {
        let writer = ConsoleWriter::with_sink(Sink::buffer().0);
        let fields = [fields::string("user", "alice"), fields::int32("retries", -2)];
        let record = Record::new("auth", Level::Warn, "slow login").with_fields(&fields);

        assert_eq!(
            writer.format(&record).unwrap(),
            "auth [WARN] slow login\n\tuser = alice\n\tretries = -2 (0x-2)\n"
        );
    }

    #[test]
    fn test_colored_format() {
        let writer = ConsoleWriter::with_sink(Sink::buffer().0).with_colors(true);
        let record = Record::new("auth", Level::Error, "denied");

        assert_eq!(
            writer.format(&record).unwrap(),
            "auth\x1b[0;31m [ERROR] denied\n\x1b[0m"
        );
    }

    #[test]
    fn test_location_uses_basename() {
        let writer = ConsoleWriter::with_sink(Sink::buffer().0);
        let site = Location::caller();
        let mut record = Record::new("auth", Level::Info, "ok");
        record.location = Some(site);

        assert_eq!(
            writer.format(&record).unwrap(),
            format!("auth/console.rs:{} [INFO] ok\n", site.line())
        );
    }

    #[test]
    fn test_write_respects_threshold() {
        let (sink, buffer) = Sink::buffer();
        let writer = ConsoleWriter::with_sink(sink);
        let config = Config::builder().level(Level::Error).no_writer().build();

        writer
            .write(&config, &Record::new("auth", Level::Info, "skipped"))
            .unwrap();
        assert!(buffer.is_empty());

        writer
            .write(&config, &Record::new("auth", Level::Error, "kept"))
            .unwrap();
        assert_eq!(buffer.contents(), "auth [ERROR] kept\n");
    }

    #[test]
    fn test_unsupported_field_writes_nothing() {
        let (sink, buffer) = Sink::buffer();
        let writer = ConsoleWriter::with_sink(sink);
        let config = Config::builder().no_writer().build();
        let fields = [fields::float64s("samples", &[0.5])];
        let record = Record::new("auth", Level::Info, "bad").with_fields(&fields);

        let err = writer.write(&config, &record).unwrap_err();
        assert!(matches!(err, LoggerError::UnsupportedFieldType { .. }));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_empty_postponed_field_adds_no_line() {
        let writer = ConsoleWriter::with_sink(Sink::buffer().0);
        let fields = [fields::postpone_file_name("file")];
        let record = Record::new("auth", Level::Info, "outside").with_fields(&fields);
        assert_eq!(writer.format(&record).unwrap(), "auth [INFO] outside\n");
    }
}
