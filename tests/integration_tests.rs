//! Integration tests for the field logger
//!
//! These tests verify:
//! - Console output format and field ordering
//! - Level filtering
//! - At-most-once error logging across layers
//! - Custom writers receiving typed fields
//! - JSON output through the encoder protocol

use rust_field_logger::prelude::*;
use rust_field_logger::{Record, RecordingEncoder, SinkBuffer};
use parking_lot::Mutex;
use std::sync::Arc;

fn console_logger(tag: &str, level: Level) -> (Logger, SinkBuffer) {
    let (sink, buffer) = Sink::buffer();
    let config = Config::builder()
        .level(level)
        .include_caller_info(false)
        .writer(ConsoleWriter::with_sink(sink))
        .build();
    (Logger::with_config(tag, config), buffer)
}

#[test]
fn test_console_format_with_fields() {
    let (logger, buffer) = console_logger("orders", Level::Debug);

    logger.info(
        "order placed",
        &[
            fields::string("customer", "c-17"),
            fields::int64("delta", -5),
            fields::bytes("digest", &[0x0a, 0xff]),
            fields::strings("items", &["apple", "pear"]),
            fields::float64("total", 12.5),
        ],
    );

    assert_eq!(
        buffer.contents(),
        "orders [INFO] order placed\n\
         \tcustomer = c-17\n\
         \tdelta = -5 (0x-5)\n\
         \tdigest = 0aff\n\
         \titems = apple, pear\n\
         \ttotal = 12.5\n"
    );
}

#[test]
fn test_field_order_matches_call_order() {
    let (logger, buffer) = console_logger("order", Level::Debug);
    let names = ["zeta", "alpha", "mid", "alpha"];
    let fields: Vec<Field> = names
        .iter()
        .enumerate()
        .map(|(i, name)| fields::uint8(*name, i as u8))
        .collect();

    logger.debug("ordered", &fields);

    let contents = buffer.contents();
    let seen: Vec<&str> = contents
        .lines()
        .skip(1)
        .map(|line| line.trim_start_matches('\t').split(" = ").next().unwrap())
        .collect();
    assert_eq!(seen, names);
}

#[test]
fn test_filtered_entries_produce_no_output() {
    let (logger, buffer) = console_logger("quiet", Level::Error);

    logger.warn("w", &[fields::string("k", "v")]);
    logger.info("i", &[]);
    logger.debug("d", &[]);
    assert!(buffer.is_empty());

    logger.config().set_level(Level::Debug);
    logger.debug("d", &[]);
    assert_eq!(buffer.contents(), "quiet [DEBUG] d\n");
}

#[test]
fn test_caller_info_toggle() {
    let (sink, buffer) = Sink::buffer();
    let config = Config::builder()
        .writer(ConsoleWriter::with_sink(sink))
        .build();
    let logger = Logger::with_config("svc", config);

    let line = line!() + 1;
    logger.info("with caller", &[]);
    logger.config().set_include_caller_info(false);
    logger.info("without caller", &[]);

    assert_eq!(
        buffer.contents(),
        format!(
            "svc/integration_tests.rs:{} [INFO] with caller\nsvc [INFO] without caller\n",
            line
        )
    );
}

fn load_record(logger: &Logger) -> std::result::Result<(), LoggedError> {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "record 7 missing");
    Err(logger.errore(io_err))
}

fn handle_request(logger: &Logger) -> std::result::Result<(), LoggedError> {
    load_record(logger).map_err(|err| logger.errore(err))
}

#[test]
fn test_error_logged_once_across_layers() {
    let (logger, buffer) = console_logger("api", Level::Debug);

    let err = handle_request(&logger).map_err(|err| logger.errore(err)).unwrap_err();

    assert!(err.logged());
    assert_eq!(buffer.contents(), "api [ERROR] record 7 missing\n");
}

#[test]
fn test_errorex_adds_context_entry() {
    let (logger, buffer) = console_logger("api", Level::Debug);

    let first = logger.errore("timeout");
    logger.errore(first.clone());
    logger.errorex("fetching profile", first, &[fields::uint32("attempt", 2)]);

    assert_eq!(
        buffer.contents(),
        "api [ERROR] timeout\n\
         api [ERROR] fetching profile: api: timeout\n\
         \tattempt = 2 (0x2)\n"
    );
}

#[test]
fn test_wrap_error_keeps_flag_through_layers() {
    let (inner, was_logged) = wrap_error("inner", "boom");
    assert!(!was_logged);

    let (outer, was_logged) = wrap_error("outer", inner.clone());
    assert!(was_logged);
    assert!(!outer.logged());

    let _ = inner.message();
    let (outermost, _) = wrap_error("outermost", outer);
    assert!(outermost.logged());
    assert_eq!(outermost.tag(), "inner");
}

#[test]
fn test_error_fields_nest_logged_and_render_plain() {
    let (logger, buffer) = console_logger("jobs", Level::Debug);
    let cause = LoggedError::new("db", "deadlock");
    let io_err = std::io::Error::new(std::io::ErrorKind::TimedOut, "socket timeout");

    logger.warn("retrying", &[fields::error("cause", cause.clone())]);
    assert!(cause.logged());

    logger.warn("giving up", &[fields::error("cause", io_err)]);

    assert_eq!(
        buffer.contents(),
        "jobs [WARN] retrying\n\
         \tcause = {tag = db, error = deadlock}\n\
         jobs [WARN] giving up\n\
         \tcause = socket timeout\n"
    );
}

#[test]
fn test_errore_names_owner_of_foreign_error() {
    let (logger, buffer) = console_logger("api", Level::Debug);

    let err = logger.errore(rust_field_logger::logged_error!("parser", "unexpected token"));
    logger.errore(err);

    assert_eq!(buffer.contents(), "api [ERROR] parser: unexpected token\n");
}

struct CapturingWriter {
    entries: Mutex<Vec<(Level, String, Vec<rust_field_logger::Event>)>>,
}

impl Writer for CapturingWriter {
    fn write(&self, config: &Config, record: &Record<'_>) -> Result<()> {
        if !config.enabled(record.level) {
            return Ok(());
        }
        let mut rec = RecordingEncoder::new();
        for field in record.all_fields() {
            field.encode(&mut rec);
        }
        self.entries
            .lock()
            .push((record.level, record.message.to_string(), rec.into_events()));
        Ok(())
    }

    fn name(&self) -> &str {
        "capturing"
    }
}

#[test]
fn test_custom_writer_receives_typed_fields() {
    let writer = Arc::new(CapturingWriter {
        entries: Mutex::new(Vec::new()),
    });
    let config = Config::builder().shared_writer(writer.clone()).build();
    let logger = Logger::with_config("custom", config).with_fields([fields::string("host", "h1")]);

    logger.info("typed", &[fields::int16("n", 3), fields::int64s("ids", &[4, 5])]);

    let entries = writer.entries.lock();
    assert_eq!(entries.len(), 1);
    let (level, message, events) = &entries[0];
    assert_eq!(*level, Level::Info);
    assert_eq!(message, "typed");
    let kinds: Vec<FieldType> = events.iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![FieldType::String, FieldType::Int16, FieldType::Array]);
    assert_eq!(events[2].children.len(), 2);
}

#[test]
fn test_postponed_vs_immediate_location() {
    let (logger, buffer) = console_logger("loc", Level::Debug);

    let built_at = line!() + 1;
    let fields = [fields::line_number("built"), fields::postpone_line_number("logged")];
    let logged_at = line!() + 1;
    logger.info("where", &fields);

    assert_eq!(
        buffer.contents(),
        format!(
            "loc [INFO] where\n\tbuilt = {} (0x{:x})\n\tlogged = {} (0x{:x})\n",
            built_at, built_at, logged_at, logged_at
        )
    );
}

#[test]
fn test_json_writer_end_to_end() {
    let (sink, buffer) = Sink::buffer();
    let config = Config::builder()
        .include_caller_info(false)
        .writer(JsonWriter::new(sink))
        .build();
    let logger = Logger::with_config("api", config);

    logger.info(
        "request",
        &[
            fields::string("path", "/users"),
            fields::uint16s("codes", &[200, 404]),
            fields::object("client", |enc| {
                enc.string("ip", "10.0.0.1");
                enc.bool("tls", true);
            }),
        ],
    );

    assert_eq!(
        buffer.contents(),
        "{\"tag\":\"api\",\"level\":\"INFO\",\"message\":\"request\",\"fields\":\
         {\"path\":\"/users\",\"codes\":[200,404],\"client\":{\"ip\":\"10.0.0.1\",\"tls\":true}}}\n"
    );
}

#[test]
fn test_settings_drive_config() {
    let settings: rust_field_logger::Settings =
        serde_json::from_str(r#"{"level": "INFO", "include_caller_info": false}"#).unwrap();
    let config = Config::from_settings(&settings);
    assert_eq!(config.level(), Level::Info);
    assert!(!config.include_caller_info());
}
