//! # Rust Field Logger
//!
//! Structured logging with typed fields and pluggable output formats.
//!
//! ## Features
//!
//! - **Typed Fields**: Named values encoded lazily through closures
//! - **Any Format**: Fields render through the `FieldEncoder` / `ArrayEncoder`
//!   protocol, so console text and JSON share one field model
//! - **Logged Once**: `LoggedError` remembers whether it was emitted, so an
//!   error propagating through several layers is logged a single time
//! - **Thread Safe**: Each entry is written as one block under a lock
//!
//! ```
//! use rust_field_logger::prelude::*;
//!
//! let (sink, buffer) = Sink::buffer();
//! let config = Config::builder()
//!     .level(Level::Info)
//!     .include_caller_info(false)
//!     .writer(ConsoleWriter::with_sink(sink))
//!     .build();
//! let logger = Logger::with_config("store", config);
//!
//! let err = logger.errore("disk full");
//! let again = logger.errore(err);
//! assert!(again.logged());
//! assert_eq!(buffer.contents(), "store [ERROR] disk full\n");
//! ```

pub mod core;
pub mod fields;
pub mod macros;
pub mod writers;

pub mod prelude {
    pub use crate::core::{
        wrap_error, ArrayEncoder, Config, Encodable, ErrorValue, Field, FieldEncoder, FieldType,
        Level, LoggedError, Logger, LoggerError, Result, Sink, Writer,
    };
    pub use crate::fields;
    pub use crate::writers::{ConsoleWriter, JsonWriter};
}

pub use crate::core::{
    wrap_error, ArrayEncoder, BoxError, Complex, Complex128, Complex64, Config, ConfigBuilder,
    Encodable, ErrorValue, Event, Field, FieldEncoder, FieldType, Level, LogEncoder, LoggedError,
    Logger, LoggerError, Record, RecordingEncoder, Result, Settings, Sink, SinkBuffer, Writer,
};
pub use writers::{ConsoleWriter, JsonWriter};
