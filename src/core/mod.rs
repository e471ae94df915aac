//! Core logger types and traits

pub mod caller;
pub mod complex;
pub mod config;
pub mod encoder;
pub mod error;
pub mod field;
pub mod field_type;
pub mod level;
pub mod logged_error;
pub mod logger;
pub mod recording;
pub mod sink;
pub mod stringify;
pub mod writer;

pub use complex::{Complex, Complex128, Complex64};
pub use config::{Config, ConfigBuilder, Settings};
pub use encoder::{ArrayEncoder, Encodable, FieldEncoder, LogEncoder};
pub use error::{LoggerError, Result};
pub use field::Field;
pub use field_type::FieldType;
pub use level::Level;
pub use logged_error::{wrap_error, BoxError, ErrorValue, LoggedError};
pub use logger::Logger;
pub use recording::{Event, RecordingEncoder};
pub use sink::{Sink, SinkBuffer};
pub use writer::{Record, Writer};
