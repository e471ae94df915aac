//! Writer implementations

pub mod console;
pub mod json;

pub use console::ConsoleWriter;
pub use json::{JsonArrayEncoder, JsonEncoder, JsonEntries, JsonWriter};

// Re-export the trait next to its implementations
pub use crate::core::Writer;
