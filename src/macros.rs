//! Logging macros for ergonomic log message formatting.
//!
//! Messages are formatted like `format!`. Fields go in an optional bracketed
//! list before the message.
//!
//! # Examples
//!
//! ```
//! use rust_field_logger::prelude::*;
//! use rust_field_logger::info;
//!
//! let logger = Logger::with_config("server", Config::builder().no_writer().build());
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // With fields
//! info!(logger, [fields::uint16("port", port)], "Listening");
//! ```

/// Log at a given level with automatic formatting.
///
/// # Examples
///
/// ```
/// # use rust_field_logger::prelude::*;
/// # let logger = Logger::with_config("app", Config::builder().no_writer().build());
/// use rust_field_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Warn, [fields::int32("code", 503)], "Upstream {}", "unavailable");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, [$($field:expr),* $(,)?], $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), &[$($field),*])
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+), &[])
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message and evaluate to the [`LoggedError`](crate::LoggedError).
///
/// # Examples
///
/// ```
/// # use rust_field_logger::prelude::*;
/// # let logger = Logger::with_config("db", Config::builder().no_writer().build());
/// use rust_field_logger::error;
/// let err = error!(logger, [fields::string("table", "users")], "Query failed after {} tries", 3);
/// assert_eq!(err.tag(), "db");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, [$($field:expr),* $(,)?], $($arg:tt)+) => {
        $logger.error(format!($($arg)+), &[$($field),*])
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format!($($arg)+), &[])
    };
}

/// Create a [`LoggedError`](crate::LoggedError) with a formatted message,
/// without logging it.
///
/// # Examples
///
/// ```
/// use rust_field_logger::logged_error;
///
/// let err = logged_error!("parser", "unexpected token '{}' at {}", "}", 14);
/// assert!(!err.logged());
/// assert_eq!(err.message(), "unexpected token '}' at 14");
/// ```
#[macro_export]
macro_rules! logged_error {
    ($tag:expr, $($arg:tt)+) => {
        $crate::LoggedError::new($tag, format!($($arg)+))
    };
}

/// Create a [`Logger`](crate::Logger) tagged with the invoking module's path.
///
/// With no argument the logger uses the global config.
///
/// # Examples
///
/// ```
/// use rust_field_logger::package_logger;
///
/// let logger = package_logger!();
/// assert_eq!(logger.tag(), module_path!());
/// ```
#[macro_export]
macro_rules! package_logger {
    () => {
        $crate::Logger::new(module_path!())
    };
    ($config:expr) => {
        $crate::Logger::with_config(module_path!(), $config)
    };
}
