//! # splitlog
//! Leveled logging over a pair of output streams: informational lines on
//! stdout, errors and diagnostics on stderr. Supervising processes can
//! redirect the two streams independently; the crate itself does no
//! routing beyond picking the sink per level.
//!
//! ## Usage
//! ```toml
//! // Cargo.toml
//! ...
//! [dependencies]
//! splitlog = "0.1"
//! ```
//!
//! ```rust
//! use splitlog::Logger;
//!
//! let logger = Logger::new();
//! logger.info("server ready");
//! splitlog::info!(logger, "listening on port {}", 8080);
//! splitlog::error!(logger, "lost connection to {}", "db-1");
//! ```
//!
//! Every line is stamped with the local time; `fatal` additionally exits
//! the process with status 1, and `panic` unwinds with the message after
//! writing it.
//!
//! ## Debug mode
//! Debug lines are dropped until enabled. While enabled, every line on
//! both streams carries the call site next to the timestamp.
//! ```rust
//! use splitlog::Logger;
//!
//! let logger = Logger::new();
//! logger.debug("not written");
//! logger.enable_debug(true);
//! logger.debug("cache miss"); // stderr: <stamp> <file>:<line>: DBG: cache miss
//! ```
//!
//! ## With the `log` macros
//! A logger can also be installed behind the `log` facade for the whole
//! process; the returned handle keeps the direct API available.
//! ```rust
//! use splitlog::Logger;
//!
//! let logger = splitlog::init_global(Logger::new()).unwrap();
//! log::info!("hello from the log facade");
//! logger.enable_debug(true);
//! log::debug!("now visible");
//! ```

mod caller;
mod config;
mod facade;
mod logger;
mod sink;

pub use config::{SPLITLOG_CONFIG, SplitlogConfig};
pub use facade::init_global;
pub use logger::Logger;
pub use sink::{LineWriter, Sink, StderrWriter, StdoutWriter};

/// Logs a formatted `DBG: ` line: `debug!(logger, "miss on {}", key)`.
/// Dropped while debug output is disabled.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted `INF: ` line: `info!(logger, "user {} logged in", name)`.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted `ERR: ` line: `error!(logger, "write failed: {err}")`.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::core::format_args!($($arg)+))
    };
}

/// Logs a formatted `FTL: ` line, then exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(::core::format_args!($($arg)+))
    };
}
