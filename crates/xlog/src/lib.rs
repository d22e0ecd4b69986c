//! # xlog
//!
//! Minimal structured logger.
//!
//! This crate provides:
//!
//! - [`Logger`] — Filters entries against an allow-list of levels, keeps them
//!   in memory and optionally echoes them to the console
//! - [`LogConfig`] — Logger options with validation
//! - [`LogEntry`] — A recorded entry: timestamp, level and string fields
//! - [`LogLevel`] — The level tags `info`, `warn`, `error` and `fatal`
//!
//! ## Example
//!
//! ```rust
//! use xlog::{Fields, LogConfig, Logger};
//!
//! let config = LogConfig::new()
//!     .with_levels(["Info", "Error"])
//!     .with_outputs(["file"]);
//! let mut logger = Logger::with_config(config)?;
//!
//! let mut fields = Fields::new();
//! fields.insert("user".to_string(), "alice".to_string());
//! logger.info(fields)?;
//!
//! assert!(logger.warn(Fields::new()).is_err());
//! assert_eq!(logger.len(), 1);
//! # Ok::<(), xlog::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod console;
pub mod error;
pub mod logger;
pub mod types;

// Re-export main types
pub use config::{LogConfig, STDOUT_OUTPUT};
pub use error::{ConfigError, LogError, Result};
pub use logger::{shared_logger, Logger, SharedLogger, STORED_LEVEL};
pub use types::{Fields, LogEntry, LogLevel};
