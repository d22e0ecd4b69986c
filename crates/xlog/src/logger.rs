//! The in-memory logger.
//!
//! This module provides:
//! - [`Logger`] — Level-filtered, append-only entry buffer with console echo
//! - [`SharedLogger`] — Mutex-guarded handle for multi-threaded callers

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::config::{LogConfig, STDOUT_OUTPUT};
use crate::console;
use crate::error::{LogError, Result};
use crate::types::{Fields, LogEntry, LogLevel};

/// Level stored on every recorded entry, whatever level was requested.
pub const STORED_LEVEL: LogLevel = LogLevel::Info;

/// Structured logger that buffers accepted entries in memory.
///
/// Entries are kept for the lifetime of the logger; nothing is evicted or
/// written to disk.
pub struct Logger {
    config: LogConfig,
    entries: Vec<LogEntry>,
    console: Box<dyn Write + Send>,
}

impl Logger {
    /// Creates a logger with the default configuration, echoing to stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(LogConfig::default(), Box::new(io::stdout()))
    }

    /// Creates a logger from a custom configuration, echoing to stdout.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if the configuration fails
    /// [`LogConfig::validate`].
    pub fn with_config(config: LogConfig) -> Result<Self> {
        Self::with_writer(config, io::stdout())
    }

    /// Creates a logger whose console output goes to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::InvalidConfig`] if the configuration fails
    /// [`LogConfig::validate`].
    pub fn with_writer<W>(config: LogConfig, writer: W) -> Result<Self>
    where
        W: Write + Send + 'static,
    {
        config.validate()?;
        Ok(Self::from_parts(config, Box::new(writer)))
    }

    fn from_parts(config: LogConfig, console: Box<dyn Write + Send>) -> Self {
        debug!(
            levels = config.levels.len(),
            outputs = config.outputs.len(),
            "logger created"
        );
        Self {
            config,
            entries: Vec::new(),
            console,
        }
    }

    /// Records an info entry.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LevelRejected`] if `info` is not an allowed level.
    pub fn info(&mut self, fields: Fields) -> Result<()> {
        self.record(LogLevel::Info, fields)
    }

    /// Records a warn entry.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LevelRejected`] if `warn` is not an allowed level.
    pub fn warn(&mut self, fields: Fields) -> Result<()> {
        self.record(LogLevel::Warn, fields)
    }

    /// Records an error entry.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LevelRejected`] if `error` is not an allowed level.
    pub fn error(&mut self, fields: Fields) -> Result<()> {
        self.record(LogLevel::Error, fields)
    }

    /// Records a fatal entry. Does not terminate the process.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LevelRejected`] if `fatal` is not an allowed level.
    pub fn fatal(&mut self, fields: Fields) -> Result<()> {
        self.record(LogLevel::Fatal, fields)
    }

    /// Records an entry at a level chosen at runtime.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::LevelRejected`] if `level` is not an allowed level.
    pub fn log(&mut self, level: LogLevel, fields: Fields) -> Result<()> {
        self.record(level, fields)
    }

    fn record(&mut self, level: LogLevel, fields: Fields) -> Result<()> {
        if !self.is_level_allowed(level.as_str()) {
            debug!(%level, "log level rejected");
            return Err(LogError::LevelRejected(level.as_str().to_string()));
        }

        let entry = LogEntry::new(STORED_LEVEL, fields);
        trace!(%level, fields = entry.fields.len(), "log entry recorded");
        self.entries.push(entry);

        if self.should_output_to_stdout() {
            if let Some(entry) = self.entries.last() {
                if let Err(e) = console::write_entry(&mut self.console, entry) {
                    warn!(error = %e, "failed to write log entry to console");
                }
            }
        }

        Ok(())
    }

    /// Returns true if `level` is in the allow-list, ignoring case.
    #[must_use]
    pub fn is_level_allowed(&self, level: &str) -> bool {
        self.config.allows_level(level)
    }

    /// Returns true if the outputs include the console sink, ignoring case.
    #[must_use]
    pub fn should_output_to_stdout(&self) -> bool {
        self.config.has_output(STDOUT_OUTPUT)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Returns the recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("config", &self.config)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

/// Shared logger handle.
pub type SharedLogger = Arc<Mutex<Logger>>;

/// Wraps a logger for use from several threads.
#[must_use]
pub fn shared_logger(logger: Logger) -> SharedLogger {
    Arc::new(Mutex::new(logger))
}
