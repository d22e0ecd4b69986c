//! Logger configuration.
//!
//! [`LogConfig`] bundles every option a [`Logger`](crate::Logger) reads.
//! Only `levels` and `outputs` affect behavior today. The directory, file
//! name, buffer hint and format are carried for callers that inspect them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Output name that enables console echo.
pub const STDOUT_OUTPUT: &str = "stdOut";

/// Configuration for a [`Logger`](crate::Logger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Directory for log files, e.g. `./log/`.
    pub log_dir: String,
    /// Log file name, e.g. `default.log`.
    pub log_file_name: String,
    /// Entries to hold in memory before a flush. Not enforced.
    pub max_buffered_entries: usize,
    /// Output format name, e.g. `text`.
    pub format: String,
    /// Allowed levels, matched case-insensitively.
    pub levels: Vec<String>,
    /// Output sinks, matched case-insensitively.
    pub outputs: Vec<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: "./log/".to_string(),
            log_file_name: "default.log".to_string(),
            max_buffered_entries: 100,
            format: "text".to_string(),
            levels: ["Info", "Warn", "Error", "Fatal"]
                .into_iter()
                .map(String::from)
                .collect(),
            outputs: vec![STDOUT_OUTPUT.to_string()],
        }
    }
}

impl LogConfig {
    /// Creates a config with the default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log directory.
    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = dir.into();
        self
    }

    /// Sets the log file name.
    #[must_use]
    pub fn with_log_file_name(mut self, name: impl Into<String>) -> Self {
        self.log_file_name = name.into();
        self
    }

    /// Sets the buffered entry hint.
    #[must_use]
    pub const fn with_max_buffered_entries(mut self, max: usize) -> Self {
        self.max_buffered_entries = max;
        self
    }

    /// Sets the format name.
    #[must_use]
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Replaces the allowed levels.
    #[must_use]
    pub fn with_levels<I, S>(mut self, levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.levels = levels.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the output sinks.
    #[must_use]
    pub fn with_outputs<I, S>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outputs = outputs.into_iter().map(Into::into).collect();
        self
    }

    /// Checks the config, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] for the first field that is empty or zero,
    /// checked in declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_dir.is_empty() {
            return Err(ConfigError::EmptyLogDir);
        }
        if self.log_file_name.is_empty() {
            return Err(ConfigError::EmptyLogFileName);
        }
        if self.max_buffered_entries == 0 {
            return Err(ConfigError::ZeroMaxBufferedEntries);
        }
        if self.format.is_empty() {
            return Err(ConfigError::EmptyFormat);
        }
        if self.levels.is_empty() {
            return Err(ConfigError::EmptyLevels);
        }
        if self.outputs.is_empty() {
            return Err(ConfigError::EmptyOutputs);
        }
        Ok(())
    }

    /// Returns true if `level` matches an allowed level, ignoring case.
    #[must_use]
    pub fn allows_level(&self, level: &str) -> bool {
        contains_ignore_case(&self.levels, level)
    }

    /// Returns true if `output` matches a configured sink, ignoring case.
    #[must_use]
    pub fn has_output(&self, output: &str) -> bool {
        contains_ignore_case(&self.outputs, output)
    }
}

fn contains_ignore_case(haystack: &[String], needle: &str) -> bool {
    haystack
        .iter()
        .any(|item| item.to_lowercase() == needle.to_lowercase())
}
