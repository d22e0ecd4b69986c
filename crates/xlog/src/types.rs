//! Core types for the logger.
//!
//! This module provides:
//! - [`LogLevel`] — Severity tags used by the recording methods
//! - [`LogEntry`] — One recorded unit of structured data
//! - [`Fields`] — The key-value payload carried by an entry

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::LogError;

/// Structured payload of a log entry.
///
/// Keys are unique; iteration order is whatever the map yields.
pub type Fields = HashMap<String, String>;

/// Log severity tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// General information
    Info = 0,
    /// Warning conditions
    Warn = 1,
    /// Error conditions
    Error = 2,
    /// Unrecoverable conditions
    Fatal = 3,
}

/// A recorded log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// When the entry was recorded
    pub timestamp: DateTime<Utc>,
    /// Stored level
    pub level: LogLevel,
    /// Caller-supplied fields
    #[serde(default)]
    pub fields: Fields,
}

impl LogLevel {
    /// All levels, least severe first.
    pub const ALL: [Self; 4] = [Self::Info, Self::Warn, Self::Error, Self::Fatal];

    /// Returns the lowercase tag for this level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
            Self::Fatal => "fatal",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| LogError::UnknownLevel(s.to_string()))
    }
}

impl LogEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(level: LogLevel, fields: Fields) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            fields,
        }
    }
}
