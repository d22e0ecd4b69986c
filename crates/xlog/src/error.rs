//! Error types for the logger.

use thiserror::Error;

/// Reasons a [`LogConfig`](crate::LogConfig) fails validation.
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The log directory is empty.
    #[error("log directory must not be empty")]
    EmptyLogDir,

    /// The log file name is empty.
    #[error("log file name must not be empty")]
    EmptyLogFileName,

    /// The buffered entry hint is zero.
    #[error("max buffered entries must be at least 1")]
    ZeroMaxBufferedEntries,

    /// The output format name is empty.
    #[error("log format must not be empty")]
    EmptyFormat,

    /// No levels are allowed.
    #[error("allowed log levels must not be empty")]
    EmptyLevels,

    /// No output sinks are configured.
    #[error("log outputs must not be empty")]
    EmptyOutputs,
}

/// Errors returned by logger construction and recording.
#[derive(Debug, Error)]
pub enum LogError {
    /// The supplied configuration is invalid.
    #[error("invalid log config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The level is not in the configured allow-list.
    #[error("log level {0} is not allowed")]
    LevelRejected(String),

    /// Text did not name a known level.
    #[error("unknown log level: {0}")]
    UnknownLevel(String),
}

/// Result type alias for logger operations.
pub type Result<T> = std::result::Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_messages_are_distinct() {
        let errors = [
            ConfigError::EmptyLogDir,
            ConfigError::EmptyLogFileName,
            ConfigError::ZeroMaxBufferedEntries,
            ConfigError::EmptyFormat,
            ConfigError::EmptyLevels,
            ConfigError::EmptyOutputs,
        ];

        let messages: std::collections::HashSet<String> =
            errors.iter().map(ToString::to_string).collect();
        assert_eq!(messages.len(), errors.len());
    }

    #[test]
    fn error_display_messages() {
        let err = LogError::LevelRejected("warn".to_string());
        assert_eq!(err.to_string(), "log level warn is not allowed");

        let err = LogError::UnknownLevel("verbose".to_string());
        assert_eq!(err.to_string(), "unknown log level: verbose");

        let err: LogError = ConfigError::EmptyFormat.into();
        assert_eq!(err.to_string(), "invalid log config: log format must not be empty");
    }

    #[test]
    fn config_error_converts_into_log_error() {
        let err: LogError = ConfigError::EmptyOutputs.into();
        assert!(matches!(err, LogError::InvalidConfig(ConfigError::EmptyOutputs)));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LogError>();
        assert_send_sync::<ConfigError>();
    }

    #[test]
    fn result_type_err() {
        let result: Result<()> = Err(LogError::LevelRejected("fatal".to_string()));
        assert!(result.is_err());
    }
}
