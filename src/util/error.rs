// RoboPanel - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal chain
// for diagnostic logging.
//
// Note: panel actions and pump ticks never produce these errors. Their
// recoverable outcomes are modelled by `core::model::SkipReason`. The types
// here cover the I/O surrounding the panel: config and session files.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for RoboPanel I/O operations.
#[derive(Debug)]
pub enum RoboPanelError {
    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// Session persistence failed.
    Session(SessionError),
}

impl fmt::Display for RoboPanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Session(e) => write!(f, "Session error: {e}"),
        }
    }
}

impl std::error::Error for RoboPanelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Session(e) => Some(e),
        }
    }
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

/// Errors related to configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// TOML parsing failed.
    TomlParse { source: toml::de::Error },

    /// A config value is out of the allowed range.
    ValueOutOfRange {
        field: String,
        value: String,
        expected: String,
    },

    /// I/O error reading config file.
    Io { path: PathBuf, source: io::Error },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TomlParse { source } => write!(f, "Config parse error: {source}"),
            Self::ValueOutOfRange {
                field,
                value,
                expected,
            } => write!(
                f,
                "Config '{field}' = '{value}' is out of range. Expected: {expected}"
            ),
            Self::Io { path, source } => {
                write!(f, "Config I/O error '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TomlParse { source } => Some(source),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ConfigError> for RoboPanelError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Session errors
// ---------------------------------------------------------------------------

/// Errors related to saving the session file.
///
/// Loading never fails loudly: a missing or corrupt session simply starts
/// the panel fresh.
#[derive(Debug)]
pub enum SessionError {
    /// The session directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// The session could not be serialised to JSON.
    Serialise { source: serde_json::Error },

    /// Writing the temporary session file failed.
    Write { path: PathBuf, source: io::Error },

    /// Renaming the temporary file over the final session file failed.
    Finalise { path: PathBuf, source: io::Error },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, source } => write!(
                f,
                "cannot create session directory '{}': {source}",
                path.display()
            ),
            Self::Serialise { source } => write!(f, "failed to serialise session: {source}"),
            Self::Write { path, source } => write!(
                f,
                "failed to write session temp file '{}': {source}",
                path.display()
            ),
            Self::Finalise { path, source } => write!(
                f,
                "failed to finalise session file '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } => Some(source),
            Self::Serialise { source } => Some(source),
            Self::Write { source, .. } => Some(source),
            Self::Finalise { source, .. } => Some(source),
        }
    }
}

impl From<SessionError> for RoboPanelError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

/// Convenience type alias for RoboPanel results.
pub type Result<T> = std::result::Result<T, RoboPanelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_config_error_display_names_field() {
        let err = ConfigError::ValueOutOfRange {
            field: "[pump] interval_ms".to_string(),
            value: "0".to_string(),
            expected: "1-1000".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("[pump] interval_ms"), "{text}");
        assert!(text.contains("1-1000"), "{text}");
    }

    #[test]
    fn test_session_error_preserves_source_chain() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: RoboPanelError = SessionError::Write {
            path: PathBuf::from("/tmp/session.json.tmp"),
            source: inner,
        }
        .into();

        let session = err.source().expect("top-level error has a source");
        let io_err = session.source().expect("session error has an io source");
        assert_eq!(io_err.to_string(), "denied");
    }
}
