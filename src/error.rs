use std::fmt;
use std::path::PathBuf;

/// Errors from loading or checking the menu configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read
    Io { path: PathBuf, source: std::io::Error },

    /// Config file is not valid JSON for [`MenuConfig`](crate::config::MenuConfig)
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Values parsed but make no sense (zero-sized window, empty menu, ...)
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "Failed to parse config {}: {}", path.display(), source)
            }
            ConfigError::Invalid(reason) => write!(f, "Invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            ConfigError::Invalid(_) => None,
        }
    }
}

/// Startup failures of the front-end
///
/// All of these are fatal and happen before the menu controller exists.
/// Input the controller does not understand is never an error; it is
/// dropped by the key mapping.
#[derive(Debug)]
pub enum FrontendError {
    /// A required asset (font, star image) failed to load
    ResourceUnavailable {
        what: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// The windowing/rendering toolkit reported an error
    Toolkit(String),

    Config(ConfigError),
}

impl fmt::Display for FrontendError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FrontendError::ResourceUnavailable { what, path, reason } => {
                write!(f, "Failed to load {} from {}: {}", what, path.display(), reason)
            }
            FrontendError::Toolkit(message) => write!(f, "Toolkit error: {}", message),
            FrontendError::Config(error) => write!(f, "{}", error),
        }
    }
}

impl std::error::Error for FrontendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrontendError::Config(error) => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigError> for FrontendError {
    fn from(error: ConfigError) -> Self {
        FrontendError::Config(error)
    }
}

impl From<String> for FrontendError {
    fn from(message: String) -> Self {
        FrontendError::Toolkit(message)
    }
}
