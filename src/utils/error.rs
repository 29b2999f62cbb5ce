use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecsError {
    #[error("No commander with name {name}")]
    NotFound { name: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Browser error: {0}")]
    BrowserError(#[from] chromiumoxide::error::CdpError),

    #[error("Timed out after {seconds}s waiting for {url}")]
    Timeout { url: String, seconds: u64 },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Settings file error: {0}")]
    SettingsError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    Network,
    Parse,
    Io,
    Config,
}

impl RecsError {
    pub fn parse(message: impl Into<String>) -> Self {
        RecsError::ParseError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RecsError::NotFound { .. } => ErrorCategory::NotFound,
            RecsError::ApiError(_) | RecsError::BrowserError(_) | RecsError::Timeout { .. } => {
                ErrorCategory::Network
            }
            RecsError::ParseError { .. }
            | RecsError::SerializationError(_)
            | RecsError::SettingsError(_) => ErrorCategory::Parse,
            RecsError::IoError(_) => ErrorCategory::Io,
            RecsError::ConfigError { .. } | RecsError::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::NotFound => self.to_string(),
            ErrorCategory::Network => format!("Could not reach the card data source: {}", self),
            ErrorCategory::Parse => format!("Unexpected data layout: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Config => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecsError>;
