//! Error types for the blogfront core library.

use thiserror::Error;

/// Result type alias using `BlogError`.
pub type Result<T> = std::result::Result<T, BlogError>;

/// Core error types for blogfront.
#[derive(Error, Debug)]
pub enum BlogError {
    /// Transport-level failure: the request never produced a response.
    #[error("Network error on {endpoint}: {message}")]
    Network {
        endpoint: &'static str,
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {endpoint}")]
    Http { endpoint: &'static str, status: u16 },

    /// The body could not be decoded into the expected shape.
    #[error("Malformed response from {endpoint}: {message}")]
    Malformed {
        endpoint: &'static str,
        message: String,
    },

    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl BlogError {
    /// Create a new network error.
    pub fn network(endpoint: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            endpoint,
            message: message.into(),
        }
    }

    /// Create a new HTTP status error.
    pub fn http(endpoint: &'static str, status: u16) -> Self {
        Self::Http { endpoint, status }
    }

    /// Create a new malformed-response error.
    pub fn malformed(endpoint: &'static str, message: impl Into<String>) -> Self {
        Self::Malformed {
            endpoint,
            message: message.into(),
        }
    }

    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from a content load rather than configuration.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Http { .. } | Self::Malformed { .. }
        )
    }
}
