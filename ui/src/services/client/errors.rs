use std::fmt;

/// Failures of the sign-up call as seen from the browser
#[derive(Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced an HTTP response
    NetworkError {
        message: String,
    },
    /// The API answered with a non-success status
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
    /// A body could not be encoded or decoded
    SerializationError {
        message: String,
    },
    /// The HTTP client could not be built from the configuration
    InvalidConfiguration {
        message: String,
    },
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::NetworkError { message } => {
                write!(f, "Network error: {}", message)
            }
            ClientError::Rejected {
                status,
                code: Some(code),
                message,
            } => {
                write!(f, "Sign-up rejected ({} {}): {}", status, code, message)
            }
            ClientError::Rejected {
                status,
                code: None,
                message,
            } => {
                write!(f, "Sign-up rejected ({}): {}", status, message)
            }
            ClientError::SerializationError { message } => {
                write!(f, "Serialization error: {}", message)
            }
            ClientError::InvalidConfiguration { message } => {
                write!(f, "Invalid client configuration: {}", message)
            }
        }
    }
}

impl std::error::Error for ClientError {}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::SerializationError {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
