use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of the sign-up call
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub nickname: String,
    pub password: String,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("nickname", &self.nickname)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Whatever the API returned for a successful sign-up. The form never reads it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(transparent)]
pub struct SignUpResponse(pub serde_json::Value);

impl SignUpResponse {
    /// Wrap a response body, keeping non-JSON bodies as a raw string
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self(serde_json::Value::Null);
        }
        match serde_json::from_str(body) {
            Ok(value) => Self(value),
            Err(_) => Self(serde_json::Value::String(body.to_string())),
        }
    }
}

/// Error envelope the backend sends with non-success statuses
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}
