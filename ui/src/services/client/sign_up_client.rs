use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, info, instrument};

use super::errors::{ClientError, ClientResult};
use super::types::*;
use super::SignUpService;
use crate::services::config::SignUpConfig;

/// [`SignUpService`] backed by the REST API
#[derive(Clone, Debug)]
pub struct HttpSignUpService {
    pub(crate) http_client: Client,
    pub(crate) endpoint: String,
}

impl HttpSignUpService {
    pub fn new(config: &SignUpConfig) -> ClientResult<Self> {
        let http_client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ClientError::InvalidConfiguration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            endpoint: config.sign_up_url(),
        })
    }
}

#[async_trait(?Send)]
impl SignUpService for HttpSignUpService {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint), err)]
    async fn sign_up(&self, request: SignUpRequest) -> ClientResult<SignUpResponse> {
        info!("Submitting sign-up for nickname: {}", request.nickname);

        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::NetworkError {
                message: format!("Failed to call sign-up endpoint: {}", e),
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::NetworkError {
                message: format!("Failed to read sign-up response: {}", e),
            })?;

        if status.is_success() {
            info!("Sign-up accepted with status {}", status);
            Ok(SignUpResponse::from_body(&body))
        } else {
            error!("Sign-up failed with status {}: {}", status, body);
            Err(rejection_from_body(status.as_u16(), &body))
        }
    }
}

/// Turn a non-success response into a [`ClientError::Rejected`], preferring the
/// backend's `{code, message}` envelope over the raw body
pub(crate) fn rejection_from_body(status: u16, body: &str) -> ClientError {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(ApiErrorResponse { code, message }) => ClientError::Rejected {
            status,
            code,
            message: message.unwrap_or_else(|| body.to_string()),
        },
        Err(_) => ClientError::Rejected {
            status,
            code: None,
            message: body.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_comes_from_config() {
        let config = SignUpConfig {
            api_base_url: "https://api.example.com/".to_string(),
            ..SignUpConfig::new()
        };
        let service = HttpSignUpService::new(&config).unwrap();
        assert_eq!(service.endpoint, "https://api.example.com/users/signup");
    }

    #[test]
    fn test_rejection_uses_error_envelope() {
        let err = rejection_from_body(409, r#"{"code": "U002", "message": "duplicate email"}"#);
        assert_eq!(
            err,
            ClientError::Rejected {
                status: 409,
                code: Some("U002".to_string()),
                message: "duplicate email".to_string(),
            }
        );
    }

    #[test]
    fn test_rejection_falls_back_to_raw_body() {
        let err = rejection_from_body(502, "Bad Gateway");
        assert_eq!(
            err,
            ClientError::Rejected {
                status: 502,
                code: None,
                message: "Bad Gateway".to_string(),
            }
        );

        let err = rejection_from_body(400, r#"{"code": "C001"}"#);
        assert_eq!(
            err,
            ClientError::Rejected {
                status: 400,
                code: Some("C001".to_string()),
                message: r#"{"code": "C001"}"#.to_string(),
            }
        );
    }
}
