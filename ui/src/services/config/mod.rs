/// Fallback API root when `BANANA_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SIGN_UP_PATH: &str = "/users/signup";
pub const DEFAULT_USER_AGENT: &str = "banana-web/1.0";

/// Where and how the sign-up call is sent
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpConfig {
    pub api_base_url: String,
    pub sign_up_path: String,
    pub user_agent: String,
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: option_env!("BANANA_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
            sign_up_path: DEFAULT_SIGN_UP_PATH.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Full endpoint URL, joined with exactly one `/`
    pub fn sign_up_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.sign_up_path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_and_agent() {
        let config = SignUpConfig::default();
        assert_eq!(config.sign_up_path, DEFAULT_SIGN_UP_PATH);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(!config.api_base_url.is_empty());
    }

    fn config(api_base_url: &str, sign_up_path: &str) -> SignUpConfig {
        SignUpConfig {
            api_base_url: api_base_url.to_string(),
            sign_up_path: sign_up_path.to_string(),
            ..SignUpConfig::new()
        }
    }

    #[test]
    fn test_sign_up_url_joins_with_single_slash() {
        let url = config("https://api.example.com/", DEFAULT_SIGN_UP_PATH).sign_up_url();
        assert_eq!(url, "https://api.example.com/users/signup");

        let url = config("https://api.example.com", "users/signup").sign_up_url();
        assert_eq!(url, "https://api.example.com/users/signup");

        let url = config("https://api.example.com//", "//v2/join").sign_up_url();
        assert_eq!(url, "https://api.example.com/v2/join");
    }
}
