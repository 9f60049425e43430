use std::env;
use secrecy::{ExposeSecret, SecretString};

pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";
pub const DEFAULT_API_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub api_key: SecretString,
    pub api_endpoint: String,
    pub model: String,
    pub use_demo_mode: bool,
}

impl Default for Config {
    /// Used when no external configuration is present: demo mode with the
    /// placeholder credential.
    fn default() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            api_key: SecretString::from(PLACEHOLDER_API_KEY.to_string()),
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            use_demo_mode: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            web_server_host: env::var("WEB_SERVER_HOST").unwrap_or(defaults.web_server_host),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.web_server_port),
            api_key: env::var("STUDY_API_KEY")
                .map(SecretString::from)
                .unwrap_or(defaults.api_key),
            api_endpoint: env::var("STUDY_API_ENDPOINT").unwrap_or(defaults.api_endpoint),
            model: env::var("STUDY_MODEL").unwrap_or(defaults.model),
            use_demo_mode: env::var("USE_DEMO_MODE")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.use_demo_mode),
        }
    }

    /// True when the credential was never configured.
    pub fn credential_is_placeholder(&self) -> bool {
        let key = self.api_key.expose_secret().trim();
        key.is_empty() || key == PLACEHOLDER_API_KEY
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            api_key: SecretString::from("sk-test-key".to_string()),
            api_endpoint: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            model: DEFAULT_MODEL.to_string(),
            use_demo_mode: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_demo_mode_with_placeholder() {
        let config = Config::default();

        assert!(config.use_demo_mode);
        assert!(config.credential_is_placeholder());
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert!(!config.credential_is_placeholder());
        assert_eq!(config.web_server_port, 8080);
    }

    #[test]
    fn test_blank_credential_counts_as_placeholder() {
        let config = Config {
            api_key: SecretString::from("   ".to_string()),
            ..Config::test_config()
        };

        assert!(config.credential_is_placeholder());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
