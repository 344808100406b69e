use anyhow::{Context, Result};

pub const DEFAULT_GOOGLE_API_URL: &str =
    "https://translation.googleapis.com/language/translate/v2";
pub const DEEPL_FREE_API_URL: &str = "https://api-free.deepl.com";
pub const DEEPL_PRO_API_URL: &str = "https://api.deepl.com";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Logging
    pub log_file: Option<String>,

    // Google Cloud Translation
    pub google_api_key: Option<String>,
    pub google_api_url: String,

    // DeepL
    pub deepl_api_key: Option<String>,
    pub deepl_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let deepl_api_key = non_empty_var("DEEPL_API_KEY");
        let deepl_api_url = non_empty_var("DEEPL_API_URL")
            .unwrap_or_else(|| default_deepl_api_url(deepl_api_key.as_deref()).to_string());

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: match std::env::var("PORT") {
                Ok(v) => v.parse().with_context(|| format!("PORT is not a valid port: {}", v))?,
                Err(_) => 8000,
            },

            // Logging - an empty LOG_FILE disables the file sink
            log_file: match std::env::var("LOG_FILE") {
                Ok(v) if v.trim().is_empty() => None,
                Ok(v) => Some(v),
                Err(_) => Some("server.log".to_string()),
            },

            // Google
            google_api_key: non_empty_var("GOOGLE_API_KEY"),
            google_api_url: non_empty_var("GOOGLE_API_URL")
                .unwrap_or_else(|| DEFAULT_GOOGLE_API_URL.to_string()),

            // DeepL
            deepl_api_key,
            deepl_api_url,
        })
    }

    /// Address the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// DeepL free-tier keys carry a `:fx` suffix and live on a separate host.
pub fn default_deepl_api_url(api_key: Option<&str>) -> &'static str {
    match api_key {
        Some(key) if key.ends_with(":fx") => DEEPL_FREE_API_URL,
        _ => DEEPL_PRO_API_URL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "HOST",
        "PORT",
        "LOG_FILE",
        "GOOGLE_API_KEY",
        "GOOGLE_API_URL",
        "DEEPL_API_KEY",
        "DEEPL_API_URL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should load defaults");

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_file.as_deref(), Some("server.log"));
        assert!(config.google_api_key.is_none());
        assert_eq!(config.google_api_url, DEFAULT_GOOGLE_API_URL);
        assert!(config.deepl_api_key.is_none());
        assert_eq!(config.deepl_api_url, DEEPL_PRO_API_URL);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "9090");
        std::env::set_var("LOG_FILE", "/tmp/relay.log");
        std::env::set_var("GOOGLE_API_KEY", "g-key");
        std::env::set_var("GOOGLE_API_URL", "http://localhost:1234/translate");
        std::env::set_var("DEEPL_API_KEY", "d-key");
        std::env::set_var("DEEPL_API_URL", "http://localhost:5678");

        let config = Config::from_env().expect("Should load overrides");
        clear_env();

        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
        assert_eq!(config.log_file.as_deref(), Some("/tmp/relay.log"));
        assert_eq!(config.google_api_key.as_deref(), Some("g-key"));
        assert_eq!(config.google_api_url, "http://localhost:1234/translate");
        assert_eq!(config.deepl_api_key.as_deref(), Some("d-key"));
        assert_eq!(config.deepl_api_url, "http://localhost:5678");
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_rejected() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        clear_env();

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not-a-port"));
    }

    #[test]
    #[serial]
    fn test_empty_log_file_disables_file_logging() {
        clear_env();
        std::env::set_var("LOG_FILE", "  ");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial]
    fn test_free_deepl_key_selects_free_host() {
        clear_env();
        std::env::set_var("DEEPL_API_KEY", "abc123:fx");

        let config = Config::from_env().expect("Should load");
        clear_env();

        assert_eq!(config.deepl_api_url, DEEPL_FREE_API_URL);
    }

    #[test]
    fn test_default_deepl_api_url() {
        assert_eq!(default_deepl_api_url(None), DEEPL_PRO_API_URL);
        assert_eq!(default_deepl_api_url(Some("key")), DEEPL_PRO_API_URL);
        assert_eq!(default_deepl_api_url(Some("key:fx")), DEEPL_FREE_API_URL);
    }
}
