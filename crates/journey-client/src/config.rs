//! Client configuration loaded from environment variables.

use std::time::Duration;

use journey_shared::constants::{DEFAULT_HTTP_PORT, DEFAULT_MEMBER_NAME};

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the journey server.
    /// Env: `JOURNEY_API_URL`
    /// Default: `http://localhost:3001`
    pub api_url: String,

    /// Sender name of the journey member; other senders are the care team.
    /// Env: `JOURNEY_MEMBER_NAME`
    pub member_name: String,

    /// Env: `JOURNEY_REQUEST_TIMEOUT_SECS`
    /// Default: 30
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: format!("http://localhost:{DEFAULT_HTTP_PORT}"),
            member_name: DEFAULT_MEMBER_NAME.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup("JOURNEY_API_URL") {
            if !url.trim().is_empty() {
                config.api_url = url;
            }
        }

        if let Some(name) = lookup("JOURNEY_MEMBER_NAME") {
            config.member_name = name;
        }

        if let Some(val) = lookup("JOURNEY_REQUEST_TIMEOUT_SECS") {
            match val.parse::<u64>() {
                Ok(secs) if secs > 0 => config.request_timeout = Duration::from_secs(secs),
                _ => tracing::warn!(
                    value = %val,
                    "Invalid JOURNEY_REQUEST_TIMEOUT_SECS, using default"
                ),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:3001");
        assert_eq!(config.member_name, "Rohan Patel");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = ClientConfig::from_lookup(|key| match key {
            "JOURNEY_API_URL" => Some("http://journey.local:8080".into()),
            "JOURNEY_MEMBER_NAME" => Some("Asha".into()),
            "JOURNEY_REQUEST_TIMEOUT_SECS" => Some("5".into()),
            _ => None,
        });
        assert_eq!(config.api_url, "http://journey.local:8080");
        assert_eq!(config.member_name, "Asha");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = ClientConfig::from_lookup(|key| {
            (key == "JOURNEY_REQUEST_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
