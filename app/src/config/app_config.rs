//! Runtime application configuration loaded from the environment.

use anyhow::Context;
use url::Url;

use super::defaults;

/// Runtime configuration populated from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub endpoint_url: Url,
    pub server_port: u16,
    /// Seconds between polls after the startup poll. `0` polls once only.
    pub poll_interval_secs: u64,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::load(|key| std::env::var(key).ok())
    }

    fn load(get: impl Fn(&str) -> Option<String>) -> Result<Self, anyhow::Error> {
        let endpoint_raw =
            get("UNREAD_ENDPOINT_URL").unwrap_or_else(|| defaults::ENDPOINT_URL.into());
        let endpoint_url = Url::parse(&endpoint_raw)
            .with_context(|| format!("invalid UNREAD_ENDPOINT_URL: {endpoint_raw}"))?;

        let server_port = parse_u16(get("SERVER_PORT").as_deref(), defaults::SERVER_PORT);
        let poll_interval_secs = parse_u64(
            get("UNREAD_POLL_INTERVAL").as_deref(),
            defaults::POLL_INTERVAL_SECS,
        );

        Ok(Self {
            endpoint_url,
            server_port,
            poll_interval_secs,
        })
    }
}

fn parse_u16(value: Option<&str>, fallback: u16) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

fn parse_u64(value: Option<&str>, fallback: u64) -> u64 {
    value.and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> Result<AppConfig, anyhow::Error> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::load(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config.endpoint_url.as_str(), defaults::ENDPOINT_URL);
        assert_eq!(config.server_port, defaults::SERVER_PORT);
        assert_eq!(config.poll_interval_secs, 0);
    }

    #[test]
    fn environment_values_override_defaults() {
        let config = load_from(&[
            ("UNREAD_ENDPOINT_URL", "http://inbox.example/unread"),
            ("SERVER_PORT", "9090"),
            ("UNREAD_POLL_INTERVAL", "30"),
        ])
        .unwrap();
        assert_eq!(config.endpoint_url.as_str(), "http://inbox.example/unread");
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.poll_interval_secs, 30);
    }

    #[test]
    fn invalid_endpoint_url_is_rejected() {
        let err = load_from(&[("UNREAD_ENDPOINT_URL", "not a url")]).unwrap_err();
        assert!(err.to_string().contains("UNREAD_ENDPOINT_URL"));
    }

    #[test]
    fn unparseable_port_falls_back() {
        let config = load_from(&[("SERVER_PORT", "lots")]).unwrap();
        assert_eq!(config.server_port, defaults::SERVER_PORT);
    }
}
