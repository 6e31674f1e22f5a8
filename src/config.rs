use std::{env, net::SocketAddr, time::Duration};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_HEALTH_INTERVAL_SECS: u64 = 30;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub health_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_url: DEFAULT_API_URL.to_string(),
            health_interval: Duration::from_secs(DEFAULT_HEALTH_INTERVAL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("TASK_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let health_secs =
            parse_or(&lookup, "HEALTH_INTERVAL_SECS", DEFAULT_HEALTH_INTERVAL_SECS).max(1);
        let timeout_secs = parse_or(&lookup, "REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            api_url,
            health_interval: Duration::from_secs(health_secs),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {key}={raw:?}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("PORT", "9090"),
            ("TASK_API_URL", "http://backend:5000"),
            ("HEALTH_INTERVAL_SECS", "5"),
            ("REQUEST_TIMEOUT_SECS", "2"),
        ]);
        assert_eq!(config.port, 9090);
        assert_eq!(config.api_url, "http://backend:5000");
        assert_eq!(config.health_interval, Duration::from_secs(5));
        assert_eq!(config.request_timeout, Duration::from_secs(2));
    }

    #[test]
    fn invalid_numbers_fall_back() {
        let config = config_from(&[("PORT", "http"), ("HEALTH_INTERVAL_SECS", "0")]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.health_interval, Duration::from_secs(1));
    }
}
