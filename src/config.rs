use std::{env, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub api_url: String,
    pub api_timeout: Duration,
}

impl Config {
    /// Reads `PORT`, `HRMS_API_URL` and `HRMS_API_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var("PORT").ok().as_deref(),
            env::var("HRMS_API_URL").ok().as_deref(),
            env::var("HRMS_API_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    pub fn from_values(port: Option<&str>, api_url: Option<&str>, timeout: Option<&str>) -> Self {
        let port = parse_or(port, "PORT", DEFAULT_PORT);
        let mut timeout_secs = parse_or(timeout, "HRMS_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS);
        if timeout_secs == 0 {
            warn!("HRMS_API_TIMEOUT_SECS must be positive, using {DEFAULT_API_TIMEOUT_SECS}");
            timeout_secs = DEFAULT_API_TIMEOUT_SECS;
        }
        let api_url = api_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            port,
            api_url,
            api_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(value: Option<&str>, name: &str, default: T) -> T {
    match value {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("ignoring invalid {name}={raw:?}");
            default
        }),
    }
}
