//! Process configuration.
//!
//! Read once at start-up from environment variables, with defaults for
//! everything so the server runs with no configuration at all. The binary
//! loads a `.env` file into the environment first, if one is present.

use crate::noaa::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, NoaaConfig};

/// Default listen port.
const DEFAULT_PORT: u16 = 3000;

/// Error for a configuration value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {key}: {value:?}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse a comma-separated origin list. `*` anywhere in the list, or an
    /// empty list, allows any origin.
    pub fn parse(s: &str) -> Self {
        let origins: Vec<String> = s
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to listen on (`PORT`)
    pub port: u16,
    /// Provider host (`NOAA_BASE_URL`)
    pub noaa_base_url: String,
    /// `User-Agent` sent upstream (`USER_AGENT`)
    pub user_agent: String,
    /// Operator contact sent upstream as `From` (`NOAA_FROM`)
    pub noaa_from: Option<String>,
    /// Upstream request timeout in seconds (`NOAA_TIMEOUT_SECS`)
    pub noaa_timeout_secs: u64,
    /// CORS origins (`ALLOWED_ORIGINS`)
    pub allowed_origins: AllowedOrigins,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a
    /// variable if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let noaa_timeout_secs =
            parse_or("NOAA_TIMEOUT_SECS", get("NOAA_TIMEOUT_SECS"), DEFAULT_TIMEOUT_SECS)?;

        Ok(Self {
            port,
            noaa_base_url: get("NOAA_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            user_agent: get("USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            noaa_from: get("NOAA_FROM"),
            noaa_timeout_secs,
            allowed_origins: get("ALLOWED_ORIGINS")
                .map(|s| AllowedOrigins::parse(&s))
                .unwrap_or(AllowedOrigins::Any),
        })
    }

    /// Client configuration for the upstream provider.
    pub fn noaa(&self) -> NoaaConfig {
        let config = NoaaConfig::new(&self.user_agent)
            .with_base_url(&self.noaa_base_url)
            .with_timeout(self.noaa_timeout_secs);

        match &self.noaa_from {
            Some(from) => config.with_from(from),
            None => config,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            noaa_base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            noaa_from: None,
            noaa_timeout_secs: DEFAULT_TIMEOUT_SECS,
            allowed_origins: AllowedOrigins::Any,
        }
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(v) => v.trim().parse().map_err(|_| ConfigError { key, value: v }),
        None => Ok(default),
    }
}
