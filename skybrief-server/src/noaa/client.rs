//! NOAA Aviation Weather Center HTTP client.
//!
//! Fetches METAR and TAF records in the provider's JSON format. The client
//! does no decoding beyond deserializing the raw records; see
//! [`crate::decode`] for that.

use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{ACCEPT, FROM, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Icao;

use super::error::NoaaError;
use super::source::ReportSource;
use super::types::{RawMetar, RawTaf};

/// Default provider host.
pub const DEFAULT_BASE_URL: &str = "https://aviationweather.gov";

/// Default `User-Agent`; the provider asks clients to identify themselves.
pub const DEFAULT_USER_AGENT: &str = "SkyBriefAPI/1.0";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the NOAA client.
#[derive(Debug, Clone)]
pub struct NoaaConfig {
    /// Value of the `User-Agent` header
    pub user_agent: String,
    /// Operator contact sent as the `From` header, if any
    pub from: Option<String>,
    /// Provider host (defaults to production)
    pub base_url: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl NoaaConfig {
    /// Create a new config with the given `User-Agent`.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            from: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Identify the operator to the provider with a `From` header.
    pub fn with_from(mut self, contact: impl Into<String>) -> Self {
        self.from = Some(contact.into());
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for NoaaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

/// Report products served by the data API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Product {
    Metar,
    Taf,
}

impl Product {
    fn path(self) -> &'static str {
        match self {
            Product::Metar => "metar",
            Product::Taf => "taf",
        }
    }
}

/// NOAA data API client.
///
/// Uses a semaphore to limit concurrent requests to the provider.
#[derive(Debug, Clone)]
pub struct NoaaClient {
    http: reqwest::Client,
    base_url: String,
    semaphore: Arc<Semaphore>,
}

impl NoaaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: NoaaConfig) -> Result<Self, NoaaError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| NoaaError::InvalidConfig("invalid User-Agent header".to_string()))?;
        headers.insert(USER_AGENT, user_agent);

        if let Some(from) = &config.from {
            let from = HeaderValue::from_str(from)
                .map_err(|_| NoaaError::InvalidConfig("invalid From header".to_string()))?;
            headers.insert(FROM, from);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// The provider host this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch METAR records for a station.
    pub async fn fetch_metars(&self, station: &Icao) -> Result<Vec<RawMetar>, NoaaError> {
        self.fetch(Product::Metar, station).await
    }

    /// Fetch TAF records for a station.
    pub async fn fetch_tafs(&self, station: &Icao) -> Result<Vec<RawTaf>, NoaaError> {
        self.fetch(Product::Taf, station).await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        product: Product,
        station: &Icao,
    ) -> Result<Vec<T>, NoaaError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| NoaaError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/api/data/{}", self.base_url, product.path());
        debug!(station = %station, product = product.path(), "fetching from provider");

        let response = self
            .http
            .get(&url)
            .query(&[("ids", station.as_str()), ("format", "json")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(NoaaError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(NoaaError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NoaaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        // Unknown stations come back as 204 with no body
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        parse_records(&body)
    }
}

/// Parse a response body into records.
///
/// An empty body or a JSON `null` is an empty list. Records are read up to
/// the first `null` element, so `[null, ...]` also means no record.
fn parse_records<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, NoaaError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let json_error = |e: serde_json::Error| NoaaError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    };

    let items: Option<Vec<Option<Value>>> = serde_json::from_str(body).map_err(json_error)?;

    items
        .unwrap_or_default()
        .into_iter()
        .map_while(|item| item)
        .map(|item| serde_json::from_value(item).map_err(json_error))
        .collect()
}

impl ReportSource for NoaaClient {
    fn fetch_metars<'a>(
        &'a self,
        station: &'a Icao,
    ) -> BoxFuture<'a, Result<Vec<RawMetar>, NoaaError>> {
        NoaaClient::fetch_metars(self, station).boxed()
    }

    fn fetch_tafs<'a>(
        &'a self,
        station: &'a Icao,
    ) -> BoxFuture<'a, Result<Vec<RawTaf>, NoaaError>> {
        NoaaClient::fetch_tafs(self, station).boxed()
    }
}
