//! NOAA client error types.

/// Errors from fetching reports upstream.
///
/// "No report for this station" is not an error: the client returns an
/// empty record list for that.
#[derive(Debug, thiserror::Error)]
pub enum NoaaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider rejected our identification headers
    #[error("unauthorized by aviation weather API")]
    Unauthorized,

    /// Rate limited by the API
    #[error("rate limited by aviation weather API")]
    RateLimited,

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body was not a list of records
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Client configuration could not be turned into a request
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NoaaError::Api {
            status: 502,
            message: "Bad Gateway".into(),
        };
        assert_eq!(err.to_string(), "API error 502: Bad Gateway");

        let err = NoaaError::Json {
            message: "expected a sequence".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected a sequence"));

        let err = NoaaError::RateLimited;
        assert_eq!(err.to_string(), "rate limited by aviation weather API");
    }
}
