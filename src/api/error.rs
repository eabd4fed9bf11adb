use reqwest::StatusCode;
use thiserror::Error;

/// Failures a catalog fetch can produce. A failed load never aborts the
/// other in-flight load; callers report the error and keep their state.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL {url:?}: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to initialize HTTP client: {source}")]
    Init {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {endpoint} failed: {source}")]
    Network {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Server {
        endpoint: &'static str,
        status: StatusCode,
    },

    #[error("could not decode {endpoint} response: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
