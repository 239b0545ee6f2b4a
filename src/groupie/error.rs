use reqwest::StatusCode;
use thiserror::Error;

/// Errors from talking to the groupie tracker API.
///
/// Every variant carries the request URL, so an aggregation failure names
/// the sub-fetch that caused it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    UpstreamStatus { url: String, status: StatusCode },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
