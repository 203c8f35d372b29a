use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("malformed dataset payload from {0}")]
    Payload(String, #[source] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("failed to write page to '{0}'")]
    OutputWrite(PathBuf, #[source] std::io::Error),
}
