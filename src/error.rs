//! Error types shared by the catalog client and the lineup computations.
//!
//! Every fallible operation in the crate returns [`Result`]. Errors are never
//! swallowed inside the core: they propagate to the caller of the top-level
//! fetch or analysis, and the CLI decides how to report them.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The client-credentials exchange failed. Fatal for the run.
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// An authenticated request returned a non-success status.
    #[error("Request to {url} failed with status {status}")]
    Api { status: u16, url: String },

    /// The response body did not have the expected shape.
    #[error("Malformed response from {url}: {source}")]
    MalformedResponse {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::Configuration(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
