//! Error types for the BGG client

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// BGG client errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("BGG API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    Decode(String),
}
