use thiserror::Error;

/// Failure to retrieve a listing page or a document.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Fetched bytes that could not be turned into first-page text.
#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("document is empty")]
    Empty,

    #[error("failed to load PDF: {0}")]
    Load(String),

    #[error("document has no pages")]
    NoPages,

    #[error("failed to extract text from page 1: {0}")]
    Text(String),
}
