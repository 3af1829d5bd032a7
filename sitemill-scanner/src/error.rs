use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch {url}: {status} {reason}")]
    HttpStatus {
        url: String,
        status: u16,
        reason: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ScanError {
    /// True for failures that happened while talking to the remote site,
    /// as opposed to a seed that could not be understood at all.
    pub fn is_network(&self) -> bool {
        matches!(self, ScanError::Network(_) | ScanError::HttpStatus { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
