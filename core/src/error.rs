//! Error types for loading the element dataset

use thiserror::Error;

/// Errors while retrieving or parsing the dataset
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to fetch {path}: {message}")]
    Fetch { path: String, message: String },

    #[error("fetching {path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error("invalid element dataset")]
    Parse(#[from] serde_json::Error),
}
