// Error types for the feeddeck application.
// Covers dataset loading failures and terminal I/O; the UI itself has no
// failure modes beyond empty-collection display states.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedDeckError {
    #[error("invalid page data: {0}")]
    Data(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FeedDeckError>;
