use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error while accessing a file or resource: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid contact data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} Not found")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Contact index {index} is out of bounds for a list of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
