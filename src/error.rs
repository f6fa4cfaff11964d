use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardForgeError {
    #[error("Invalid Dimensions: {width}x{height} (both sides must be positive)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid Difficulty: item {item_id} has difficulty {value} (expected 1..=5)")]
    InvalidDifficulty { item_id: u32, value: u8 },

    #[error("Layout Mismatch: expected {expected} cells, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },

    #[error("Search Cancelled")]
    Cancelled,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type BfResult<T> = Result<T, BoardForgeError>;
