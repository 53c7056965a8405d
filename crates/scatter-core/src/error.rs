// File: crates/scatter-core/src/error.rs
// Summary: Error types for rendering and dataset loading.

use thiserror::Error;

/// Errors raised by the chart renderer and its hover dispatch.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Input records cannot produce a well-formed chart; nothing was drawn.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A hover event referenced a mark that does not exist.
    #[error("no mark with index {0}")]
    UnknownMark(usize),
}

/// Errors raised while turning raw dataset text into records.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed CSV dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("record {index}: missing field `{field}`")]
    MissingField { index: usize, field: &'static str },
    #[error("record {index}: bad race time {value:?} (expected MM:SS)")]
    BadTime { index: usize, value: String },
    #[error("unsupported dataset extension: {0:?}")]
    UnsupportedFormat(String),
}
