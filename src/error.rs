// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphRankError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed header line: expected \"<vertices> <capacity>\", got {0:?}")]
    Header(String),

    #[error("Graph must have at least one vertex")]
    EmptyGraph,

    #[error("Malformed matrix row {row}: {detail}")]
    Malformed { row: usize, detail: String },

    #[error("Ranking arena allocation failed: {0}")]
    Alloc(#[from] std::collections::TryReserveError),

    #[error("Unexpected end of input while reading a {0}x{0} matrix")]
    TruncatedMatrix(usize),
}

pub type Result<T> = std::result::Result<T, GraphRankError>;
