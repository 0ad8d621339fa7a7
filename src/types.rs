// Core types for the instrument coder
use serde::Serialize;

/// One taxonomy term found in one document, with its occurrence count.
/// Created by the matcher, never mutated afterwards. `condition` and
/// `category` carry the display (capitalized) form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hit {
    pub document: String,
    pub condition: String,
    pub category: String,
    pub term: String,
    pub count: usize,
}

/// Per-document extraction failure. Stays local to the batch driver;
/// a bad file never aborts the run.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ExtractError(pub String);

// Error types
#[derive(Debug, thiserror::Error)]
pub enum CoderError {
    #[error("taxonomy error: {0}")]
    Taxonomy(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoderError>;
