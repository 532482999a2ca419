//! Visual question data model.
//!
//! Five interactive subtypes share one tagged union, [`VisualQuestion`].
//! Everything needed to grade a question is embedded in the value itself;
//! questions are produced by the authoring editors and stored as JSON.

pub mod types;
pub mod answer;
pub mod validate;

#[cfg(test)]
mod tests_serde;

pub use types::*;
pub use answer::VisualAnswer;
pub use validate::{Severity, ValidationIssue};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading a question from its stored form.
#[derive(Debug, Error)]
pub enum QuestionError {
    #[error("Grid question has neither correctCells nor requiredCount")]
    UnanswerableGrid,

    #[error("Invalid cell id: {0}")]
    InvalidCellId(String),

    #[error("Malformed question JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while reading a submitted answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnswerError {
    #[error("Selection entry {index} is a {found}, expected a string id")]
    NonStringEntry { index: usize, found: &'static str },
}

/// Result type for question parsing.
pub type QuestionResult<T> = Result<T, QuestionError>;

impl VisualQuestion {
    /// Read a question from stored JSON. Grid scoring problems surface as
    /// [`QuestionError::Json`] carrying the [`QuestionError::UnanswerableGrid`]
    /// message.
    pub fn from_json(value: &Value) -> QuestionResult<Self> {
        Ok(Self::deserialize(value)?)
    }

    pub fn from_json_str(json: &str) -> QuestionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
