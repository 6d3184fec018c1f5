use thiserror::Error;

use crate::draft::RequiredField;

#[derive(Error, Debug)]
pub enum EvalFormError {
    #[error("Missing required fields: {}", join_labels(.0))]
    MissingFields(Vec<RequiredField>),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid rating: {0:?}")]
    InvalidRating(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, EvalFormError>;
