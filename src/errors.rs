// ABOUTME: Error types for the vitality application
// ABOUTME: Provides structured error handling for each stage of the compile pipeline

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitalityError {
    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse presentation document: {0}")]
    YamlError(String),

    #[error("Failed to serialize presentation: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Slide {slide}: missing required field `{field}`")]
    MissingField { slide: usize, field: String },

    #[error("Slide {slide}: field `{field}` must be {expected}")]
    InvalidField {
        slide: usize,
        field: String,
        expected: String,
    },

    #[error("Invalid presentation document: {0}")]
    InvalidDocument(String),

    #[error("Input validation error: {0}")]
    ValidationError(String),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Watch error: {0}")]
    WatchError(String),
}

impl VitalityError {
    pub(crate) fn missing(slide: usize, field: &str) -> Self {
        VitalityError::MissingField {
            slide,
            field: field.to_string(),
        }
    }

    pub(crate) fn invalid(slide: usize, field: &str, expected: &str) -> Self {
        VitalityError::InvalidField {
            slide,
            field: field.to_string(),
            expected: expected.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VitalityError>;
