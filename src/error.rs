//! Error types for the AutoJudge library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`AutoJudgeError`] enum. Constructor helpers keep call sites short.
//!
//! # Examples
//!
//! ```
//! use autojudge::error::{AutoJudgeError, Result};
//!
//! fn check_width(expected: usize, actual: usize) -> Result<()> {
//!     if expected != actual {
//!         return Err(AutoJudgeError::width_mismatch(expected, actual));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_width(4005, 4005).is_ok());
//! assert!(check_width(4005, 12).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for AutoJudge operations.
#[derive(Error, Debug)]
pub enum AutoJudgeError {
    /// I/O errors (artifact files, datasets).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering).
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A feature vector does not have the width a model or vocabulary expects.
    ///
    /// This always means the vocabulary and the models were produced by
    /// different training runs.
    #[error("Feature width mismatch: expected {expected}, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// Persisted feature schema disagrees with the compiled-in one.
    #[error("Feature schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A model or vocabulary was used before it was fitted.
    #[error("Model not trained: {0}")]
    ModelNotTrained(String),

    /// Not enough labeled problems to fit the models.
    #[error("Training data insufficient: need at least {min_samples} samples, got {actual}")]
    InsufficientTrainingData { min_samples: usize, actual: usize },

    /// A required artifact is missing or cannot be decoded.
    #[error("Failed to load artifact {path}: {reason}")]
    ArtifactLoad { path: String, reason: String },

    /// Input text is too short to produce a meaningful prediction.
    #[error("Input too short: need at least {min_chars} characters, got {actual}")]
    InputTooShort { min_chars: usize, actual: usize },

    /// Dataset parsing errors.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid argument passed to an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV table errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Binary artifact encoding errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AutoJudgeError.
pub type Result<T> = std::result::Result<T, AutoJudgeError>;

impl AutoJudgeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        AutoJudgeError::Analysis(msg.into())
    }

    /// Create a new width mismatch error.
    pub fn width_mismatch(expected: usize, actual: usize) -> Self {
        AutoJudgeError::WidthMismatch { expected, actual }
    }

    /// Create a new schema mismatch error.
    pub fn schema_mismatch<S: Into<String>>(msg: S) -> Self {
        AutoJudgeError::SchemaMismatch(msg.into())
    }

    /// Create a new not-trained error.
    pub fn not_trained<S: Into<String>>(msg: S) -> Self {
        AutoJudgeError::ModelNotTrained(msg.into())
    }

    /// Create a new artifact load error.
    pub fn artifact_load<P: Into<String>, S: Into<String>>(path: P, reason: S) -> Self {
        AutoJudgeError::ArtifactLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        AutoJudgeError::Dataset(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        AutoJudgeError::InvalidConfig(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        AutoJudgeError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = AutoJudgeError::width_mismatch(4005, 10);
        assert_eq!(
            error.to_string(),
            "Feature width mismatch: expected 4005, got 10"
        );

        let error = AutoJudgeError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = AutoJudgeError::artifact_load("models/classifier.bin", "missing");
        assert_eq!(
            error.to_string(),
            "Failed to load artifact models/classifier.bin: missing"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = AutoJudgeError::from(io_error);

        match error {
            AutoJudgeError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
