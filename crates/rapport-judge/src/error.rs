//! Error types for the judgment engine

use rapport_features::FeatureError;
use thiserror::Error;

/// Errors that can occur while producing a judgment
///
/// Partial or missing feature data is never an error; it degrades into
/// default feature values and a lower confidence score. Only structurally
/// invalid input, a failing history lookup, or a bad configuration raise.
#[derive(Error, Debug)]
pub enum JudgeError {
    /// Malformed input record; fatal for this call, no partial judgment
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Feature extraction could not proceed at all
    #[error("Feature extraction failed: {0}")]
    FeatureExtraction(#[from] FeatureError),

    /// Invalid configuration, raised at construction time only
    #[error("Configuration error: {0}")]
    Configuration(String),
}
