//! Error types for feature extraction

use thiserror::Error;

/// Errors that can occur during feature extraction
///
/// Absent feature data is not an error; only an unrecoverable failure of the
/// injected history lookup (or an invalid configuration) is.
#[derive(Error, Debug)]
pub enum FeatureError {
    /// The history lookup itself failed (not "no data found")
    #[error("History lookup failed: {0}")]
    HistoryLookup(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
