//! Error types for the heart rate estimation engine

use std::fmt;

/// Errors that can occur when constructing estimation components
///
/// The estimation path itself never fails: degenerate numeric conditions
/// (flat signal, short window, collapsed frequency band) degrade to a
/// "no estimate" result instead. Errors only surface at construction time,
/// when a configuration cannot produce a meaningful pipeline.
#[derive(Debug, Clone)]
pub enum EstimatorError {
    /// Invalid configuration parameters
    InvalidConfig(String),

    /// Band-pass filter design failure (band incompatible with sample rate)
    FilterDesign(String),
}

impl fmt::Display for EstimatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimatorError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            EstimatorError::FilterDesign(msg) => write!(f, "Filter design error: {}", msg),
        }
    }
}

impl std::error::Error for EstimatorError {}
