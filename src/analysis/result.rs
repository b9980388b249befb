//! Estimation result types

use serde::{Deserialize, Serialize};

/// Result of one estimation pass over a sample window
///
/// Produced fresh on every call; carries no identity beyond the call that
/// created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Estimated heart rate in BPM; `0` means "no estimate"
    pub rate_bpm: f64,

    /// The normalized signal window the estimate was derived from
    ///
    /// Values lie approximately in [-1, 1] when RMS normalization
    /// succeeded; for a numerically flat window this is the detrended,
    /// unscaled signal instead. Intended for waveform display.
    pub normalized_window: Vec<f32>,
}

impl EstimationResult {
    /// A "no estimate" result carrying only the processed window
    pub fn no_estimate(normalized_window: Vec<f32>) -> Self {
        Self {
            rate_bpm: 0.0,
            normalized_window,
        }
    }

    /// `true` when a rate was actually estimated
    pub fn has_estimate(&self) -> bool {
        self.rate_bpm > 0.0
    }

    /// Display form of the rate: rounded integer BPM, or `"--"` when no
    /// estimate is available
    pub fn rate_text(&self) -> String {
        if self.has_estimate() {
            format!("{:.0}", self.rate_bpm)
        } else {
            "--".to_string()
        }
    }
}
