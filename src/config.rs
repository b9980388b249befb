//! Configuration parameters for heart rate estimation

use crate::error::EstimatorError;

/// Estimation configuration parameters
///
/// All parameters are fixed at construction time; components built from a
/// configuration never observe it changing.
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    // Sliding window
    /// Analysis window length in seconds (default: 20.0)
    pub window_seconds: f64,

    /// Sample rate in Hz (default: 30.0, approximate camera capture rate)
    ///
    /// Sample spacing is assumed uniform; the engine does not verify frame
    /// timing.
    pub sample_rate_hz: f64,

    /// Minimum buffer fill, as a fraction of capacity, before estimation
    /// is attempted (default: 0.5)
    pub min_fill_fraction: f64,

    // Spectral search
    /// Frequency band searched for the cardiac peak, in Hz
    /// (default: 0.7-4.0 Hz, ~42-240 BPM)
    pub freq_band_hz: (f64, f64),

    // Optional preprocessing
    /// Apply a band-pass pre-filter over `freq_band_hz` before the
    /// transform (default: false)
    ///
    /// When enabled, the band must satisfy `high < sample_rate_hz / 2` or
    /// construction fails with a filter design error.
    pub bandpass_prefilter: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            window_seconds: 20.0,
            sample_rate_hz: 30.0,
            min_fill_fraction: 0.5,
            freq_band_hz: (0.7, 4.0),
            bandpass_prefilter: false,
        }
    }
}

impl EstimatorConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::InvalidConfig` if `window_seconds` or
    /// `sample_rate_hz` is not a positive finite number, if
    /// `min_fill_fraction` is outside [0, 1], or if the frequency band is
    /// not a positive ascending pair.
    pub fn validate(&self) -> Result<(), EstimatorError> {
        if !self.window_seconds.is_finite() || self.window_seconds <= 0.0 {
            return Err(EstimatorError::InvalidConfig(format!(
                "window_seconds must be positive, got {}",
                self.window_seconds
            )));
        }

        if !self.sample_rate_hz.is_finite() || self.sample_rate_hz <= 0.0 {
            return Err(EstimatorError::InvalidConfig(format!(
                "sample_rate_hz must be positive, got {}",
                self.sample_rate_hz
            )));
        }

        if !self.min_fill_fraction.is_finite() || !(0.0..=1.0).contains(&self.min_fill_fraction) {
            return Err(EstimatorError::InvalidConfig(format!(
                "min_fill_fraction must be in [0, 1], got {}",
                self.min_fill_fraction
            )));
        }

        let (low, high) = self.freq_band_hz;
        if !low.is_finite() || !high.is_finite() || low <= 0.0 || high <= low {
            return Err(EstimatorError::InvalidConfig(format!(
                "freq_band_hz must be a positive ascending pair, got ({}, {})",
                low, high
            )));
        }

        Ok(())
    }

    /// Sample buffer capacity implied by this configuration
    ///
    /// `ceil(window_seconds * sample_rate_hz)`; the number of samples one
    /// analysis window holds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn capacity(&self) -> usize {
        (self.window_seconds * self.sample_rate_hz).ceil() as usize
    }
}
