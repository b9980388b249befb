//! # rppg-dsp
//!
//! A real-time heart rate estimation engine for remote photoplethysmography
//! (rPPG): camera frames are reduced to a stream of ambient-light intensity
//! samples, and the dominant spectral component in the physiological band
//! (0.7-4.0 Hz, ~42-240 BPM) is reported as the heart rate.
//!
//! ## Features
//!
//! - **Sliding-window buffering**: bounded FIFO holding the most recent
//!   analysis window, evicting oldest samples as frames arrive
//! - **Spectral estimation**: detrend, RMS normalization, zero-padded FFT,
//!   and band-limited peak search, incremental per sample
//! - **Graceful degradation**: flat signals, short windows, and collapsed
//!   bands produce a "no estimate" result instead of errors
//! - **Optional band-pass pre-filter**: real biquad stage over the cardiac
//!   band, off by default
//!
//! ## Quick Start
//!
//! ```
//! use rppg_dsp::{EstimatorConfig, HeartRateMonitor};
//!
//! let mut monitor = HeartRateMonitor::new(EstimatorConfig::default())?;
//!
//! // One luminance sample per captured frame
//! for luminance in [0.52f32, 0.53, 0.51] {
//!     if let Some(result) = monitor.push_sample(luminance) {
//!         println!("HR: {} bpm", result.rate_text());
//!     }
//! }
//! # Ok::<(), rppg_dsp::EstimatorError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Frame Source -> Scalar Reduction -> Sample Buffer -> Spectral Estimation -> Output
//! ```
//!
//! The estimation pipeline is a pure function of the sample window; all
//! streaming state lives in the buffer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod io;
pub mod monitor;
pub mod preprocessing;
pub mod spectral;

// Re-export main types
pub use analysis::result::EstimationResult;
pub use config::EstimatorConfig;
pub use error::EstimatorError;
pub use io::sample_buffer::SampleBuffer;
pub use monitor::HeartRateMonitor;
pub use spectral::estimator::SpectralEstimator;

/// One-shot heart rate estimation over a complete sample window
///
/// Validates the configuration, then runs the spectral pipeline once over
/// `window`. For streaming use, prefer [`HeartRateMonitor`], which owns the
/// sliding buffer and fill gating.
///
/// # Arguments
///
/// * `window` - Luminance samples in chronological order, roughly [0, 1]
/// * `config` - Estimation configuration
///
/// # Returns
///
/// [`EstimationResult`] with the rate in BPM (`0` when no estimate is
/// possible) and the normalized window used.
///
/// # Errors
///
/// Returns `EstimatorError` only for an invalid configuration; degenerate
/// windows degrade to a "no estimate" result instead.
///
/// # Example
///
/// ```
/// use rppg_dsp::{estimate_heart_rate, EstimatorConfig};
///
/// let window: Vec<f32> = (0..600)
///     .map(|i| 0.5 + 0.1 * (2.0 * std::f32::consts::PI * 1.2 * i as f32 / 30.0).sin())
///     .collect();
///
/// let result = estimate_heart_rate(&window, &EstimatorConfig::default())?;
/// assert!(result.has_estimate());
/// # Ok::<(), rppg_dsp::EstimatorError>(())
/// ```
pub fn estimate_heart_rate(
    window: &[f32],
    config: &EstimatorConfig,
) -> Result<EstimationResult, EstimatorError> {
    log::debug!(
        "estimating over {} samples at {} Hz",
        window.len(),
        config.sample_rate_hz
    );

    let estimator = SpectralEstimator::new(config)?;
    Ok(estimator.estimate(window))
}
