//! Streaming heart rate monitor
//!
//! Owns the sample buffer and the configured estimator, and runs the
//! per-sample loop: push, check fill, estimate. The estimate comes back as
//! a plain return value; the caller decides whether and where to deliver
//! it (UI thread, channel, callback), keeping the algorithm free of any
//! notification mechanism.
//!
//! # Concurrency
//!
//! The monitor is single-producer: one logical stream calls
//! [`HeartRateMonitor::push_sample`]. When capture and estimation run on
//! different threads, wrap the monitor in a single `Mutex`; each push
//! already snapshots the buffer by value before estimating, and the
//! transform over a few hundred samples is cheap enough that finer-grained
//! locking buys nothing.

use crate::analysis::result::EstimationResult;
use crate::config::EstimatorConfig;
use crate::error::EstimatorError;
use crate::io::reducer::mean_green_bgra;
use crate::io::sample_buffer::SampleBuffer;
use crate::spectral::estimator::SpectralEstimator;

/// Streaming estimator: sliding buffer plus spectral pipeline
#[derive(Debug, Clone)]
pub struct HeartRateMonitor {
    config: EstimatorConfig,
    buffer: SampleBuffer,
    estimator: SpectralEstimator,
    accept_range_bpm: Option<(f64, f64)>,
}

impl HeartRateMonitor {
    /// Create a monitor from a configuration
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError` if the configuration is invalid (see
    /// [`EstimatorConfig::validate`]).
    pub fn new(config: EstimatorConfig) -> Result<Self, EstimatorError> {
        let estimator = SpectralEstimator::new(&config)?;
        let buffer = SampleBuffer::new(config.capacity());

        log::debug!(
            "monitor: {} sample window ({} s at {} Hz), estimating from {} samples",
            buffer.capacity(),
            config.window_seconds,
            config.sample_rate_hz,
            (buffer.capacity() as f64 * config.min_fill_fraction).ceil()
        );

        Ok(Self {
            config,
            buffer,
            estimator,
            accept_range_bpm: None,
        })
    }

    /// Restrict reported rates to a plausible range in BPM
    ///
    /// Estimates outside the range are mapped to "no estimate" rather than
    /// reported. This is a reporting policy on the monitor; the underlying
    /// pipeline is unchanged.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::InvalidConfig` unless
    /// `0 < low_bpm < high_bpm`.
    pub fn with_accept_range(mut self, low_bpm: f64, high_bpm: f64) -> Result<Self, EstimatorError> {
        if !low_bpm.is_finite() || !high_bpm.is_finite() || low_bpm <= 0.0 || high_bpm <= low_bpm {
            return Err(EstimatorError::InvalidConfig(format!(
                "accept range must be a positive ascending pair, got ({}, {})",
                low_bpm, high_bpm
            )));
        }
        self.accept_range_bpm = Some((low_bpm, high_bpm));
        Ok(self)
    }

    /// Feed one luminance sample
    ///
    /// Appends to the sliding window and, once the buffer has reached its
    /// minimum fill, runs the estimation pipeline over a snapshot of the
    /// current window. Returns `Some` whenever estimation ran (the result
    /// may still be "no estimate"), `None` while the buffer is filling.
    pub fn push_sample(&mut self, sample: f32) -> Option<EstimationResult> {
        self.buffer.push(sample);

        if !self.buffer.is_ready(self.config.min_fill_fraction) {
            return None;
        }

        let window = self.buffer.snapshot();
        let mut result = self.estimator.estimate(&window);

        if let Some((low, high)) = self.accept_range_bpm {
            if result.has_estimate() && !(low..=high).contains(&result.rate_bpm) {
                log::debug!(
                    "discarding implausible rate {:.1} BPM (accept range {:.0}-{:.0})",
                    result.rate_bpm,
                    low,
                    high
                );
                result.rate_bpm = 0.0;
            }
        }

        Some(result)
    }

    /// Feed one BGRA8 video frame
    ///
    /// Reduces the frame to its mean green intensity and forwards it to
    /// [`HeartRateMonitor::push_sample`].
    pub fn push_frame_bgra(
        &mut self,
        data: &[u8],
        width: usize,
        height: usize,
        bytes_per_row: usize,
    ) -> Option<EstimationResult> {
        let sample = mean_green_bgra(data, width, height, bytes_per_row);
        self.push_sample(sample)
    }

    /// Drop all buffered samples (e.g., when the capture session restarts)
    pub fn reset(&mut self) {
        self.buffer.clear();
    }

    /// The underlying sample buffer
    pub fn buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// The configuration this monitor was built from
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pulse_sample(freq_hz: f64, sample_rate_hz: f64, index: usize) -> f32 {
        let t = index as f64 / sample_rate_hz;
        (0.5 + 0.5 * (2.0 * std::f64::consts::PI * freq_hz * t).sin()) as f32
    }

    fn small_config() -> EstimatorConfig {
        EstimatorConfig {
            window_seconds: 10.0,
            ..EstimatorConfig::default()
        }
    }

    #[test]
    fn test_no_output_before_fill_gate() {
        let mut monitor = HeartRateMonitor::new(small_config()).unwrap();
        let gate = (monitor.buffer().capacity() as f64 * 0.5).ceil() as usize;

        for i in 0..gate - 1 {
            assert!(
                monitor.push_sample(pulse_sample(1.2, 30.0, i)).is_none(),
                "no estimate expected before the fill gate (sample {})",
                i
            );
        }
        assert!(monitor
            .push_sample(pulse_sample(1.2, 30.0, gate - 1))
            .is_some());
    }

    #[test]
    fn test_estimates_once_full() {
        let mut monitor = HeartRateMonitor::new(small_config()).unwrap();
        let capacity = monitor.buffer().capacity();

        let mut last = None;
        for i in 0..capacity {
            if let Some(result) = monitor.push_sample(pulse_sample(1.2, 30.0, i)) {
                last = Some(result);
            }
        }

        let result = last.expect("full buffer must produce estimates");
        assert!(result.has_estimate());
        assert!(
            (result.rate_bpm - 72.0).abs() < 4.0,
            "expected ~72 BPM, got {:.1}",
            result.rate_bpm
        );
    }

    #[test]
    fn test_constant_stream_reports_no_estimate() {
        let mut monitor = HeartRateMonitor::new(small_config()).unwrap();
        let capacity = monitor.buffer().capacity();

        let mut last = None;
        for _ in 0..capacity {
            if let Some(result) = monitor.push_sample(0.5) {
                last = Some(result);
            }
        }

        let result = last.expect("estimation ran past the fill gate");
        assert!(!result.has_estimate());
        assert_eq!(result.rate_text(), "--");
    }

    #[test]
    fn test_accept_range_discards_implausible_rate() {
        // 3.5 Hz = 210 BPM: inside the search band, outside the accept range
        let mut monitor = HeartRateMonitor::new(small_config())
            .unwrap()
            .with_accept_range(40.0, 180.0)
            .unwrap();
        let capacity = monitor.buffer().capacity();

        let mut last = None;
        for i in 0..capacity {
            if let Some(result) = monitor.push_sample(pulse_sample(3.5, 30.0, i)) {
                last = Some(result);
            }
        }

        let result = last.unwrap();
        assert!(!result.has_estimate());
    }

    #[test]
    fn test_accept_range_rejects_inverted_pair() {
        let monitor = HeartRateMonitor::new(small_config()).unwrap();
        assert!(monitor.with_accept_range(180.0, 40.0).is_err());
    }

    #[test]
    fn test_reset_refills_from_scratch() {
        let mut monitor = HeartRateMonitor::new(small_config()).unwrap();
        let capacity = monitor.buffer().capacity();

        for i in 0..capacity {
            monitor.push_sample(pulse_sample(1.2, 30.0, i));
        }
        monitor.reset();
        assert!(monitor.buffer().is_empty());
        assert!(monitor.push_sample(0.5).is_none());
    }

    #[test]
    fn test_push_frame_reduces_then_buffers() {
        let mut monitor = HeartRateMonitor::new(small_config()).unwrap();
        let frame = vec![128u8; 4 * 4 * 4];

        monitor.push_frame_bgra(&frame, 4, 4, 16);
        assert_eq!(monitor.buffer().len(), 1);
        let sample = monitor.buffer().snapshot()[0];
        assert!((sample - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EstimatorConfig {
            window_seconds: -1.0,
            ..EstimatorConfig::default()
        };
        assert!(HeartRateMonitor::new(config).is_err());
    }
}
