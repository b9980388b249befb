//! Band-pass pre-filter for the cardiac frequency band
//!
//! Second-order band-pass biquad (RBJ cookbook, constant 0 dB peak gain)
//! centered on the geometric mean of the configured band. Out-of-band
//! energy from slow lighting drift and high-frequency sensor noise is
//! attenuated before the transform, sharpening the spectral peak.
//!
//! # Reference
//!
//! Bristow-Johnson, R. "Cookbook formulae for audio equalizer biquad
//! filter coefficients."
//!
//! # Stability
//!
//! Coefficients are normalized by `a0`; the design requires
//! `0 < low < high < sample_rate / 2` and rejects anything else at
//! construction, so the recursion is stable for every filter this type
//! can represent.

use crate::error::EstimatorError;

/// Designed band-pass biquad coefficients (normalized by `a0`)
#[derive(Debug, Clone)]
pub struct BandpassBiquad {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
}

impl BandpassBiquad {
    /// Design a band-pass biquad for the given band and sample rate
    ///
    /// Center frequency is `sqrt(low * high)`, Q is `center / (high - low)`.
    ///
    /// # Errors
    ///
    /// Returns `EstimatorError::FilterDesign` unless
    /// `0 < low_hz < high_hz < sample_rate_hz / 2`.
    pub fn design(low_hz: f64, high_hz: f64, sample_rate_hz: f64) -> Result<Self, EstimatorError> {
        if !(sample_rate_hz.is_finite() && sample_rate_hz > 0.0) {
            return Err(EstimatorError::FilterDesign(format!(
                "sample rate must be positive, got {}",
                sample_rate_hz
            )));
        }

        let nyquist = sample_rate_hz / 2.0;
        if !(low_hz.is_finite() && high_hz.is_finite()) || low_hz <= 0.0 || high_hz <= low_hz {
            return Err(EstimatorError::FilterDesign(format!(
                "band must be a positive ascending pair, got ({}, {})",
                low_hz, high_hz
            )));
        }
        if high_hz >= nyquist {
            return Err(EstimatorError::FilterDesign(format!(
                "band upper edge {} Hz must be below Nyquist ({} Hz)",
                high_hz, nyquist
            )));
        }

        let center_hz = (low_hz * high_hz).sqrt();
        let q = center_hz / (high_hz - low_hz);

        let w0 = 2.0 * std::f64::consts::PI * center_hz / sample_rate_hz;
        let cos_w0 = w0.cos();
        let sin_w0 = w0.sin();
        let alpha = sin_w0 / (2.0 * q);

        // RBJ band-pass, constant 0 dB peak gain
        let b0 = alpha;
        let b1 = 0.0;
        let b2 = -alpha;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        Ok(Self {
            b0: (b0 / a0) as f32,
            b1: (b1 / a0) as f32,
            b2: (b2 / a0) as f32,
            a1: (a1 / a0) as f32,
            a2: (a2 / a0) as f32,
        })
    }

    /// Filter a window with fresh (zero) state
    ///
    /// Direct Form II transposed. State is local to the call, so filtering
    /// the same window twice produces identical output.
    pub fn filter(&self, window: &[f32]) -> Vec<f32> {
        let mut s1 = 0.0f32;
        let mut s2 = 0.0f32;
        window
            .iter()
            .map(|&x| {
                let y = self.b0 * x + s1;
                s1 = self.b1 * x + s2 - self.a1 * y;
                s2 = self.b2 * x - self.a2 * y;
                y
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tone(freq_hz: f32, sample_rate_hz: f32, count: usize) -> Vec<f32> {
        (0..count)
            .map(|i| {
                let t = i as f32 / sample_rate_hz;
                (2.0 * std::f32::consts::PI * freq_hz * t).sin()
            })
            .collect()
    }

    fn rms(window: &[f32]) -> f32 {
        (window.iter().map(|&x| x * x).sum::<f32>() / window.len() as f32).sqrt()
    }

    #[test]
    fn test_design_cardiac_band() {
        let biquad = BandpassBiquad::design(0.7, 4.0, 30.0).unwrap();
        for c in [biquad.b0, biquad.b1, biquad.b2, biquad.a1, biquad.a2] {
            assert!(c.is_finite());
        }
    }

    #[test]
    fn test_design_rejects_band_at_nyquist() {
        assert!(BandpassBiquad::design(0.7, 15.0, 30.0).is_err());
        assert!(BandpassBiquad::design(0.7, 20.0, 30.0).is_err());
    }

    #[test]
    fn test_design_rejects_inverted_or_zero_band() {
        assert!(BandpassBiquad::design(4.0, 0.7, 30.0).is_err());
        assert!(BandpassBiquad::design(0.0, 4.0, 30.0).is_err());
        assert!(BandpassBiquad::design(0.7, 4.0, 0.0).is_err());
    }

    #[test]
    fn test_passband_tone_survives_stopband_tone_attenuated() {
        let biquad = BandpassBiquad::design(0.7, 4.0, 30.0).unwrap();

        // Skip the first two seconds to let the transient settle
        let in_band = biquad.filter(&tone(1.6, 30.0, 600));
        let out_of_band = biquad.filter(&tone(10.0, 30.0, 600));
        let in_band_rms = rms(&in_band[60..]);
        let out_of_band_rms = rms(&out_of_band[60..]);

        assert!(
            out_of_band_rms < in_band_rms * 0.5,
            "10 Hz tone should be attenuated well below the 1.6 Hz tone: {} vs {}",
            out_of_band_rms,
            in_band_rms
        );
    }

    #[test]
    fn test_filter_is_deterministic() {
        let biquad = BandpassBiquad::design(0.7, 4.0, 30.0).unwrap();
        let window = tone(1.2, 30.0, 128);
        assert_eq!(biquad.filter(&window), biquad.filter(&window));
    }

    #[test]
    fn test_filter_output_stays_bounded() {
        let biquad = BandpassBiquad::design(0.7, 4.0, 30.0).unwrap();
        let filtered = biquad.filter(&tone(1.2, 30.0, 2000));
        for &x in &filtered {
            assert!(x.is_finite());
            assert!(x.abs() < 10.0, "unstable filter output: {}", x);
        }
    }
}
