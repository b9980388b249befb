//! Detrending and normalization utilities
//!
//! Ambient lighting contributes a large DC offset to the luminance stream;
//! the pulse rides on top as a small oscillation. Mean removal strips the
//! offset, and RMS scaling brings windows from different lighting
//! conditions onto a comparable amplitude for display. The spectral peak
//! search itself is scale-invariant.

/// RMS below which a window is treated as numerically flat
///
/// A flat window has no oscillatory content to normalize or search; the
/// pipeline degrades to "no estimate" instead of dividing by a vanishing
/// scale factor.
pub const RMS_FLOOR: f32 = 1e-6;

/// Subtract the arithmetic mean from every sample
///
/// Returns the detrended copy; an empty window stays empty.
pub fn mean_detrend(window: &[f32]) -> Vec<f32> {
    if window.is_empty() {
        return Vec::new();
    }
    let mean = window.iter().sum::<f32>() / window.len() as f32;
    window.iter().map(|&x| x - mean).collect()
}

/// Root-mean-square of a window (0.0 when empty)
pub fn rms(window: &[f32]) -> f32 {
    if window.is_empty() {
        return 0.0;
    }
    (window.iter().map(|&x| x * x).sum::<f32>() / window.len() as f32).sqrt()
}

/// Divide every sample by the window's RMS
///
/// Returns `(scaled_window, rms)`. When the RMS is at or below
/// [`RMS_FLOOR`] the window is returned unscaled, so callers can treat
/// the result as flat.
pub fn rms_normalize(window: &[f32]) -> (Vec<f32>, f32) {
    let scale = rms(window);
    if scale <= RMS_FLOOR {
        return (window.to_vec(), scale);
    }
    (window.iter().map(|&x| x / scale).collect(), scale)
}

/// Rescale a window to [-1, 1] by its min/max range
///
/// Intended for waveform display. Windows shorter than 2 samples or with
/// no range are returned unchanged.
pub fn rescale_unit(window: &[f32]) -> Vec<f32> {
    let min = window.iter().copied().fold(f32::INFINITY, f32::min);
    let max = window.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if window.len() < 2 || max <= min {
        return window.to_vec();
    }
    let range = max - min;
    window.iter().map(|&x| (x - min) / range * 2.0 - 1.0).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detrend_removes_mean() {
        let detrended = mean_detrend(&[1.0, 2.0, 3.0, 4.0]);
        let residual_mean = detrended.iter().sum::<f32>() / detrended.len() as f32;
        assert!(residual_mean.abs() < 1e-6);
    }

    #[test]
    fn test_detrend_constant_is_zero() {
        let detrended = mean_detrend(&[0.5; 32]);
        assert!(detrended.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_detrend_empty() {
        assert!(mean_detrend(&[]).is_empty());
    }

    #[test]
    fn test_rms_known_value() {
        // RMS of [3, -3, 3, -3] is 3
        assert!((rms(&[3.0, -3.0, 3.0, -3.0]) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_rms_normalize_unit_scale() {
        let (scaled, scale) = rms_normalize(&[2.0, -2.0, 2.0, -2.0]);
        assert!((scale - 2.0).abs() < 1e-6);
        assert!((rms(&scaled) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rms_normalize_flat_window_unscaled() {
        let window = vec![0.0f32; 16];
        let (scaled, scale) = rms_normalize(&window);
        assert!(scale <= RMS_FLOOR);
        assert_eq!(scaled, window);
    }

    #[test]
    fn test_rescale_unit_bounds() {
        let rescaled = rescale_unit(&[0.2, 0.5, 0.8]);
        assert!((rescaled[0] - -1.0).abs() < 1e-6);
        assert!((rescaled[2] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rescale_unit_flat_unchanged() {
        let window = vec![0.5f32; 8];
        assert_eq!(rescale_unit(&window), window);
    }
}
