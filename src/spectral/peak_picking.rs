//! Band-limited peak search over a magnitude spectrum

/// Select the dominant bin inside a frequency band
///
/// Scans bins whose center frequency falls in `band_hz` and returns the
/// index of the maximum magnitude. Bin bounds are
/// `i_min = max(1, floor(low / df))` and
/// `i_max = min(len - 1, floor(high / df))`; bin 0 (DC) is excluded even
/// when the band nominally includes it.
///
/// Returns `None` when no estimate is possible:
/// - fewer than two usable bins in the spectrum,
/// - the band collapses (`i_max <= i_min`), which happens when the window
///   is too short for the configured sample rate and band,
/// - every magnitude in the band is zero (flat input).
///
/// Ties resolve to the lowest index: the scan runs in ascending order and
/// only a strictly greater magnitude displaces the current winner.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn select_band_peak(magnitudes: &[f32], df: f64, band_hz: (f64, f64)) -> Option<usize> {
    if magnitudes.len() < 2 {
        return None;
    }

    let (low_hz, high_hz) = band_hz;
    let i_min = ((low_hz / df).floor() as usize).max(1);
    let i_max = ((high_hz / df).floor() as usize).min(magnitudes.len() - 1);

    if i_max <= i_min {
        log::debug!(
            "search band ({:.2}, {:.2}) Hz collapses at df={:.4} Hz over {} bins",
            low_hz,
            high_hz,
            df,
            magnitudes.len()
        );
        return None;
    }

    let mut best_index = i_min;
    let mut best_magnitude = magnitudes[i_min];
    for (offset, &magnitude) in magnitudes[i_min..=i_max].iter().enumerate() {
        if magnitude > best_magnitude {
            best_magnitude = magnitude;
            best_index = i_min + offset;
        }
    }

    if best_magnitude <= 0.0 {
        // All-zero band: a constant window transforms to nothing worth
        // reporting
        return None;
    }

    Some(best_index)
}
