//! Zero-padded forward FFT and magnitude spectrum

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Transform length for an `n`-sample window: the next power of two >= `n`
///
/// A window already at a power of two is not padded further.
pub fn padded_len(n: usize) -> usize {
    n.next_power_of_two()
}

/// Magnitude spectrum of a zero-padded real signal
///
/// The signal is extended with zeros to [`padded_len`], transformed, and
/// the magnitudes of the first `fft_len / 2` coefficients returned
/// (non-negative frequencies only; Nyquist and above are dropped). Bin
/// spacing is `sample_rate / fft_len`.
///
/// An empty signal yields an empty spectrum; a single sample yields an
/// empty spectrum too (`fft_len = 1` leaves no usable bins).
pub fn forward_magnitudes(signal: &[f32]) -> Vec<f32> {
    if signal.is_empty() {
        return Vec::new();
    }

    let fft_len = padded_len(signal.len());

    let mut buffer: Vec<Complex<f32>> = signal.iter().map(|&x| Complex::new(x, 0.0)).collect();
    buffer.resize(fft_len, Complex::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(fft_len);
    fft.process(&mut buffer);

    buffer.iter().take(fft_len / 2).map(|c| c.norm()).collect()
}
