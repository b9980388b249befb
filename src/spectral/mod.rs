//! Spectral heart rate estimation
//!
//! Converts a chronological luminance window into a dominant-frequency
//! estimate inside the physiological band:
//!
//! ```text
//! window -> detrend -> normalize -> zero-pad -> FFT -> |magnitude|
//!        -> band-limited peak search -> Hz * 60 -> BPM
//! ```
//!
//! The pipeline is a pure function of its inputs and never fails:
//! degenerate inputs (flat signal, short window, collapsed band) produce a
//! `rate_bpm = 0` "no estimate" result. A transient missing reading is an
//! expected state for a live biological signal, not a fault.

pub mod estimator;
pub mod peak_picking;
pub mod transform;

pub use estimator::{estimate, SpectralEstimator};
