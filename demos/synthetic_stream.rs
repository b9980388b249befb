//! Example: Estimate heart rate from a synthetic pulse stream
//!
//! Simulates 40 seconds of camera luminance carrying a 72 BPM pulse plus
//! deterministic noise, feeds it through the streaming monitor, and prints
//! one estimate per simulated second.

use rppg_dsp::{EstimatorConfig, HeartRateMonitor};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    env_logger::init();

    let config = EstimatorConfig::default();
    let sample_rate = config.sample_rate_hz;
    let mut monitor = HeartRateMonitor::new(config)?.with_accept_range(40.0, 220.0)?;

    // 72 BPM pulse with an LCG disturbance (reproducible, no rand crate)
    let pulse_hz = 1.2;
    let mut lcg: u32 = 0xdead_beef;
    let total = (40.0 * sample_rate) as usize;

    println!("Simulating {} frames at {} Hz...", total, sample_rate);

    for i in 0..total {
        lcg = lcg.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let noise = (lcg >> 16) as f64 / 65_536.0 - 0.5;
        let t = i as f64 / sample_rate;
        let luminance = 0.5 + 0.4 * (2.0 * std::f64::consts::PI * pulse_hz * t).sin() + 0.05 * noise;

        let result = monitor.push_sample(luminance as f32);

        // One status line per simulated second
        if i % sample_rate as usize == 0 {
            match &result {
                Some(r) => println!("t={:>4.1}s  HR: {:>3} bpm", t, r.rate_text()),
                None => println!("t={:>4.1}s  HR: --- (buffering, {} samples)", t, monitor.buffer().len()),
            }
        }
    }

    Ok(())
}
