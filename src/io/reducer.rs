//! Frame-to-scalar luminance reduction
//!
//! Reduces a raw pixel buffer to a single mean green-channel intensity in
//! [0, 1]. The green channel carries the strongest blood-volume-pulse
//! signal in rPPG, so a full-frame green mean is the simplest usable
//! reducer. Face/region-of-interest selection would localize the signal
//! but is out of scope here.

/// Mean green-channel intensity of a BGRA8 frame, in [0, 1]
///
/// `bytes_per_row` is the row stride and may exceed `width * 4` when rows
/// are padded. Returns 0.0 for an empty frame or a buffer too small for
/// the declared geometry.
pub fn mean_green_bgra(data: &[u8], width: usize, height: usize, bytes_per_row: usize) -> f32 {
    if width == 0 || height == 0 {
        return 0.0;
    }

    if bytes_per_row < width * 4 || data.len() < height * bytes_per_row {
        log::warn!(
            "frame buffer too small for {}x{} (stride {}): {} bytes",
            width,
            height,
            bytes_per_row,
            data.len()
        );
        return 0.0;
    }

    let mut sum: u64 = 0;
    for y in 0..height {
        let row = &data[y * bytes_per_row..y * bytes_per_row + width * 4];
        for pixel in row.chunks_exact(4) {
            // BGRA: green is byte 1
            sum += u64::from(pixel[1]);
        }
    }

    let count = (width * height) as u64;
    (sum as f64 / count as f64 / 255.0) as f32
}
