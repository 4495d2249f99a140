//! Log-frequency spectrogram rendering

use super::colormap;
use super::stft::{amplitude_to_db, stft_magnitudes, N_FFT, TOP_DB};
use crate::audio::DecodedAudio;
use image::RgbImage;

/// Render a time-frequency magnitude plot on a log-frequency axis.
///
/// Columns sample STFT frames across the duration of the audio; rows are
/// spaced logarithmically from the first non-DC bin frequency up to
/// Nyquist, with the dB value of the nearest bin colored through the
/// built-in gradient. 0 dB is the overall peak magnitude, the floor is
/// -80 dB.
pub fn render_spectrogram(audio: &DecodedAudio, width: u32, height: u32) -> RgbImage {
    let db = amplitude_to_db(&stft_magnitudes(&audio.samples));
    let n_frames = db.len();
    let n_bins = db[0].len();

    let bin_hz = audio.sample_rate as f32 / N_FFT as f32;
    let f_min = bin_hz; // first non-DC bin
    let f_max = audio.sample_rate as f32 / 2.0;
    let log_span = (f_max / f_min).ln();

    let mut img = RgbImage::new(width, height);

    for y in 0..height {
        // Row 0 is Nyquist, bottom row is the lowest bin
        let t = if height > 1 {
            1.0 - y as f32 / (height - 1) as f32
        } else {
            0.0
        };
        let freq = f_min * (t * log_span).exp();
        let bin = ((freq / bin_hz).round() as usize).clamp(1, n_bins - 1);

        for x in 0..width {
            let frame = if n_frames > 1 && width > 1 {
                (x as f32 * (n_frames - 1) as f32 / (width - 1) as f32).round() as usize
            } else {
                0
            };

            let value = (db[frame][bin] + TOP_DB) / TOP_DB;
            img.put_pixel(x, y, colormap::sample(value));
        }
    }

    img
}
