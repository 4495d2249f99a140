//! Waveform plot rendering

use crate::audio::DecodedAudio;
use image::{Rgb, RgbImage};

/// Background color of the plot
const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

/// Fill color of the amplitude envelope
const ENVELOPE: Rgb<u8> = Rgb([31, 119, 180]);

/// Color of the zero-amplitude axis line
const AXIS: Rgb<u8> = Rgb([200, 200, 200]);

/// Fraction of half-height the peak amplitude is scaled to
const VERTICAL_FILL: f32 = 0.9;

/// Render an amplitude-vs-time waveform plot.
///
/// Each pixel column covers an equal slice of the sample buffer and is
/// drawn as a filled span from the slice's minimum to its maximum sample,
/// scaled so the overall peak fills most of the image height.
pub fn render_waveform(audio: &DecodedAudio, width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let mid = (height - 1) as f32 / 2.0;
    let peak = audio
        .samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0f32, f32::max)
        .max(f32::EPSILON);
    let scale = mid * VERTICAL_FILL / peak;

    for x in 0..width {
        // Slice of samples covered by this column
        let start = (x as u64 * audio.samples.len() as u64 / width as u64) as usize;
        let end = ((x as u64 + 1) * audio.samples.len() as u64 / width as u64) as usize;
        let chunk = &audio.samples[start..end.max(start + 1).min(audio.samples.len())];

        let (mut lo, mut hi) = (0.0f32, 0.0f32);
        for &s in chunk {
            if s < lo {
                lo = s;
            }
            if s > hi {
                hi = s;
            }
        }

        let y_top = (mid - hi * scale).round().clamp(0.0, (height - 1) as f32) as u32;
        let y_bot = (mid - lo * scale).round().clamp(0.0, (height - 1) as f32) as u32;

        for y in y_top..=y_bot {
            img.put_pixel(x, y, ENVELOPE);
        }

        // Axis line where the envelope leaves it visible
        let y_mid = mid.round() as u32;
        if y_mid < y_top || y_mid > y_bot {
            img.put_pixel(x, y_mid, AXIS);
        }
    }

    img
}
