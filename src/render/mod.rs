//! Plot rendering layer
//!
//! Renders a decoded sample buffer into two raster plots, a waveform and a
//! log-frequency spectrogram, and encodes them as PNG for embedding into
//! the result page as base64 data URIs. Nothing here touches the disk.

mod colormap;
mod spectrogram;
mod stft;
mod waveform;

pub use spectrogram::render_spectrogram;
pub use stft::{amplitude_to_db, stft_magnitudes, HOP_LENGTH, N_FFT, TOP_DB};
pub use waveform::render_waveform;

use anyhow::{Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Encode an image as PNG bytes in memory
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buffer.into_inner())
}

/// Encode an image as a base64 PNG string for a data URI
pub fn png_base64(img: &RgbImage) -> Result<String> {
    Ok(STANDARD.encode(encode_png(img)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_magic_bytes() {
        let img = RgbImage::from_pixel(4, 4, image::Rgb([255, 0, 0]));
        let png = encode_png(&img).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n']);
    }

    #[test]
    fn test_png_base64_decodes() {
        let img = RgbImage::from_pixel(2, 2, image::Rgb([0, 0, 0]));
        let encoded = png_base64(&img).unwrap();
        assert!(!encoded.is_empty());
        let decoded = STANDARD.decode(encoded.as_bytes()).unwrap();
        assert_eq!(&decoded[..4], &[0x89, b'P', b'N', b'G']);
    }
}
