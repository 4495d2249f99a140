//! Short-time Fourier transform and dB scaling

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// FFT window size
pub const N_FFT: usize = 2048;

/// Hop between successive analysis frames
pub const HOP_LENGTH: usize = 512;

/// Dynamic range of the dB scale below the reference peak
pub const TOP_DB: f32 = 80.0;

/// Compute a magnitude spectrogram: one row per frame, `N_FFT / 2 + 1`
/// bins per row (DC through Nyquist).
///
/// Frames are Hann-windowed; input shorter than one window is zero-padded
/// so at least one frame is always produced.
pub fn stft_magnitudes(samples: &[f32]) -> Vec<Vec<f32>> {
    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(N_FFT);

    let window = hann_window(N_FFT);
    let n_bins = N_FFT / 2 + 1;

    let n_frames = if samples.len() <= N_FFT {
        1
    } else {
        1 + (samples.len() - N_FFT) / HOP_LENGTH
    };

    let mut frames = Vec::with_capacity(n_frames);
    let mut buffer = vec![Complex::new(0.0f32, 0.0f32); N_FFT];

    for frame_idx in 0..n_frames {
        let start = frame_idx * HOP_LENGTH;

        for (i, slot) in buffer.iter_mut().enumerate() {
            let sample = samples.get(start + i).copied().unwrap_or(0.0);
            *slot = Complex::new(sample * window[i], 0.0);
        }

        fft.process(&mut buffer);

        let magnitudes: Vec<f32> = buffer[..n_bins].iter().map(|c| c.norm()).collect();
        frames.push(magnitudes);
    }

    frames
}

/// Convert a magnitude spectrogram to dB relative to its peak magnitude.
///
/// The peak maps to 0 dB and everything is floored at `-TOP_DB`.
pub fn amplitude_to_db(magnitudes: &[Vec<f32>]) -> Vec<Vec<f32>> {
    let peak = magnitudes
        .iter()
        .flat_map(|row| row.iter().copied())
        .fold(0.0f32, f32::max);

    if peak <= 0.0 {
        return magnitudes
            .iter()
            .map(|row| vec![-TOP_DB; row.len()])
            .collect();
    }

    magnitudes
        .iter()
        .map(|row| {
            row.iter()
                .map(|&m| {
                    if m <= 0.0 {
                        -TOP_DB
                    } else {
                        (20.0 * (m / peak).log10()).max(-TOP_DB)
                    }
                })
                .collect()
        })
        .collect()
}

fn hann_window(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| {
            let x = std::f32::consts::PI * i as f32 / len as f32;
            x.sin() * x.sin()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stft_frame_count_and_bins() {
        let samples = vec![0.0f32; N_FFT + HOP_LENGTH * 3];
        let frames = stft_magnitudes(&samples);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].len(), N_FFT / 2 + 1);
    }

    #[test]
    fn test_stft_short_input_padded() {
        let frames = stft_magnitudes(&[0.1, -0.1, 0.2]);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), N_FFT / 2 + 1);
    }

    #[test]
    fn test_sine_peaks_in_expected_bin() {
        // 1kHz sine at 16kHz: bin = 1000 / (16000 / 2048) = 128
        let sample_rate = 16000.0f32;
        let samples: Vec<f32> = (0..N_FFT * 2)
            .map(|i| (2.0 * std::f32::consts::PI * 1000.0 * i as f32 / sample_rate).sin())
            .collect();

        let frames = stft_magnitudes(&samples);
        let first = &frames[0];
        let peak_bin = first
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 128);
    }

    #[test]
    fn test_amplitude_to_db_reference_and_floor() {
        let mags = vec![vec![1.0f32, 0.1, 0.0]];
        let db = amplitude_to_db(&mags);
        assert!(db[0][0].abs() < 1e-5, "peak should be 0 dB");
        assert!((db[0][1] + 20.0).abs() < 1e-3, "0.1x peak should be -20 dB");
        assert_eq!(db[0][2], -TOP_DB);
    }

    #[test]
    fn test_amplitude_to_db_silence() {
        let db = amplitude_to_db(&[vec![0.0f32; 4]]);
        assert!(db[0].iter().all(|&v| v == -TOP_DB));
    }
}
