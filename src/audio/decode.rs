//! Symphonia-based decoding to mono f32 samples

use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;

/// Errors produced while loading an audio file.
///
/// The Display text of these variants is shown verbatim to the user in the
/// "Error loading audio file: ..." response.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("cannot open file: {0}")]
    Open(#[from] std::io::Error),

    #[error("unrecognized or corrupt audio format: {0}")]
    Probe(symphonia::core::errors::Error),

    #[error("no audio track found")]
    NoTrack,

    #[error("audio track has no sample rate")]
    NoSampleRate,

    #[error("cannot create decoder: {0}")]
    Decoder(symphonia::core::errors::Error),

    #[error("no audio samples decoded")]
    Empty,
}

/// A fully decoded audio file: mono samples at the native sample rate
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Mono samples in [-1, 1], multi-channel input averaged down
    pub samples: Vec<f32>,

    /// Native sample rate of the source file in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Duration of the decoded audio in seconds
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Decode an audio file to mono f32 samples at its native sample rate.
///
/// Stereo and multi-channel sources are downmixed by averaging each frame.
/// Malformed packets in the middle of a stream are logged and skipped;
/// failing to probe the container or build a decoder is a hard error.
pub fn decode(path: &Path) -> Result<DecodedAudio, DecodeError> {
    let file = std::fs::File::open(path)?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(DecodeError::Probe)?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or(DecodeError::NoTrack)?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or(DecodeError::NoSampleRate)?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(DecodeError::Decoder)?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                log::warn!("Error reading packet: {:?}", e);
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Error decoding packet: {:?}", e);
                continue;
            }
        };

        let spec = *decoded.spec();
        let mut sample_buf = SampleBuffer::<f32>::new(decoded.capacity() as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);

        let interleaved = sample_buf.samples();
        let channels = spec.channels.count();
        if channels > 1 {
            for frame in interleaved.chunks(channels) {
                samples.push(frame.iter().sum::<f32>() / channels as f32);
            }
        } else {
            samples.extend_from_slice(interleaved);
        }
    }

    if samples.is_empty() {
        return Err(DecodeError::Empty);
    }

    log::debug!(
        "Decoded {} samples ({:.1}s) at {}Hz from {:?}",
        samples.len(),
        samples.len() as f32 / sample_rate as f32,
        sample_rate,
        path
    );

    Ok(DecodedAudio {
        samples,
        sample_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_test_wav(path: &Path, sample_rate: u32, samples: &[f32]) {
        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample((s * i16::MAX as f32) as i16).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_decode_short_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tone.wav");

        // 0.1s of a 440Hz sine at 8kHz
        let sample_rate = 8000u32;
        let samples: Vec<f32> = (0..800)
            .map(|i| {
                (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin() * 0.5
            })
            .collect();
        write_test_wav(&path, sample_rate, &samples);

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.sample_rate, sample_rate);
        assert_eq!(decoded.samples.len(), 800);
        assert!(decoded.duration_secs() > 0.09 && decoded.duration_secs() < 0.11);

        let peak = decoded.samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
        assert!(peak > 0.4 && peak < 0.6);
    }

    #[test]
    fn test_decode_stereo_downmix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");

        let spec = hound::WavSpec {
            channels: 2,
            sample_rate: 8000,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        // Left at +0.5, right at -0.5 should average to silence
        for _ in 0..400 {
            writer.write_sample((0.5 * i16::MAX as f32) as i16).unwrap();
            writer.write_sample((-0.5 * i16::MAX as f32) as i16).unwrap();
        }
        writer.finalize().unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.samples.len(), 400);
        let peak = decoded.samples.iter().map(|s| s.abs()).fold(0.0f32, f32::max);
        assert!(peak < 0.01, "downmixed peak should be near zero, got {peak}");
    }

    #[test]
    fn test_decode_garbage_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.flac");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"this is not audio data at all").unwrap();

        let err = decode(&path).unwrap_err();
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_decode_missing_file() {
        let err = decode(Path::new("/nonexistent/file.wav")).unwrap_err();
        assert!(matches!(err, DecodeError::Open(_)));
    }
}
