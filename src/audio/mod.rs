//! Audio decoding layer
//!
//! Wraps symphonia to turn an uploaded file into a mono sample buffer at
//! its native sample rate. Every allowed upload extension (wav, mp3, ogg,
//! flac) maps to a symphonia codec feature.

mod decode;

pub use decode::{decode, DecodeError, DecodedAudio};
