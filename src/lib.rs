//! Audioscope - audio upload visualizer
//!
//! Decodes uploaded audio files and renders a waveform plot and a
//! log-frequency spectrogram as in-memory PNG images, served through a
//! small HTTP front end.

pub mod audio;
pub mod config;
pub mod render;
pub mod server;

pub use config::AppConfig;
pub use server::router;
