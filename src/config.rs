//! Service configuration

use std::path::PathBuf;

/// Width of rendered plots in pixels
pub const PLOT_WIDTH: u32 = 1000;

/// Height of rendered plots in pixels
pub const PLOT_HEIGHT: u32 = 400;

/// Configuration for the upload service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory uploaded files are saved to (created at startup if absent)
    pub upload_dir: PathBuf,

    /// Width of the waveform and spectrogram images in pixels
    pub plot_width: u32,

    /// Height of the waveform and spectrogram images in pixels
    pub plot_height: u32,
}

impl AppConfig {
    /// Create a configuration with default plot dimensions
    pub fn new(upload_dir: PathBuf) -> Self {
        Self {
            upload_dir,
            plot_width: PLOT_WIDTH,
            plot_height: PLOT_HEIGHT,
        }
    }

    /// Override the plot dimensions
    pub fn with_plot_size(mut self, width: u32, height: u32) -> Self {
        self.plot_width = width;
        self.plot_height = height;
        self
    }
}
