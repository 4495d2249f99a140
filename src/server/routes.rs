//! Route handlers for the upload front end

use super::templates;
use crate::audio::{self, DecodeError};
use crate::config::AppConfig;
use crate::render;
use anyhow::Context as _;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Upload extensions accepted by the service
const ALLOWED_EXTENSIONS: [&str; 4] = ["wav", "mp3", "ogg", "flac"];

/// Everything that can go wrong handling an upload.
///
/// The Display text is the plain-text response body the user sees.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("No file part")]
    NoFilePart,

    #[error("No selected file")]
    NoSelectedFile,

    #[error("Invalid file type. Please upload a WAV, MP3, OGG, or FLAC file.")]
    InvalidFileType,

    #[error("Malformed multipart request: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Error loading audio file: {0}")]
    Decode(#[from] DecodeError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match self {
            UploadError::NoFilePart
            | UploadError::NoSelectedFile
            | UploadError::InvalidFileType
            | UploadError::Multipart(_) => StatusCode::BAD_REQUEST,
            UploadError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            UploadError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            log::error!("Upload failed: {}", self);
        } else {
            log::warn!("Upload rejected: {}", self);
        }

        (status, self.to_string()).into_response()
    }
}

/// Build the application router.
///
/// The body size limit is disabled: uploads are bounded only by what the
/// decoder accepts.
pub fn router(config: AppConfig) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/upload", post(upload))
        .layer(DefaultBodyLimit::disable())
        .with_state(Arc::new(config))
}

/// `GET /` - upload form
async fn index() -> Html<&'static str> {
    Html(templates::INDEX)
}

/// `POST /upload` - validate, save, decode, render
async fn upload(
    State(config): State<Arc<AppConfig>>,
    mut multipart: Multipart,
) -> Result<Html<String>, UploadError> {
    let mut file = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("").to_string();
            let data = field.bytes().await?;
            file = Some((filename, data));
            break;
        }
    }

    let (filename, data) = file.ok_or(UploadError::NoFilePart)?;
    if filename.is_empty() {
        return Err(UploadError::NoSelectedFile);
    }
    if !allowed_file(&filename) {
        return Err(UploadError::InvalidFileType);
    }

    // Strip any path components the client smuggled into the filename
    let basename = Path::new(&filename)
        .file_name()
        .ok_or(UploadError::NoSelectedFile)?;

    let saved_path = config.upload_dir.join(basename);
    tokio::fs::write(&saved_path, &data)
        .await
        .with_context(|| format!("Failed to save upload to {:?}", saved_path))?;
    log::info!("Saved upload {:?} ({} bytes)", saved_path, data.len());

    let decoded = audio::decode(&saved_path)?;
    log::info!(
        "Decoded {:?}: {:.1}s at {}Hz",
        basename,
        decoded.duration_secs(),
        decoded.sample_rate
    );

    let waveform = render::render_waveform(&decoded, config.plot_width, config.plot_height);
    let spectrogram = render::render_spectrogram(&decoded, config.plot_width, config.plot_height);

    let page = templates::result_page(
        &render::png_base64(&waveform)?,
        &render::png_base64(&spectrogram)?,
    );
    Ok(Html(page))
}

/// A filename is allowed if it has an extension in [`ALLOWED_EXTENSIONS`],
/// matched case-insensitively
fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
