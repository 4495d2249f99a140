//! HTTP front end
//!
//! Two routes: `GET /` serves the upload form, `POST /upload` accepts a
//! multipart audio file and responds with the rendered plots. Error
//! responses are plain text.

mod routes;
mod templates;

pub use routes::{router, UploadError};
