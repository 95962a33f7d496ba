//! Chime provisioning client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChimeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
