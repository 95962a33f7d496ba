//! Stack-output store client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StackOutputsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("Stack output missing: {0}")]
    MissingOutput(String),
}
