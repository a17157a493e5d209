//! Error types for camera setup and image output.

use thiserror::Error;

/// Errors that can occur while preparing or writing a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Degenerate camera view: {0}")]
    DegenerateView(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
