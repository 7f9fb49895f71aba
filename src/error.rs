// src/error.rs
use tagflow_layout::LayoutError;
use thiserror::Error;

/// Errors surfaced by scene loading and the `tagflow` binary.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Scene is invalid: {0}")]
    InvalidScene(String),
}
