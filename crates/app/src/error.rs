//! Error types for the hexarea binary

use std::path::PathBuf;

use hexarea_ipc::IpcError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read script {path}: {source}")]
    ReadScript {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid script: {0}")]
    Script(#[from] IpcError),

    #[error("Failed to load background {path}: {source}")]
    LoadBackground {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write {path}: {source}")]
    WriteImage {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write reply: {0}")]
    Output(#[from] std::io::Error),
}
