use super::config::ConfigError;
use crate::core::io::error::IoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Root directory not found: {path}", path = path.display())]
    RootNotFound { path: PathBuf },

    #[error("Failed to enumerate directory '{path}': {source}", path = path.display())]
    Discovery {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory '{path}': {source}", path = path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Folder '{folder}' cannot be placed under the output root: {reason}", folder = folder.display())]
    InvalidFolder { folder: PathBuf, reason: String },
}
