use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the window wrapper and its backends.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to create window: {0}")]
    WindowInit(String),

    #[error("a native window is already open in this process")]
    WindowAlreadyOpen,

    #[error("failed to close window: {0}")]
    WindowClose(String),

    #[error("invalid window config: {0}")]
    InvalidConfig(String),

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The per-frame callback failed. The frame was still ended.
    #[error("frame {frame} callback failed: {source:#}")]
    Frame { frame: u64, source: anyhow::Error },
}
