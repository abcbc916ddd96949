use thiserror::Error;

/// Reported no-ops of the command log
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,
}

/// Errors raised when the user adds a custom sticker
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StickerError {
    #[error("sticker {0:?} is already in the palette")]
    Duplicate(String),
}

/// Errors that can occur while exporting the drawing
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("canvas has no area to export")]
    EmptyCanvas,

    #[error("failed to encode png: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to offer download: {0}")]
    Download(String),
}

/// Errors that can occur while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
