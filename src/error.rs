//! Error types for the carousel crate.
//!
//! Navigation itself never fails (out-of-range requests are clamped); errors are
//! limited to construction, picker misuse and settings I/O.

use thiserror::Error;

/// Errors raised while constructing a carousel controller
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// A carousel needs at least one attachment to page through
    #[error("carousel requires at least one attachment")]
    NoAttachments,
}

/// Errors raised by the attachment picker
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// A file was resolved while no picker request was outstanding
    #[error("no picker request is open")]
    NotOpen,

    /// The picked file does not match the picker type
    #[error("unsupported file type for {picker} picker: {mime}")]
    UnsupportedType { picker: &'static str, mime: String },
}

/// Errors that can occur while loading or saving settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The platform has no config directory
    #[error("no config directory available")]
    NoConfigDir,
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
