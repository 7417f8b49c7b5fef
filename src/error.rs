//! Error types for editor operations.

use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors that can occur while editing.
///
/// Reorders and removals aimed at a missing layer are not errors; they are
/// silent no-ops.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    /// Reading an uploaded file into a data URL failed.
    #[error("Failed to decode {file}: {reason}")]
    Decode { file: String, reason: String },

    /// The file input changed without a file.
    #[error("No file selected")]
    NoFileSelected,

    /// Work started in an earlier mount finished after the editor went away.
    #[error("Editor is no longer mounted")]
    Unmounted,
}
