//! Errors surfaced by host collaborators.

use thiserror::Error;

/// Failure reported by a [`FileStore`](super::FileStore) or its handles.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id does not resolve to an accessible file.
    #[error("No file found with id {0}, or you do not have access to it.")]
    NotFound(String),
    #[error("Permission denied for file {0}.")]
    PermissionDenied(String),
    #[error("Rename rejected: {0}")]
    Rejected(String),
    #[error("Storage failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure writing back into a sheet.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("cell R{row}C{column} is outside the sheet")]
    OutOfRange { row: usize, column: usize },
    #[error("sheet is read-only")]
    ReadOnly,
}
