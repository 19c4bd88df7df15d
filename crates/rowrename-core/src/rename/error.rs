//! Failures after an edit has passed the filter.

use thiserror::Error;

use crate::host::StoreError;

/// Everything that can stop a row from being renamed. Each variant leaves the
/// row armed so the user can fix it and re-trigger.
#[derive(Debug, Error)]
pub enum RenameError {
    /// Link or new name missing; detected before any external call.
    #[error("Drive Link or New Name is empty.")]
    EmptyInput,
    /// The resolved link has no file-id-shaped token.
    #[error("Invalid Google Drive link.")]
    InvalidLink,
    /// Resolution or rename failed in the file store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Coarse taxonomy of [`RenameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Extraction,
    External,
}

impl RenameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenameError::EmptyInput => ErrorKind::Validation,
            RenameError::InvalidLink => ErrorKind::Extraction,
            RenameError::Store(_) => ErrorKind::External,
        }
    }

    /// Text written to the status cell.
    pub fn status_message(&self) -> String {
        format!("ERROR: {}", self)
    }
}
