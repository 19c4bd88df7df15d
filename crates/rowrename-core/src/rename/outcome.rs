//! What happened to one delivered edit.

use super::error::RenameError;
use crate::link::FileId;

/// Why an edit was ignored without touching the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    OtherSheet,
    OtherColumn,
    /// The edited value is not exactly the armed literal.
    NotArmed,
}

#[derive(Debug)]
pub enum EditOutcome {
    Ignored(IgnoreReason),
    Renamed {
        row: usize,
        file_id: FileId,
        from: String,
        to: String,
    },
    Failed {
        row: usize,
        error: RenameError,
    },
}

impl EditOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, EditOutcome::Ignored(_))
    }
}
