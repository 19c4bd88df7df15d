//! Rename orchestration for one row.
//!
//! An edit event passes the filter only when it lands on the configured sheet,
//! in the trigger column, with the exact value `Yes`. The row's link is then
//! resolved to a file id, the file is renamed to the new name plus its current
//! extension, and the outcome is written back:
//!
//! - success: trigger becomes `DONE`, status holds a timestamped message;
//! - any failure: status holds `ERROR: ...`, trigger stays `Yes` (retryable).

mod error;
mod name;
mod outcome;

pub use error::{ErrorKind, RenameError};
pub use name::{extension_of, final_name};
pub use outcome::{EditOutcome, IgnoreReason};

use chrono::NaiveDateTime;

use crate::cell::{TriggerState, TRIGGER_DONE};
use crate::config::SheetConfig;
use crate::host::{FileStore, Sheet};
use crate::link::{extract_file_id, resolve_link, FileId};

/// Format of the completion time in the success status.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single user edit as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct EditEvent {
    pub sheet: String,
    pub row: usize,
    pub column: usize,
    pub value: String,
}

impl EditEvent {
    pub fn new(sheet: impl Into<String>, row: usize, column: usize, value: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            row,
            column,
            value: value.into(),
        }
    }
}

struct Renamed {
    file_id: FileId,
    from: String,
    to: String,
}

/// Handles edit events for one configured sheet against one file store.
pub struct RenameOrchestrator<F> {
    config: SheetConfig,
    store: F,
}

impl<F: FileStore> RenameOrchestrator<F> {
    pub fn new(config: SheetConfig, store: F) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    pub fn store(&self) -> &F {
        &self.store
    }

    /// Handles one edit, stamping success with the local wall clock.
    pub fn handle_edit(&mut self, sheet: &mut dyn Sheet, event: &EditEvent) -> EditOutcome {
        self.handle_edit_at(sheet, event, chrono::Local::now().naive_local())
    }

    /// Handles one edit; `now` is the completion time written on success.
    ///
    /// Never fails: post-filter errors end up in the status cell.
    pub fn handle_edit_at(
        &mut self,
        sheet: &mut dyn Sheet,
        event: &EditEvent,
        now: NaiveDateTime,
    ) -> EditOutcome {
        if let Some(reason) = self.filter(event) {
            tracing::trace!(
                sheet = %event.sheet,
                row = event.row,
                column = event.column,
                ?reason,
                "edit ignored"
            );
            return EditOutcome::Ignored(reason);
        }

        let row = event.row;
        tracing::debug!(sheet = %event.sheet, row, "rename triggered");

        match self.process_row(&*sheet, row) {
            Ok(Renamed { file_id, from, to }) => {
                let status = format!("SUCCESS: Renamed to {} at {}", to, now.format(TIMESTAMP_FORMAT));
                write_cell(sheet, row, self.config.trigger_column, TRIGGER_DONE);
                write_cell(sheet, row, self.config.status_column, &status);
                tracing::info!(row, file_id = %file_id, from = %from, to = %to, "file renamed");
                EditOutcome::Renamed {
                    row,
                    file_id,
                    from,
                    to,
                }
            }
            Err(error) => {
                match error.kind() {
                    ErrorKind::Validation | ErrorKind::Extraction => {
                        tracing::warn!(row, "rename not attempted: {}", error);
                    }
                    ErrorKind::External => {
                        tracing::error!(row, error = ?error, "rename failed: {}", error);
                    }
                }
                write_cell(sheet, row, self.config.status_column, &error.status_message());
                EditOutcome::Failed { row, error }
            }
        }
    }

    fn filter(&self, event: &EditEvent) -> Option<IgnoreReason> {
        if event.sheet != self.config.sheet_name {
            return Some(IgnoreReason::OtherSheet);
        }
        if event.column != self.config.trigger_column {
            return Some(IgnoreReason::OtherColumn);
        }
        if TriggerState::parse(&event.value) != TriggerState::Armed {
            return Some(IgnoreReason::NotArmed);
        }
        None
    }

    fn process_row(&mut self, sheet: &dyn Sheet, row: usize) -> Result<Renamed, RenameError> {
        let link = resolve_link(&sheet.read(row, self.config.link_column));
        let new_name = sheet.read(row, self.config.new_name_column).plain_text();
        if link.is_empty() || new_name.is_empty() {
            return Err(RenameError::EmptyInput);
        }

        let file_id = extract_file_id(&link).ok_or(RenameError::InvalidLink)?;
        let mut handle = self.store.open(&file_id)?;
        let from = handle.name()?;
        let to = final_name(&from, &new_name);
        handle.rename(&to)?;
        Ok(Renamed { file_id, from, to })
    }
}

/// Writes back into the row; a failed write is logged, never propagated.
fn write_cell(sheet: &mut dyn Sheet, row: usize, column: usize, value: &str) {
    if let Err(e) = sheet.write(row, column, value) {
        tracing::error!(row, column, "failed to write cell: {}", e);
    }
}
