//! Collaborator interfaces the orchestrator talks to.
//!
//! A host delivers edit events, exposes the edited sheet's cells through
//! [`Sheet`], and exposes a rename-capable [`FileStore`]. Nothing here knows how
//! events are delivered; that is the host's business.

mod error;
mod memory;

pub use error::{SheetError, StoreError};
pub use memory::{MemoryFileStore, MemorySheet};

use crate::cell::CellValue;
use crate::link::FileId;

/// Cell access for one sheet. Rows and columns are 1-based.
pub trait Sheet {
    fn name(&self) -> &str;

    /// Reads a cell; cells outside the used range are [`CellValue::Empty`].
    fn read(&self, row: usize, column: usize) -> CellValue;

    /// Overwrites a cell with a plain text value.
    fn write(&mut self, row: usize, column: usize, value: &str) -> Result<(), SheetError>;
}

/// External store holding the files rows point at.
pub trait FileStore {
    /// Resolves an id to a handle. Must fail with [`StoreError::NotFound`] when
    /// the id addresses nothing accessible.
    fn open(&mut self, id: &FileId) -> Result<Box<dyn FileHandle + '_>, StoreError>;
}

/// Handle to one stored file.
pub trait FileHandle {
    fn name(&self) -> Result<String, StoreError>;
    fn rename(&mut self, new_name: &str) -> Result<(), StoreError>;
}
