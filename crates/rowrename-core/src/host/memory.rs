//! In-memory hosts, for embedding and tests.

use std::collections::{HashMap, HashSet};

use super::{FileHandle, FileStore, Sheet, SheetError, StoreError};
use crate::cell::CellValue;
use crate::link::FileId;

/// Sheet held entirely in memory, keyed by (row, column).
#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    name: String,
    cells: HashMap<(usize, usize), CellValue>,
}

impl MemorySheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
        }
    }

    /// Sets any cell value, including rich text (the user's side of editing).
    pub fn set(&mut self, row: usize, column: usize, value: CellValue) {
        if matches!(value, CellValue::Empty) {
            self.cells.remove(&(row, column));
        } else {
            self.cells.insert((row, column), value);
        }
    }

    /// Number of non-empty cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Sheet for MemorySheet {
    fn name(&self) -> &str {
        &self.name
    }

    fn read(&self, row: usize, column: usize) -> CellValue {
        self.cells.get(&(row, column)).cloned().unwrap_or_default()
    }

    fn write(&mut self, row: usize, column: usize, value: &str) -> Result<(), SheetError> {
        if row == 0 || column == 0 {
            return Err(SheetError::OutOfRange { row, column });
        }
        let value = if value.is_empty() {
            CellValue::Empty
        } else {
            CellValue::text(value)
        };
        self.set(row, column, value);
        Ok(())
    }
}

/// File store mapping ids to names in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    files: HashMap<String, String>,
    denied: HashSet<String>,
    renames: usize,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.files.insert(id.into(), name.into());
    }

    /// Makes renames of `id` fail with [`StoreError::PermissionDenied`].
    pub fn deny(&mut self, id: impl Into<String>) {
        self.denied.insert(id.into());
    }

    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.files.get(id).map(String::as_str)
    }

    /// Number of successful renames performed.
    pub fn rename_count(&self) -> usize {
        self.renames
    }
}

impl FileStore for MemoryFileStore {
    fn open(&mut self, id: &FileId) -> Result<Box<dyn FileHandle + '_>, StoreError> {
        if !self.files.contains_key(id.as_str()) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(Box::new(MemoryHandle {
            store: self,
            id: id.to_string(),
        }))
    }
}

struct MemoryHandle<'a> {
    store: &'a mut MemoryFileStore,
    id: String,
}

impl FileHandle for MemoryHandle<'_> {
    fn name(&self) -> Result<String, StoreError> {
        self.store
            .files
            .get(&self.id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(self.id.clone()))
    }

    fn rename(&mut self, new_name: &str) -> Result<(), StoreError> {
        if self.store.denied.contains(&self.id) {
            return Err(StoreError::PermissionDenied(self.id.clone()));
        }
        let slot = self
            .store
            .files
            .get_mut(&self.id)
            .ok_or_else(|| StoreError::NotFound(self.id.clone()))?;
        *slot = new_name.to_string();
        self.store.renames += 1;
        Ok(())
    }
}
