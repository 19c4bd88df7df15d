//! Directory-backed file store.
//!
//! Files live directly in one directory and are addressed by opaque ids kept in
//! `.rowrename-index.json` next to them (id → file name). Ids are 33 hex chars,
//! long enough to be picked up from a link by the file-id extractor.

use anyhow::{bail, Context, Result};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::host::{FileHandle, FileStore, StoreError};
use crate::link::FileId;

pub const INDEX_FILE: &str = ".rowrename-index.json";
const ID_LEN: usize = 33;

pub struct LocalFileStore {
    dir: PathBuf,
    index: BTreeMap<String, String>,
}

impl LocalFileStore {
    /// Opens the store in `dir`; a missing index is an empty store.
    pub fn open_at(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            bail!("file store directory not found: {}", dir.display());
        }
        let index_path = dir.join(INDEX_FILE);
        let index = match std::fs::read(&index_path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("parse store index: {}", index_path.display()))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("read store index: {}", index_path.display()))
            }
        };
        Ok(Self {
            dir: dir.to_path_buf(),
            index,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Registers an existing file of the store directory and returns its id.
    /// A file already registered keeps its id.
    pub fn add(&mut self, file: &Path) -> Result<FileId> {
        let name = file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .with_context(|| format!("not a file path: {}", file.display()))?;
        if !self.dir.join(&name).is_file() {
            bail!("{} is not a file in {}", name, self.dir.display());
        }
        if let Some((id, _)) = self.index.iter().find(|(_, n)| **n == name) {
            return Ok(FileId::new(id.clone()));
        }

        let id = new_id(&name);
        self.index.insert(id.clone(), name.clone());
        self.save_index()
            .with_context(|| format!("write store index in {}", self.dir.display()))?;
        tracing::info!(id = %id, name = %name, "file added to store");
        Ok(FileId::new(id))
    }

    /// (id, file name) pairs, ordered by id.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.index.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }

    fn save_index(&self) -> io::Result<()> {
        let json = serde_json::to_string_pretty(&self.index).map_err(io::Error::other)?;
        std::fs::write(self.dir.join(INDEX_FILE), json)
    }
}

fn new_id(name: &str) -> String {
    let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update(nanos.to_le_bytes());
    let mut id = hex::encode(hasher.finalize());
    id.truncate(ID_LEN);
    id
}

impl FileStore for LocalFileStore {
    fn open(&mut self, id: &FileId) -> Result<Box<dyn FileHandle + '_>, StoreError> {
        let name = self
            .index
            .get(id.as_str())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        if !self.dir.join(name).is_file() {
            tracing::warn!(id = %id, name = %name, "indexed file missing on disk");
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(Box::new(LocalHandle {
            store: self,
            id: id.to_string(),
        }))
    }
}

struct LocalHandle<'a> {
    store: &'a mut LocalFileStore,
    id: String,
}

impl LocalHandle<'_> {
    fn current(&self) -> Result<&str, StoreError> {
        self.store
            .index
            .get(&self.id)
            .map(String::as_str)
            .ok_or_else(|| StoreError::NotFound(self.id.clone()))
    }
}

impl FileHandle for LocalHandle<'_> {
    fn name(&self) -> Result<String, StoreError> {
        self.current().map(str::to_string)
    }

    fn rename(&mut self, new_name: &str) -> Result<(), StoreError> {
        if new_name.is_empty()
            || new_name == "."
            || new_name == ".."
            || new_name.contains(['/', '\\', '\0'])
        {
            return Err(StoreError::Rejected(format!("\"{}\" is not a valid file name", new_name)));
        }
        let current = self.current()?.to_string();
        if current == new_name {
            return Ok(());
        }
        let from = self.store.dir.join(&current);
        let to = self.store.dir.join(new_name);
        if to.exists() {
            return Err(StoreError::Rejected(format!("a file named \"{}\" already exists", new_name)));
        }

        std::fs::rename(&from, &to).map_err(|e| match e.kind() {
            io::ErrorKind::PermissionDenied => StoreError::PermissionDenied(self.id.clone()),
            io::ErrorKind::NotFound => StoreError::NotFound(self.id.clone()),
            _ => StoreError::Io(e),
        })?;
        self.store.index.insert(self.id.clone(), new_name.to_string());
        if let Err(e) = self.store.save_index() {
            // Index and disk must agree, or the id stops resolving.
            self.store.index.insert(self.id.clone(), current.clone());
            if let Err(undo) = std::fs::rename(&to, &from) {
                tracing::error!(id = %self.id, to = %to.display(), "could not undo rename: {}", undo);
            }
            return Err(StoreError::Io(e));
        }
        tracing::debug!(id = %self.id, from = %current, to = %new_name, "renamed on disk");
        Ok(())
    }
}
