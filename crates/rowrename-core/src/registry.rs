//! Edit-handler registrations.
//!
//! A document must have exactly one edit handler wired to it, otherwise a
//! single user edit would be processed twice. Setup is therefore
//! lookup-then-create: [`ensure_handler`] lists what is registered and only
//! adds a registration when none of the same kind exists for the document.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandlerKind {
    /// Fires on every user edit of the document.
    OnEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub kind: HandlerKind,
    /// Document identity (for the CSV host, the canonical file path).
    pub document: String,
    /// Unix seconds.
    pub created_at: i64,
}

/// Host capability to list and create handler registrations.
pub trait HandlerRegistry {
    fn list(&self) -> Result<Vec<Registration>>;
    fn create(&mut self, registration: Registration) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ensured {
    AlreadyRegistered,
    Registered,
}

/// Ensures exactly one handler of `kind` exists for `document`.
pub fn ensure_handler(
    registry: &mut dyn HandlerRegistry,
    kind: HandlerKind,
    document: &str,
) -> Result<Ensured> {
    if is_registered(registry, kind, document)? {
        tracing::debug!(?kind, document, "handler already registered");
        return Ok(Ensured::AlreadyRegistered);
    }
    registry.create(Registration {
        kind,
        document: document.to_string(),
        created_at: chrono::Utc::now().timestamp(),
    })?;
    tracing::info!(?kind, document, "handler registered");
    Ok(Ensured::Registered)
}

pub fn is_registered(registry: &dyn HandlerRegistry, kind: HandlerKind, document: &str) -> Result<bool> {
    Ok(registry
        .list()?
        .iter()
        .any(|r| r.kind == kind && r.document == document))
}

/// Registry held in memory.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    registrations: Vec<Registration>,
}

impl HandlerRegistry for MemoryRegistry {
    fn list(&self) -> Result<Vec<Registration>> {
        Ok(self.registrations.clone())
    }

    fn create(&mut self, registration: Registration) -> Result<()> {
        self.registrations.push(registration);
        Ok(())
    }
}

/// Registry persisted as JSON, by default at `~/.local/state/rowrename/handlers.json`.
#[derive(Debug)]
pub struct JsonRegistry {
    path: PathBuf,
    registrations: Vec<Registration>,
}

impl JsonRegistry {
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("rowrename")?;
        Ok(xdg_dirs.get_state_home().join("handlers.json"))
    }

    pub fn open_default() -> Result<Self> {
        Self::open_at(&Self::default_path()?)
    }

    /// Opens the registry at `path`; a missing file is an empty registry.
    pub fn open_at(path: &Path) -> Result<Self> {
        let registrations = match std::fs::read(path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("parse handler registry: {}", path.display()))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(e).with_context(|| format!("read handler registry: {}", path.display()))
            }
        };
        Ok(Self {
            path: path.to_path_buf(),
            registrations,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(&self.registrations)
            .context("serialize handler registry")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("write handler registry: {}", self.path.display()))?;
        Ok(())
    }
}

impl HandlerRegistry for JsonRegistry {
    fn list(&self) -> Result<Vec<Registration>> {
        Ok(self.registrations.clone())
    }

    fn create(&mut self, registration: Registration) -> Result<()> {
        self.registrations.push(registration);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn ensure_is_idempotent() {
        let mut registry = MemoryRegistry::default();
        assert_eq!(
            ensure_handler(&mut registry, HandlerKind::OnEdit, "doc-a").unwrap(),
            Ensured::Registered
        );
        assert_eq!(
            ensure_handler(&mut registry, HandlerKind::OnEdit, "doc-a").unwrap(),
            Ensured::AlreadyRegistered
        );
        assert_eq!(registry.list().unwrap().len(), 1);
    }

    #[test]
    fn documents_are_independent() {
        let mut registry = MemoryRegistry::default();
        ensure_handler(&mut registry, HandlerKind::OnEdit, "doc-a").unwrap();
        ensure_handler(&mut registry, HandlerKind::OnEdit, "doc-b").unwrap();
        assert_eq!(registry.list().unwrap().len(), 2);
        assert!(is_registered(&registry, HandlerKind::OnEdit, "doc-b").unwrap());
        assert!(!is_registered(&registry, HandlerKind::OnEdit, "doc-c").unwrap());
    }

    #[test]
    fn json_registry_persists_across_opens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("state").join("handlers.json");

        let mut registry = JsonRegistry::open_at(&path).unwrap();
        assert!(registry.list().unwrap().is_empty());
        ensure_handler(&mut registry, HandlerKind::OnEdit, "/tmp/sheet.csv").unwrap();

        let mut reopened = JsonRegistry::open_at(&path).unwrap();
        assert_eq!(
            ensure_handler(&mut reopened, HandlerKind::OnEdit, "/tmp/sheet.csv").unwrap(),
            Ensured::AlreadyRegistered
        );
        let list = reopened.list().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind, HandlerKind::OnEdit);
    }

    #[test]
    fn json_registry_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("handlers.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(JsonRegistry::open_at(&path).is_err());
    }
}
