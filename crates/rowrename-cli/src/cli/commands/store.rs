//! `rowrename store` – manage the local file store.

use anyhow::Result;
use rowrename_core::config::RowRenameConfig;
use rowrename_core::local_store::LocalFileStore;
use std::path::{Path, PathBuf};

use super::files_dir;

pub fn run_store_add(cfg: &RowRenameConfig, path: &Path, files: Option<PathBuf>) -> Result<()> {
    let mut store = LocalFileStore::open_at(&files_dir(cfg, files)?)?;
    let id = store.add(path)?;
    println!("{}", id);
    Ok(())
}

pub fn run_store_list(cfg: &RowRenameConfig, files: Option<PathBuf>) -> Result<()> {
    let store = LocalFileStore::open_at(&files_dir(cfg, files)?)?;
    let mut any = false;
    for (id, name) in store.entries() {
        if !any {
            println!("{:<34} {}", "ID", "NAME");
            any = true;
        }
        println!("{:<34} {}", id, name);
    }
    if !any {
        println!("No files in store {}.", store.dir().display());
    }
    Ok(())
}
