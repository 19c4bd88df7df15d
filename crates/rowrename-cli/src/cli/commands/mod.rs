//! CLI command handlers, one file per command.

mod edit;
mod inspect;
mod setup;
mod store;

pub use edit::run_edit;
pub use inspect::run_inspect;
pub use setup::run_setup;
pub use store::{run_store_add, run_store_list};

use anyhow::{Context, Result};
use rowrename_core::config::RowRenameConfig;
use std::path::{Path, PathBuf};

/// Document identity used for handler registration: the canonical CSV path.
fn document_id(csv: &Path) -> Result<String> {
    let canonical = csv
        .canonicalize()
        .with_context(|| format!("sheet not found: {}", csv.display()))?;
    Ok(canonical.display().to_string())
}

/// Store directory: `--files`, then config `files_dir`, then the current directory.
fn files_dir(cfg: &RowRenameConfig, flag: Option<PathBuf>) -> Result<PathBuf> {
    match flag.or_else(|| cfg.files_dir.clone()) {
        Some(dir) => Ok(dir),
        None => Ok(std::env::current_dir()?),
    }
}
