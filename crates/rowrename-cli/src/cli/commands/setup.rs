//! `rowrename setup` – register the edit handler for a document.

use anyhow::{Context, Result};
use rowrename_core::config::RowRenameConfig;
use rowrename_core::registry::{ensure_handler, Ensured, HandlerKind, JsonRegistry};
use std::path::Path;

use super::document_id;

pub fn run_setup(cfg: &RowRenameConfig, csv: &Path) -> Result<()> {
    cfg.sheet.validate().context("invalid sheet configuration")?;
    let document = document_id(csv)?;
    let mut registry = JsonRegistry::open_default()?;

    match ensure_handler(&mut registry, HandlerKind::OnEdit, &document)? {
        Ensured::Registered => println!("Edit handler registered for {}.", document),
        Ensured::AlreadyRegistered => println!("Edit handler already registered for {}.", document),
    }
    println!(
        "Watching sheet \"{}\": link column {}, new name column {}, trigger column {}, status column {}.",
        cfg.sheet.sheet_name,
        cfg.sheet.link_column,
        cfg.sheet.new_name_column,
        cfg.sheet.trigger_column,
        cfg.sheet.status_column
    );
    Ok(())
}
