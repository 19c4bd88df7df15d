//! `rowrename edit` – apply a user edit and deliver it to the edit handler.

use anyhow::{Context, Result};
use rowrename_core::config::RowRenameConfig;
use rowrename_core::csv_sheet::CsvSheet;
use rowrename_core::host::Sheet;
use rowrename_core::local_store::LocalFileStore;
use rowrename_core::registry::{is_registered, HandlerKind, JsonRegistry};
use rowrename_core::rename::{EditEvent, EditOutcome, RenameOrchestrator};
use std::path::{Path, PathBuf};

use super::{document_id, files_dir};

pub fn run_edit(
    cfg: &RowRenameConfig,
    csv: &Path,
    row: usize,
    column: usize,
    value: &str,
    sheet_name: Option<String>,
    files: Option<PathBuf>,
) -> Result<()> {
    let mut sheet = CsvSheet::open(csv)?;
    if let Some(name) = sheet_name {
        sheet = sheet.with_name(name);
    }
    sheet
        .write(row, column, value)
        .with_context(|| format!("edit R{}C{}", row, column))?;

    let registry = JsonRegistry::open_default()?;
    if !is_registered(&registry, HandlerKind::OnEdit, &document_id(csv)?)? {
        sheet.save()?;
        println!("Cell saved. No edit handler is registered for this sheet; run `rowrename setup` first.");
        return Ok(());
    }

    cfg.sheet.validate().context("invalid sheet configuration")?;
    let store = LocalFileStore::open_at(&files_dir(cfg, files)?)?;
    let mut orchestrator = RenameOrchestrator::new(cfg.sheet.clone(), store);
    let event = EditEvent::new(sheet.name().to_string(), row, column, value);
    let outcome = orchestrator.handle_edit(&mut sheet, &event);
    sheet.save()?;

    match outcome {
        EditOutcome::Ignored(_) => println!("Cell saved."),
        EditOutcome::Renamed { row, from, to, .. } => {
            println!("Row {}: renamed \"{}\" to \"{}\".", row, from, to)
        }
        EditOutcome::Failed { row, error } => println!("Row {}: ERROR: {}", row, error),
    }
    Ok(())
}
