//! `rowrename inspect` – show what each row would resolve to.

use anyhow::Result;
use rowrename_core::cell::TriggerState;
use rowrename_core::config::RowRenameConfig;
use rowrename_core::csv_sheet::CsvSheet;
use rowrename_core::host::Sheet;
use rowrename_core::link::{extract_file_id, resolve_link};
use std::path::Path;

pub fn run_inspect(cfg: &RowRenameConfig, csv: &Path) -> Result<()> {
    let sheet = CsvSheet::open(csv)?;
    let cols = &cfg.sheet;
    if sheet.row_count() == 0 {
        println!("Sheet is empty.");
        return Ok(());
    }

    println!("{:<5} {:<8} {:<34} {:<20} {}", "ROW", "TRIGGER", "FILE ID", "NEW NAME", "STATUS");
    for row in 1..=sheet.row_count() {
        let trigger = TriggerState::from_cell(&sheet.read(row, cols.trigger_column));
        let link = resolve_link(&sheet.read(row, cols.link_column));
        let file_id = if link.is_empty() {
            "-".to_string()
        } else {
            extract_file_id(&link)
                .map(|id| id.to_string())
                .unwrap_or_else(|| "(invalid link)".to_string())
        };
        let new_name = sheet.read(row, cols.new_name_column).plain_text();
        println!(
            "{:<5} {:<8} {:<34} {:<20} {}",
            row,
            trigger.as_str(),
            file_id,
            new_name,
            sheet.raw(row, cols.status_column)
        );
    }
    Ok(())
}
