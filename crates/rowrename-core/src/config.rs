use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Which sheet to watch and where the row's cells live (1-based columns).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetConfig {
    /// Edits on any other sheet are ignored.
    pub sheet_name: String,
    /// Column holding the file link (plain URL or rich text).
    pub link_column: usize,
    /// Column holding the new base name, without extension.
    pub new_name_column: usize,
    /// Column whose edit to `Yes` triggers the rename.
    pub trigger_column: usize,
    /// Column receiving success/error feedback.
    pub status_column: usize,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
            link_column: 1,
            new_name_column: 2,
            trigger_column: 3,
            status_column: 4,
        }
    }
}

impl SheetConfig {
    /// Rejects an empty sheet name, zero columns, and columns used twice.
    pub fn validate(&self) -> Result<()> {
        if self.sheet_name.trim().is_empty() {
            bail!("sheet_name must not be empty");
        }
        let columns = [
            ("link_column", self.link_column),
            ("new_name_column", self.new_name_column),
            ("trigger_column", self.trigger_column),
            ("status_column", self.status_column),
        ];
        for (i, (name, col)) in columns.iter().enumerate() {
            if *col == 0 {
                bail!("{} must be 1 or greater (columns are 1-based)", name);
            }
            if let Some((other, _)) = columns[..i].iter().find(|(_, c)| c == col) {
                bail!("{} and {} both use column {}", other, name, col);
            }
        }
        Ok(())
    }
}

/// Global configuration loaded from `~/.config/rowrename/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RowRenameConfig {
    #[serde(default)]
    pub sheet: SheetConfig,
    /// Directory of the local file store; `--files` overrides it, and the
    /// current directory is used when neither is set.
    #[serde(default)]
    pub files_dir: Option<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rowrename")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RowRenameConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RowRenameConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RowRenameConfig = toml::from_str(&data)?;
    Ok(cfg)
}
