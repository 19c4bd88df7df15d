//! CLI for rowrename.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rowrename_core::config;
use std::path::PathBuf;

use commands::{run_edit, run_inspect, run_setup, run_store_add, run_store_list};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "rowrename")]
#[command(about = "Rename stored files from spreadsheet row edits", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Register the edit handler for a sheet document (safe to repeat).
    Setup {
        /// CSV file acting as the sheet document.
        csv: PathBuf,
    },

    /// Edit one cell as a user would; a `Yes` in the trigger column renames the row's file.
    Edit {
        /// CSV file acting as the sheet document.
        csv: PathBuf,
        /// Row number (1-based, header line included).
        #[arg(long)]
        row: usize,
        /// Column number (1-based, A = 1).
        #[arg(long)]
        column: usize,
        /// New cell value.
        value: String,
        /// Sheet name reported with the edit (defaults to the file stem).
        #[arg(long)]
        sheet: Option<String>,
        /// File store directory (defaults to config `files_dir`, then the current directory).
        #[arg(long, value_name = "DIR")]
        files: Option<PathBuf>,
    },

    /// Show each row's trigger state, resolved link and file id.
    Inspect {
        /// CSV file acting as the sheet document.
        csv: PathBuf,
    },

    /// Manage the local file store.
    Store {
        #[command(subcommand)]
        command: StoreCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum StoreCommand {
    /// Give a file of the store directory an id usable in links.
    Add {
        /// File inside the store directory.
        path: PathBuf,
        #[arg(long, value_name = "DIR")]
        files: Option<PathBuf>,
    },

    /// List ids and file names.
    List {
        #[arg(long, value_name = "DIR")]
        files: Option<PathBuf>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Setup { csv } => run_setup(&cfg, &csv)?,
            CliCommand::Edit {
                csv,
                row,
                column,
                value,
                sheet,
                files,
            } => run_edit(&cfg, &csv, row, column, &value, sheet, files)?,
            CliCommand::Inspect { csv } => run_inspect(&cfg, &csv)?,
            CliCommand::Store { command } => match command {
                StoreCommand::Add { path, files } => run_store_add(&cfg, &path, files)?,
                StoreCommand::List { files } => run_store_list(&cfg, files)?,
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
