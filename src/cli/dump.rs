//! Export/import CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::WalletResult;
use crate::services::WalletService;

/// Dump subcommands
#[derive(Subcommand)]
pub enum DumpCommands {
    /// Write accounts, payments and favorites into a directory
    Export {
        /// Target directory (created if missing)
        dir: PathBuf,
    },
    /// Merge a dump directory into the ledger, skipping known IDs
    Import {
        /// Source directory
        dir: PathBuf,
    },
    /// Write accounts to a single legacy file
    ExportFile {
        /// Target file
        path: PathBuf,
    },
    /// Append accounts from a single legacy file
    ImportFile {
        /// Source file
        path: PathBuf,
    },
}

impl DumpCommands {
    /// Whether the command changes the ledger
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Import { .. } | Self::ImportFile { .. })
    }
}

/// Handle a dump command
pub fn handle_dump_command(service: &mut WalletService, cmd: DumpCommands) -> WalletResult<()> {
    match cmd {
        DumpCommands::Export { dir } => {
            service.export(&dir)?;
            println!(
                "Exported {} accounts, {} payments, {} favorites to {}",
                service.accounts().len(),
                service.payments().len(),
                service.favorites().len(),
                dir.display()
            );
        }

        DumpCommands::Import { dir } => {
            let summary = service.import(&dir)?;
            for warning in &summary.warnings {
                eprintln!("Warning: {}", warning);
            }
            println!("Import from {}", dir.display());
            println!("  Accounts added:     {}", summary.accounts_added);
            println!("  Payments added:     {}", summary.payments_added);
            println!("  Favorites added:    {}", summary.favorites_added);
            println!("  Duplicates skipped: {}", summary.duplicates_skipped);
        }

        DumpCommands::ExportFile { path } => {
            service.export_to_file(&path)?;
            println!(
                "Exported {} accounts to {}",
                service.accounts().len(),
                path.display()
            );
        }

        DumpCommands::ImportFile { path } => {
            let count = service.import_from_file(&path)?;
            println!("Imported {} accounts from {}", count, path.display());
        }
    }

    Ok(())
}
