//! Backup export/import commands for CLI.

use clap::Subcommand;
use lifeos_core::App;

use super::flush_notices;

#[derive(Subcommand)]
pub enum BackupAction {
    /// Print the backup code for the current state
    Export,
    /// Restore state from a backup code
    Import {
        /// The backup code
        code: String,
    },
}

pub fn run(action: BackupAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        BackupAction::Export => {
            println!("{}", app.export_backup()?);
        }
        BackupAction::Import { code } => {
            app.import_backup(&code)?;
            flush_notices(&mut app);
        }
    }
    Ok(())
}
