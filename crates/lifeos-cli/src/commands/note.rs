//! Quick note commands for CLI.

use clap::Subcommand;
use lifeos_core::App;

use super::flush_notices;

#[derive(Subcommand)]
pub enum NoteAction {
    /// Capture a note
    Add {
        /// Note title
        title: String,
        /// Note body (default: empty)
        #[arg(long, default_value = "")]
        content: String,
    },
    /// List notes
    List,
    /// Delete a note
    Delete {
        /// Note ID
        id: String,
    },
}

pub fn run(action: NoteAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;

    match action {
        NoteAction::Add { title, content } => {
            app.add_note(&title, &content)?;
            flush_notices(&mut app);
        }
        NoteAction::List => {
            println!("{}", serde_json::to_string_pretty(&app.state().notes)?);
        }
        NoteAction::Delete { id } => {
            app.delete_note(&id)?;
            flush_notices(&mut app);
        }
    }
    Ok(())
}
