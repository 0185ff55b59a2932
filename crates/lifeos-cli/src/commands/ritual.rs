//! Sleep/wake ritual commands for CLI.

use chrono::Local;
use clap::Subcommand;
use lifeos_core::App;

use super::flush_notices;

#[derive(Subcommand)]
pub enum RitualAction {
    /// Begin the sleep ritual
    Sleep,
    /// Startup check: validates a pending wake or prints the greeting
    Wake,
    /// Emergency exit from the asleep state
    Abort,
    /// Show the ritual state and clock targets
    Status,
}

pub fn run(action: RitualAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;
    let now = Local::now();

    match action {
        RitualAction::Sleep => {
            let cinematic = app.begin_sleep(now)?;
            flush_notices(&mut app);
            println!("{}", cinematic.text);
            println!("{}", cinematic.subtext);
        }
        RitualAction::Wake => {
            let cinematic = app.startup(now)?;
            flush_notices(&mut app);
            println!("{}", cinematic.text);
            println!("{}", cinematic.subtext);
        }
        RitualAction::Abort => {
            app.abort_sleep()?;
            flush_notices(&mut app);
        }
        RitualAction::Status => {
            let view = serde_json::json!({
                "sleep": app.state().sleep,
                "bedtime": app.config().ritual.bedtime,
                "wake": app.config().ritual.wake,
            });
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
    }
    Ok(())
}
