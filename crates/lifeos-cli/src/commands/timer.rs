//! Focus timer commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use lifeos_core::App;

use super::flush_notices;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or resume) the countdown
    Start,
    /// Tick the countdown and show the remaining time
    Status,
    /// Stop and rewind to the full duration
    Reset,
    /// Set the session length in minutes
    Set {
        /// Minutes per session
        minutes: u64,
    },
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;
    let now_epoch = Utc::now().timestamp();

    match action {
        TimerAction::Start => {
            app.start_timer(now_epoch)?;
            println!("Timer started: {}", app.state().timer.format_remaining());
        }
        TimerAction::Status => {
            app.tick_timer(now_epoch)?;
            flush_notices(&mut app);
            let timer = &app.state().timer;
            println!("{:?}: {}", timer.state(), timer.format_remaining());
        }
        TimerAction::Reset => {
            app.reset_timer()?;
            println!("Timer reset: {}", app.state().timer.format_remaining());
        }
        TimerAction::Set { minutes } => {
            app.set_timer_duration(minutes)?;
            println!("Session length: {minutes} min");
        }
    }
    Ok(())
}
