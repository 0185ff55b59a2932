//! Slash-command execution for CLI.

use chrono::Local;
use lifeos_core::App;

use super::flush_notices;

pub fn run(line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;
    app.execute(line, Local::now())?;
    flush_notices(&mut app);
    Ok(())
}
