//! Habit tracking commands for CLI.

use chrono::{Datelike, Local};
use clap::Subcommand;
use lifeos_core::{App, Pillar};

use super::flush_notices;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Create a new habit
    Add {
        /// Habit name
        name: String,
        /// Pillar: learn, create, mind, health or social (default: keyword
        /// suggestion from the name)
        #[arg(long)]
        category: Option<String>,
        /// Tracked days (default: 31)
        #[arg(long, default_value = "31")]
        duration: usize,
    },
    /// List habits with their check grids
    List,
    /// Toggle a habit check for a day
    Check {
        /// Habit ID
        id: String,
        /// Day of month, 1-based (default: today)
        #[arg(long)]
        day: Option<usize>,
    },
    /// Update a habit
    Edit {
        /// Habit ID
        id: String,
        /// New name
        #[arg(long)]
        name: Option<String>,
        /// New pillar
        #[arg(long)]
        category: Option<String>,
        /// New tracked length; the grid truncates or pads
        #[arg(long)]
        duration: Option<usize>,
    },
    /// Delete a habit
    Delete {
        /// Habit ID
        id: String,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;
    let now = Local::now();
    let today = now.date_naive();

    match action {
        HabitAction::Add { name, category, duration } => {
            let category = match category {
                Some(raw) => Some(raw.parse::<Pillar>()?),
                None => None,
            };
            let created = app.add_habit(&name, category, duration)?;
            flush_notices(&mut app);
            if let Some(id) = created {
                let habit = app.state().habits.iter().find(|h| h.id == id);
                println!("{}", serde_json::to_string_pretty(&habit)?);
            }
        }
        HabitAction::List => {
            println!("{}", serde_json::to_string_pretty(&app.state().habits)?);
        }
        HabitAction::Check { id, day } => {
            let day_index = day.unwrap_or(now.day() as usize).saturating_sub(1);
            app.check_habit(&id, day_index, today)?;
            flush_notices(&mut app);
            if let Some(habit) = app.state().habits.iter().find(|h| h.id == id) {
                println!("{}", serde_json::to_string_pretty(habit)?);
            }
        }
        HabitAction::Edit { id, name, category, duration } => {
            let category = match category {
                Some(raw) => Some(raw.parse::<Pillar>()?),
                None => None,
            };
            app.edit_habit(&id, name.as_deref(), category, duration)?;
            flush_notices(&mut app);
        }
        HabitAction::Delete { id } => {
            app.delete_habit(&id)?;
            flush_notices(&mut app);
        }
    }
    Ok(())
}
