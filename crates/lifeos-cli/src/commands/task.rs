//! Task management commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use lifeos_core::{App, Impact, Pillar, PurgeMode, Recurrence};

use super::flush_notices;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Add {
        /// Task name
        name: String,
        /// Pillar: learn, create, mind, health or social (default: keyword
        /// suggestion from the name)
        #[arg(long)]
        category: Option<String>,
        /// Impact: low, medium or high (default: medium)
        #[arg(long, default_value = "medium")]
        impact: String,
        /// Day the task belongs to, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Recurrence: none, daily, weekly or monthly (default: none)
        #[arg(long, default_value = "none")]
        recurrence: String,
    },
    /// List tasks
    List {
        /// Only tasks on this day
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Only open tasks
        #[arg(long)]
        open: bool,
    },
    /// Toggle a task between To Do and Complete
    Toggle {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// Bulk-handle overdue tasks
    Purge {
        /// Move them to today (costs 50 XP) instead of deleting them
        #[arg(long)]
        reschedule: bool,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::open()?;
    let now = Local::now();
    let today = now.date_naive();

    match action {
        TaskAction::Add { name, category, impact, date, recurrence } => {
            let category = match category {
                Some(raw) => Some(raw.parse::<Pillar>()?),
                None => None,
            };
            let impact = impact.parse::<Impact>()?;
            let recurrence = recurrence.parse::<Recurrence>()?;
            let created = app.add_task(
                &name,
                category,
                impact,
                date.unwrap_or(today),
                recurrence,
                today,
            )?;
            flush_notices(&mut app);
            if let Some(id) = created {
                let task = app.state().tasks.iter().find(|t| t.id == id);
                println!("{}", serde_json::to_string_pretty(&task)?);
            }
        }
        TaskAction::List { date, open } => {
            let tasks: Vec<_> = app
                .state()
                .tasks
                .iter()
                .filter(|t| date.map_or(true, |d| t.date == d))
                .filter(|t| !open || !t.is_complete())
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Toggle { id } => {
            app.toggle_task(&id, now)?;
            flush_notices(&mut app);
            if let Some(task) = app.state().tasks.iter().find(|t| t.id == id) {
                println!("{}", serde_json::to_string_pretty(task)?);
            } else {
                println!("Task not found: {id}");
            }
        }
        TaskAction::Delete { id } => {
            app.delete_task(&id)?;
            flush_notices(&mut app);
        }
        TaskAction::Purge { reschedule } => {
            let mode = if reschedule { PurgeMode::Reschedule } else { PurgeMode::Burn };
            app.purge_overdue(mode, today)?;
            flush_notices(&mut app);
        }
    }
    Ok(())
}
