//! Statistics commands for CLI.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use lifeos_core::{stats, App};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Aggregate summary: completions, rate, pillar efficiency, weekday
    /// activity
    Summary,
    /// Letter grade for one day
    Grade {
        /// Day to grade, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Average-score history series
    History,
    /// Current streak
    Streak,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open()?;

    match action {
        StatsAction::Summary => {
            let report = stats::report(&app.state().tasks, &app.state().habits);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Grade { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", stats::day_grade(&app.state().tasks, date));
        }
        StatsAction::History => {
            println!("{}", serde_json::to_string_pretty(&app.state().history)?);
        }
        StatsAction::Streak => {
            println!("{}", serde_json::to_string_pretty(&app.state().streak)?);
        }
    }
    Ok(())
}
