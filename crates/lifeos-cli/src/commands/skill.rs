//! Skill score commands for CLI.

use chrono::Utc;
use clap::Subcommand;
use lifeos_core::{skill, App};
use serde::Serialize;

#[derive(Subcommand)]
pub enum SkillAction {
    /// List skill scores with tier and inactivity
    List,
    /// Suggestion for the weakest pillar
    Advice,
}

#[derive(Serialize)]
struct SkillView {
    pillar: String,
    score: u8,
    tier: &'static str,
    days_since_activity: i64,
}

pub fn run(action: SkillAction) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::open()?;

    match action {
        SkillAction::List => {
            let now = Utc::now();
            let views: Vec<SkillView> = app
                .state()
                .skills
                .iter()
                .map(|s| SkillView {
                    pillar: s.pillar.to_string(),
                    score: s.current_score,
                    tier: s.tier(),
                    days_since_activity: s.days_since_activity(now),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        SkillAction::Advice => {
            println!("{}", skill::advice(&app.state().skills));
        }
    }
    Ok(())
}
