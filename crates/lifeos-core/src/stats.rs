//! Read-only aggregates over tasks, habits and skills.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::habit::Habit;
use crate::pillar::{Pillar, PILLARS};
use crate::skill::Skill;
use crate::task::Task;

/// Planned vs executed task counts for one pillar.
#[derive(Debug, Clone, Serialize)]
pub struct PillarEfficiency {
    pub pillar: Pillar,
    pub planned: usize,
    pub executed: usize,
}

/// Completions per weekday, Sunday first.
#[derive(Debug, Clone, Serialize)]
pub struct WeekdayActivity {
    pub day: &'static str,
    pub count: usize,
}

/// Aggregate view used by the stats surface.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub completed_tasks: usize,
    pub habit_checkins: usize,
    /// Completed / total tasks, as a whole percentage. 0 when no tasks.
    pub completion_rate: u32,
    pub pillar_efficiency: Vec<PillarEfficiency>,
    pub weekly_activity: Vec<WeekdayActivity>,
}

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn report(tasks: &[Task], habits: &[Habit]) -> StatsReport {
    let completed: Vec<&Task> = tasks.iter().filter(|t| t.is_complete()).collect();
    let completion_rate = if tasks.is_empty() {
        0
    } else {
        (completed.len() as f64 / tasks.len() as f64 * 100.0).round() as u32
    };

    let pillar_efficiency = PILLARS
        .iter()
        .map(|&pillar| {
            let planned = tasks.iter().filter(|t| t.category == pillar).count();
            let executed = tasks
                .iter()
                .filter(|t| t.category == pillar && t.is_complete())
                .count();
            PillarEfficiency { pillar, planned, executed }
        })
        .collect();

    let weekly_activity = WEEKDAYS
        .iter()
        .enumerate()
        .map(|(idx, day)| WeekdayActivity {
            day,
            count: completed
                .iter()
                .filter(|t| t.date.weekday().num_days_from_sunday() as usize == idx)
                .count(),
        })
        .collect();

    StatsReport {
        completed_tasks: completed.len(),
        habit_checkins: habits.iter().map(|h| h.checkin_count()).sum(),
        completion_rate,
        pillar_efficiency,
        weekly_activity,
    }
}

/// Letter grade for one calendar day: share of that day's tasks completed.
/// `-` when the day has no tasks.
pub fn day_grade(tasks: &[Task], date: NaiveDate) -> &'static str {
    let day_tasks: Vec<&Task> = tasks.iter().filter(|t| t.date == date).collect();
    if day_tasks.is_empty() {
        return "-";
    }
    let completed = day_tasks.iter().filter(|t| t.is_complete()).count();
    let pct = completed as f64 / day_tasks.len() as f64;
    if pct >= 1.0 {
        "A+"
    } else if pct >= 0.8 {
        "A"
    } else if pct >= 0.6 {
        "B"
    } else if pct >= 0.4 {
        "C"
    } else {
        "F"
    }
}

/// One point of the average-score history series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryPoint {
    pub label: String,
    pub score: u32,
}

/// Fold today's average skill score into the history series: update the
/// last point in place when the label matches, otherwise append.
pub fn push_history(history: &mut Vec<HistoryPoint>, skills: &[Skill], today: NaiveDate) {
    if skills.is_empty() {
        return;
    }
    let total: u32 = skills.iter().map(|s| s.current_score as u32).sum();
    let average = (total as f64 / skills.len() as f64).round() as u32;
    let label = today.format("%b %-d").to_string();
    match history.last_mut() {
        Some(last) if last.label == label => last.score = average,
        _ => history.push(HistoryPoint { label, score: average }),
    }
}
