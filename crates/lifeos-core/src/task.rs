//! Task records and the recurrence lifecycle.
//!
//! A task lives on a calendar day and flips between `ToDo` and `Complete`.
//! Completing a recurring task synthesizes exactly one successor instance;
//! the `generated_task_id` link survives un-completion so a re-completion
//! never spawns a second successor.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::pillar::Pillar;

/// Completion status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    Complete,
}

/// Impact weight of a task. Low and Medium share the same reward; High
/// doubles it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Impact {
    Low,
    Medium,
    High,
}

impl Impact {
    /// Currency awarded when a task of this impact is completed.
    pub fn xp_reward(&self) -> i64 {
        match self {
            Impact::Low | Impact::Medium => 150,
            Impact::High => 300,
        }
    }

    /// Skill score nudge when a task of this impact is completed.
    pub fn score_nudge(&self) -> i32 {
        match self {
            Impact::Low | Impact::Medium => 5,
            Impact::High => 10,
        }
    }
}

impl FromStr for Impact {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Impact::Low),
            "medium" => Ok(Impact::Medium),
            "high" => Ok(Impact::High),
            other => Err(format!("unknown impact: {other}")),
        }
    }
}

/// Recurrence cadence. Monthly is a fixed 30-day stride.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Day stride to the successor instance, if any.
    pub fn stride_days(&self) -> Option<i64> {
        match self {
            Recurrence::None => None,
            Recurrence::Daily => Some(1),
            Recurrence::Weekly => Some(7),
            Recurrence::Monthly => Some(30),
        }
    }
}

impl FromStr for Recurrence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(Recurrence::None),
            "daily" => Ok(Recurrence::Daily),
            "weekly" => Ok(Recurrence::Weekly),
            "monthly" => Ok(Recurrence::Monthly),
            other => Err(format!("unknown recurrence: {other}")),
        }
    }
}

impl fmt::Display for Recurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Recurrence::None => "none",
            Recurrence::Daily => "daily",
            Recurrence::Weekly => "weekly",
            Recurrence::Monthly => "monthly",
        };
        f.write_str(s)
    }
}

/// A scheduled task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub name: String,
    pub status: TaskStatus,
    pub category: Pillar,
    pub impact: Impact,
    /// Calendar day the task belongs to.
    pub date: NaiveDate,
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Id of the successor this instance spawned, once completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_task_id: Option<String>,
    /// Id of the predecessor that spawned this instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_task_id: Option<String>,
    /// System items are managed by the sleep ritual and reject manual toggles.
    #[serde(default)]
    pub is_system: bool,
}

impl Task {
    /// Create a user task for a given day.
    pub fn new(
        name: impl Into<String>,
        category: Pillar,
        impact: Impact,
        date: NaiveDate,
        recurrence: Recurrence,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            status: TaskStatus::ToDo,
            category,
            impact,
            date,
            recurrence,
            generated_task_id: None,
            original_task_id: None,
            is_system: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == TaskStatus::Complete
    }

    /// Whether completing this instance should spawn a successor.
    pub fn wants_successor(&self) -> bool {
        self.recurrence != Recurrence::None && self.generated_task_id.is_none()
    }

    /// Synthesize the successor instance: same shape, fresh id, `ToDo`,
    /// dated one stride later, linked back to this instance.
    pub fn spawn_successor(&self) -> Option<Task> {
        let stride = self.recurrence.stride_days()?;
        let mut next = self.clone();
        next.id = Uuid::new_v4().to_string();
        next.status = TaskStatus::ToDo;
        next.date = self.date + chrono::Duration::days(stride);
        next.generated_task_id = None;
        next.original_task_id = Some(self.id.clone());
        Some(next)
    }
}
