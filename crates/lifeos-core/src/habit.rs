//! Habit records: a fixed-length check grid indexed by day of month.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pillar::Pillar;

/// Skill score nudge for a habit check (negated on uncheck).
pub const HABIT_SCORE_NUDGE: i32 = 2;

/// Currency awarded per habit check-in.
pub const HABIT_XP_REWARD: i64 = 50;

/// A tracked habit. `completions.len() == duration` always holds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub name: String,
    pub category: Pillar,
    pub duration: usize,
    pub completions: Vec<bool>,
    /// System habits are credited by the sleep ritual and reject manual
    /// toggles.
    #[serde(default)]
    pub is_system: bool,
}

impl Habit {
    pub fn new(name: impl Into<String>, category: Pillar, duration: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            category,
            duration,
            completions: vec![false; duration],
            is_system: false,
        }
    }

    /// Change the tracked length, truncating or padding with `false`.
    pub fn resize(&mut self, duration: usize) {
        self.duration = duration;
        self.completions.resize(duration, false);
    }

    pub fn checked(&self, day_index: usize) -> bool {
        self.completions.get(day_index).copied().unwrap_or(false)
    }

    pub fn checkin_count(&self) -> usize {
        self.completions.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_habit_grid_is_all_false() {
        let h = Habit::new("Stretch", Pillar::Health, 31);
        assert_eq!(h.completions.len(), 31);
        assert_eq!(h.checkin_count(), 0);
    }

    #[test]
    fn resize_pads_and_truncates() {
        let mut h = Habit::new("Journal", Pillar::Mind, 7);
        h.completions[0] = true;
        h.completions[6] = true;

        h.resize(10);
        assert_eq!(h.completions.len(), 10);
        assert!(h.checked(0) && h.checked(6));
        assert!(!h.checked(9));

        h.resize(5);
        assert_eq!(h.completions.len(), 5);
        assert!(h.checked(0));
        // Day 6 fell off with the truncation.
        assert!(!h.checked(6));
    }

    #[test]
    fn out_of_range_reads_are_false() {
        let h = Habit::new("Stretch", Pillar::Health, 3);
        assert!(!h.checked(99));
    }
}
