//! Derived achievement badges.
//!
//! Conditions are evaluated against aggregate stats after every relevant
//! mutation; nothing about a condition is ever stored. Already-unlocked
//! badges are skipped, so evaluation is idempotent.

use serde::Serialize;

/// Aggregates an achievement condition can see.
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementStats {
    pub streak: u32,
    /// Lifetime XP approximation: completed tasks x 150 + habit check-ins x 50.
    pub xp: i64,
    pub completed_tasks: usize,
    pub habit_checkins: usize,
    pub min_skill_score: u8,
}

/// A fixed achievement definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub desc: &'static str,
    #[serde(skip)]
    pub condition: fn(&AchievementStats) -> bool,
}

/// The fixed achievement table.
pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        id: "streak_7",
        name: "On Fire",
        desc: "7 day streak",
        condition: |s| s.streak >= 7,
    },
    Achievement {
        id: "xp_1000",
        name: "High Flyer",
        desc: "Earn 1,000 Total XP",
        condition: |s| s.xp >= 1000,
    },
    Achievement {
        id: "tasks_50",
        name: "Doer",
        desc: "Complete 50 Tasks",
        condition: |s| s.completed_tasks >= 50,
    },
    Achievement {
        id: "balance_50",
        name: "Balanced",
        desc: "All areas above 50%",
        condition: |s| s.min_skill_score >= 50,
    },
];

/// Achievements newly satisfied by `stats` that are not yet in `unlocked`.
pub fn newly_unlocked(stats: &AchievementStats, unlocked: &[String]) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !unlocked.iter().any(|u| u == a.id) && (a.condition)(stats))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocks_only_satisfied_conditions() {
        let stats = AchievementStats {
            streak: 8,
            xp: 500,
            completed_tasks: 3,
            habit_checkins: 1,
            min_skill_score: 10,
        };
        let unlocked = newly_unlocked(&stats, &[]);
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].id, "streak_7");
    }

    #[test]
    fn already_unlocked_badges_are_skipped() {
        let stats = AchievementStats {
            streak: 8,
            xp: 2000,
            completed_tasks: 60,
            habit_checkins: 0,
            min_skill_score: 60,
        };
        let owned = vec!["streak_7".to_string(), "xp_1000".to_string()];
        let ids: Vec<_> = newly_unlocked(&stats, &owned).iter().map(|a| a.id).collect();
        assert_eq!(ids, vec!["tasks_50", "balance_50"]);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let stats = AchievementStats { streak: 7, ..Default::default() };
        let mut owned: Vec<String> = Vec::new();
        owned.extend(newly_unlocked(&stats, &owned).iter().map(|a| a.id.to_string()));
        assert_eq!(owned, vec!["streak_7"]);
        assert!(newly_unlocked(&stats, &owned).is_empty());
    }
}
