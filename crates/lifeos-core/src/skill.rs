//! Per-pillar skill scores.
//!
//! Each pillar carries a 0-100 engagement score. Completions nudge the score
//! up by a small fixed impact; un-completions apply a proportional decay on
//! top of an inverse nudge. Decay never fires autonomously over time -- only
//! on explicit un-completion events. `days_since_activity` exists purely so
//! a front end can render neglect warnings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pillar::{Pillar, PILLARS};

/// Default proportional decay applied when an item is un-completed.
pub const DEFAULT_DECAY_RATE: f64 = 0.1;

/// A 0-100 proficiency/engagement score for one pillar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub pillar: Pillar,
    pub current_score: u8,
    pub decay_rate: f64,
    pub last_activity: DateTime<Utc>,
}

impl Skill {
    /// Apply a signed impact, clamping into [0, 100], and stamp activity.
    pub fn apply_impact(&mut self, impact: i32, now: DateTime<Utc>) {
        self.current_score = clamp_score(self.current_score as i32 + impact);
        self.last_activity = now;
    }

    /// Apply proportional decay: subtract `max(1, round(score * rate))`,
    /// floored at 0. A zero score stays at zero.
    pub fn apply_decay(&mut self, now: DateTime<Utc>) {
        self.current_score = decayed_score(self.current_score, self.decay_rate);
        self.last_activity = now;
    }

    /// Whole days elapsed since the last score mutation.
    pub fn days_since_activity(&self, now: DateTime<Utc>) -> i64 {
        (now - self.last_activity).num_days()
    }

    /// Tier name for the current score.
    pub fn tier(&self) -> &'static str {
        tier_for(self.current_score)
    }
}

/// Clamp an intermediate score into [0, 100].
pub fn clamp_score(score: i32) -> u8 {
    score.clamp(0, 100) as u8
}

/// Decayed score: `score - max(1, round(score * rate))`, floored at 0.
pub fn decayed_score(score: u8, rate: f64) -> u8 {
    if score == 0 {
        return 0;
    }
    let decay = ((score as f64 * rate).round() as i32).max(1);
    clamp_score(score as i32 - decay)
}

/// Tier ladder: Beginner <= 20, Intermediate <= 45, Advanced <= 70, Expert.
pub fn tier_for(score: u8) -> &'static str {
    match score {
        0..=20 => "Beginner",
        21..=45 => "Intermediate",
        46..=70 => "Advanced",
        _ => "Expert",
    }
}

/// Build the initial zero-score skill set, one per pillar.
pub fn base_skills(now: DateTime<Utc>) -> Vec<Skill> {
    PILLARS
        .iter()
        .enumerate()
        .map(|(i, &pillar)| Skill {
            id: format!("skill_{i}"),
            pillar,
            current_score: 0,
            decay_rate: DEFAULT_DECAY_RATE,
            last_activity: now,
        })
        .collect()
}

/// Suggestion for the weakest pillar, or a contentment message when every
/// score is above 80.
pub fn advice(skills: &[Skill]) -> &'static str {
    let Some(weakest) = skills.iter().min_by_key(|s| s.current_score) else {
        return "Focus on your goals.";
    };
    if weakest.current_score > 80 {
        return "You are doing great in everything.";
    }
    match weakest.pillar {
        Pillar::Learn => "Read a book or learn something new.",
        Pillar::Create => "Make something today.",
        Pillar::Mind => "Take time to think or meditate.",
        Pillar::Health => "Go for a walk or exercise.",
        Pillar::Social => "Call a friend or meet someone.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn skill(score: u8) -> Skill {
        Skill {
            id: "skill_0".into(),
            pillar: Pillar::Learn,
            current_score: score,
            decay_rate: DEFAULT_DECAY_RATE,
            last_activity: Utc::now(),
        }
    }

    #[test]
    fn impact_clamps_at_both_ends() {
        let mut s = skill(98);
        s.apply_impact(10, Utc::now());
        assert_eq!(s.current_score, 100);
        let mut s = skill(3);
        s.apply_impact(-11, Utc::now());
        assert_eq!(s.current_score, 0);
    }

    #[test]
    fn decay_reduces_by_at_least_one() {
        // 5 * 0.1 rounds to 1, but even 1 * 0.1 must still cost a point.
        assert_eq!(decayed_score(5, DEFAULT_DECAY_RATE), 4);
        assert_eq!(decayed_score(1, DEFAULT_DECAY_RATE), 0);
        assert_eq!(decayed_score(50, DEFAULT_DECAY_RATE), 45);
    }

    #[test]
    fn decay_leaves_zero_at_zero() {
        assert_eq!(decayed_score(0, DEFAULT_DECAY_RATE), 0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier_for(0), "Beginner");
        assert_eq!(tier_for(20), "Beginner");
        assert_eq!(tier_for(21), "Intermediate");
        assert_eq!(tier_for(45), "Intermediate");
        assert_eq!(tier_for(46), "Advanced");
        assert_eq!(tier_for(70), "Advanced");
        assert_eq!(tier_for(71), "Expert");
        assert_eq!(tier_for(100), "Expert");
    }

    #[test]
    fn advice_targets_weakest_pillar() {
        let mut skills = base_skills(Utc::now());
        for s in skills.iter_mut() {
            s.current_score = 60;
        }
        skills[3].current_score = 10; // Health
        assert_eq!(advice(&skills), "Go for a walk or exercise.");

        for s in skills.iter_mut() {
            s.current_score = 90;
        }
        assert_eq!(advice(&skills), "You are doing great in everything.");
    }

    proptest! {
        #[test]
        fn score_stays_in_range_under_any_sequence(
            start in 0u8..=100,
            ops in prop::collection::vec((any::<bool>(), -12i32..=12), 0..64),
        ) {
            let mut s = skill(start);
            for (decay, impact) in ops {
                if decay {
                    s.apply_decay(Utc::now());
                } else {
                    s.apply_impact(impact, Utc::now());
                }
                prop_assert!(s.current_score <= 100);
            }
        }

        #[test]
        fn decay_is_strictly_decreasing_above_zero(score in 1u8..=100) {
            let after = decayed_score(score, DEFAULT_DECAY_RATE);
            prop_assert!(after < score);
            prop_assert!(score - after >= 1);
        }
    }
}
