//! The five life-balance pillars.
//!
//! Every task, habit and skill score is classified under exactly one pillar.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the five fixed life-balance categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Pillar {
    Learn,
    Create,
    Mind,
    Health,
    Social,
}

/// All pillars in canonical order.
pub const PILLARS: [Pillar; 5] = [
    Pillar::Learn,
    Pillar::Create,
    Pillar::Mind,
    Pillar::Health,
    Pillar::Social,
];

/// Keyword table used to suggest a pillar from a task name.
/// One row per pillar, in canonical order.
const PILLAR_KEYWORDS: [&[&str]; 5] = [
    &["learn", "read", "study", "research", "explore", "analyze", "math", "logic", "book", "course", "class"],
    &["make", "build", "write", "code", "art", "design", "ship", "project", "draw", "paint", "craft"],
    &["connect", "synthesize", "solve", "system", "optimize", "meditate", "plan", "think", "reflect", "journal"],
    &["sport", "train", "dance", "move", "eat", "sleep", "fast", "run", "gym", "walk", "yoga"],
    &["speak", "lead", "teach", "share", "debate", "network", "social", "friend", "family", "call"],
];

impl Pillar {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pillar::Learn => "Learn",
            Pillar::Create => "Create",
            Pillar::Mind => "Mind",
            Pillar::Health => "Health",
            Pillar::Social => "Social",
        }
    }

    /// Suggest a pillar for an item name by keyword match.
    ///
    /// First pillar whose keyword list hits a substring of the lowercased
    /// name wins; `None` when nothing matches.
    pub fn suggest(name: &str) -> Option<Pillar> {
        let lower = name.to_lowercase();
        for (i, keywords) in PILLAR_KEYWORDS.iter().enumerate() {
            if keywords.iter().any(|k| lower.contains(k)) {
                return Some(PILLARS[i]);
            }
        }
        None
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pillar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "learn" => Ok(Pillar::Learn),
            "create" => Ok(Pillar::Create),
            "mind" => Ok(Pillar::Mind),
            "health" => Ok(Pillar::Health),
            "social" => Ok(Pillar::Social),
            other => Err(format!("unknown pillar: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_matches_keyword_rows() {
        assert_eq!(Pillar::suggest("Read chapter 4"), Some(Pillar::Learn));
        assert_eq!(Pillar::suggest("Ship the project"), Some(Pillar::Create));
        assert_eq!(Pillar::suggest("Meditate 10 min"), Some(Pillar::Mind));
        assert_eq!(Pillar::suggest("Gym session"), Some(Pillar::Health));
        assert_eq!(Pillar::suggest("Call grandma"), Some(Pillar::Social));
        assert_eq!(Pillar::suggest("xyzzy"), None);
    }

    #[test]
    fn first_matching_row_wins() {
        // "book" (Learn) appears before any Create keyword could match.
        assert_eq!(Pillar::suggest("book a design review"), Some(Pillar::Learn));
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("HEALTH".parse::<Pillar>().unwrap(), Pillar::Health);
        assert!("vitality".parse::<Pillar>().is_err());
    }
}
