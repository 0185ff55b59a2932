//! Daily completion streak.
//!
//! The streak advances at most once per calendar day, on the first
//! qualifying completion. The decision is a pure function of the previous
//! `{count, last_date}` pair and today's date; the caller decides what to do
//! with a `Broken` verdict (the store layer may spend a Streak Freeze to
//! bridge the gap).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Streak counter state.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Streak {
    pub count: u32,
    pub last_date: Option<NaiveDate>,
}

/// Outcome of advancing the streak for a qualifying completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakAdvance {
    /// Already counted today; state unchanged.
    AlreadyCounted,
    /// Yesterday was counted; count incremented.
    Extended,
    /// A day (or more) was skipped; count would reset to 1.
    Broken,
}

impl Streak {
    /// Classify what a qualifying completion on `today` means for this
    /// streak. Does not mutate; pair with [`Streak::apply`].
    pub fn classify(&self, today: NaiveDate) -> StreakAdvance {
        match self.last_date {
            Some(last) if last == today => StreakAdvance::AlreadyCounted,
            Some(last) if last.succ_opt() == Some(today) => StreakAdvance::Extended,
            _ => StreakAdvance::Broken,
        }
    }

    /// Apply an advance verdict. `bridged` treats a `Broken` day as
    /// consecutive (Streak Freeze semantics).
    pub fn apply(&mut self, advance: StreakAdvance, today: NaiveDate, bridged: bool) {
        match advance {
            StreakAdvance::AlreadyCounted => {}
            StreakAdvance::Extended => {
                self.count += 1;
                self.last_date = Some(today);
            }
            StreakAdvance::Broken => {
                self.count = if bridged { self.count + 1 } else { 1 };
                self.last_date = Some(today);
            }
        }
    }
}
