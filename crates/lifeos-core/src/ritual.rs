//! The sleep/wake ritual state machine.
//!
//! Two states, `awake ⇄ asleep`, driven entirely by wall-clock time the
//! caller injects. Going to sleep always succeeds (the habit credit depends
//! on the bedtime check); waking is validated on the next startup against a
//! minimum sleep duration and a pre-target wake window. The decision
//! functions here are pure; [`crate::state::App`] applies their verdicts to
//! tasks, habits, XP and the streak.
//!
//! ```text
//! awake --begin_sleep--> asleep --validate_wake--> awake
//!                          |                         ^
//!                          +------abort_sleep--------+
//! ```

use chrono::{DateTime, Duration, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Minimum accepted sleep duration, in minutes.
pub const MIN_SLEEP_MINUTES: i64 = 120;

/// The wake window opens this many minutes before the target.
pub const WAKE_WINDOW_MINUTES: u32 = 120;

/// Nightly hours before this local hour still count as "last night" for the
/// bedtime check.
const LATE_NIGHT_CUTOFF_HOUR: u32 = 4;

/// Currency awarded for waking inside the window.
pub const WAKE_XP_REWARD: i64 = 100;

/// Persisted ritual state: idle or asleep since `start_time`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SleepState {
    pub is_active: bool,
    pub start_time: Option<DateTime<Utc>>,
}

/// Verdict of the startup wake validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeVerdict {
    /// Slept under the minimum duration; fails regardless of clock time.
    TooShort,
    /// Past the wake target.
    Overslept,
    /// Before the wake window opens.
    TooEarly,
    /// Inside `[target - window, target]` with enough sleep behind it.
    OnTime,
}

/// Minutes since local midnight.
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Parse an `HH:MM` clock string into minutes since midnight.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    Some(minutes_of_day(time))
}

/// Whether going to sleep at `now` meets the bedtime target. Anything
/// before 04:00 counts as still "last night".
pub fn bedtime_met(now: NaiveTime, bedtime_minutes: u32) -> bool {
    now.hour() < LATE_NIGHT_CUTOFF_HOUR || minutes_of_day(now) <= bedtime_minutes
}

/// Classify a wake attempt. Order matters: duration is checked first, then
/// the clock against the window.
pub fn wake_verdict(slept: Duration, now: NaiveTime, wake_target_minutes: u32) -> WakeVerdict {
    if slept < Duration::minutes(MIN_SLEEP_MINUTES) {
        return WakeVerdict::TooShort;
    }
    let now_minutes = minutes_of_day(now);
    if now_minutes > wake_target_minutes {
        return WakeVerdict::Overslept;
    }
    if now_minutes < wake_target_minutes.saturating_sub(WAKE_WINDOW_MINUTES) {
        return WakeVerdict::TooEarly;
    }
    WakeVerdict::OnTime
}

/// `"7h 32m"`-style rendering for the TooShort notice.
pub fn format_duration(d: Duration) -> String {
    let hrs = d.num_hours();
    let mins = d.num_minutes() % 60;
    format!("{hrs}h {mins}m")
}
