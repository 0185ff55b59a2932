//! Focus session timer.
//!
//! A wall-clock-based state machine with no internal threads -- the caller
//! invokes `tick()` periodically and reacts to the returned transition. The
//! timer state is serializable so a short-lived CLI process can resume a
//! running session.
//!
//! ```text
//! Idle -> Running -> Completed -> Idle
//!           |
//!           +--reset--> Idle
//! ```

use serde::{Deserialize, Serialize};

/// Default session length: 25 minutes.
pub const DEFAULT_DURATION_SECS: u64 = 25 * 60;

/// Currency awarded when a session runs to completion.
pub const SESSION_XP_REWARD: i64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Completed,
}

/// A single focus countdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTimer {
    state: TimerState,
    duration_secs: u64,
    remaining_secs: u64,
    /// Epoch seconds of the last tick while running; used to compute
    /// wall-clock deltas between ticks.
    #[serde(default)]
    last_tick_epoch: Option<i64>,
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl FocusTimer {
    pub fn new(duration_secs: u64) -> Self {
        Self {
            state: TimerState::Idle,
            duration_secs,
            remaining_secs: duration_secs,
            last_tick_epoch: None,
        }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    /// Set a new session length. Stops any running countdown.
    pub fn set_duration(&mut self, duration_secs: u64) {
        self.duration_secs = duration_secs;
        self.remaining_secs = duration_secs;
        self.state = TimerState::Idle;
        self.last_tick_epoch = None;
    }

    /// Start (or restart after completion) the countdown.
    pub fn start(&mut self, now_epoch: i64) {
        if self.state == TimerState::Completed {
            self.remaining_secs = self.duration_secs;
        }
        self.state = TimerState::Running;
        self.last_tick_epoch = Some(now_epoch);
    }

    /// Stop and rewind to the full duration.
    pub fn reset(&mut self) {
        self.state = TimerState::Idle;
        self.remaining_secs = self.duration_secs;
        self.last_tick_epoch = None;
    }

    /// Advance by the wall-clock delta since the last tick. Returns `true`
    /// exactly once, on the tick that completes the session.
    pub fn tick(&mut self, now_epoch: i64) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        let last = self.last_tick_epoch.unwrap_or(now_epoch);
        let elapsed = (now_epoch - last).max(0) as u64;
        self.last_tick_epoch = Some(now_epoch);
        if elapsed >= self.remaining_secs {
            self.remaining_secs = 0;
            self.state = TimerState::Completed;
            return true;
        }
        self.remaining_secs -= elapsed;
        false
    }

    /// `MM:SS` rendering of the remaining time.
    pub fn format_remaining(&self) -> String {
        let mins = self.remaining_secs / 60;
        let secs = self.remaining_secs % 60;
        format!("{mins}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_by_wall_clock_delta() {
        let mut timer = FocusTimer::new(60);
        timer.start(1000);
        assert!(!timer.tick(1010));
        assert_eq!(timer.remaining_secs(), 50);
        assert_eq!(timer.format_remaining(), "0:50");
    }

    #[test]
    fn completes_exactly_once() {
        let mut timer = FocusTimer::new(30);
        timer.start(0);
        assert!(timer.tick(30));
        assert_eq!(timer.state(), TimerState::Completed);
        assert!(!timer.tick(31));
    }

    #[test]
    fn overshoot_clamps_to_zero() {
        let mut timer = FocusTimer::new(30);
        timer.start(0);
        assert!(timer.tick(500));
        assert_eq!(timer.remaining_secs(), 0);
    }

    #[test]
    fn reset_rewinds_to_full_duration() {
        let mut timer = FocusTimer::new(60);
        timer.start(0);
        timer.tick(20);
        timer.reset();
        assert_eq!(timer.state(), TimerState::Idle);
        assert_eq!(timer.remaining_secs(), 60);
    }

    #[test]
    fn restart_after_completion_rewinds() {
        let mut timer = FocusTimer::new(30);
        timer.start(0);
        timer.tick(30);
        timer.start(100);
        assert_eq!(timer.state(), TimerState::Running);
        assert_eq!(timer.remaining_secs(), 30);
    }

    #[test]
    fn tick_while_idle_is_a_no_op() {
        let mut timer = FocusTimer::new(30);
        assert!(!timer.tick(10));
        assert_eq!(timer.remaining_secs(), 30);
    }
}
