//! Quote tables and the time-of-day greeting for cinematic notices.

use chrono::Timelike;
use rand::seq::SliceRandom;

pub const MOTIVATIONAL_QUOTES: [&str; 10] = [
    "Small steps every day.",
    "Focus on progress, not perfection.",
    "You don't have to be great to start, but you have to start to be great.",
    "One thing at a time.",
    "Consistency is key.",
    "Rest is productive.",
    "Learn something new today.",
    "Your potential is endless.",
    "Make today count.",
    "Simplicity is the ultimate sophistication.",
];

pub const GOODNIGHT_QUOTES: [&str; 10] = [
    "Rest well.",
    "See you tomorrow.",
    "Time to recharge.",
    "Sleep is the best meditation.",
    "Great job today.",
    "Disconnect to reconnect.",
    "Peace and quiet.",
    "Let go of today.",
    "Prepare for a fresh start.",
    "Goodnight.",
];

pub fn random_motivational() -> &'static str {
    MOTIVATIONAL_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MOTIVATIONAL_QUOTES[0])
}

pub fn random_goodnight() -> &'static str {
    GOODNIGHT_QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(GOODNIGHT_QUOTES[0])
}

/// Startup greeting by local hour.
pub fn greeting(now: chrono::NaiveTime) -> &'static str {
    match now.hour() {
        5..=11 => "Good Morning",
        12..=16 => "Good Afternoon",
        17..=21 => "Good Evening",
        _ => "Good Night",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn greeting_windows() {
        assert_eq!(greeting(at(5, 0)), "Good Morning");
        assert_eq!(greeting(at(11, 59)), "Good Morning");
        assert_eq!(greeting(at(12, 0)), "Good Afternoon");
        assert_eq!(greeting(at(16, 59)), "Good Afternoon");
        assert_eq!(greeting(at(17, 0)), "Good Evening");
        assert_eq!(greeting(at(21, 59)), "Good Evening");
        assert_eq!(greeting(at(22, 0)), "Good Night");
        assert_eq!(greeting(at(3, 0)), "Good Night");
    }
}
