//! # Life OS Core Library
//!
//! This library provides the core logic for Life OS, a personal
//! productivity/habit tracker. It implements a CLI-first philosophy where
//! every operation is available through a standalone CLI binary; any GUI
//! front end is a thin layer over the same store.
//!
//! ## Architecture
//!
//! - **State store**: one owned state object with a single mutation entry
//!   point per logical event; changed slices are written back to a
//!   key-value boundary after each mutation
//! - **Scoring**: per-pillar skill scores with clamping and
//!   decay-on-un-completion, a daily streak counter, and an XP currency
//! - **Sleep ritual**: a wall-clock-driven sleep/wake state machine with a
//!   validated wake window
//! - **Meta-game**: derived achievement badges and an XP shop
//!
//! ## Key Components
//!
//! - [`App`]: the state store and mutation surface
//! - [`KvStore`]: JSON-per-key persistence
//! - [`Config`]: TOML preferences (theme, font, ritual clock targets)
//! - [`FocusTimer`]: caller-ticked focus countdown

pub mod achievements;
pub mod backup;
pub mod command;
pub mod error;
pub mod habit;
pub mod notes;
pub mod pillar;
pub mod quotes;
pub mod ritual;
pub mod shop;
pub mod skill;
pub mod state;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod task;
pub mod timer;

pub use achievements::{Achievement, AchievementStats, ACHIEVEMENTS};
pub use backup::BackupData;
pub use command::Command;
pub use error::{BackupError, ConfigError, CoreError, StorageError};
pub use habit::Habit;
pub use notes::Note;
pub use pillar::{Pillar, PILLARS};
pub use ritual::{SleepState, WakeVerdict};
pub use shop::{Inventory, ItemKind, ShopItem, SHOP_ITEMS};
pub use skill::Skill;
pub use state::{App, Cinematic, CinematicKind, LifeState, PurgeMode};
pub use stats::{HistoryPoint, StatsReport};
pub use storage::{Config, KvStore, StoreKey};
pub use streak::{Streak, StreakAdvance};
pub use task::{Impact, Recurrence, Task, TaskStatus};
pub use timer::{FocusTimer, TimerState};
