//! The application state store.
//!
//! [`App`] owns every persisted state slice and exposes one mutation entry
//! point per logical event (toggle a task, check a habit, go to sleep, buy
//! an item, ...). After each mutation only the slices that changed are
//! serialized back to the key-value boundary. User-facing outcomes are
//! queued as transient notices; invalid ids are silent no-ops.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use serde::Serialize;
use tracing::debug;

use crate::achievements::{newly_unlocked, AchievementStats};
use crate::backup::BackupData;
use crate::command::Command;
use crate::error::CoreError;
use crate::habit::{Habit, HABIT_SCORE_NUDGE, HABIT_XP_REWARD};
use crate::notes::Note;
use crate::pillar::Pillar;
use crate::quotes;
use crate::ritual::{
    bedtime_met, format_duration, parse_hhmm, wake_verdict, SleepState, WakeVerdict,
    WAKE_XP_REWARD,
};
use crate::shop::{find_item, Inventory, ItemKind};
use crate::skill::{base_skills, Skill};
use crate::stats::{push_history, HistoryPoint};
use crate::storage::{Config, KvStore, StoreKey};
use crate::storage::migrations;
use crate::streak::{Streak, StreakAdvance};
use crate::task::{Impact, Recurrence, Task, TaskStatus};
use crate::timer::{FocusTimer, SESSION_XP_REWARD};

/// Default life protocol statement.
const DEFAULT_PROTOCOL: &str = "To live a balanced life.";

/// Cost of bulk-rescheduling overdue tasks.
const PURGE_RESCHEDULE_COST: i64 = 50;

/// All persisted state slices.
#[derive(Debug, Clone)]
pub struct LifeState {
    pub tasks: Vec<Task>,
    pub habits: Vec<Habit>,
    pub skills: Vec<Skill>,
    pub streak: Streak,
    pub inventory: Inventory,
    pub currency_xp: i64,
    pub sleep: SleepState,
    pub history: Vec<HistoryPoint>,
    pub notes: Vec<Note>,
    pub username: Option<String>,
    pub protocol: String,
    pub timer: FocusTimer,
}

/// Full-screen transient notice kinds (startup greeting, ritual results).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CinematicKind {
    Startup,
    Sleep,
    Wake,
    Fail,
}

/// A cinematic notice: headline plus supporting line.
#[derive(Debug, Clone, Serialize)]
pub struct Cinematic {
    pub kind: CinematicKind,
    pub text: String,
    pub subtext: String,
}

/// Bulk handling of overdue tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeMode {
    /// Move overdue items to today, at an XP cost.
    Reschedule,
    /// Delete overdue items.
    Burn,
}

/// The state store plus its persistence and config boundaries.
pub struct App {
    state: LifeState,
    store: KvStore,
    config: Config,
    notices: Vec<String>,
}

impl App {
    /// Open the default store and config, run migrations, load all slices.
    pub fn open() -> Result<Self, CoreError> {
        let store = KvStore::open()?;
        let config = Config::load_or_default();
        Self::load(store, config)
    }

    /// Load state from an explicit store and config.
    pub fn load(store: KvStore, config: Config) -> Result<Self, CoreError> {
        migrations::run(&store)?;
        let now = Utc::now();
        let state = LifeState {
            tasks: store.get_or(StoreKey::Tasks, Vec::new()),
            habits: store.get_or(StoreKey::Habits, Vec::new()),
            skills: store.get_or(StoreKey::Skills, base_skills(now)),
            streak: store.get_or(StoreKey::Streak, Streak::default()),
            inventory: store.get_or(StoreKey::Inventory, Inventory::default()),
            currency_xp: store.get_or(StoreKey::Currency, 0),
            sleep: store.get_or(StoreKey::SleepState, SleepState::default()),
            history: store.get_or(StoreKey::History, Vec::new()),
            notes: store.get_or(StoreKey::Notes, Vec::new()),
            username: store.get_or(StoreKey::Username, None),
            protocol: store.get_or(StoreKey::Protocol, DEFAULT_PROTOCOL.to_string()),
            timer: store.get_or(StoreKey::Timer, FocusTimer::default()),
        };
        Ok(Self { state, store, config, notices: Vec::new() })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> &LifeState {
        &self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Take the queued transient notices.
    pub fn drain_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    fn notice(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        debug!(notice = %msg);
        self.notices.push(msg);
    }

    // ── Startup & system items ───────────────────────────────────────

    /// Seed today's system tasks and the singleton ritual habits.
    pub fn ensure_system_items(&mut self, today: NaiveDate) -> Result<(), CoreError> {
        let sleep_id = format!("sys_sleep_{today}");
        let wake_id = format!("sys_wake_{today}");
        let mut tasks_changed = false;

        if !self.state.tasks.iter().any(|t| t.id == sleep_id) {
            let mut task = Task::new(
                format!("Go to sleep (<{})", self.config.ritual.bedtime),
                Pillar::Health,
                Impact::High,
                today,
                Recurrence::None,
            );
            task.id = sleep_id;
            task.is_system = true;
            self.state.tasks.insert(0, task);
            tasks_changed = true;
        }
        if !self.state.tasks.iter().any(|t| t.id == wake_id) {
            let mut task = Task::new(
                format!("Wake up (<{})", self.config.ritual.wake),
                Pillar::Health,
                Impact::High,
                today,
                Recurrence::None,
            );
            task.id = wake_id;
            task.is_system = true;
            self.state.tasks.insert(0, task);
            tasks_changed = true;
        }

        let mut habits_changed = false;
        for (id, name) in [("sys_habit_sleep", "Sleep Schedule"), ("sys_habit_wake", "Wake Up Time")] {
            if !self.state.habits.iter().any(|h| h.id == id) {
                let mut habit = Habit::new(name, Pillar::Health, 31);
                habit.id = id.to_string();
                habit.is_system = true;
                self.state.habits.insert(0, habit);
                habits_changed = true;
            }
        }

        if tasks_changed {
            self.store.put(StoreKey::Tasks, &self.state.tasks)?;
        }
        if habits_changed {
            self.store.put(StoreKey::Habits, &self.state.habits)?;
        }
        Ok(())
    }

    /// Startup entry point: seed system items, then either validate a
    /// pending wake or produce the greeting.
    pub fn startup(&mut self, now: DateTime<Local>) -> Result<Cinematic, CoreError> {
        let today = now.date_naive();
        self.ensure_system_items(today)?;

        let Some(start) = self.state.sleep.start_time.filter(|_| self.state.sleep.is_active) else {
            return Ok(Cinematic {
                kind: CinematicKind::Startup,
                text: quotes::greeting(now.time()).to_string(),
                subtext: quotes::random_motivational().to_string(),
            });
        };

        let slept = now.with_timezone(&Utc) - start;
        let wake_minutes = parse_hhmm(&self.config.ritual.wake).unwrap_or(8 * 60);
        let verdict = wake_verdict(slept, now.time(), wake_minutes);

        self.state.sleep = SleepState::default();
        self.store.put(StoreKey::SleepState, &self.state.sleep)?;
        debug!(?verdict, "wake validation");

        let cinematic = match verdict {
            WakeVerdict::TooShort => Cinematic {
                kind: CinematicKind::Fail,
                text: "TOO SHORT".into(),
                subtext: format!("You only slept {}", format_duration(slept)),
            },
            WakeVerdict::Overslept => Cinematic {
                kind: CinematicKind::Fail,
                text: "OVERSLEPT".into(),
                subtext: format!("Target was {}", self.config.ritual.wake),
            },
            WakeVerdict::TooEarly => Cinematic {
                kind: CinematicKind::Fail,
                text: "TOO EARLY".into(),
                subtext: "Go back to sleep".into(),
            },
            WakeVerdict::OnTime => {
                let wake_id = format!("sys_wake_{today}");
                if let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == wake_id) {
                    task.status = TaskStatus::Complete;
                }
                self.store.put(StoreKey::Tasks, &self.state.tasks)?;
                self.credit_habit("sys_habit_wake", now.day0() as usize, today)?;
                self.state.currency_xp += WAKE_XP_REWARD;
                self.store.put(StoreKey::Currency, &self.state.currency_xp)?;
                self.check_achievements()?;
                Cinematic {
                    kind: CinematicKind::Wake,
                    text: "GOOD MORNING".into(),
                    subtext: "You woke up on time.".into(),
                }
            }
        };
        Ok(cinematic)
    }

    // ── Sleep ritual ─────────────────────────────────────────────────

    /// Begin the sleep ritual: complete today's sleep task, credit the
    /// habit when the bedtime was met, transition to asleep.
    pub fn begin_sleep(&mut self, now: DateTime<Local>) -> Result<Cinematic, CoreError> {
        let today = now.date_naive();
        self.ensure_system_items(today)?;

        let sleep_id = format!("sys_sleep_{today}");
        if let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == sleep_id) {
            task.status = TaskStatus::Complete;
        }
        self.store.put(StoreKey::Tasks, &self.state.tasks)?;

        let bed_minutes = parse_hhmm(&self.config.ritual.bedtime).unwrap_or(23 * 60);
        if bedtime_met(now.time(), bed_minutes) {
            self.credit_habit("sys_habit_sleep", now.day0() as usize, today)?;
        }

        self.state.sleep = SleepState {
            is_active: true,
            start_time: Some(now.with_timezone(&Utc)),
        };
        self.store.put(StoreKey::SleepState, &self.state.sleep)?;
        self.check_achievements()?;

        Ok(Cinematic {
            kind: CinematicKind::Sleep,
            text: "GOODNIGHT".into(),
            subtext: quotes::random_goodnight().to_string(),
        })
    }

    /// Emergency exit from the asleep state; nothing is credited.
    pub fn abort_sleep(&mut self) -> Result<(), CoreError> {
        self.state.sleep = SleepState::default();
        self.store.put(StoreKey::SleepState, &self.state.sleep)?;
        self.notice("Sleep cancelled.");
        Ok(())
    }

    // ── Tasks ────────────────────────────────────────────────────────

    /// Add a user task. Rejects dates in the past.
    pub fn add_task(
        &mut self,
        name: &str,
        category: Option<Pillar>,
        impact: Impact,
        date: NaiveDate,
        recurrence: Recurrence,
        today: NaiveDate,
    ) -> Result<Option<String>, CoreError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        if date < today {
            self.notice("Cannot schedule in the past.");
            return Ok(None);
        }
        let category = category
            .or_else(|| Pillar::suggest(name))
            .unwrap_or(Pillar::Learn);
        let task = Task::new(name.trim(), category, impact, date, recurrence);
        let id = task.id.clone();
        self.state.tasks.insert(0, task);
        self.store.put(StoreKey::Tasks, &self.state.tasks)?;
        self.notice("Task added.");
        Ok(Some(id))
    }

    /// Delete a task by id. System tasks are not deletable.
    pub fn delete_task(&mut self, id: &str) -> Result<(), CoreError> {
        if self.state.tasks.iter().any(|t| t.id == id && t.is_system) {
            self.notice("System tasks cannot be deleted.");
            return Ok(());
        }
        let before = self.state.tasks.len();
        self.state.tasks.retain(|t| t.id != id);
        if self.state.tasks.len() != before {
            self.store.put(StoreKey::Tasks, &self.state.tasks)?;
            self.notice("Task deleted.");
        }
        Ok(())
    }

    /// Flip a task between `ToDo` and `Complete`, with all scoring side
    /// effects. Unknown ids are a silent no-op.
    pub fn toggle_task(&mut self, id: &str, now: DateTime<Local>) -> Result<(), CoreError> {
        let today = now.date_naive();
        let now_utc = now.with_timezone(&Utc);

        let Some(task) = self.state.tasks.iter().find(|t| t.id == id).cloned() else {
            return Ok(());
        };
        if task.is_system {
            self.notice("This is automatic. Use sleep/wake actions.");
            return Ok(());
        }
        if task.date > today {
            self.notice("Can't complete future tasks yet.");
            return Ok(());
        }

        let completing = task.status == TaskStatus::ToDo;
        let nudge = task.impact.score_nudge();
        // Un-completion costs one more than completion paid; toggling is
        // never free.
        let delta = if completing { nudge } else { -(nudge + 1) };

        let mut successor: Option<Task> = None;
        if completing {
            self.state.currency_xp += task.impact.xp_reward();
            self.store.put(StoreKey::Currency, &self.state.currency_xp)?;
            self.advance_streak(today)?;
            if task.wants_successor() {
                successor = task.spawn_successor();
            }
        }

        for skill in self.state.skills.iter_mut().filter(|s| s.pillar == task.category) {
            if !completing {
                skill.apply_decay(now_utc);
            }
            skill.apply_impact(delta, now_utc);
        }
        push_history(&mut self.state.history, &self.state.skills, today);

        if let Some(stored) = self.state.tasks.iter_mut().find(|t| t.id == id) {
            stored.status = if completing { TaskStatus::Complete } else { TaskStatus::ToDo };
            if let Some(ref next) = successor {
                stored.generated_task_id = Some(next.id.clone());
            }
        }
        if let Some(next) = successor {
            debug!(task = %id, successor = %next.id, "spawned recurring successor");
            self.state.tasks.push(next);
        }

        self.store.put(StoreKey::Tasks, &self.state.tasks)?;
        self.store.put(StoreKey::Skills, &self.state.skills)?;
        self.store.put(StoreKey::History, &self.state.history)?;
        self.check_achievements()?;
        Ok(())
    }

    /// Bulk-handle overdue `ToDo` tasks. Returns the affected count.
    pub fn purge_overdue(&mut self, mode: PurgeMode, today: NaiveDate) -> Result<usize, CoreError> {
        let overdue = |t: &Task| t.status == TaskStatus::ToDo && t.date < today && !t.is_system;
        let count = self.state.tasks.iter().filter(|t| overdue(t)).count();
        if count == 0 {
            return Ok(0);
        }
        match mode {
            PurgeMode::Reschedule => {
                for task in self.state.tasks.iter_mut() {
                    if task.status == TaskStatus::ToDo && task.date < today && !task.is_system {
                        task.date = today;
                    }
                }
                self.state.currency_xp = (self.state.currency_xp - PURGE_RESCHEDULE_COST).max(0);
                self.store.put(StoreKey::Currency, &self.state.currency_xp)?;
                self.notice(format!("{count} tasks moved to today. -{PURGE_RESCHEDULE_COST} XP."));
            }
            PurgeMode::Burn => {
                self.state.tasks.retain(|t| !overdue(t));
                self.notice(format!("{count} tasks deleted."));
            }
        }
        self.store.put(StoreKey::Tasks, &self.state.tasks)?;
        Ok(count)
    }

    // ── Habits ───────────────────────────────────────────────────────

    /// Add a habit with a fresh check grid.
    pub fn add_habit(
        &mut self,
        name: &str,
        category: Option<Pillar>,
        duration: usize,
    ) -> Result<Option<String>, CoreError> {
        if name.trim().is_empty() {
            return Ok(None);
        }
        let category = category
            .or_else(|| Pillar::suggest(name))
            .unwrap_or(Pillar::Learn);
        let habit = Habit::new(name.trim(), category, duration);
        let id = habit.id.clone();
        self.state.habits.insert(0, habit);
        self.store.put(StoreKey::Habits, &self.state.habits)?;
        self.notice("Habit added.");
        Ok(Some(id))
    }

    /// Rename/recategorize/resize a habit. The check grid truncates or pads
    /// to the new duration.
    pub fn edit_habit(
        &mut self,
        id: &str,
        name: Option<&str>,
        category: Option<Pillar>,
        duration: Option<usize>,
    ) -> Result<(), CoreError> {
        let Some(pos) = self.state.habits.iter().position(|h| h.id == id) else {
            return Ok(());
        };
        if self.state.habits[pos].is_system {
            self.notice("System habits cannot be edited.");
            return Ok(());
        }
        let habit = &mut self.state.habits[pos];
        if let Some(name) = name {
            habit.name = name.to_string();
        }
        if let Some(category) = category {
            habit.category = category;
        }
        if let Some(duration) = duration {
            habit.resize(duration);
        }
        self.store.put(StoreKey::Habits, &self.state.habits)?;
        self.notice("Habit updated.");
        Ok(())
    }

    /// Delete a habit by id. System habits are not deletable.
    pub fn delete_habit(&mut self, id: &str) -> Result<(), CoreError> {
        if self.state.habits.iter().any(|h| h.id == id && h.is_system) {
            self.notice("System habits cannot be deleted.");
            return Ok(());
        }
        let before = self.state.habits.len();
        self.state.habits.retain(|h| h.id != id);
        if self.state.habits.len() != before {
            self.store.put(StoreKey::Habits, &self.state.habits)?;
            self.notice("Habit deleted.");
        }
        Ok(())
    }

    /// Manually toggle a habit day. System habits reject manual toggles;
    /// out-of-range day indexes are a no-op.
    pub fn check_habit(
        &mut self,
        id: &str,
        day_index: usize,
        today: NaiveDate,
    ) -> Result<(), CoreError> {
        let Some(habit) = self.state.habits.iter().find(|h| h.id == id).cloned() else {
            return Ok(());
        };
        if habit.is_system {
            self.notice("This is automatic. Use sleep/wake actions.");
            return Ok(());
        }
        if day_index >= habit.completions.len() {
            return Ok(());
        }
        let checking = !habit.completions[day_index];
        self.apply_habit_check(&habit.id, habit.category, day_index, checking, today)
    }

    /// System crediting of a ritual habit: idempotent, always a check.
    fn credit_habit(
        &mut self,
        id: &str,
        day_index: usize,
        today: NaiveDate,
    ) -> Result<(), CoreError> {
        let Some(habit) = self.state.habits.iter().find(|h| h.id == id).cloned() else {
            return Ok(());
        };
        if day_index >= habit.completions.len() || habit.completions[day_index] {
            return Ok(());
        }
        self.apply_habit_check(&habit.id, habit.category, day_index, true, today)
    }

    fn apply_habit_check(
        &mut self,
        id: &str,
        category: Pillar,
        day_index: usize,
        checking: bool,
        today: NaiveDate,
    ) -> Result<(), CoreError> {
        let now_utc = Utc::now();
        if let Some(habit) = self.state.habits.iter_mut().find(|h| h.id == id) {
            habit.completions[day_index] = checking;
        }
        let impact = if checking { HABIT_SCORE_NUDGE } else { -HABIT_SCORE_NUDGE };
        for skill in self.state.skills.iter_mut().filter(|s| s.pillar == category) {
            skill.apply_impact(impact, now_utc);
        }
        push_history(&mut self.state.history, &self.state.skills, today);

        if checking {
            self.advance_streak(today)?;
            self.state.currency_xp += HABIT_XP_REWARD;
            self.store.put(StoreKey::Currency, &self.state.currency_xp)?;
        }

        self.store.put(StoreKey::Habits, &self.state.habits)?;
        self.store.put(StoreKey::Skills, &self.state.skills)?;
        self.store.put(StoreKey::History, &self.state.history)?;
        self.check_achievements()?;
        Ok(())
    }

    // ── Streak ───────────────────────────────────────────────────────

    /// Advance the streak for a qualifying completion on `today`. A broken
    /// day is bridged by spending an owned Streak Freeze.
    fn advance_streak(&mut self, today: NaiveDate) -> Result<(), CoreError> {
        let advance = self.state.streak.classify(today);
        let bridged = advance == StreakAdvance::Broken
            && self.state.streak.count > 0
            && self.state.inventory.consume("freeze");
        if bridged {
            self.notice("Streak Freeze used.");
            self.store.put(StoreKey::Inventory, &self.state.inventory)?;
        }
        self.state.streak.apply(advance, today, bridged);
        self.store.put(StoreKey::Streak, &self.state.streak)?;
        Ok(())
    }

    // ── Shop & achievements ──────────────────────────────────────────

    /// Buy a shop item: rejected when the balance is short or the item is
    /// already owned.
    pub fn buy_item(&mut self, item_id: &str) -> Result<bool, CoreError> {
        let Some(item) = find_item(item_id) else {
            self.notice("No such item.");
            return Ok(false);
        };
        if self.state.currency_xp < item.cost {
            self.notice("Not enough XP.");
            return Ok(false);
        }
        if self.state.inventory.owns(item.id) {
            let msg = match item.kind {
                ItemKind::Consumable => "You already have this.",
                ItemKind::Permanent => "Already owned.",
            };
            self.notice(msg);
            return Ok(false);
        }
        self.state.currency_xp -= item.cost;
        self.state.inventory.items.push(item.id.to_string());
        self.store.put(StoreKey::Currency, &self.state.currency_xp)?;
        self.store.put(StoreKey::Inventory, &self.state.inventory)?;
        self.notice(format!("Bought: {}", item.name));
        Ok(true)
    }

    /// Use an owned item. Only the Score Boost has an explicit use action;
    /// the Streak Freeze spends itself and permanents just stay unlocked.
    pub fn use_item(&mut self, item_id: &str) -> Result<bool, CoreError> {
        if !self.state.inventory.owns(item_id) {
            self.notice("You don't own that.");
            return Ok(false);
        }
        match item_id {
            "neuro_stim" => {
                let now_utc = Utc::now();
                if let Some(weakest) =
                    self.state.skills.iter_mut().min_by_key(|s| s.current_score)
                {
                    weakest.apply_impact(10, now_utc);
                }
                self.state.inventory.consume(item_id);
                self.store.put(StoreKey::Skills, &self.state.skills)?;
                self.store.put(StoreKey::Inventory, &self.state.inventory)?;
                self.notice("Score Boost applied to your lowest area.");
                self.check_achievements()?;
                Ok(true)
            }
            "freeze" => {
                self.notice("Streak Freeze is spent automatically when you miss a day.");
                Ok(false)
            }
            _ => {
                self.notice("That item is always active.");
                Ok(false)
            }
        }
    }

    /// Evaluate achievement conditions and unlock any newly satisfied
    /// badges. Idempotent.
    fn check_achievements(&mut self) -> Result<(), CoreError> {
        let completed_tasks = self.state.tasks.iter().filter(|t| t.is_complete()).count();
        let habit_checkins: usize = self.state.habits.iter().map(|h| h.checkin_count()).sum();
        let stats = AchievementStats {
            streak: self.state.streak.count,
            xp: completed_tasks as i64 * 150 + habit_checkins as i64 * 50,
            completed_tasks,
            habit_checkins,
            min_skill_score: self
                .state
                .skills
                .iter()
                .map(|s| s.current_score)
                .min()
                .unwrap_or(0),
        };
        let unlocked = newly_unlocked(&stats, &self.state.inventory.badges);
        if unlocked.is_empty() {
            return Ok(());
        }
        for achievement in unlocked {
            debug!(badge = achievement.id, "achievement unlocked");
            self.state.inventory.badges.push(achievement.id.to_string());
            self.notice(format!("Achievement Unlocked: {}", achievement.name));
        }
        self.store.put(StoreKey::Inventory, &self.state.inventory)
    }

    // ── Notes ────────────────────────────────────────────────────────

    pub fn add_note(&mut self, title: &str, content: &str) -> Result<(), CoreError> {
        let note = Note::new(title, content, Utc::now());
        self.state.notes.insert(0, note);
        self.store.put(StoreKey::Notes, &self.state.notes)?;
        self.notice("Note added.");
        Ok(())
    }

    pub fn delete_note(&mut self, id: &str) -> Result<(), CoreError> {
        let before = self.state.notes.len();
        self.state.notes.retain(|n| n.id != id);
        if self.state.notes.len() != before {
            self.store.put(StoreKey::Notes, &self.state.notes)?;
            self.notice("Note deleted.");
        }
        Ok(())
    }

    // ── Focus timer ──────────────────────────────────────────────────

    pub fn start_timer(&mut self, now_epoch: i64) -> Result<(), CoreError> {
        self.state.timer.start(now_epoch);
        self.store.put(StoreKey::Timer, &self.state.timer)
    }

    pub fn reset_timer(&mut self) -> Result<(), CoreError> {
        self.state.timer.reset();
        self.store.put(StoreKey::Timer, &self.state.timer)
    }

    pub fn set_timer_duration(&mut self, minutes: u64) -> Result<(), CoreError> {
        self.state.timer.set_duration(minutes * 60);
        self.store.put(StoreKey::Timer, &self.state.timer)
    }

    /// Advance the focus timer; a completed session pays out and rewinds.
    pub fn tick_timer(&mut self, now_epoch: i64) -> Result<(), CoreError> {
        if self.state.timer.tick(now_epoch) {
            self.state.currency_xp += SESSION_XP_REWARD;
            self.state.timer.reset();
            self.store.put(StoreKey::Currency, &self.state.currency_xp)?;
            self.notice("Session Complete.");
        }
        self.store.put(StoreKey::Timer, &self.state.timer)
    }

    // ── Command interface ────────────────────────────────────────────

    /// Execute one command line from the in-app vocabulary.
    pub fn execute(&mut self, line: &str, now: DateTime<Local>) -> Result<(), CoreError> {
        let today = now.date_naive();
        match Command::parse(line) {
            Command::Task(name) => {
                if name.trim().is_empty() {
                    self.notice("Task needs a name.");
                } else {
                    self.add_task(&name, None, Impact::Medium, today, Recurrence::None, today)?;
                }
            }
            Command::Note(title) => {
                if title.trim().is_empty() {
                    self.notice("Note needs a title.");
                } else {
                    self.add_note(title.trim(), "Logged via CLI")?;
                }
            }
            Command::Theme(name) => match self.config.set_theme(&name) {
                Ok(()) => {
                    let _ = self.config.save();
                    self.notice("Theme updated.");
                }
                Err(_) => self.notice("Unknown Theme"),
            },
            Command::Wake(hhmm) => match self.config.set_wake(&hhmm) {
                Ok(()) => {
                    let _ = self.config.save();
                    self.notice("Wake Time Updated");
                }
                Err(_) => self.notice("Expected /wake HH:MM"),
            },
            Command::Unknown(line) => self.notice(format!("Unknown command: {line}")),
        }
        Ok(())
    }

    // ── Backup ───────────────────────────────────────────────────────

    /// Serialize the backup subset into a copyable code.
    pub fn export_backup(&self) -> Result<String, CoreError> {
        let data = BackupData {
            tasks: self.state.tasks.clone(),
            skills: self.state.skills.clone(),
            habits: self.state.habits.clone(),
            history: self.state.history.clone(),
            notes: self.state.notes.clone(),
            streak: self.state.streak.clone(),
            inventory: self.state.inventory.clone(),
            currency_xp: self.state.currency_xp,
            username: self.state.username.clone(),
            protocol: Some(self.state.protocol.clone()),
            ritual: Some(self.config.ritual.clone()),
            timestamp: Utc::now(),
        };
        Ok(data.encode()?)
    }

    /// Restore from a backup code. Returns `false` (with the generic
    /// notice) for invalid codes; state is untouched in that case.
    pub fn import_backup(&mut self, code: &str) -> Result<bool, CoreError> {
        let data = match BackupData::decode(code) {
            Ok(data) => data,
            Err(err) => {
                debug!(%err, "backup decode failed");
                self.notice("Invalid backup code.");
                return Ok(false);
            }
        };

        self.state.tasks = data.tasks;
        if !data.skills.is_empty() {
            self.state.skills = data.skills;
        }
        self.state.habits = data.habits;
        self.state.history = data.history;
        self.state.notes = data.notes;
        self.state.streak = data.streak;
        self.state.inventory = data.inventory;
        self.state.currency_xp = data.currency_xp;
        if data.username.is_some() {
            self.state.username = data.username;
        }
        if let Some(protocol) = data.protocol {
            self.state.protocol = protocol;
        }
        if let Some(ritual) = data.ritual {
            self.config.ritual = ritual;
            let _ = self.config.save();
        }

        self.store.put(StoreKey::Tasks, &self.state.tasks)?;
        self.store.put(StoreKey::Skills, &self.state.skills)?;
        self.store.put(StoreKey::Habits, &self.state.habits)?;
        self.store.put(StoreKey::History, &self.state.history)?;
        self.store.put(StoreKey::Notes, &self.state.notes)?;
        self.store.put(StoreKey::Streak, &self.state.streak)?;
        self.store.put(StoreKey::Inventory, &self.state.inventory)?;
        self.store.put(StoreKey::Currency, &self.state.currency_xp)?;
        self.store.put(StoreKey::Username, &self.state.username)?;
        self.store.put(StoreKey::Protocol, &self.state.protocol)?;
        self.notice("Data restored.");
        Ok(true)
    }
}
