//! Backup codes: a fixed subset of state as base64-encoded JSON.
//!
//! Export produces a single copyable string; import reverses it with
//! best-effort field validation. Malformed input never touches state -- the
//! caller reports the generic "Invalid backup code." notice and moves on.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BackupError;
use crate::habit::Habit;
use crate::notes::Note;
use crate::shop::Inventory;
use crate::skill::Skill;
use crate::stats::HistoryPoint;
use crate::storage::RitualConfig;
use crate::streak::Streak;
use crate::task::Task;

/// The serialized backup payload. `tasks` is the presence check; every
/// other slice is optional so older codes still import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupData {
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub history: Vec<HistoryPoint>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(default)]
    pub streak: Streak,
    #[serde(default)]
    pub inventory: Inventory,
    #[serde(default)]
    pub currency_xp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ritual: Option<RitualConfig>,
    pub timestamp: DateTime<Utc>,
}

impl BackupData {
    /// Encode to a copyable backup code.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(BASE64.encode(json))
    }

    /// Decode a backup code.
    ///
    /// # Errors
    ///
    /// `Decode` for non-base64 input, `Malformed` when the payload is not a
    /// backup document (including a missing task list).
    pub fn decode(code: &str) -> Result<Self, BackupError> {
        let bytes = BASE64
            .decode(code.trim())
            .map_err(|_| BackupError::Decode)?;
        let json = String::from_utf8(bytes).map_err(|_| BackupError::Decode)?;
        serde_json::from_str(&json).map_err(|e| BackupError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pillar::Pillar;
    use crate::skill::base_skills;
    use crate::task::{Impact, Recurrence};

    fn sample() -> BackupData {
        BackupData {
            tasks: vec![Task::new(
                "Read",
                Pillar::Learn,
                Impact::Medium,
                "2026-05-01".parse().unwrap(),
                Recurrence::None,
            )],
            skills: base_skills(Utc::now()),
            habits: vec![Habit::new("Stretch", Pillar::Health, 31)],
            history: vec![],
            notes: vec![],
            streak: Streak { count: 3, last_date: Some("2026-05-01".parse().unwrap()) },
            inventory: Inventory::default(),
            currency_xp: 450,
            username: Some("Sam".into()),
            protocol: Some("To live a balanced life.".into()),
            ritual: Some(RitualConfig::default()),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn roundtrip_preserves_core_slices() {
        let data = sample();
        let code = data.encode().unwrap();
        let decoded = BackupData::decode(&code).unwrap();
        assert_eq!(decoded.tasks.len(), 1);
        assert_eq!(decoded.tasks[0].name, "Read");
        assert_eq!(decoded.currency_xp, 450);
        assert_eq!(decoded.streak.count, 3);
        assert_eq!(decoded.skills.len(), 5);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(BackupData::decode("!!not-base64!!"), Err(BackupError::Decode)));
    }

    #[test]
    fn valid_base64_without_tasks_is_malformed() {
        let code = BASE64.encode(r#"{"foo": 1}"#);
        assert!(matches!(BackupData::decode(&code), Err(BackupError::Malformed(_))));
    }

    #[test]
    fn surrounding_whitespace_is_tolerated() {
        let code = sample().encode().unwrap();
        assert!(BackupData::decode(&format!("  {code}\n")).is_ok());
    }
}
