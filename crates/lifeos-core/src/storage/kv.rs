//! SQLite-backed key-value store.
//!
//! The persistence boundary is a fixed set of string keys, each holding one
//! JSON document that is overwritten in full on every write -- no partial
//! updates, no schema beyond the migration flags. A missing or unparsable
//! value always falls back to a caller-supplied default and never surfaces
//! an error to the user.

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::data_dir;
use crate::error::{CoreError, StorageError};

/// The fixed key vocabulary. Every persisted state slice has exactly one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKey {
    Tasks,
    Habits,
    Skills,
    Streak,
    Inventory,
    Currency,
    SleepState,
    History,
    Notes,
    Username,
    Protocol,
    Timer,
    /// One-time category-rename migration flag.
    CategoryMigrationV1,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Tasks => "tasks",
            StoreKey::Habits => "habits",
            StoreKey::Skills => "skills",
            StoreKey::Streak => "streak",
            StoreKey::Inventory => "inventory",
            StoreKey::Currency => "currency",
            StoreKey::SleepState => "sleep_state",
            StoreKey::History => "history",
            StoreKey::Notes => "notes",
            StoreKey::Username => "username",
            StoreKey::Protocol => "protocol",
            StoreKey::Timer => "timer",
            StoreKey::CategoryMigrationV1 => "category_migration_v1",
        }
    }
}

/// The key-value store, one row per [`StoreKey`].
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Open (and initialize) the store under the default data directory.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("store.db");
        Self::open_at(&path)
    }

    /// Open (and initialize) the store at an explicit path.
    pub fn open_at(path: &Path) -> Result<Self, CoreError> {
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )
        .map_err(StorageError::from)?;
        Ok(Self { conn })
    }

    /// Raw string read; `None` when the key is absent.
    pub fn get_raw(&self, key: StoreKey) -> Result<Option<String>, CoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![key.as_str()],
                |row| row.get(0),
            )
            .optional()
            .map_err(StorageError::from)?;
        Ok(value)
    }

    /// Raw string write; overwrites any previous value in full.
    pub fn put_raw(&self, key: StoreKey, value: &str) -> Result<(), CoreError> {
        self.conn
            .execute(
                "INSERT INTO kv (key, value) VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key.as_str(), value],
            )
            .map_err(StorageError::from)?;
        Ok(())
    }

    /// Load a JSON value, falling back to `default` when the key is missing
    /// or the stored document does not parse. Parse failures are logged and
    /// swallowed -- a corrupted key is treated as absent.
    pub fn get_or<T: DeserializeOwned>(&self, key: StoreKey, default: T) -> T {
        match self.get_raw(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(key = key.as_str(), %err, "discarding unparsable stored value");
                    default
                }
            },
            Ok(None) => default,
            Err(err) => {
                warn!(key = key.as_str(), %err, "store read failed, using default");
                default
            }
        }
    }

    /// Serialize and overwrite one key.
    pub fn put<T: Serialize>(&self, key: StoreKey, value: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }

    /// Whether a migration flag key has been set.
    pub fn flag_set(&self, key: StoreKey) -> Result<bool, CoreError> {
        Ok(self.get_raw(key)?.is_some())
    }

    /// Set a migration flag key.
    pub fn set_flag(&self, key: StoreKey) -> Result<(), CoreError> {
        self.put_raw(key, "true")
    }
}
