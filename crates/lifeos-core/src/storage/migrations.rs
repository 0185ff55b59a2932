//! One-time data migrations, applied to the raw JSON documents before the
//! typed state loads them.
//!
//! v1 renames the legacy category vocabulary
//! (Erudition/Creation/Integration/Vitality/Influence) to the current
//! pillar names and unwraps the legacy `{"Polymath": [...]}` skills
//! wrapper. Guarded by a flag key so it runs exactly once.

use serde_json::Value;
use tracing::info;

use super::kv::{KvStore, StoreKey};
use crate::error::CoreError;

const CATEGORY_RENAMES: [(&str, &str); 5] = [
    ("Erudition", "Learn"),
    ("Creation", "Create"),
    ("Integration", "Mind"),
    ("Vitality", "Health"),
    ("Influence", "Social"),
];

fn rename_category(value: &mut Value, field: &str) {
    if let Some(Value::String(s)) = value.get_mut(field) {
        for (old, new) in CATEGORY_RENAMES {
            if s == old {
                *s = new.to_string();
                return;
            }
        }
    }
}

fn migrate_array(store: &KvStore, key: StoreKey, fields: &[&str]) -> Result<(), CoreError> {
    let Some(raw) = store.get_raw(key)? else {
        return Ok(());
    };
    let Ok(mut doc) = serde_json::from_str::<Value>(&raw) else {
        // Corrupted documents are handled by the load-time fallback.
        return Ok(());
    };
    if let Some(items) = doc.as_array_mut() {
        for item in items {
            for field in fields {
                rename_category(item, field);
            }
        }
    }
    store.put_raw(key, &doc.to_string())
}

/// Run all pending migrations against the raw store.
pub fn run(store: &KvStore) -> Result<(), CoreError> {
    if store.flag_set(StoreKey::CategoryMigrationV1)? {
        return Ok(());
    }
    info!("running category migration v1");

    migrate_array(store, StoreKey::Tasks, &["category"])?;
    migrate_array(store, StoreKey::Habits, &["category"])?;

    // Skills may still be nested under the legacy archetype wrapper.
    if let Some(raw) = store.get_raw(StoreKey::Skills)? {
        if let Ok(mut doc) = serde_json::from_str::<Value>(&raw) {
            if let Some(inner) = doc.get_mut("Polymath").map(Value::take) {
                doc = inner;
            }
            if let Some(skills) = doc.as_array_mut() {
                for skill in skills {
                    rename_category(skill, "pillar");
                    rename_category(skill, "name");
                }
            }
            store.put_raw(StoreKey::Skills, &doc.to_string())?;
        }
    }

    store.set_flag(StoreKey::CategoryMigrationV1)
}
