//! The XP shop and owned-item inventory.
//!
//! Purchases debit the currency balance only when it suffices and the item
//! is not already owned. Consumables are removed from the inventory when
//! used (a Streak Freeze is spent by the streak tracker, a Score Boost by an
//! explicit use action) and can then be bought again; permanents stay owned
//! forever.

use serde::{Deserialize, Serialize};

/// Whether an item is spent on use or owned permanently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Consumable,
    Permanent,
}

/// A purchasable shop item.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ShopItem {
    pub id: &'static str,
    pub name: &'static str,
    pub cost: i64,
    pub kind: ItemKind,
    pub desc: &'static str,
}

/// The fixed catalog.
pub const SHOP_ITEMS: [ShopItem; 3] = [
    ShopItem {
        id: "freeze",
        name: "Streak Freeze",
        cost: 500,
        kind: ItemKind::Consumable,
        desc: "Miss a day without losing your streak.",
    },
    ShopItem {
        id: "neuro_stim",
        name: "Score Boost",
        cost: 1500,
        kind: ItemKind::Consumable,
        desc: "+10 Score to your lowest area.",
    },
    ShopItem {
        id: "hacker_mode",
        name: "Developer Mode",
        cost: 2000,
        kind: ItemKind::Permanent,
        desc: "Unlock Custom CSS Editor.",
    },
];

pub fn find_item(id: &str) -> Option<&'static ShopItem> {
    SHOP_ITEMS.iter().find(|i| i.id == id)
}

/// Owned item ids and unlocked badge ids.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Inventory {
    pub items: Vec<String>,
    pub badges: Vec<String>,
}

impl Inventory {
    pub fn owns(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i == item_id)
    }

    /// Remove one owned instance of a consumable. Returns whether anything
    /// was removed.
    pub fn consume(&mut self, item_id: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item_id) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }
}
