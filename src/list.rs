//! Shopping List Store
//!
//! The user's mutable shopping list: insertion-ordered with the newest
//! entry first, persisted as a JSON file. The interpreter never touches
//! this directly; the session dispatches parsed commands into it.

use crate::catalog;
use crate::error::SaudaResult;
use crate::interpreter::normalize::normalize;
use crate::utils::fuzzy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, warn};

/// One entry on the shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListItem {
    /// Derived from name + creation timestamp
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: Option<String>,
    pub category: String,
}

/// A display row grouping duplicate add-events of the same item.
/// Read-only projection: building it never mutates the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedItem {
    pub name: String,
    pub category: String,
    /// Summed over all duplicate entries
    pub quantity: f64,
    pub unit: Option<String>,
    /// Number of separate add-events
    pub count: usize,
}

/// Newest-first shopping list
#[derive(Debug, Default)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the list from a JSON file. A corrupt file is backed up and
    /// replaced with an empty list rather than failing startup.
    pub fn load(path: &Path) -> SaudaResult<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Vec<ShoppingListItem>>(&content) {
            Ok(items) => {
                debug!("loaded {} list entries from {}", items.len(), path.display());
                Ok(Self { items })
            }
            Err(e) => {
                warn!("⚠️ Shopping list file corrupt, starting empty: {}", e);
                let backup = path.with_extension("json.corrupt");
                let _ = std::fs::rename(path, &backup);
                Ok(Self::new())
            }
        }
    }

    /// Save the list as pretty-printed JSON
    pub fn save(&self, path: &Path) -> SaudaResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Entries, newest first
    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item to the head of the list. The category comes from the
    /// keyword categorizer.
    pub fn add(&mut self, name: &str, quantity: f64, unit: Option<String>) -> ShoppingListItem {
        let now_ms = chrono::Utc::now().timestamp_millis();
        let mut id = format!("{}-{}", name, now_ms);
        // Two adds of the same name can land in the same millisecond
        let mut n = 1;
        while self.items.iter().any(|i| i.id == id) {
            id = format!("{}-{}-{}", name, now_ms, n);
            n += 1;
        }

        let item = ShoppingListItem {
            id,
            name: name.to_string(),
            quantity,
            unit,
            category: catalog::categorize(name).to_string(),
        };
        info!("🛒 Added: {} x{} [{}]", item.name, item.quantity, item.category);
        self.items.insert(0, item.clone());
        item
    }

    /// Remove by 0-based position. `None` when out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<ShoppingListItem> {
        if index < self.items.len() {
            let removed = self.items.remove(index);
            info!("🗑️ Removed: {} (position {})", removed.name, index + 1);
            Some(removed)
        } else {
            None
        }
    }

    /// Remove the most recently added entry (the head)
    pub fn remove_newest(&mut self) -> Option<ShoppingListItem> {
        self.remove_at(0)
    }

    /// Remove one entry by id
    pub fn remove_by_id(&mut self, id: &str) -> Option<ShoppingListItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    /// Remove every duplicate of a consolidated row (same name + category).
    /// Returns how many entries went.
    pub fn remove_all_variants(&mut self, name: &str, category: &str) -> usize {
        let before = self.items.len();
        self.items
            .retain(|i| !(i.name == name && i.category == category));
        let removed = before - self.items.len();
        if removed > 0 {
            info!("🗑️ Removed {} entries of {} [{}]", removed, name, category);
        }
        removed
    }

    /// Find the entry a spoken name most plausibly refers to:
    /// exact normalized equality, then substring containment in either
    /// direction, then best token-overlap similarity at or above the
    /// threshold. Ties keep the first entry in list order. `None` is a
    /// removal miss, not an error.
    pub fn find_removal_match(&self, spoken: &str) -> Option<&ShoppingListItem> {
        if spoken.is_empty() {
            return None;
        }
        let spoken_norm = normalize(spoken);

        if let Some(exact) = self
            .items
            .iter()
            .find(|i| normalize(&i.name) == spoken_norm)
        {
            return Some(exact);
        }

        // Containment only counts between non-empty normalized names;
        // the empty string is a substring of everything.
        if !spoken_norm.is_empty() {
            if let Some(partial) = self.items.iter().find(|i| {
                let name = normalize(&i.name);
                !name.is_empty() && (name.contains(&spoken_norm) || spoken_norm.contains(&name))
            }) {
                return Some(partial);
            }
        }

        let mut best: Option<&ShoppingListItem> = None;
        let mut best_score = 0.0;
        for item in &self.items {
            let score = fuzzy::similarity(&item.name, spoken);
            if score > best_score {
                best = Some(item);
                best_score = score;
            }
        }

        if best_score >= fuzzy::MATCH_THRESHOLD {
            debug!("fuzzy removal match for '{}' scored {:.2}", spoken, best_score);
            best
        } else {
            None
        }
    }

    /// Group duplicate add-events by name + category: quantities summed,
    /// events counted, most-duplicated rows first.
    pub fn consolidated(&self) -> Vec<ConsolidatedItem> {
        let mut rows: Vec<ConsolidatedItem> = Vec::new();
        for item in &self.items {
            match rows
                .iter_mut()
                .find(|r| r.name == item.name && r.category == item.category)
            {
                Some(row) => {
                    row.quantity += item.quantity;
                    row.count += 1;
                }
                None => rows.push(ConsolidatedItem {
                    name: item.name.clone(),
                    category: item.category.clone(),
                    quantity: item.quantity,
                    unit: item.unit.clone(),
                    count: 1,
                }),
            }
        }
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows
    }
}
