//! Session & Dispatch
//!
//! Owns the mutable stores (shopping list, history) and applies parsed
//! commands to them; catalog queries are read-only. The interpreter itself
//! stays stateless. This is the single writer, and one command is fully
//! applied before the next is parsed.

use crate::catalog::{self, InventoryItem};
use crate::error::SaudaResult;
use crate::history::HistoryStore;
use crate::interpreter::{interpret, Action, Command};
use crate::language::Language;
use crate::list::{ConsolidatedItem, ShoppingList, ShoppingListItem};
use crate::suggest::{self, Suggestion};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Result of dispatching one command. Every failure mode is an ordinary
/// value here: an out-of-range index or a fuzzy miss leaves the list
/// untouched and gets reported, never thrown.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Item appended to the list
    Added(ShoppingListItem),
    /// Item removed from the list
    Removed(ShoppingListItem),
    /// ADD/REMOVE carried no item name
    EmptyTarget,
    /// Removal position beyond the end of the list (0-based)
    NoSuchIndex(usize),
    /// Remove-last on an empty list
    EmptyList,
    /// No list entry matched the spoken name
    NoMatch(String),
    /// Inventory search results, possibly empty
    Search {
        query: String,
        max_price: Option<f64>,
        items: Vec<&'static InventoryItem>,
    },
    /// Availability check results, possibly empty
    Stock {
        query: String,
        items: Vec<&'static InventoryItem>,
    },
    /// Items of one catalog category, possibly empty
    CategoryItems {
        category: String,
        items: Vec<&'static InventoryItem>,
    },
}

impl Outcome {
    /// User-facing text for this outcome
    pub fn message(&self) -> String {
        match self {
            Self::Added(item) => match &item.unit {
                Some(unit) => format!("Added {} {} {}", item.quantity, unit, item.name),
                None => format!("Added {}", item.name),
            },
            Self::Removed(item) => format!("Removed: {}", item.name),
            Self::EmptyTarget => "No item name heard".to_string(),
            Self::NoSuchIndex(index) => {
                format!("No item at number {}", index + 1)
            }
            Self::EmptyList => "List is empty".to_string(),
            Self::NoMatch(spoken) => format!("No matching item to remove: {}", spoken),
            Self::Search { query, items, .. } => {
                if items.is_empty() {
                    format!("No items found for {}", query)
                } else {
                    format!("Found {} items for {}", items.len(), query)
                }
            }
            Self::Stock { items, .. } => {
                if items.is_empty() {
                    "Item not found in inventory".to_string()
                } else {
                    let available: Vec<&str> = items
                        .iter()
                        .filter(|i| i.available)
                        .map(|i| i.name)
                        .collect();
                    let unavailable: Vec<&str> = items
                        .iter()
                        .filter(|i| !i.available)
                        .map(|i| i.name)
                        .collect();
                    let mut response = String::new();
                    if !available.is_empty() {
                        response.push_str(&format!("Available: {}. ", available.join(", ")));
                    }
                    if !unavailable.is_empty() {
                        response.push_str(&format!("Out of stock: {}. ", unavailable.join(", ")));
                    }
                    response.trim_end().to_string()
                }
            }
            Self::CategoryItems { category, items } => {
                if items.is_empty() {
                    "No items found in that category".to_string()
                } else {
                    format!("Found {} items in {} category", items.len(), category)
                }
            }
        }
    }
}

/// One user's shopping session: list, history, and where they live on disk
pub struct Session {
    list: ShoppingList,
    history: HistoryStore,
    list_path: PathBuf,
}

impl Session {
    /// Open (or create) the stores at the given paths
    pub fn open(list_path: &Path, history_db_path: &Path) -> SaudaResult<Self> {
        let list = ShoppingList::load(list_path)?;
        let history = HistoryStore::new(history_db_path)?;
        info!("📋 Session opened with {} list entries", list.len());
        Ok(Self {
            list,
            history,
            list_path: list_path.to_path_buf(),
        })
    }

    /// Interpret an utterance and apply it
    pub fn handle(&mut self, text: &str, lang: Language) -> SaudaResult<Outcome> {
        let command = interpret(text, lang);
        self.dispatch(command)
    }

    /// Apply one parsed command to the stores
    pub fn dispatch(&mut self, command: Command) -> SaudaResult<Outcome> {
        debug!("dispatching {:?}", command.action);
        match command.action {
            Action::Add => self.apply_add(&command),
            Action::Remove => self.apply_remove(&command),
            Action::Search => Ok(Outcome::Search {
                items: catalog::search_inventory(command.query(), command.max_price),
                query: command.item,
                max_price: command.max_price,
            }),
            Action::Inventory => Ok(Outcome::Stock {
                items: catalog::search_inventory(&command.item, None),
                query: command.item,
            }),
            Action::Category => Ok(Outcome::CategoryItems {
                items: catalog::category_items(&command.item),
                category: command.item,
            }),
        }
    }

    fn apply_add(&mut self, command: &Command) -> SaudaResult<Outcome> {
        if command.item.is_empty() {
            return Ok(Outcome::EmptyTarget);
        }
        let item = self
            .list
            .add(&command.item, command.quantity, command.unit.clone());
        self.history.record_add(&item.name)?;
        self.list.save(&self.list_path)?;
        Ok(Outcome::Added(item))
    }

    /// Removal honors the resolver's priority: explicit index, then
    /// remove-last, then name matching.
    fn apply_remove(&mut self, command: &Command) -> SaudaResult<Outcome> {
        if let Some(index) = command.remove_index {
            return match self.list.remove_at(index) {
                Some(item) => {
                    self.list.save(&self.list_path)?;
                    Ok(Outcome::Removed(item))
                }
                None => Ok(Outcome::NoSuchIndex(index)),
            };
        }

        if command.remove_last {
            return match self.list.remove_newest() {
                Some(item) => {
                    self.list.save(&self.list_path)?;
                    Ok(Outcome::Removed(item))
                }
                None => Ok(Outcome::EmptyList),
            };
        }

        if command.item.is_empty() {
            return Ok(Outcome::EmptyTarget);
        }

        let target_id = match self.list.find_removal_match(&command.item) {
            Some(item) => item.id.clone(),
            None => return Ok(Outcome::NoMatch(command.item.clone())),
        };
        let removed = self
            .list
            .remove_by_id(&target_id)
            .expect("matched entry is in the list");
        self.list.save(&self.list_path)?;
        Ok(Outcome::Removed(removed))
    }

    /// Direct add from the UI layer (suggestion buttons, manual entry),
    /// same bookkeeping as a spoken add, no parsing involved.
    pub fn add_named(&mut self, name: &str, quantity: f64) -> SaudaResult<Outcome> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(Outcome::EmptyTarget);
        }
        let item = self.list.add(name, quantity, None);
        self.history.record_add(&item.name)?;
        self.list.save(&self.list_path)?;
        Ok(Outcome::Added(item))
    }

    /// Direct removal of every duplicate of a consolidated row
    pub fn remove_all_variants(&mut self, name: &str, category: &str) -> SaudaResult<usize> {
        let removed = self.list.remove_all_variants(name, category);
        if removed > 0 {
            self.list.save(&self.list_path)?;
        }
        Ok(removed)
    }

    /// The current list, newest first
    pub fn list(&self) -> &ShoppingList {
        &self.list
    }

    /// Consolidated display rows
    pub fn consolidated(&self) -> Vec<ConsolidatedItem> {
        self.list.consolidated()
    }

    /// Current follow-up suggestions
    pub fn suggestions(&self) -> SaudaResult<Vec<Suggestion>> {
        let history = self.history.all()?;
        let now_ms = chrono::Utc::now().timestamp_millis();
        Ok(suggest::suggestions(&self.list, &history, now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::open(
            &dir.path().join("list.json"),
            &dir.path().join("history.db"),
        )
        .unwrap();
        (dir, session)
    }

    #[test]
    fn test_spoken_add_updates_list_and_history() {
        let (_dir, mut session) = open_session();
        let outcome = session
            .handle("add 2 bottles of water", Language::English)
            .unwrap();

        match outcome {
            Outcome::Added(item) => {
                assert_eq!(item.name, "water");
                assert_eq!(item.quantity, 2.0);
                assert_eq!(item.unit.as_deref(), Some("bottles"));
                assert_eq!(item.category, "beverages");
            }
            other => panic!("expected Added, got {:?}", other),
        }
        assert_eq!(session.list().len(), 1);
    }

    #[test]
    fn test_add_without_item_is_noop() {
        let (_dir, mut session) = open_session();
        let outcome = session.handle("add", Language::English).unwrap();
        assert_eq!(outcome, Outcome::EmptyTarget);
        assert!(session.list().is_empty());
    }

    #[test]
    fn test_remove_by_index_and_bounds() {
        let (_dir, mut session) = open_session();
        session.add_named("milk", 1.0).unwrap();
        session.add_named("bread", 1.0).unwrap();

        let outcome = session
            .handle("remove item number 2", Language::English)
            .unwrap();
        match outcome {
            // position 2 is the older entry
            Outcome::Removed(item) => assert_eq!(item.name, "milk"),
            other => panic!("expected Removed, got {:?}", other),
        }

        let outcome = session
            .handle("remove item number 9", Language::English)
            .unwrap();
        assert_eq!(outcome, Outcome::NoSuchIndex(8));
        assert_eq!(session.list().len(), 1, "failed removal left list alone");
    }

    #[test]
    fn test_remove_last_takes_newest() {
        let (_dir, mut session) = open_session();
        session.add_named("milk", 1.0).unwrap();
        session.add_named("bread", 1.0).unwrap();

        let outcome = session.handle("remove last", Language::English).unwrap();
        match outcome {
            Outcome::Removed(item) => assert_eq!(item.name, "bread"),
            other => panic!("expected Removed, got {:?}", other),
        }

        session.handle("remove last", Language::English).unwrap();
        let outcome = session.handle("remove last", Language::English).unwrap();
        assert_eq!(outcome, Outcome::EmptyList);
    }

    #[test]
    fn test_remove_by_fuzzy_name() {
        let (_dir, mut session) = open_session();
        session.add_named("orange juice", 1.0).unwrap();
        session.add_named("milk", 1.0).unwrap();

        let outcome = session.handle("remove juice", Language::English).unwrap();
        match outcome {
            Outcome::Removed(item) => assert_eq!(item.name, "orange juice"),
            other => panic!("expected Removed, got {:?}", other),
        }

        let outcome = session.handle("remove cola", Language::English).unwrap();
        assert!(matches!(outcome, Outcome::NoMatch(_)));
        assert_eq!(session.list().len(), 1);
    }

    #[test]
    fn test_search_is_read_only() {
        let (_dir, mut session) = open_session();
        let outcome = session
            .handle("search for bread under $5", Language::English)
            .unwrap();
        match outcome {
            Outcome::Search {
                query,
                max_price,
                items,
            } => {
                assert_eq!(query, "bread");
                assert_eq!(max_price, Some(5.0));
                assert!(items.iter().any(|i| i.name == "bread"));
                assert!(items.iter().all(|i| i.price <= 5.0));
            }
            other => panic!("expected Search, got {:?}", other),
        }
        assert!(session.list().is_empty());
    }

    #[test]
    fn test_inventory_check_message() {
        let (_dir, mut session) = open_session();
        let outcome = session
            .handle("check if cheese is available", Language::English)
            .unwrap();
        match &outcome {
            Outcome::Stock { items, .. } => {
                assert!(items.iter().any(|i| i.name == "cheese"));
            }
            other => panic!("expected Stock, got {:?}", other),
        }
        // cheese is out of stock in the fixed catalog
        assert!(outcome.message().contains("Out of stock"));
    }

    #[test]
    fn test_category_browse() {
        let (_dir, mut session) = open_session();
        let outcome = session.handle("what's in produce", Language::English).unwrap();
        match outcome {
            Outcome::CategoryItems { category, items } => {
                assert_eq!(category, "produce");
                assert!(!items.is_empty());
                assert!(items.iter().all(|i| i.category == "produce"));
            }
            other => panic!("expected CategoryItems, got {:?}", other),
        }
    }

    #[test]
    fn test_hindi_round_trip() {
        let (_dir, mut session) = open_session();
        let outcome = session.handle("दो बोतल पानी जोड़ो", Language::Hindi).unwrap();
        match outcome {
            Outcome::Added(item) => {
                assert_eq!(item.name, "पानी");
                assert_eq!(item.quantity, 2.0);
            }
            other => panic!("expected Added, got {:?}", other),
        }
    }

    #[test]
    fn test_remove_all_variants_backs_consolidated_rows() {
        let (_dir, mut session) = open_session();
        session.add_named("milk", 1.0).unwrap();
        session.add_named("milk", 2.0).unwrap();
        session.add_named("bread", 1.0).unwrap();

        let rows = session.consolidated();
        assert_eq!(rows[0].name, "milk");
        assert_eq!(rows[0].count, 2);

        assert_eq!(session.remove_all_variants("milk", "dairy").unwrap(), 2);
        assert_eq!(session.list().len(), 1);
    }

    #[test]
    fn test_persistence_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let list_path = dir.path().join("list.json");
        let db_path = dir.path().join("history.db");

        {
            let mut session = Session::open(&list_path, &db_path).unwrap();
            session.handle("add milk", Language::English).unwrap();
        }

        let session = Session::open(&list_path, &db_path).unwrap();
        assert_eq!(session.list().len(), 1);
        assert_eq!(session.list().items()[0].name, "milk");
    }
}
