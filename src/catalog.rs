//! Static Catalog
//!
//! The fixed store inventory and category taxonomy, plus the read-only
//! queries over them. Both are process-wide constants; the user's mutable
//! shopping list lives elsewhere.

use crate::interpreter::normalize::normalize;
use lazy_static::lazy_static;
use regex::Regex;

/// One entry of the fixed store inventory
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryItem {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub available: bool,
    pub price: f64,
    pub location: &'static str,
}

/// One entry of the fixed category taxonomy
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: &'static str,
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

#[rustfmt::skip]
const INVENTORY: &[InventoryItem] = &[
    InventoryItem { id: "inv-1", name: "milk", category: "dairy", available: true, price: 2.99, location: "A1" },
    InventoryItem { id: "inv-2", name: "bread", category: "grains", available: true, price: 1.49, location: "B2" },
    InventoryItem { id: "inv-3", name: "apples", category: "produce", available: true, price: 3.99, location: "C3" },
    InventoryItem { id: "inv-4", name: "chicken", category: "protein", available: true, price: 8.99, location: "D4" },
    InventoryItem { id: "inv-5", name: "water", category: "beverages", available: true, price: 0.99, location: "E5" },
    InventoryItem { id: "inv-6", name: "cheese", category: "dairy", available: false, price: 4.99, location: "A2" },
    InventoryItem { id: "inv-7", name: "rice", category: "grains", available: true, price: 5.99, location: "B3" },
    InventoryItem { id: "inv-8", name: "bananas", category: "produce", available: true, price: 2.49, location: "C4" },
    InventoryItem { id: "inv-9", name: "eggs", category: "protein", available: true, price: 3.49, location: "D5" },
    InventoryItem { id: "inv-10", name: "coffee", category: "beverages", available: false, price: 6.99, location: "E6" },
    InventoryItem { id: "inv-11", name: "yogurt", category: "dairy", available: true, price: 3.49, location: "A3" },
    InventoryItem { id: "inv-12", name: "pasta", category: "grains", available: true, price: 2.99, location: "B4" },
    InventoryItem { id: "inv-13", name: "tomatoes", category: "produce", available: true, price: 2.99, location: "C5" },
    InventoryItem { id: "inv-14", name: "beef", category: "protein", available: true, price: 12.99, location: "D6" },
    InventoryItem { id: "inv-15", name: "orange juice", category: "beverages", available: true, price: 4.49, location: "E7" },
    InventoryItem { id: "inv-16", name: "chips", category: "snacks", available: true, price: 3.99, location: "F1" },
    InventoryItem { id: "inv-17", name: "cookies", category: "snacks", available: true, price: 2.99, location: "F2" },
    InventoryItem { id: "inv-18", name: "frozen pizza", category: "frozen", available: true, price: 8.99, location: "G1" },
    InventoryItem { id: "inv-19", name: "olive oil", category: "pantry", available: true, price: 7.99, location: "H1" },
    InventoryItem { id: "inv-20", name: "salt", category: "pantry", available: true, price: 1.99, location: "H2" },
];

const CATEGORIES: &[Category] = &[
    Category {
        name: "dairy",
        description: "Milk, cheese, yogurt, butter",
        examples: &["milk", "cheese", "yogurt", "butter", "cream", "ice cream", "paneer"],
    },
    Category {
        name: "produce",
        description: "Fresh fruits, vegetables, herbs",
        examples: &["apples", "bananas", "tomatoes", "lettuce", "spinach", "onions", "potatoes"],
    },
    Category {
        name: "grains",
        description: "Bread, rice, pasta, cereals, flour",
        examples: &["bread", "rice", "pasta", "cereal", "flour", "oats", "quinoa"],
    },
    Category {
        name: "protein",
        description: "Meat, fish, eggs, beans, nuts",
        examples: &["chicken", "beef", "fish", "eggs", "beans", "nuts", "tofu"],
    },
    Category {
        name: "beverages",
        description: "Drinks, juices, coffee, tea, water",
        examples: &["water", "juice", "coffee", "tea", "soda", "milk", "smoothies"],
    },
    Category {
        name: "snacks",
        description: "Chips, cookies, candies, nuts",
        examples: &["chips", "cookies", "candy", "popcorn", "nuts", "chocolate", "crackers"],
    },
    Category {
        name: "frozen",
        description: "Frozen meals, ice cream, frozen vegetables",
        examples: &["frozen pizza", "ice cream", "frozen peas", "frozen fish", "frozen berries"],
    },
    Category {
        name: "pantry",
        description: "Canned goods, spices, oils, condiments",
        examples: &["canned beans", "olive oil", "salt", "pepper", "ketchup", "mustard", "sauce"],
    },
];

/// The full fixed inventory
pub fn inventory() -> &'static [InventoryItem] {
    INVENTORY
}

/// The full category taxonomy
pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Search the inventory by free text. An entry matches when its normalized
/// name contains the normalized query or vice versa, which covers both
/// partial user phrases ("juice") and longer ones ("if milk available").
/// Results come back available-first, then name ascending. An empty query
/// yields nothing, so a failed parse never dumps the whole catalog.
pub fn search_inventory(query: &str, max_price: Option<f64>) -> Vec<&'static InventoryItem> {
    let q = normalize(query);
    if q.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<&InventoryItem> = INVENTORY
        .iter()
        .filter(|item| {
            let name = normalize(item.name);
            let matches_name = name.contains(&q) || q.contains(&name);
            let matches_price = max_price.map_or(true, |cap| item.price <= cap);
            matches_name && matches_price
        })
        .collect();

    results.sort_by(|a, b| {
        b.available
            .cmp(&a.available)
            .then_with(|| a.name.cmp(b.name))
    });
    results
}

/// All inventory entries in one category, by exact normalized category
/// name, sorted by item name. No fuzzy fallback: an unknown category is an
/// empty list, not a guess.
pub fn category_items(category: &str) -> Vec<&'static InventoryItem> {
    let c = normalize(category);
    if c.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<&InventoryItem> = INVENTORY
        .iter()
        .filter(|item| normalize(item.category) == c)
        .collect();
    results.sort_by(|a, b| a.name.cmp(b.name));
    results
}

lazy_static! {
    /// Keyword buckets for categorizing new list items, in test order
    static ref CATEGORY_RULES: Vec<(&'static str, Regex)> = vec![
        ("dairy", Regex::new(r"milk|cheese|yogurt|butter").unwrap()),
        ("produce", Regex::new(r"apple|banana|orange|lettuce|spinach|tomato|onion|potato").unwrap()),
        ("grains", Regex::new(r"bread|rice|pasta|cereal").unwrap()),
        ("protein", Regex::new(r"chicken|beef|pork|fish|egg").unwrap()),
        ("beverages", Regex::new(r"water|juice|soda|coffee|tea").unwrap()),
    ];
}

/// Map a bare item name to its category. First matching bucket wins;
/// anything unmatched is "other". Total, never fails.
pub fn categorize(name: &str) -> &'static str {
    let lower = name.to_lowercase();
    for (category, rule) in CATEGORY_RULES.iter() {
        if rule.is_match(&lower) {
            return *category;
        }
    }
    "other"
}
