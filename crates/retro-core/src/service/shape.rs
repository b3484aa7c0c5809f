//! Pure data-shaping functions.
//!
//! These carry no side effects and no storage handles, so the save and
//! read transformations can be tested in isolation from persistence.

use crate::storage::types::Category;

/// Drop empty and whitespace-only items from a category list (shape-for-save).
///
/// Surrounding whitespace on surviving items is kept as written; only
/// items with no visible content are removed.
pub fn strip_blank_items(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .collect()
}

/// Group tagged items into the three category lists (shape-for-read).
///
/// Relative order within each category is preserved as given.
pub fn group_items(items: Vec<(Category, String)>) -> (Vec<String>, Vec<String>, Vec<String>) {
    let mut plus = Vec::new();
    let mut minus = Vec::new();
    let mut next = Vec::new();

    for (category, content) in items {
        match category {
            Category::Plus => plus.push(content),
            Category::Minus => minus.push(content),
            Category::Next => next.push(content),
        }
    }

    (plus, minus, next)
}
