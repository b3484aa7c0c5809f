//! Core data types for the storage layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::RetroError;

/// Category of a retrospective note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// What went well
    Plus,
    /// What could improve
    Minus,
    /// What to do next
    Next,
}

impl Category {
    /// All categories, in their canonical display order.
    pub const ALL: [Category; 3] = [Category::Plus, Category::Minus, Category::Next];

    /// The string stored in the `entry_items.type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Plus => "plus",
            Category::Minus => "minus",
            Category::Next => "next",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RetroError;

    /// Any value outside the three known categories is a data-integrity
    /// violation, not caller input, so it surfaces as a storage error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" => Ok(Category::Plus),
            "minus" => Ok(Category::Minus),
            "next" => Ok(Category::Next),
            other => Err(RetroError::Storage(format!(
                "Invalid item category: {}",
                other
            ))),
        }
    }
}

/// One retrospective record, with its three category lists populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Surrogate key assigned by storage, stable for the entry's lifetime
    pub id: i64,

    /// Calendar date, free-form string supplied by the caller
    pub date: String,

    /// Creation timestamp assigned by storage, used only for ordering
    pub created_at: DateTime<Utc>,

    /// What went well
    pub plus: Vec<String>,

    /// What could improve
    pub minus: Vec<String>,

    /// What to do next
    pub next: Vec<String>,
}

impl Entry {
    /// The items of one category.
    pub fn items(&self, category: Category) -> &[String] {
        match category {
            Category::Plus => &self.plus,
            Category::Minus => &self.minus,
            Category::Next => &self.next,
        }
    }
}

/// Builder for creating new entries.
///
/// Item lists are expected to contain no blank items by the time they
/// reach storage; the entry service strips them beforehand.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    /// Calendar date, free-form
    pub date: String,

    /// What went well
    pub plus: Vec<String>,

    /// What could improve
    pub minus: Vec<String>,

    /// What to do next
    pub next: Vec<String>,
}

impl NewEntry {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            ..Self::default()
        }
    }

    pub fn with_plus(mut self, items: Vec<String>) -> Self {
        self.plus = items;
        self
    }

    pub fn with_minus(mut self, items: Vec<String>) -> Self {
        self.minus = items;
        self
    }

    pub fn with_next(mut self, items: Vec<String>) -> Self {
        self.next = items;
        self
    }

    /// Iterate all items as `(category, content)` pairs, per-category
    /// order preserved.
    pub fn items(&self) -> impl Iterator<Item = (Category, &str)> {
        let lists = [
            (Category::Plus, &self.plus),
            (Category::Minus, &self.minus),
            (Category::Next, &self.next),
        ];
        lists
            .into_iter()
            .flat_map(|(category, items)| items.iter().map(move |item| (category, item.as_str())))
    }
}
