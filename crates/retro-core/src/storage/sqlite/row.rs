//! Raw row types for database queries.

use chrono::{DateTime, Utc};

use crate::error::{Result, RetroError};
use crate::service::shape::group_items;
use crate::storage::types::{Category, Entry};

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub date: String,
    pub created_at: String,
}

/// Raw row data from the entry_items table.
#[derive(Debug)]
pub struct ItemRow {
    pub entry_id: i64,
    pub category: String,
    pub content: String,
}

impl EntryRow {
    /// Combine an entry row with its item rows into a domain entry.
    ///
    /// Item rows must already be in per-category insertion order.
    pub fn into_entry(self, items: Vec<ItemRow>) -> Result<Entry> {
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|e| RetroError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        let tagged = items
            .into_iter()
            .map(|item| {
                let category: Category = item.category.parse()?;
                Ok((category, item.content))
            })
            .collect::<Result<Vec<_>>>()?;
        let (plus, minus, next) = group_items(tagged);

        Ok(Entry {
            id: self.id,
            date: self.date,
            created_at,
            plus,
            minus,
            next,
        })
    }
}
