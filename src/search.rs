//! Live element search.
//!
//! A query matches when it is a substring of the element's name, its symbol,
//! or its atomic number written in decimal. Matching ignores case and
//! surrounding whitespace; an empty query matches everything.

use crate::element::{ElementRecord, ElementTable};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// The normalised (trimmed, lowercased) query.
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, record: &ElementRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        record.name.to_lowercase().contains(&self.needle)
            || record.symbol.to_lowercase().contains(&self.needle)
            || record.atomic_number.to_string().contains(&self.needle)
    }

    pub fn count(&self, table: &ElementTable) -> usize {
        table.records().iter().filter(|r| self.matches(r)).count()
    }
}
