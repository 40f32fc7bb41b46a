//! Default selection ids keyed by category column and row.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde_json::json;

use crate::data_view::CategoryColumn;
use crate::host::{Identity, SelectionIdBuilder, Selector};

/// Identity of one category row: the column's query key and the row index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategorySelectionId {
    column: String,
    index: usize,
}

impl CategorySelectionId {
    #[must_use]
    pub fn new(column: impl Into<String>, index: usize) -> Self {
        Self { column: column.into(), index }
    }

    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Identity for CategorySelectionId {
    fn selector(&self) -> Selector {
        Selector(json!({
            "data": [{ "column": self.column, "index": self.index }],
        }))
    }
}

/// Builds [`CategorySelectionId`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct CategorySelectionIdBuilder;

impl SelectionIdBuilder for CategorySelectionIdBuilder {
    type Id = CategorySelectionId;

    fn identity_for(&self, column: &CategoryColumn, index: usize) -> Self::Id {
        CategorySelectionId::new(column.source.key(), index)
    }
}
