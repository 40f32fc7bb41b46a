//! Property bridge: exposes cached records to the host's property pane.
//!
//! The host asks for the editable instances of one object group at a time.
//! Each group is served by a handler registered in [`ObjectEnumerators`];
//! groups without a handler enumerate as empty. The only group the visual
//! owns is `colorSelector`, which yields one fill descriptor per record so
//! the pane can show a color picker per category and persist the user's
//! choice against the record's selector.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::builder::DataPoint;
use crate::consts::{COLOR_SELECTOR, FILL};
use crate::host::{Identity, Selector};

/// One editable instance shown by the host's property pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjectInstance {
    /// Object group the instance belongs to.
    pub object_name: String,
    /// Label shown next to the editor.
    pub display_name: String,
    /// Property bag, e.g. `{"fill": {"solid": {"color": "#01B8AA"}}}`.
    pub properties: Value,
    /// Addresses the data point the edit is persisted against.
    pub selector: Selector,
}

/// Handler producing the instances of one object group.
pub type Enumerator<I> = fn(&str, &[DataPoint<I>]) -> Vec<VisualObjectInstance>;

/// Dispatch table from object group name to its [`Enumerator`].
pub struct ObjectEnumerators<I> {
    handlers: HashMap<&'static str, Enumerator<I>>,
}

impl<I: Identity> ObjectEnumerators<I> {
    /// A table with no handlers; every group enumerates as empty.
    #[must_use]
    pub fn empty() -> Self {
        Self { handlers: HashMap::new() }
    }

    /// The groups the visual owns: `colorSelector`.
    #[must_use]
    pub fn new() -> Self {
        let mut table = Self::empty();
        table.register(COLOR_SELECTOR, enumerate_color_selector);
        table
    }

    /// Register `handler` for `object_name`, returning the handler it replaced.
    pub fn register(&mut self, object_name: &'static str, handler: Enumerator<I>) -> Option<Enumerator<I>> {
        self.handlers.insert(object_name, handler)
    }

    /// Returns `true` if a handler is registered for `object_name`.
    #[must_use]
    pub fn handles(&self, object_name: &str) -> bool {
        self.handlers.contains_key(object_name)
    }

    /// Enumerate `object_name` over `data_points`. Unknown groups yield an
    /// empty list.
    #[must_use]
    pub fn enumerate(&self, object_name: &str, data_points: &[DataPoint<I>]) -> Vec<VisualObjectInstance> {
        match self.handlers.get(object_name) {
            Some(handler) => handler(object_name, data_points),
            None => Vec::new(),
        }
    }
}

impl<I: Identity> Default for ObjectEnumerators<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// One fill descriptor per record, in record order.
pub fn enumerate_color_selector<I: Identity>(object_name: &str, data_points: &[DataPoint<I>]) -> Vec<VisualObjectInstance> {
    data_points
        .iter()
        .map(|point| VisualObjectInstance {
            object_name: object_name.to_owned(),
            display_name: point.category.clone(),
            properties: json!({ FILL: { "solid": { "color": point.color } } }),
            selector: point.identity.selector(),
        })
        .collect()
}
