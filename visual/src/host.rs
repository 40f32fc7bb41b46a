//! Collaborator seams supplied by the host.
//!
//! The visual never constructs colors or identities itself; it asks the
//! host's palette and selection-id builder. Default implementations live in
//! [`crate::palette`] and [`crate::selection`].

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_view::CategoryColumn;

/// Color palette service.
pub trait ColorPalette {
    /// Color for `key`. The same key yields the same color for the life of
    /// the palette.
    fn get_color(&mut self, key: &str) -> String;
}

/// An opaque host-issued identity for one data point.
///
/// The visual compares identities and passes them through, but never looks
/// inside. The property pane addresses persisted overrides by the identity's
/// [`Selector`].
pub trait Identity: Clone + PartialEq + fmt::Debug {
    /// The selector the property pane uses to address this data point.
    fn selector(&self) -> Selector;
}

/// Issues identities bound to a row of the category column.
pub trait SelectionIdBuilder {
    type Id: Identity;

    /// Identity for row `index` of `column`. Stable for the same
    /// `(column, index)` within one update.
    fn identity_for(&self, column: &CategoryColumn, index: usize) -> Self::Id;
}

/// Opaque data selector emitted on property descriptors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selector(pub Value);

impl Selector {
    /// The raw selector JSON.
    #[must_use]
    pub fn as_json(&self) -> &Value {
        &self.0
    }
}
