//! Host data view: the columnar snapshot delivered on every update cycle.
//!
//! These types mirror the JSON shape the host sends (`camelCase` keys), so a
//! snapshot can be deserialized directly. Only the categorical section is
//! modelled: one category column, one value column, and the per-row
//! persisted objects the host attaches to the category column.
//!
//! The per-row object bag is open-ended JSON. [`CategoryColumn::object_value`]
//! is the typed accessor the record builder uses to read persisted overrides
//! out of it.

#[cfg(test)]
#[path = "data_view_test.rs"]
mod data_view_test;

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::consts::{NULL_LABEL, UNDEFINED_LABEL};

/// Persisted objects: object name → (property name → JSON value).
pub type DataViewObjects = serde_json::Map<String, Value>;

/// Arguments of one host update call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualUpdateOptions {
    /// Data views bound to the visual. Only the first is consumed.
    #[serde(default)]
    pub data_views: Vec<DataView>,
}

impl VisualUpdateOptions {
    /// Wrap a single data view.
    #[must_use]
    pub fn with_data_view(data_view: DataView) -> Self {
        Self { data_views: vec![data_view] }
    }

    /// The data view the visual renders, if the host sent one.
    #[must_use]
    pub fn data_view(&self) -> Option<&DataView> {
        self.data_views.first()
    }
}

/// One data view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    /// Visual-level metadata, including persisted settings objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DataViewMetadata>,
    /// Categorical projection of the query result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorical: Option<DataViewCategorical>,
}

/// Visual-level metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewMetadata {
    /// Settings persisted by the property pane for the whole visual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<DataViewObjects>,
}

/// Categorical section: category columns and value columns aligned by row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataViewCategorical {
    #[serde(default)]
    pub categories: Vec<CategoryColumn>,
    #[serde(default)]
    pub values: Vec<ValueColumn>,
}

impl DataViewCategorical {
    /// Build a section from exactly one category and one value column.
    #[must_use]
    pub fn single(category: CategoryColumn, values: ValueColumn) -> Self {
        Self { categories: vec![category], values: vec![values] }
    }

    /// The bound category column.
    #[must_use]
    pub fn category(&self) -> Option<&CategoryColumn> {
        self.categories.first()
    }

    /// The bound value column.
    #[must_use]
    pub fn value_column(&self) -> Option<&ValueColumn> {
        self.values.first()
    }
}

/// Metadata describing the field bound to a column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSource {
    /// Field name shown to the user.
    #[serde(default)]
    pub display_name: String,
    /// Fully qualified query reference, used to key selections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
}

impl ColumnSource {
    /// A source whose display and query names are both `name`.
    #[must_use]
    pub fn named(name: &str) -> Self {
        Self { display_name: name.to_owned(), query_name: Some(name.to_owned()) }
    }

    /// The key selections are bound to: the query name, or the display name
    /// when the host omitted it.
    #[must_use]
    pub fn key(&self) -> &str {
        self.query_name.as_deref().unwrap_or(&self.display_name)
    }
}

/// The category column: one label per row plus per-row persisted objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryColumn {
    #[serde(default)]
    pub source: ColumnSource,
    #[serde(default)]
    pub values: Vec<PrimitiveValue>,
    /// Per-row persisted objects. Rows without overrides are `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<Option<DataViewObjects>>>,
}

impl CategoryColumn {
    /// A column named `name` with the given values and no persisted objects.
    #[must_use]
    pub fn new(name: &str, values: Vec<PrimitiveValue>) -> Self {
        Self { source: ColumnSource::named(name), values, objects: None }
    }

    /// Attach per-row persisted objects.
    #[must_use]
    pub fn with_objects(mut self, objects: Vec<Option<DataViewObjects>>) -> Self {
        self.objects = Some(objects);
        self
    }

    /// Label for row `index`, stringified the way the host's template
    /// strings do. Rows past the end of the column read as `"undefined"`.
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        self.values
            .get(index)
            .map_or_else(|| UNDEFINED_LABEL.to_owned(), ToString::to_string)
    }

    /// Read persisted property `object_name.property_name` for row `index`.
    ///
    /// Returns `default` when the value is absent at any level: no objects
    /// on the column, no entry for the row, no such object, no such
    /// property, an explicit `null`, or a value that does not have the
    /// shape of `T`.
    pub fn object_value<T: DeserializeOwned>(
        &self,
        index: usize,
        object_name: &str,
        property_name: &str,
        default: T,
    ) -> T {
        let Some(property) = self
            .objects
            .as_ref()
            .and_then(|rows| rows.get(index))
            .and_then(Option::as_ref)
            .and_then(|objects| objects.get(object_name))
            .and_then(|object| object.get(property_name))
        else {
            return default;
        };

        if property.is_null() {
            return default;
        }

        match T::deserialize(property) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    index,
                    object = object_name,
                    property = property_name,
                    %error,
                    "ignoring persisted property with unexpected shape"
                );
                default
            }
        }
    }
}

/// The value column: one scalar per row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueColumn {
    #[serde(default)]
    pub source: ColumnSource,
    #[serde(default)]
    pub values: Vec<PrimitiveValue>,
}

impl ValueColumn {
    /// A column named `name` with the given values.
    #[must_use]
    pub fn new(name: &str, values: Vec<PrimitiveValue>) -> Self {
        Self { source: ColumnSource::named(name), values }
    }
}

/// A scalar cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Date(DateValue),
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for PrimitiveValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<OffsetDateTime> for PrimitiveValue {
    fn from(value: OffsetDateTime) -> Self {
        Self::Date(DateValue { date: value })
    }
}

impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str(NULL_LABEL),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Number(v) => write_number(f, *v),
            Self::Text(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{v}"),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value.is_infinite() {
        f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" })
    } else if value == 0.0 {
        // -0 prints as "0".
        f.write_str("0")
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        write_exponent(f, value)
    } else {
        write!(f, "{value}")
    }
}

/// Exponent form with an explicit sign on the exponent: `1e+21`, `1.5e-7`.
fn write_exponent(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{mantissa}e+{exponent}"),
        _ => f.write_str(&text),
    }
}

/// A date cell. Travels as `{"date": "<RFC 3339>"}` to stay distinct from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.date.format(&Rfc3339) {
            Ok(text) => f.write_str(&text),
            Err(error) => {
                tracing::warn!(%error, "date outside RFC 3339 range; using default format");
                write!(f, "{}", self.date)
            }
        }
    }
}

/// Persisted fill property: `{"solid": {"color": "#RRGGBB"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub solid: SolidColor,
}

/// Solid color payload of a [`Fill`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolidColor {
    pub color: String,
}

impl Fill {
    /// A solid fill of `color`.
    #[must_use]
    pub fn solid(color: impl Into<String>) -> Self {
        Self { solid: SolidColor { color: color.into() } }
    }

    /// The fill's color.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.solid.color
    }

    /// Consume the fill, returning its color.
    #[must_use]
    pub fn into_color(self) -> String {
        self.solid.color
    }
}
