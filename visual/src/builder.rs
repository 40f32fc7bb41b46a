//! Record builder: turns a host data view into presentation records.
//!
//! Rows are produced by zipping the category and value columns by index.
//! The columns may have different lengths; the record count is the longer
//! of the two and reads past the end of the shorter one are tolerated:
//! a missing category reads as `"undefined"` and a missing value as `None`.
//!
//! Each record's color is the persisted `colorSelector.fill` override for
//! its row when one exists, and the palette's color for its label otherwise.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use serde::Serialize;

use crate::consts::{COLOR_SELECTOR, FILL};
use crate::data_view::{DataView, Fill, PrimitiveValue};
use crate::error::{MissingPart, VisualError};
use crate::host::{ColorPalette, SelectionIdBuilder};

/// One presentation record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint<I> {
    /// Stringified category label. Not guaranteed unique.
    pub category: String,
    /// Value at the same row, `None` past the end of the value column.
    /// Omitted when serialized so it stays distinct from a `null` cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<PrimitiveValue>,
    /// Resolved display color.
    pub color: String,
    /// Reserved; never populated by [`build_records`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    /// Reserved; never populated by [`build_records`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Host identity for selection and override lookup.
    #[serde(skip)]
    pub identity: I,
}

/// Build one record per row of `data_view`, in row order.
///
/// # Errors
///
/// Returns [`VisualError::MissingDataView`] when the data view, its
/// categorical section, its category column or its value column is absent.
pub fn build_records<P, B>(
    data_view: Option<&DataView>,
    palette: &mut P,
    ids: &B,
) -> Result<Vec<DataPoint<B::Id>>, VisualError>
where
    P: ColorPalette,
    B: SelectionIdBuilder,
{
    let data_view = data_view.ok_or(VisualError::missing(MissingPart::DataView))?;
    let categorical = data_view
        .categorical
        .as_ref()
        .ok_or(VisualError::missing(MissingPart::Categorical))?;
    let category = categorical
        .category()
        .ok_or(VisualError::missing(MissingPart::CategoryColumn))?;
    let values = categorical
        .value_column()
        .ok_or(VisualError::missing(MissingPart::ValueColumn))?;

    let len = category.values.len().max(values.values.len());
    if category.values.len() != values.values.len() {
        tracing::debug!(
            categories = category.values.len(),
            values = values.values.len(),
            "ragged columns; padding the shorter one"
        );
    }

    let mut records = Vec::with_capacity(len);
    for i in 0..len {
        let label = category.label(i);
        let default_fill = Fill::solid(palette.get_color(&label));
        let color = category
            .object_value(i, COLOR_SELECTOR, FILL, default_fill)
            .into_color();

        records.push(DataPoint {
            category: label,
            value: values.values.get(i).cloned(),
            color,
            stroke_color: None,
            stroke_width: None,
            identity: ids.identity_for(category, i),
        });
    }

    tracing::debug!(records = records.len(), "built data points");
    Ok(records)
}
