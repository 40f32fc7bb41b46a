use crate::bridge::{ObjectEnumerators, VisualObjectInstance};
use crate::builder::{DataPoint, build_records};
use crate::data_view::VisualUpdateOptions;
use crate::error::VisualError;
use crate::host::{ColorPalette, SelectionIdBuilder};
use crate::settings::VisualSettings;

#[cfg(test)]
#[path = "visual_test.rs"]
mod visual_test;

/// Visual state held between host calls.
///
/// The host drives it strictly sequentially: [`VisualCore::update`] on every
/// data change, then [`VisualCore::enumerate_object_instances`] whenever the
/// property pane is shown.
pub struct VisualCore<P, B: SelectionIdBuilder> {
    palette: P,
    ids: B,
    enumerators: ObjectEnumerators<B::Id>,
    data_points: Vec<DataPoint<B::Id>>,
    settings: VisualSettings,
    update_count: u64,
}

impl<P, B> VisualCore<P, B>
where
    P: ColorPalette,
    B: SelectionIdBuilder,
{
    #[must_use]
    pub fn new(palette: P, ids: B) -> Self {
        Self::with_enumerators(palette, ids, ObjectEnumerators::new())
    }

    /// Construct with a custom enumeration table.
    #[must_use]
    pub fn with_enumerators(palette: P, ids: B, enumerators: ObjectEnumerators<B::Id>) -> Self {
        Self {
            palette,
            ids,
            enumerators,
            data_points: Vec::new(),
            settings: VisualSettings::default(),
            update_count: 0,
        }
    }

    // --- Host calls ---

    /// Run one update cycle and return the number of records to render.
    ///
    /// A data view without usable categorical data renders nothing; the
    /// previously built records stay cached for enumeration.
    pub fn update(&mut self, options: &VisualUpdateOptions) -> usize {
        self.update_count += 1;
        let data_view = options.data_view();
        self.settings = VisualSettings::parse(data_view);

        match build_records(data_view, &mut self.palette, &self.ids) {
            Ok(records) => {
                self.data_points = records;
                tracing::debug!(update = self.update_count, records = self.data_points.len(), "visual updated");
                self.data_points.len()
            }
            Err(VisualError::MissingDataView { part }) => {
                tracing::debug!(update = self.update_count, %part, "nothing to render");
                0
            }
        }
    }

    /// Editable instances of `object_name` over the last built records.
    #[must_use]
    pub fn enumerate_object_instances(&self, object_name: &str) -> Vec<VisualObjectInstance> {
        self.enumerators.enumerate(object_name, &self.data_points)
    }

    // --- Queries ---

    /// Records from the last successful build.
    #[must_use]
    pub fn data_points(&self) -> &[DataPoint<B::Id>] {
        &self.data_points
    }

    /// Settings parsed on the last update.
    #[must_use]
    pub fn settings(&self) -> &VisualSettings {
        &self.settings
    }

    /// Number of update calls received.
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// The palette, for hosts that share it with their renderer.
    #[must_use]
    pub fn palette(&self) -> &P {
        &self.palette
    }
}
