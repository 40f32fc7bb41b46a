//! Browser entry point.
//!
//! The host page passes update options as JSON and receives descriptors as
//! JSON. Colors come from the default theme palette and identities from the
//! category selection-id builder.

#[cfg(test)]
#[path = "wasm_test.rs"]
mod wasm_test;

use wasm_bindgen::prelude::*;

use crate::data_view::VisualUpdateOptions;
use crate::palette::DefaultPalette;
use crate::selection::CategorySelectionIdBuilder;
use crate::visual::VisualCore;

/// A visual instance owned by the host page.
#[wasm_bindgen]
pub struct SeriesVisual {
    core: VisualCore<DefaultPalette, CategorySelectionIdBuilder>,
}

impl Default for SeriesVisual {
    fn default() -> Self {
        Self::new()
    }
}

impl SeriesVisual {
    /// Parse `options_json` and run one update cycle.
    fn apply_json(&mut self, options_json: &str) -> Result<usize, serde_json::Error> {
        let options: VisualUpdateOptions = serde_json::from_str(options_json)?;
        Ok(self.core.update(&options))
    }
}

#[wasm_bindgen]
impl SeriesVisual {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self { core: VisualCore::new(DefaultPalette::new(), CategorySelectionIdBuilder) }
    }

    /// Apply update options given as JSON. Returns the number of records to render.
    ///
    /// # Errors
    ///
    /// Returns an error if `options_json` is not valid update options JSON.
    pub fn update(&mut self, options_json: &str) -> Result<usize, JsError> {
        Ok(self.apply_json(options_json)?)
    }

    /// Descriptors for `object_name` as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptors cannot be serialized.
    #[wasm_bindgen(js_name = enumerateObjectInstances)]
    pub fn enumerate_object_instances(&self, object_name: &str) -> Result<String, JsError> {
        let instances = self.core.enumerate_object_instances(object_name);
        Ok(serde_json::to_string(&instances)?)
    }

    /// Records from the last successful update as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if the records cannot be serialized.
    #[wasm_bindgen(js_name = dataPoints)]
    pub fn data_points(&self) -> Result<String, JsError> {
        Ok(serde_json::to_string(self.core.data_points())?)
    }

    #[wasm_bindgen(getter, js_name = updateCount)]
    #[must_use]
    pub fn update_count(&self) -> u64 {
        self.core.update_count()
    }
}
