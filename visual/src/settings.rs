//! Visual-level settings persisted in `dataView.metadata.objects`.
//!
//! Parsing never fails: missing groups and properties keep their defaults,
//! and properties of the wrong JSON type are logged and ignored.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::consts::{DATA_POINT, DEFAULT_FILL, DEFAULT_FONT_SIZE};
use crate::data_view::DataView;

/// All settings groups of the visual.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualSettings {
    pub data_point: DataPointSettings,
}

/// The `dataPoint` settings group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPointSettings {
    pub default_color: String,
    pub show_all_data_points: bool,
    pub fill: String,
    pub fill_rule: String,
    pub font_size: f64,
}

impl Default for DataPointSettings {
    fn default() -> Self {
        Self {
            default_color: String::new(),
            show_all_data_points: true,
            fill: DEFAULT_FILL.to_owned(),
            fill_rule: String::new(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

impl VisualSettings {
    /// Parse settings from the data view's metadata objects.
    #[must_use]
    pub fn parse(data_view: Option<&DataView>) -> Self {
        let mut settings = Self::default();
        let Some(objects) = data_view
            .and_then(|view| view.metadata.as_ref())
            .and_then(|metadata| metadata.objects.as_ref())
        else {
            return settings;
        };

        match objects.get(DATA_POINT) {
            Some(Value::Object(group)) => settings.data_point.apply(group),
            Some(Value::Null) | None => {}
            Some(other) => tracing::warn!(group = DATA_POINT, value = %other, "ignoring settings group that is not an object"),
        }
        settings
    }
}

impl DataPointSettings {
    fn apply(&mut self, group: &Map<String, Value>) {
        if let Some(color) = property(group, "defaultColor", as_color) {
            self.default_color = color;
        }
        if let Some(show) = property(group, "showAllDataPoints", Value::as_bool) {
            self.show_all_data_points = show;
        }
        if let Some(color) = property(group, "fill", as_color) {
            self.fill = color;
        }
        if let Some(rule) = property(group, "fillRule", as_color) {
            self.fill_rule = rule;
        }
        if let Some(size) = property(group, "fontSize", Value::as_f64) {
            self.font_size = size;
        }
    }
}

/// Read `name` from `group` with `read`, warning when it is set but unreadable.
fn property<T>(group: &Map<String, Value>, name: &str, read: impl Fn(&Value) -> Option<T>) -> Option<T> {
    let value = group.get(name)?;
    if value.is_null() {
        return None;
    }
    let parsed = read(value);
    if parsed.is_none() {
        tracing::warn!(group = DATA_POINT, property = name, %value, "ignoring setting with unexpected type");
    }
    parsed
}

/// Colors persist either as plain strings or as `{"solid": {"color": ...}}`.
fn as_color(value: &Value) -> Option<String> {
    value
        .as_str()
        .or_else(|| value.pointer("/solid/color").and_then(Value::as_str))
        .map(str::to_owned)
}
