use serde_json::json;

use super::*;
use crate::data_view::{CategoryColumn, DataView, DataViewCategorical, PrimitiveValue, ValueColumn};
use crate::palette::DefaultPalette;
use crate::selection::CategorySelectionIdBuilder;

// =============================================================
// Helpers
// =============================================================

/// Palette answering from a fixed list in call order.
struct ScriptedPalette {
    colors: Vec<&'static str>,
    next: usize,
}

impl ColorPalette for ScriptedPalette {
    fn get_color(&mut self, _key: &str) -> String {
        let color = self.colors[self.next % self.colors.len()];
        self.next += 1;
        color.to_owned()
    }
}

fn scripted(colors: &[&'static str]) -> VisualCore<ScriptedPalette, CategorySelectionIdBuilder> {
    VisualCore::new(ScriptedPalette { colors: colors.to_vec(), next: 0 }, CategorySelectionIdBuilder)
}

fn options(categories: &[&str], values: &[f64]) -> VisualUpdateOptions {
    let category = CategoryColumn::new("Region", categories.iter().map(|c| PrimitiveValue::from(*c)).collect());
    let values = ValueColumn::new("Total", values.iter().map(|v| PrimitiveValue::from(*v)).collect());
    VisualUpdateOptions::with_data_view(DataView {
        metadata: None,
        categorical: Some(DataViewCategorical::single(category, values)),
    })
}

fn colors(instances: &[VisualObjectInstance]) -> Vec<String> {
    instances
        .iter()
        .map(|i| i.properties["fill"]["solid"]["color"].as_str().unwrap_or_default().to_owned())
        .collect()
}

// =============================================================
// Update cycle
// =============================================================

#[test]
fn update_then_enumerate_round_trips_records() {
    let mut visual = scripted(&["#111", "#222", "#333"]);
    assert_eq!(visual.update(&options(&["A", "B", "C"], &[10.0, 20.0, 30.0])), 3);

    let instances = visual.enumerate_object_instances("colorSelector");
    let labels: Vec<&str> = instances.iter().map(|i| i.display_name.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "C"]);
    assert_eq!(colors(&instances), vec!["#111", "#222", "#333"]);
}

#[test]
fn enumerate_before_any_update_is_empty() {
    let visual = scripted(&["#111"]);
    assert!(visual.enumerate_object_instances("colorSelector").is_empty());
    assert!(visual.data_points().is_empty());
}

#[test]
fn other_object_names_are_empty_after_update() {
    let mut visual = scripted(&["#111"]);
    visual.update(&options(&["A"], &[1.0]));
    assert!(visual.enumerate_object_instances("dataPoint").is_empty());
}

#[test]
fn update_replaces_previous_records() {
    let mut visual = scripted(&["#111", "#222", "#333"]);
    visual.update(&options(&["A", "B", "C"], &[1.0, 2.0, 3.0]));
    visual.update(&options(&["X"], &[9.0]));

    let labels: Vec<&str> = visual.data_points().iter().map(|p| p.category.as_str()).collect();
    assert_eq!(labels, vec!["X"]);
    assert_eq!(visual.enumerate_object_instances("colorSelector").len(), 1);
}

#[test]
fn missing_data_renders_nothing_and_keeps_last_good_records() {
    let mut visual = scripted(&["#111", "#222"]);
    visual.update(&options(&["A", "B"], &[1.0, 2.0]));

    assert_eq!(visual.update(&VisualUpdateOptions::default()), 0);
    assert_eq!(visual.update(&VisualUpdateOptions::with_data_view(DataView::default())), 0);

    assert_eq!(visual.data_points().len(), 2);
    assert_eq!(visual.enumerate_object_instances("colorSelector").len(), 2);
}

#[test]
fn update_count_tracks_every_call() {
    let mut visual = scripted(&["#111"]);
    assert_eq!(visual.update_count(), 0);
    visual.update(&options(&["A"], &[1.0]));
    visual.update(&VisualUpdateOptions::default());
    assert_eq!(visual.update_count(), 2);
}

#[test]
fn settings_are_parsed_on_update() {
    let mut visual = scripted(&["#111"]);
    let mut opts = options(&["A"], &[1.0]);
    opts.data_views[0].metadata = serde_json::from_value(json!({ "objects": { "dataPoint": { "fontSize": 20 } } })).ok();

    visual.update(&opts);
    assert!((visual.settings().data_point.font_size - 20.0).abs() < f64::EPSILON);

    visual.update(&options(&["A"], &[1.0]));
    assert!((visual.settings().data_point.font_size - 12.0).abs() < f64::EPSILON);
}

#[test]
fn persisted_override_reaches_the_property_pane() {
    let mut visual = scripted(&["#000000", "#000000"]);
    let mut opts = options(&["A", "B"], &[1.0, 2.0]);
    if let Some(categorical) = opts.data_views[0].categorical.as_mut() {
        categorical.categories[0].objects = Some(vec![
            None,
            json!({ "colorSelector": { "fill": { "solid": { "color": "#FF0000" } } } }).as_object().cloned(),
        ]);
    }

    visual.update(&opts);
    assert_eq!(colors(&visual.enumerate_object_instances("colorSelector")), vec!["#000000", "#FF0000"]);
}

#[test]
fn default_palette_keeps_category_colors_stable_across_updates() {
    let mut visual = VisualCore::new(DefaultPalette::new(), CategorySelectionIdBuilder);
    visual.update(&options(&["A", "B"], &[1.0, 2.0]));
    let first = visual.data_points()[1].color.clone();

    visual.update(&options(&["B", "C"], &[2.0, 3.0]));
    assert_eq!(visual.data_points()[0].color, first);
    assert_eq!(visual.palette().assigned_len(), 3);
}
