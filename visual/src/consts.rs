//! Shared names and constants for the visual crate.

// ── Object enumeration ──────────────────────────────────────────

/// Object group holding per-category color overrides.
pub const COLOR_SELECTOR: &str = "colorSelector";

/// Property of [`COLOR_SELECTOR`] that stores the fill.
pub const FILL: &str = "fill";

/// Object group holding the visual-level data point settings.
pub const DATA_POINT: &str = "dataPoint";

// ── Labels ──────────────────────────────────────────────────────

/// Label given to rows past the end of the category column.
pub const UNDEFINED_LABEL: &str = "undefined";

/// Label given to explicit null category values.
pub const NULL_LABEL: &str = "null";

// ── Palette ─────────────────────────────────────────────────────

/// The host's default theme colors, assigned in first-seen order.
pub const DEFAULT_THEME_COLORS: [&str; 10] = [
    "#01B8AA", "#374649", "#FD625E", "#F2C80F", "#5F6B6D", "#8AD4EB", "#FE9666", "#A66999",
    "#3599B8", "#DFBFBF",
];

// ── Settings defaults ───────────────────────────────────────────

/// Default `dataPoint.fill`.
pub const DEFAULT_FILL: &str = "#000000";

/// Default `dataPoint.fontSize` in points.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;
