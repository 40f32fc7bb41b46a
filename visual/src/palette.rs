//! Default theme palette.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::collections::HashMap;

use crate::consts::DEFAULT_THEME_COLORS;
use crate::host::ColorPalette;

/// Assigns theme colors to keys in first-seen order, wrapping around when
/// the theme runs out. Assignments are memoized for the life of the palette.
#[derive(Debug, Clone)]
pub struct DefaultPalette {
    colors: Vec<String>,
    assigned: HashMap<String, usize>,
}

impl DefaultPalette {
    /// Palette over the host's default theme colors.
    #[must_use]
    pub fn new() -> Self {
        Self::with_colors(DEFAULT_THEME_COLORS.iter().map(|c| (*c).to_owned()).collect())
    }

    /// Palette over a custom color list. Blank entries are dropped; a list
    /// with no colors left falls back to the default theme.
    #[must_use]
    pub fn with_colors(colors: Vec<String>) -> Self {
        let colors: Vec<String> = colors.into_iter().filter(|color| !color.trim().is_empty()).collect();
        if colors.is_empty() {
            return Self::new();
        }
        Self { colors, assigned: HashMap::new() }
    }

    /// Number of keys assigned so far.
    #[must_use]
    pub fn assigned_len(&self) -> usize {
        self.assigned.len()
    }
}

impl Default for DefaultPalette {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorPalette for DefaultPalette {
    fn get_color(&mut self, key: &str) -> String {
        let next = self.assigned.len();
        let slot = *self.assigned.entry(key.to_owned()).or_insert(next);
        self.colors[slot % self.colors.len()].clone()
    }
}
