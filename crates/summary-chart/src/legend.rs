// File: crates/summary-chart/src/legend.rs
// Summary: Legend and free-text annotation boxes placed in normalized surface coordinates.

use skia_safe as skia;

use crate::geometry::NdcRect;

/// Filled color swatch plus label per entry, one row each, top to bottom.
#[derive(Clone, Debug)]
pub struct Legend {
    pub area: NdcRect,
    pub entries: Vec<(String, skia::Color)>,
}

impl Legend {
    pub fn new(area: NdcRect) -> Self {
        Self { area, entries: Vec::new() }
    }

    pub fn add_entry(&mut self, label: impl Into<String>, color: skia::Color) {
        self.entries.push((label.into(), color));
    }
}

/// Borderless, transparent text box. Lines are left aligned and spread
/// evenly over the box height.
#[derive(Clone, Debug)]
pub struct Annotation {
    pub area: NdcRect,
    pub lines: Vec<String>,
}

impl Annotation {
    pub fn new(area: NdcRect, lines: Vec<String>) -> Self {
        Self { area, lines }
    }
}
