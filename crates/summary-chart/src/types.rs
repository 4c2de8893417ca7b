// File: crates/summary-chart/src/types.rs
// Summary: Shared types and constants (sizes, paddings).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1247;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 666;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }

    /// Insets given as fractions of the surface size, rounded to whole pixels.
    /// Negative or non-finite fractions become 0.
    pub fn from_fractions(width: i32, height: i32, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        let px = |frac: f64, extent: i32| -> u32 {
            if frac.is_finite() && frac > 0.0 { (frac * extent.max(0) as f64).round() as u32 } else { 0 }
        };
        Self::new(px(left, width), px(right, width), px(top, height), px(bottom, height))
    }

    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::from_fractions(WIDTH, HEIGHT, 0.0993, 0.0356, 0.0387, 0.105)
    }
}
