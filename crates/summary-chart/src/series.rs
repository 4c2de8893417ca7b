// File: crates/summary-chart/src/series.rs
// Summary: Band series model: labelled, colored points with asymmetric Y errors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorPoint {
    pub x: f64,
    pub y: f64,
    pub err_low: f64,
    pub err_high: f64,
}

impl ErrorPoint {
    pub const fn new(x: f64, y: f64, err_low: f64, err_high: f64) -> Self {
        Self { x, y, err_low, err_high }
    }

    /// Try to construct a point enforcing non-negative error bounds.
    pub fn try_new(x: f64, y: f64, err_low: f64, err_high: f64) -> Result<Self, &'static str> {
        if err_low < 0.0 { return Err("negative lower error"); }
        if err_high < 0.0 { return Err("negative upper error"); }
        Ok(Self { x, y, err_low, err_high })
    }

    pub fn lower(&self) -> f64 { self.y - self.err_low }
    pub fn upper(&self) -> f64 { self.y + self.err_high }
}

/// Drawn as a filled band between `lower()` and `upper()` with the central
/// line stroked on top. Points are drawn in the order given.
#[derive(Clone, Debug)]
pub struct Series {
    pub label: String,
    pub color: skia::Color,
    pub data: Vec<ErrorPoint>,
    /// Alpha of the band fill; the line is always opaque.
    pub fill_alpha: u8,
}

impl Series {
    pub fn new(label: impl Into<String>, color: skia::Color) -> Self {
        Self { label: label.into(), color, data: Vec::new(), fill_alpha: 160 }
    }

    pub fn with_data(label: impl Into<String>, color: skia::Color, data: Vec<ErrorPoint>) -> Self {
        Self { data, ..Self::new(label, color) }
    }

    /// Plain (x, y) samples without uncertainty.
    pub fn from_xy(label: impl Into<String>, color: skia::Color, data: &[(f64, f64)]) -> Self {
        let data = data.iter().map(|&(x, y)| ErrorPoint::new(x, y, 0.0, 0.0)).collect();
        Self::with_data(label, color, data)
    }

    pub fn with_fill_alpha(mut self, alpha: u8) -> Self {
        self.fill_alpha = alpha;
        self
    }

    pub fn fill_color(&self) -> skia::Color {
        skia::Color::from_argb(self.fill_alpha, self.color.r(), self.color.g(), self.color.b())
    }

    /// (x_min, x_max, y_min, y_max) including the error band, `None` when empty.
    pub fn extents(&self) -> Option<(f64, f64, f64, f64)> {
        if self.data.is_empty() { return None; }
        let mut e = (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY);
        for p in &self.data {
            e.0 = e.0.min(p.x);
            e.1 = e.1.max(p.x);
            e.2 = e.2.min(p.lower());
            e.3 = e.3.max(p.upper());
        }
        Some(e)
    }
}
