// File: crates/summary-chart/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn from_ltwh(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Rectangle in normalized surface coordinates: 0..1 on both axes,
/// origin at the bottom-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdcRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl NdcRect {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Pixel rectangle on a `width` x `height` surface (origin top-left).
    /// Coordinates are clamped to the surface; swapped corners are normalized.
    pub fn to_pixels(&self, width: i32, height: i32) -> RectI32 {
        let (w, h) = (width as f64, height as f64);
        let px = |v: f64| (clamp(v, 0.0, 1.0) * w).round() as i32;
        let py = |v: f64| ((1.0 - clamp(v, 0.0, 1.0)) * h).round() as i32;
        let (l, r) = (px(self.x1.min(self.x2)), px(self.x1.max(self.x2)));
        let (t, b) = (py(self.y1.max(self.y2)), py(self.y1.min(self.y2)));
        RectI32::from_ltrb(l, t, r, b)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
