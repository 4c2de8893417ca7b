// File: crates/summary-chart/src/scale.rs
// Summary: Linear value-to-pixel transform shared by the X and Y axes.

/// Maps `[v_min, v_max]` onto `[px_start, px_end]`. For a Y axis pass the
/// bottom pixel as `px_start` so larger values go up.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub v_min: f64,
    pub v_max: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, v_min: f64, v_max: f64) -> Self {
        let mut s = Self { px_start, px_end, v_min, v_max };
        if (s.v_max - s.v_min).abs() < 1e-12 { s.v_max = s.v_min + 1.0; }
        s
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.v_max - self.v_min;
        self.px_start + ((v - self.v_min) / span) as f32 * (self.px_end - self.px_start)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = (self.px_end - self.px_start) as f64;
        if span.abs() < 1e-9 { return self.v_min; }
        self.v_min + (px - self.px_start) as f64 / span * (self.v_max - self.v_min)
    }
}
