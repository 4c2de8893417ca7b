// File: crates/summary-chart/src/grid.rs
// Summary: Tick layout helpers: evenly spaced, round-number and whole-day ticks.

pub const SECONDS_PER_DAY: f64 = 86_400.0;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Smallest 1/2/5 x 10^k step giving at most about `target` intervals over `span`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span.abs() / target.max(1) as f64;
    if !raw.is_finite() || raw <= 0.0 { return 1.0; }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    nice * mag
}

/// Multiples of `step` inside `[min, max]`.
pub fn ticks_with_step(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !min.is_finite() || !max.is_finite() || max < min { return Vec::new(); }
    let eps = step * 1e-9;
    let first = (min / step).ceil() as i64;
    let mut out = Vec::new();
    for k in first.. {
        let v = k as f64 * step;
        if v > max + eps { break; }
        out.push(v);
    }
    out
}

/// Round-number ticks covering `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    ticks_with_step(min, max, nice_step(max - min, target))
}

/// Ticks on whole-day boundaries (seconds) with a calendar-friendly step.
pub fn day_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    const STEPS_DAYS: [f64; 11] = [1.0, 2.0, 7.0, 14.0, 28.0, 56.0, 91.0, 182.0, 365.0, 730.0, 1461.0];
    let span_days = (max - min) / SECONDS_PER_DAY;
    let raw = span_days / target.max(1) as f64;
    let days = STEPS_DAYS
        .iter()
        .copied()
        .find(|&d| d >= raw)
        .unwrap_or_else(|| (raw / 365.0).ceil() * 365.0);
    ticks_with_step(min, max, days * SECONDS_PER_DAY)
}
