// File: crates/summary-chart/src/axis.rs
// Summary: Axis model with labels, ranges, tick placement and optional calendar-date labels.

use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::grid::{day_ticks, nice_step, ticks_with_step};

/// Render axis values as dates: value `v` is `offset + v` seconds since the
/// Unix epoch, formatted with a chrono `format` string such as `%d/%m/%Y`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeDisplay {
    pub offset: i64,
    pub format: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub time: Option<TimeDisplay>,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, time: None }
    }

    pub fn with_time(mut self, offset: i64, format: impl Into<String>) -> Self {
        self.time = Some(TimeDisplay { offset, format: format.into() });
        self
    }

    pub fn default_x() -> Self {
        Self::new("Date", 0.0, 10.0)
    }

    pub fn default_y() -> Self {
        Self::new("Value", 0.0, 100.0)
    }

    /// Tick positions with their labels, about `target` of them.
    pub fn ticks(&self, target: usize) -> Vec<(f64, String)> {
        match &self.time {
            Some(t) => day_ticks(self.min, self.max, target)
                .into_iter()
                .map(|v| (v, format_time(v, t)))
                .collect(),
            None => {
                let step = nice_step(self.max - self.min, target);
                ticks_with_step(self.min, self.max, step)
                    .into_iter()
                    .map(|v| (v, format_number(v, step)))
                    .collect()
            }
        }
    }
}

/// Enough decimals to tell neighbouring ticks `step` apart.
pub fn format_number(v: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() { (-step.log10().floor()).clamp(0.0, 6.0) as usize } else { 2 };
    format!("{:.*}", decimals, v)
}

/// Calendar label for axis value `v`; falls back to the raw number when the
/// instant is out of range or the format string is invalid.
pub fn format_time(v: f64, time: &TimeDisplay) -> String {
    let secs = time.offset.saturating_add(v.floor() as i64);
    let Some(dt) = DateTime::<Utc>::from_timestamp(secs, 0) else {
        return format!("{v}");
    };
    let mut out = String::new();
    if write!(out, "{}", dt.format(&time.format)).is_err() {
        return format!("{v}");
    }
    out
}
