// File: crates/energy-series/src/series.rs
// Summary: Point series model with asymmetric Y uncertainty.

use serde::{Deserialize, Serialize};

/// One sample: X is seconds since the epoch, Y an energy density.
/// Contract: `err_high` and `err_low` are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub err_high: f64,
    pub err_low: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64, err_high: f64, err_low: f64) -> Self {
        Self { x, y, err_high, err_low }
    }

    /// Point without uncertainty.
    pub const fn exact(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0, 0.0)
    }
}

/// Ordered sequence of points. Operations never reorder it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }
}

