// File: crates/energy-series/src/scale.rs
// Summary: Multiplies Y and its uncertainty bounds by a constant factor, X untouched.

use serde::{Deserialize, Serialize};

use crate::series::Series;

/// How the lower uncertainty bound is derived when scaling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Each bound is scaled from its own original value.
    #[default]
    Independent,
    /// Both bounds become the scaled upper bound; the original lower bound
    /// is discarded. Reproduces charts made by the earlier Python tooling.
    MirrorUpper,
}

/// Scale every point of `series` by `factor` in place.
/// Point count, order and X values are unchanged.
pub fn scale_in_place(series: &mut Series, factor: f64, policy: ErrorPolicy) {
    for p in &mut series.points {
        let high = p.err_high * factor;
        let low = match policy {
            ErrorPolicy::Independent => p.err_low * factor,
            ErrorPolicy::MirrorUpper => high,
        };
        p.y *= factor;
        p.err_high = high;
        p.err_low = low;
    }
}

/// Copying variant of [`scale_in_place`].
pub fn scaled(series: &Series, factor: f64, policy: ErrorPolicy) -> Series {
    let mut out = series.clone();
    scale_in_place(&mut out, factor, policy);
    out
}
