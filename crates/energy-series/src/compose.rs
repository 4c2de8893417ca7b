// File: crates/energy-series/src/compose.rs
// Summary: Pure composition of scaled scenarios into a backend-neutral chart description.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ComposeError;
use crate::scale::{scale_in_place, ErrorPolicy};
use crate::series::Series;
use crate::time::EPOCH_UNIX_SECONDS;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self { Self { r, g, b } }

    pub const PASTEL_RED: Rgb = Rgb::new(255, 102, 102);
    pub const PASTEL_GREEN: Rgb = Rgb::new(102, 204, 102);
    pub const PASTEL_BLUE: Rgb = Rgb::new(102, 102, 255);
}

/// One input dataset with its legend label and render color.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    pub label: String,
    pub color: Rgb,
    pub series: Series,
}

impl Scenario {
    pub fn new(label: impl Into<String>, color: Rgb, series: Series) -> Self {
        Self { label: label.into(), color, series }
    }
}

/// Canvas margins as fractions of the canvas width/height.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Box in normalized canvas coordinates: 0..1, origin at the bottom-left.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct NdcBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl NdcBox {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self { Self { x1, y1, x2, y2 } }
}

/// Geographic location of the simulated site (annotation only).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub latitude: f64,
    pub longitude: f64,
}

/// Everything `compose` needs besides the data itself.
#[derive(Clone, Debug, PartialEq)]
pub struct Composition {
    pub efficiency: f64,
    pub error_policy: ErrorPolicy,
    pub site: Site,
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub legend_box: NdcBox,
    pub annotation_box: NdcBox,
    pub x_title: String,
    pub y_title: String,
    pub time_format: String,
}

impl Default for Composition {
    fn default() -> Self {
        Self {
            efficiency: 0.2,
            error_policy: ErrorPolicy::default(),
            site: Site { latitude: 52.4, longitude: -1.56 },
            width: 1247,
            height: 666,
            margins: Margins { left: 0.0993, right: 0.0356, top: 0.0387, bottom: 0.105 },
            legend_box: NdcBox::new(0.751, 0.773, 0.952, 0.940),
            annotation_box: NdcBox::new(0.117, 0.772, 0.582, 0.940),
            x_title: "Date".to_string(),
            y_title: "Energy Density [kWh m⁻² day⁻¹]".to_string(),
            time_format: "%d/%m/%Y".to_string(),
        }
    }
}

/// X values are seconds after `offset` (a Unix timestamp), shown with a
/// chrono `format` string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeAxis {
    pub offset: i64,
    pub format: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub title: String,
    pub time: Option<TimeAxis>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub label: String,
    pub color: Rgb,
    pub points: Series,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendSpec {
    pub area: NdcBox,
    pub entries: Vec<LegendEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSpec {
    pub area: NdcBox,
    pub lines: Vec<String>,
}

/// Backend-neutral description of the finished chart. Series are drawn in
/// order, later ones on top.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: u32,
    pub height: u32,
    pub margins: Margins,
    pub x_axis: AxisSpec,
    pub y_axis: AxisSpec,
    pub series: Vec<SeriesSpec>,
    pub legend: LegendSpec,
    pub annotation: AnnotationSpec,
}

/// Scale every scenario by the efficiency factor and lay them out on one chart.
pub fn compose(inputs: Vec<Scenario>, composition: &Composition) -> Result<ChartSpec, ComposeError> {
    let factor = composition.efficiency;
    if !factor.is_finite() || factor <= 0.0 {
        return Err(ComposeError::InvalidEfficiency(factor));
    }
    if inputs.is_empty() {
        return Err(ComposeError::NoScenarios);
    }

    let mut series = Vec::with_capacity(inputs.len());
    for Scenario { label, color, series: mut points } in inputs {
        if points.is_empty() {
            warn!("scenario '{}' has no points", label);
        }
        scale_in_place(&mut points, factor, composition.error_policy);
        series.push(SeriesSpec { label, color, points });
    }
    info!(
        "composed {} series (efficiency {}, {:?} errors)",
        series.len(),
        factor,
        composition.error_policy
    );

    let entries = series
        .iter()
        .map(|s| LegendEntry { label: s.label.clone(), color: s.color })
        .collect();

    let site = composition.site;
    let lines = vec![
        "Simulation".to_string(),
        format!("Latitude = {} ; Longitude = {}", site.latitude, site.longitude),
        format!("Efficiency (PV module) = {}", factor),
    ];

    Ok(ChartSpec {
        width: composition.width,
        height: composition.height,
        margins: composition.margins,
        x_axis: AxisSpec {
            title: composition.x_title.clone(),
            time: Some(TimeAxis { offset: EPOCH_UNIX_SECONDS, format: composition.time_format.clone() }),
        },
        y_axis: AxisSpec { title: composition.y_title.clone(), time: None },
        series,
        legend: LegendSpec { area: composition.legend_box, entries },
        annotation: AnnotationSpec { area: composition.annotation_box, lines },
    })
}
