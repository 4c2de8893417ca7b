// File: crates/energy-composer/src/render.rs
// Summary: Adapter from the backend-neutral chart spec to the Skia chart renderer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use energy_series::compose::{ChartSpec, NdcBox, Rgb};
use energy_series::Series as PointSeries;
use log::info;
use summary_chart::{Annotation, Axis, Chart, Color, ErrorPoint, Insets, Legend, NdcRect, RenderOptions, Series};

fn color(c: Rgb) -> Color {
    Color::from_rgb(c.r, c.g, c.b)
}

fn ndc(b: NdcBox) -> NdcRect {
    NdcRect::new(b.x1, b.y1, b.x2, b.y2)
}

fn points(series: &PointSeries) -> Vec<ErrorPoint> {
    series
        .points
        .iter()
        .map(|p| ErrorPoint::new(p.x, p.y, p.err_low, p.err_high))
        .collect()
}

/// Build the renderer's chart model, axes fitted to the data.
pub fn to_chart(spec: &ChartSpec) -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new(spec.x_axis.title.clone(), 0.0, 1.0);
    if let Some(t) = &spec.x_axis.time {
        chart.x_axis = chart.x_axis.with_time(t.offset, t.format.clone());
    }
    chart.y_axis = Axis::new(spec.y_axis.title.clone(), 0.0, 1.0);
    if let Some(t) = &spec.y_axis.time {
        chart.y_axis = chart.y_axis.with_time(t.offset, t.format.clone());
    }

    for s in &spec.series {
        chart.add_series(Series::with_data(s.label.clone(), color(s.color), points(&s.points)));
    }
    chart.autoscale_axes();

    let mut legend = Legend::new(ndc(spec.legend.area));
    for e in &spec.legend.entries {
        legend.add_entry(e.label.clone(), color(e.color));
    }
    chart.legend = Some(legend);
    chart.annotation = Some(Annotation::new(ndc(spec.annotation.area), spec.annotation.lines.clone()));
    chart
}

pub fn render_options(spec: &ChartSpec) -> RenderOptions {
    let width = spec.width as i32;
    let height = spec.height as i32;
    let m = spec.margins;
    RenderOptions {
        width,
        height,
        insets: Insets::from_fractions(width, height, m.left, m.right, m.top, m.bottom),
        ..RenderOptions::default()
    }
}

/// Render `spec` to a PNG at `output`, replacing any existing file.
pub fn render(spec: &ChartSpec, output: &Path) -> Result<()> {
    to_chart(spec)
        .render_to_png(&render_options(spec), output)
        .with_context(|| format!("rendering chart to {}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(())
}

/// Serialize `spec` as pretty JSON at `output`, replacing any existing file.
pub fn write_spec(spec: &ChartSpec, output: &Path) -> Result<()> {
    let file = File::create(output).with_context(|| format!("creating {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, spec)
        .with_context(|| format!("writing chart spec to {}", output.display()))?;
    writer.flush()?;
    info!("wrote {}", output.display());
    Ok(())
}
