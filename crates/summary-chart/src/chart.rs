// File: crates/summary-chart/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.

use anyhow::Result;
use skia_safe as skia;

use crate::geometry::RectI32;
use crate::legend::{Annotation, Legend};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, WIDTH, HEIGHT};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw text (tick labels, titles, legend labels, annotation).
    /// Tests turn this off to avoid font variance across platforms.
    pub draw_labels: bool,
    pub label_size: f32,
    pub title_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            label_size: 20.0,
            title_size: 22.0,
        }
    }
}

pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<Legend>,
    pub annotation: Option<Annotation>,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            legend: None,
            annotation: None,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axis ranges to the data, error bands included.
    pub fn autoscale_axes(&mut self) {
        ViewState::from_chart(self).apply_to_chart(self);
    }

    /// Render the chart and encode it as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        // Create raster surface
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let plot = RectI32::from_ltrb(
            opts.insets.left as i32,
            opts.insets.top as i32,
            opts.width - opts.insets.right as i32,
            opts.height - opts.insets.bottom as i32,
        );
        if plot.width() <= 0 || plot.height() <= 0 {
            anyhow::bail!("insets leave no room for the plot area");
        }
        let sx = LinearScale::new(plot.left as f32, plot.right as f32, self.x_axis.min, self.x_axis.max);
        let sy = LinearScale::new(plot.bottom as f32, plot.top as f32, self.y_axis.min, self.y_axis.max);

        let x_ticks = self.x_axis.ticks(7);
        let y_ticks = self.y_axis.ticks(6);
        let shaper = opts.draw_labels.then(TextShaper::new);

        draw_grid(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, &opts.theme);

        // Series, clipped to the plot area; later series paint over earlier ones
        canvas.save();
        canvas.clip_rect(to_rect(plot), skia::ClipOp::Intersect, true);
        for s in &self.series {
            draw_band_series(canvas, &sx, &sy, s);
        }
        canvas.restore();

        draw_axes(canvas, plot, &sx, &sy, &x_ticks, &y_ticks, opts);
        if let Some(shaper) = &shaper {
            draw_axis_labels(canvas, shaper, plot, &sx, &sy, &x_ticks, &y_ticks, &self.x_axis, &self.y_axis, opts);
        }
        if let Some(legend) = &self.legend {
            draw_legend(canvas, shaper.as_ref(), legend, opts);
        }
        if let (Some(annotation), Some(shaper)) = (&self.annotation, &shaper) {
            draw_annotation(canvas, shaper, annotation, opts);
        }

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, replacing any existing file.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn draw_grid(
    canvas: &skia::Canvas,
    plot: RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // verticals
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, plot.top as f32), (x, plot.bottom as f32), &paint);
    }
    // horizontals
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((plot.left as f32, y), (plot.right as f32, y), &paint);
    }
}

fn draw_axes(
    canvas: &skia::Canvas,
    plot: RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    opts: &RenderOptions,
) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(opts.theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.5);

    // Frame around the plot area
    canvas.draw_rect(to_rect(plot), &axis_paint);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(opts.theme.tick);
    tick_paint.set_anti_alias(true);
    tick_paint.set_stroke_width(1.0);

    let tick_len = 8.0;
    let (l, b) = (plot.left as f32, plot.bottom as f32);
    for (v, _) in x_ticks {
        let x = sx.to_px(*v);
        canvas.draw_line((x, b), (x, b - tick_len), &tick_paint);
    }
    for (v, _) in y_ticks {
        let y = sy.to_px(*v);
        canvas.draw_line((l, y), (l + tick_len, y), &tick_paint);
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_axis_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    plot: RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[(f64, String)],
    y_ticks: &[(f64, String)],
    x_axis: &Axis,
    y_axis: &Axis,
    opts: &RenderOptions,
) {
    let color = opts.theme.axis_label;
    let size = opts.label_size;
    let (l, r, b) = (plot.left as f32, plot.right as f32, plot.bottom as f32);

    for (v, label) in x_ticks {
        shaper.draw_centered(canvas, label, sx.to_px(*v), b + size + 4.0, size, color, false);
    }
    for (v, label) in y_ticks {
        shaper.draw_right(canvas, label, l - 6.0, sy.to_px(*v) + size * 0.35, size, color, false);
    }

    // Titles: X at the right end below the labels, Y rotated at the left edge
    let title = opts.title_size;
    let x_title_w = shaper.measure_width(&x_axis.label, title, true);
    shaper.draw_left(canvas, &x_axis.label, r - x_title_w, b + size + title + 12.0, title, color, true);
    shaper.draw_vertical(canvas, &y_axis.label, title * 0.9, (plot.top as f32 + b) * 0.5, title, color, true);
}

fn draw_band_series(canvas: &skia::Canvas, sx: &LinearScale, sy: &LinearScale, series: &Series) {
    let data = &series.data;
    if data.is_empty() {
        return;
    }

    // Band: upper edge left to right, lower edge back
    let mut band = skia::Path::new();
    band.move_to((sx.to_px(data[0].x), sy.to_px(data[0].upper())));
    for p in data.iter().skip(1) {
        band.line_to((sx.to_px(p.x), sy.to_px(p.upper())));
    }
    for p in data.iter().rev() {
        band.line_to((sx.to_px(p.x), sy.to_px(p.lower())));
    }
    band.close();

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(series.fill_color());
    canvas.draw_path(&band, &fill);

    if data.len() < 2 {
        return;
    }
    let mut line = skia::Path::new();
    line.move_to((sx.to_px(data[0].x), sy.to_px(data[0].y)));
    for p in data.iter().skip(1) {
        line.line_to((sx.to_px(p.x), sy.to_px(p.y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(series.color);
    canvas.draw_path(&line, &stroke);
}

fn draw_legend(canvas: &skia::Canvas, shaper: Option<&TextShaper>, legend: &Legend, opts: &RenderOptions) {
    let area = legend.area.to_pixels(opts.width, opts.height);
    if area.width() <= 0 || area.height() <= 0 {
        return;
    }

    let mut fill = skia::Paint::default();
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(opts.theme.legend_fill);
    canvas.draw_rect(to_rect(area), &fill);

    let mut border = skia::Paint::default();
    border.set_style(skia::paint::Style::Stroke);
    border.set_stroke_width(1.0);
    border.set_color(opts.theme.legend_border);
    canvas.draw_rect(to_rect(area), &border);

    if legend.entries.is_empty() {
        return;
    }
    let row_h = area.height() / legend.entries.len() as i32;
    let swatch_w = (area.width() / 4).min(48);
    let swatch_h = (row_h * 3 / 5).max(1);
    let pad = 8;

    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    swatch.set_style(skia::paint::Style::Fill);

    for (i, (label, color)) in legend.entries.iter().enumerate() {
        let row_top = area.top + row_h * i as i32;
        let sw = RectI32::from_ltwh(area.left + pad, row_top + (row_h - swatch_h) / 2, swatch_w, swatch_h);
        swatch.set_color(*color);
        canvas.draw_rect(to_rect(sw), &swatch);

        if let Some(shaper) = shaper {
            let size = opts.label_size;
            let baseline = row_top as f32 + row_h as f32 * 0.5 + size * 0.35;
            shaper.draw_left(canvas, label, (sw.right + pad) as f32, baseline, size, opts.theme.axis_label, true);
        }
    }
}

fn draw_annotation(canvas: &skia::Canvas, shaper: &TextShaper, annotation: &Annotation, opts: &RenderOptions) {
    let area = annotation.area.to_pixels(opts.width, opts.height);
    if annotation.lines.is_empty() || area.height() <= 0 {
        return;
    }
    let size = opts.label_size;
    let row_h = area.height() as f32 / annotation.lines.len() as f32;
    for (i, line) in annotation.lines.iter().enumerate() {
        let baseline = area.top as f32 + row_h * (i as f32 + 0.5) + size * 0.35;
        shaper.draw_left(canvas, line, area.left as f32 + 4.0, baseline, size, opts.theme.axis_label, false);
    }
}
