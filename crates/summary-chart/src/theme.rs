// File: crates/summary-chart/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_fill: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    /// White publication style; the legend border blends into the background.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 235, 235, 240),
            axis_line: skia::Color::from_argb(255, 20, 20, 25),
            axis_label: skia::Color::from_argb(255, 10, 10, 15),
            tick: skia::Color::from_argb(255, 40, 40, 45),
            legend_fill: skia::Color::from_argb(255, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_fill: skia::Color::from_argb(230, 28, 28, 32),
            legend_border: skia::Color::from_argb(255, 70, 70, 80),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
