// File: crates/summary-chart/src/lib.rs
// Summary: Library entry point; exports the chart model and headless PNG rendering.

pub mod chart;
pub mod series;
pub mod axis;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod scale;
pub mod view;
pub mod theme;
pub mod text;
pub mod legend;

pub use chart::{Chart, RenderOptions};
pub use series::{ErrorPoint, Series};
pub use axis::{Axis, TimeDisplay};
pub use geometry::NdcRect;
pub use legend::{Annotation, Legend};
pub use types::Insets;
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use skia_safe::Color;
