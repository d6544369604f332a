// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports public API for chart/figure construction and rendering.

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
pub mod labels;
pub mod figure;
pub mod error;
mod output;

pub use chart::{Chart, GridLines, LegendPosition, RenderOptions};
pub use series::{Series, SeriesType};
pub use axis::{Axis, Ticks};
pub use view::ViewState;
pub use theme::Theme;
pub use text::TextShaper;
pub use labels::{format_shortest, ValueFormat, ValueLabels};
pub use figure::{Cell, Figure, GridSpec};
pub use error::{ChartError, Result};
pub use skia_safe::Color;
