// File: crates/chart-core/src/series.rs
// Summary: Series model for vertical bars, horizontal bars and reference lines.

use skia_safe as skia;

use crate::labels::ValueLabels;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Bar,    // (x position, value) rising from 0.0
    HBar,   // (y position, value) extending right from 0.0
    VLine,  // vertical reference lines at each x position
    HLine,  // horizontal reference lines at each y position
}

#[derive(Clone, Debug)]
pub struct Series {
    pub series_type: SeriesType,
    /// Legend entry; unnamed series are left out of the legend.
    pub name: Option<String>,
    /// Bar/HBar: (position, value). VLine/HLine: (position, ignored).
    pub data_xy: Vec<(f64, f64)>,
    pub color: skia::Color,
    /// Per-point fill overriding `color` (bars only).
    pub point_colors: Vec<skia::Color>,
    pub alpha: f32,
    /// Bar thickness in data units along the position axis.
    pub bar_width: f64,
    /// Bar outline width in points; 0 disables the outline.
    pub edge_width: f32,
    /// Reference line width in points.
    pub stroke_width: f32,
    /// Dash pattern (on, off) in points for reference lines.
    pub dash: Option<(f32, f32)>,
    pub labels: Option<ValueLabels>,
    /// Drawn against the chart's secondary (right) axis.
    pub secondary: bool,
}

impl Series {
    pub fn new(series_type: SeriesType) -> Self {
        Self {
            series_type,
            name: None,
            data_xy: Vec::new(),
            color: skia::Color::from_argb(255, 31, 119, 180),
            point_colors: Vec::new(),
            alpha: 1.0,
            bar_width: 0.8,
            edge_width: 0.0,
            stroke_width: 1.0,
            dash: None,
            labels: None,
            secondary: false,
        }
    }

    pub fn with_data(series_type: SeriesType, data: Vec<(f64, f64)>) -> Self {
        Self { data_xy: data, ..Self::new(series_type) }
    }

    /// Vertical bars at positions 0, 1, 2, ... (one per category).
    pub fn bars(values: impl IntoIterator<Item = f64>) -> Self {
        Self::with_data(SeriesType::Bar, indexed(values))
    }

    /// Horizontal bars at positions 0, 1, 2, ... (one per category).
    pub fn hbars(values: impl IntoIterator<Item = f64>) -> Self {
        Self::with_data(SeriesType::HBar, indexed(values))
    }

    pub fn vlines(xs: impl IntoIterator<Item = f64>) -> Self {
        Self::with_data(SeriesType::VLine, xs.into_iter().map(|x| (x, 0.0)).collect())
    }

    pub fn hline(y: f64) -> Self {
        Self::with_data(SeriesType::HLine, vec![(y, 0.0)])
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    pub fn point_colors(mut self, colors: Vec<skia::Color>) -> Self {
        self.point_colors = colors;
        self
    }

    pub fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn bar_width(mut self, width: f64) -> Self {
        self.bar_width = width;
        self
    }

    /// Shift every position by `dx` (grouped bars).
    pub fn offset(mut self, dx: f64) -> Self {
        for p in &mut self.data_xy { p.0 += dx; }
        self
    }

    pub fn edge(mut self, width: f32) -> Self {
        self.edge_width = width;
        self
    }

    pub fn stroke(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn dashed(mut self, on: f32, off: f32) -> Self {
        self.dash = Some((on, off));
        self
    }

    pub fn labels(mut self, labels: ValueLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn on_secondary(mut self) -> Self {
        self.secondary = true;
        self
    }

    /// Fill for point `i`, before alpha is applied.
    pub fn fill_at(&self, i: usize) -> skia::Color {
        self.point_colors.get(i).copied().unwrap_or(self.color)
    }

    pub fn is_bar(&self) -> bool {
        matches!(self.series_type, SeriesType::Bar | SeriesType::HBar)
    }
}

fn indexed(values: impl IntoIterator<Item = f64>) -> Vec<(f64, f64)> {
    values.into_iter().enumerate().map(|(i, v)| (i as f64, v)).collect()
}
