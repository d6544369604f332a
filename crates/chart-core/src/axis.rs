// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, categorical ticks and styling.

use skia_safe as skia;

/// How tick marks are placed along an axis.
#[derive(Clone, Debug, PartialEq)]
pub enum Ticks {
    /// "Nice" numeric steps across the visible range.
    Auto,
    /// One tick per category at positions 0, 1, 2, ...
    Categories(Vec<String>),
    /// No ticks or tick labels (marker-only axes).
    Hidden,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    /// When set, `Chart::autoscale_axes` replaces `min`/`max` from the data.
    pub autoscale: bool,
    /// Flip direction (first category at the top of a vertical axis).
    pub inverted: bool,
    pub ticks: Ticks,
    /// Label and tick-label color; falls back to the theme text color.
    pub color: Option<skia::Color>,
    /// Axis title size in points.
    pub label_size: f32,
    /// Tick label size in points.
    pub tick_size: f32,
}

impl Axis {
    /// Fixed-range numeric axis.
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self {
            label: label.into(),
            min,
            max,
            autoscale: false,
            inverted: false,
            ticks: Ticks::Auto,
            color: None,
            label_size: 11.0,
            tick_size: 9.0,
        }
    }

    /// Numeric axis whose range is derived from the data.
    pub fn auto(label: impl Into<String>) -> Self {
        let mut a = Self::new(label, 0.0, 1.0);
        a.autoscale = true;
        a
    }

    /// Category axis; category `i` sits at position `i`.
    pub fn categorical<S: Into<String>>(label: impl Into<String>, categories: impl IntoIterator<Item = S>) -> Self {
        let mut a = Self::auto(label);
        a.ticks = Ticks::Categories(categories.into_iter().map(Into::into).collect());
        a
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    pub fn hide_ticks(mut self) -> Self {
        self.ticks = Ticks::Hidden;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_sizes(mut self, label_size: f32, tick_size: f32) -> Self {
        self.label_size = label_size;
        self.tick_size = tick_size;
        self
    }

    pub fn categories(&self) -> &[String] {
        match &self.ticks {
            Ticks::Categories(c) => c,
            _ => &[],
        }
    }

    pub fn default_x() -> Self {
        Self::auto("X")
    }

    pub fn default_y() -> Self {
        Self::auto("Y")
    }
}
