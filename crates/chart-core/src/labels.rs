// File: crates/chart-core/src/labels.rs
// Summary: Number formatting and value-label settings for bar series.

/// How a bar's value is turned into label text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// Fixed number of fractional digits (`{:.N}`).
    Fixed(usize),
    /// Shortest round-trip form, always with a fractional part (`40.0`, `82.9`).
    Shortest,
}

impl ValueFormat {
    pub fn apply(&self, v: f64) -> String {
        match *self {
            ValueFormat::Fixed(decimals) => format!("{:.*}", decimals, v),
            ValueFormat::Shortest => format_shortest(v),
        }
    }
}

/// Shortest representation that round-trips, keeping at least one fractional digit.
pub fn format_shortest(v: f64) -> String {
    let s = format!("{v}");
    if v.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

/// Labels drawn at the end of each bar.
///
/// Offsets are in data units along the value axis: a non-negative bar gets its
/// label `offset` past the bar end, a negative bar `negative_offset` past it on
/// the other side.
#[derive(Clone, Debug)]
pub struct ValueLabels {
    pub format: ValueFormat,
    pub suffix: String,
    pub offset: f64,
    pub negative_offset: f64,
    /// Font size in points.
    pub size: f32,
    pub bold: bool,
}

impl ValueLabels {
    pub fn new(format: ValueFormat) -> Self {
        Self { format, suffix: String::new(), offset: 0.0, negative_offset: 0.0, size: 8.0, bold: true }
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Sets both offsets; call `negative_offset` afterwards to split them.
    pub fn offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self.negative_offset = offset;
        self
    }

    pub fn negative_offset(mut self, offset: f64) -> Self {
        self.negative_offset = offset;
        self
    }

    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn text(&self, v: f64) -> String {
        format!("{}{}", self.format.apply(v), self.suffix)
    }

    /// Signed distance from the bar end to the label anchor.
    pub fn signed_offset(&self, v: f64) -> f64 {
        if v >= 0.0 { self.offset } else { -self.negative_offset }
    }
}
