// File: crates/chart-core/src/scale.rs
// Summary: Linear value scale mapping a data range onto a pixel span.

/// Value coordinate (e.g. units sold, score, year).
pub type Value = f64;

/// Maps `[vmin, vmax]` onto `[start_px, end_px]`.
///
/// A vertical axis is built with `start_px = bottom` and `end_px = top` so
/// larger values sit higher; swapping them inverts the axis.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: Value,
    pub vmax: Value,
}

impl ValueScale {
    pub fn new(start_px: f32, end_px: f32, vmin: Value, vmax: Value) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let span = self.vmax - self.vmin;
        self.start_px + ((v - self.vmin) / span) as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let span = self.vmax - self.vmin;
        let extent = (self.end_px - self.start_px) as f64;
        if extent.abs() < 1e-9 { return self.vmin; }
        self.vmin + (px - self.start_px) as f64 / extent * span
    }

    /// Pixel length of `dv` data units (always non-negative).
    #[inline]
    pub fn len_px(&self, dv: Value) -> f32 {
        (self.to_px(self.vmin + dv) - self.start_px).abs()
    }

    pub fn contains(&self, v: Value) -> bool {
        let (lo, hi) = if self.vmin <= self.vmax { (self.vmin, self.vmax) } else { (self.vmax, self.vmin) };
        v >= lo && v <= hi
    }
}
