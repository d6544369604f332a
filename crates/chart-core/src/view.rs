// File: crates/chart-core/src/view.rs
// View state: data extents of a chart and the padded ranges used for autoscale.

use crate::series::SeriesType;
use crate::Chart;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

#[derive(Default)]
struct Extent {
    lo: f64,
    hi: f64,
    any: bool,
    // a bar baseline sits on this axis; 0.0 is not padded past
    sticky_zero: bool,
}

impl Extent {
    fn include(&mut self, v: f64) {
        if !v.is_finite() { return; }
        if self.any {
            self.lo = self.lo.min(v);
            self.hi = self.hi.max(v);
        } else {
            self.lo = v;
            self.hi = v;
            self.any = true;
        }
    }

    fn padded(&self, margin: f64) -> (f64, f64) {
        if !self.any { return (0.0, 1.0); }
        let (mut lo, mut hi) = (self.lo, self.hi);
        if (hi - lo).abs() < 1e-9 {
            lo -= 0.5;
            hi += 0.5;
        }
        let m = (hi - lo) * margin;
        let lo = if self.sticky_zero && lo == 0.0 { lo } else { lo - m };
        let hi = if self.sticky_zero && hi == 0.0 { hi } else { hi + m };
        (lo, hi)
    }
}

impl ViewState {
    /// Extents of all primary series, padded by `margin` (fraction of span)
    /// on each side. Bars include their 0.0 baseline and half their width.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x = Extent::default();
        let mut y = Extent::default();
        for s in &chart.series {
            let half = s.bar_width * 0.5;
            match s.series_type {
                SeriesType::Bar => {
                    for &(p, v) in &s.data_xy {
                        x.include(p - half);
                        x.include(p + half);
                        if !s.secondary {
                            y.include(0.0);
                            y.include(v);
                            y.sticky_zero = true;
                        }
                    }
                }
                SeriesType::HBar => {
                    for &(p, v) in &s.data_xy {
                        y.include(p - half);
                        y.include(p + half);
                        x.include(0.0);
                        x.include(v);
                        x.sticky_zero = true;
                    }
                }
                SeriesType::VLine => {
                    for &(p, _) in &s.data_xy { x.include(p); }
                }
                SeriesType::HLine => {
                    if !s.secondary {
                        for &(p, _) in &s.data_xy { y.include(p); }
                    }
                }
            }
        }
        let (x_min, x_max) = x.padded(margin);
        let (y_min, y_max) = y.padded(margin);
        Self { x_min, x_max, y_min, y_max }
    }

    /// Copy ranges onto the axes that ask for autoscale; fixed axes are kept.
    pub fn apply_to_chart(&self, chart: &mut Chart) {
        if chart.x_axis.autoscale {
            chart.x_axis.min = self.x_min;
            chart.x_axis.max = self.x_max;
        }
        if chart.y_axis.autoscale {
            chart.y_axis.min = self.y_min;
            chart.y_axis.max = self.y_max;
        }
    }
}
