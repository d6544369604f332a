// File: crates/chart-core/src/grid.rs
// Summary: Tick layout helpers (even spacing and "nice" numeric steps).

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Pick a step of 1, 2, 2.5 or 5 times a power of ten so that `[min, max]`
/// holds roughly `target` intervals.
pub fn nice_step(min: f64, max: f64, target: usize) -> f64 {
    let span = (max - min).abs();
    if span < 1e-12 || target == 0 { return 1.0; }
    let raw = span / target as f64;
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let mult = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    mult * mag
}

/// Tick values at multiples of `nice_step` that fall inside `[min, max]`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    let step = nice_step(lo, hi, target);
    let eps = step * 1e-9;
    let scale = 10f64.powi(step_decimals(step) as i32);
    let first = ((lo - eps) / step).ceil() as i64;
    let last = ((hi + eps) / step).floor() as i64;
    (first..=last)
        // snap float noise such as 8.600000000000001
        .map(|k| (k as f64 * step * scale).round() / scale)
        .collect()
}

/// Number of fractional digits needed to print ticks spaced by `step`.
pub fn step_decimals(step: f64) -> usize {
    let mut decimals = 0;
    let mut s = step.abs();
    while decimals < 6 && (s - s.round()).abs() > 1e-6 {
        s *= 10.0;
        decimals += 1;
    }
    decimals
}
