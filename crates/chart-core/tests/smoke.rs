// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use chart_core::{Axis, Chart, RenderOptions, Series, ValueFormat, ValueLabels};

#[test]
fn render_smoke_png() {
    // Minimal data: three labeled bars
    let mut chart = Chart::new().with_title("Smoke");
    chart.x_axis = Axis::categorical("Year", ["2001", "2002", "2003"]);
    chart.y_axis = Axis::auto("Score");
    chart.add_series(
        Series::bars([1.0, 2.5, 1.5])
            .edge(0.5)
            .labels(ValueLabels::new(ValueFormat::Fixed(1)).offset(0.05)),
    );
    chart.autoscale_axes(0.05);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn degenerate_insets_are_rejected() {
    let chart = Chart::new();
    let mut opts = RenderOptions::default();
    opts.width = 100;
    opts.height = 100;
    let err = chart.render_to_png_bytes(&opts).unwrap_err();
    assert!(matches!(err, chart_core::ChartError::DegenerateLayout { .. }), "got {err}");
}
