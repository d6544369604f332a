// File: crates/chart-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for bar charts and figures.
// Behavior:
// - Renders deterministic charts to PNG bytes with text disabled.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chart_core::theme::hex;
use chart_core::{Axis, Cell, Chart, Figure, GridLines, GridSpec, RenderOptions, Series};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn signed_bars() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::categorical("X", ["a", "b", "c", "d"]);
    chart.y_axis = Axis::auto("Y");
    chart.grid = GridLines::Y;
    let values = [-1.57, -0.08, 0.48, -0.4];
    let colors = values.iter().map(|v| if *v < 0.0 { hex(0xe74c3c) } else { hex(0x27ae60) }).collect();
    chart.add_series(Series::bars(values).point_colors(colors).alpha(0.7).edge(0.5));
    chart.add_series(Series::hline(0.0));
    chart.autoscale_axes(0.05);
    chart
}

fn no_text() -> RenderOptions {
    RenderOptions { draw_labels: false, ..RenderOptions::default() }
}

#[test]
fn golden_signed_bars() {
    let bytes = signed_bars().render_to_png_bytes(&no_text()).expect("render bytes");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/signed_bars.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn figure_has_requested_size_and_is_deterministic() {
    let mut fig = Figure::new(GridSpec::new(2, 2).spacing(0.3, 0.4));
    fig.add_panel(Cell::row(0, 2), signed_bars()).unwrap();
    fig.add_panel(Cell::at(1, 1), signed_bars()).unwrap();

    let opts = RenderOptions { draw_labels: false, ..RenderOptions::for_figure(6.0, 4.0, 50.0) };
    let first = fig.render_to_png_bytes(&opts).expect("render figure");
    let second = fig.render_to_png_bytes(&opts).expect("render figure again");

    let a = image::load_from_memory(&first).expect("decode").to_rgba8();
    let b = image::load_from_memory(&second).expect("decode").to_rgba8();
    assert_eq!((a.width(), a.height()), (300, 200));
    assert_eq!(a.as_raw(), b.as_raw());

    // empty cell (row 1, col 0) keeps the figure background
    let px = a.get_pixel(40, 170);
    assert_eq!(px.0, [255, 255, 255, 255]);
}
