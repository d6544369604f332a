// File: crates/chart-core/benches/render_bench.rs
// Summary: Measures PNG rendering of a grid of bar panels.

use anyhow::Result;
use chart_core::{Axis, Cell, Chart, Figure, GridLines, GridSpec, RenderOptions, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_bars(n: usize) -> Chart {
    let mut ch = Chart::new();
    let values = (0..n).map(|i| ((i as f64) * 0.7).sin().abs() * 10.0 + 1.0);
    ch.x_axis = Axis::categorical("X", (0..n).map(|i| i.to_string()));
    ch.y_axis = Axis::auto("Y");
    ch.grid = GridLines::Y;
    ch.add_series(Series::bars(values).edge(0.5));
    ch.autoscale_axes(0.05);
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[10usize, 100usize] {
        group.bench_function(format!("figure_4x2_bars_{n}"), |b| {
            let mut fig = Figure::new(GridSpec::new(4, 2));
            for row in 0..4 {
                for col in 0..2 {
                    fig.add_panel(Cell::at(row, col), build_bars(n)).expect("cell in grid");
                }
            }
            let mut opts = RenderOptions::for_figure(12.0, 15.0, 72.0);
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = fig.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
