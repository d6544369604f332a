// File: crates/chart-core/tests/layout.rs
// Purpose: Subplot grid geometry and panel placement errors.

use chart_core::geometry::RectI32;
use chart_core::{Cell, Chart, ChartError, Figure, GridSpec};

fn report_grid() -> GridSpec {
    GridSpec::new(4, 2).margins(0.08, 0.08, 0.95, 0.96).spacing(0.3, 0.4)
}

#[test]
fn cells_follow_margins_and_spacing() {
    let g = report_grid();
    assert_eq!(g.cell_rect(Cell::row(0, 2), 2400, 3000).unwrap(), RectI32::from_ltrb(192, 120, 2280, 628));
    assert_eq!(g.cell_rect(Cell::at(1, 0), 2400, 3000).unwrap(), RectI32::from_ltrb(192, 831, 1100, 1338));
    assert_eq!(g.cell_rect(Cell::at(3, 1), 2400, 3000).unwrap(), RectI32::from_ltrb(1372, 2252, 2280, 2760));
}

#[test]
fn cells_do_not_overlap() {
    let g = report_grid();
    let left = g.cell_rect(Cell::at(2, 0), 2400, 3000).unwrap();
    let right = g.cell_rect(Cell::at(2, 1), 2400, 3000).unwrap();
    let below = g.cell_rect(Cell::at(3, 0), 2400, 3000).unwrap();
    assert!(left.right < right.left);
    assert!(left.bottom < below.top);
    assert_eq!(left.width(), right.width());
}

#[test]
fn out_of_grid_cells_are_rejected() {
    let g = report_grid();
    assert!(matches!(g.cell_rect(Cell::at(4, 0), 2400, 3000), Err(ChartError::CellOutOfBounds { .. })));
    assert!(matches!(g.cell_rect(Cell { row: 0, col: 1, col_span: 2 }, 2400, 3000), Err(ChartError::CellOutOfBounds { .. })));

    let mut fig = Figure::new(g);
    assert!(fig.add_panel(Cell::at(0, 2), Chart::new()).is_err());
    assert!(fig.is_empty());
    fig.add_panel(Cell::at(0, 1), Chart::new()).unwrap();
    assert_eq!(fig.len(), 1);
}
