// File: crates/chart-core/src/figure.rs
// Summary: Composite figure: a grid of chart panels rendered onto one raster surface.

use crate::chart::{Chart, DrawContext, RenderOptions};
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::output;
use crate::text::TextShaper;

/// Subplot grid with fractional figure margins and gaps.
///
/// Margins are figure fractions measured from the left/bottom edge;
/// `wspace`/`hspace` are gaps as a fraction of the average cell width/height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub wspace: f32,
    pub hspace: f32,
}

impl GridSpec {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols, left: 0.125, right: 0.9, bottom: 0.11, top: 0.88, wspace: 0.2, hspace: 0.2 }
    }

    pub fn margins(mut self, left: f32, bottom: f32, right: f32, top: f32) -> Self {
        self.left = left;
        self.bottom = bottom;
        self.right = right;
        self.top = top;
        self
    }

    pub fn spacing(mut self, wspace: f32, hspace: f32) -> Self {
        self.wspace = wspace;
        self.hspace = hspace;
        self
    }

    /// Plot-area rectangle of `cell` on a `width`x`height` surface.
    pub fn cell_rect(&self, cell: Cell, width: i32, height: i32) -> Result<RectI32> {
        if self.rows == 0
            || self.cols == 0
            || cell.col_span == 0
            || cell.row >= self.rows
            || cell.col + cell.col_span > self.cols
        {
            return Err(ChartError::CellOutOfBounds {
                row: cell.row,
                col: cell.col,
                span: cell.col_span,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let (w, h) = (width as f32, height as f32);
        let avail_w = (self.right - self.left) * w;
        let cell_w = avail_w / (self.cols as f32 + self.wspace * (self.cols as f32 - 1.0));
        let sep_w = self.wspace * cell_w;
        let avail_h = (self.top - self.bottom) * h;
        let cell_h = avail_h / (self.rows as f32 + self.hspace * (self.rows as f32 - 1.0));
        let sep_h = self.hspace * cell_h;

        let left = self.left * w + cell.col as f32 * (cell_w + sep_w);
        let right = left + cell.col_span as f32 * cell_w + (cell.col_span as f32 - 1.0) * sep_w;
        let top = (1.0 - self.top) * h + cell.row as f32 * (cell_h + sep_h);
        let bottom = top + cell_h;

        let rect = RectI32::from_ltrb(left.round() as i32, top.round() as i32, right.round() as i32, bottom.round() as i32);
        if rect.is_empty() {
            return Err(ChartError::DegenerateLayout { width: rect.width(), height: rect.height() });
        }
        Ok(rect)
    }
}

/// Grid position of one panel; a panel may span several columns of its row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub col_span: usize,
}

impl Cell {
    pub const fn at(row: usize, col: usize) -> Self {
        Self { row, col, col_span: 1 }
    }

    /// The whole row.
    pub const fn row(row: usize, cols: usize) -> Self {
        Self { row, col: 0, col_span: cols }
    }
}

pub struct Figure {
    pub grid: GridSpec,
    panels: Vec<(Cell, Chart)>,
}

impl Figure {
    pub fn new(grid: GridSpec) -> Self {
        Self { grid, panels: Vec::new() }
    }

    /// Place `chart` at `cell`; rejects cells outside the grid.
    pub fn add_panel(&mut self, cell: Cell, chart: Chart) -> Result<()> {
        // validate against an arbitrary non-degenerate surface
        self.grid.cell_rect(cell, 1000, 1000)?;
        self.panels.push((cell, chart));
        Ok(())
    }

    pub fn panels(&self) -> impl Iterator<Item = (&Cell, &Chart)> {
        self.panels.iter().map(|(c, ch)| (c, ch))
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let rects = self
            .panels
            .iter()
            .map(|(cell, _)| self.grid.cell_rect(*cell, opts.width, opts.height))
            .collect::<Result<Vec<_>>>()?;

        let text = TextShaper::new();
        let ctx = DrawContext { theme: &opts.theme, text: &text, dpi: opts.dpi, draw_labels: opts.draw_labels };
        output::render_png(opts.width, opts.height, opts.theme.background, |canvas| {
            for ((cell, chart), rect) in self.panels.iter().zip(&rects) {
                log::debug!(
                    "drawing panel {:?} at row {} col {} ({}x{} px)",
                    chart.title.as_deref().unwrap_or("untitled"),
                    cell.row,
                    cell.col,
                    rect.width(),
                    rect.height()
                );
                chart.draw(canvas, *rect, &ctx);
            }
            Ok(())
        })
    }

    /// Render every panel into one PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        output::write_png(output_png_path.as_ref(), &bytes)
    }
}
