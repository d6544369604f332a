// File: crates/chart-core/src/error.rs
// Summary: Error type shared by chart and figure rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed")]
    Encode,

    #[error("grid cell (row {row}, col {col}, span {span}) is outside the {rows}x{cols} layout")]
    CellOutOfBounds { row: usize, col: usize, span: usize, rows: usize, cols: usize },

    #[error("plot area collapsed to {width}x{height} px")]
    DegenerateLayout { width: i32, height: i32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
