// File: crates/game-insights/src/lib.rs
// Summary: Video game analysis report: fixed tables, derived views, panel layout and digest.

pub mod analysis;
pub mod config;
pub mod datasets;
pub mod panels;
pub mod summary;

use std::path::Path;

use anyhow::{Context, Result};
use chart_core::RenderOptions;

pub use datasets::Datasets;
pub use summary::{EmptyTable, Insights};

/// Render the composite figure to `output` and compute the digest.
pub fn render_report(data: &Datasets, opts: &RenderOptions, output: &Path) -> Result<Insights> {
    let figure = panels::build_figure(data, &opts.theme).context("laying out report panels")?;
    log::debug!("rendering {} panels at {}x{} px", figure.len(), opts.width, opts.height);
    figure
        .render_to_png(opts, output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(Insights::from_datasets(data, output.display().to_string())?)
}
