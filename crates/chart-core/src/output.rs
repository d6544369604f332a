// File: crates/chart-core/src/output.rs
// Summary: CPU raster surface setup and PNG encode/write shared by charts and figures.

use std::path::Path;

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Allocate a `width`x`height` raster surface, clear it, run `draw`, and
/// return the encoded PNG.
pub(crate) fn render_png<F>(width: i32, height: i32, background: skia::Color, draw: F) -> Result<Vec<u8>>
where
    F: FnOnce(&skia::Canvas) -> Result<()>,
{
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })?;
    let canvas = surface.canvas();
    canvas.clear(background);
    draw(canvas)?;

    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

pub(crate) fn write_png(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
