// File: crates/benchplot-skia/src/lib.rs
// Summary: Skia raster backend for benchplot charts; PNG and in-memory RGBA output.

use std::path::Path;

use anyhow::{Context, Result};
use benchplot_core::{render, Dataset, RenderOptions};

pub mod backend;
pub mod frame;
pub mod marker;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod text;

pub use backend::SkiaBackend;
pub use frame::Frame;
pub use raster::{rasterize, Insets};
pub use scene::{Scene, SceneTrace};

/// Render `dataset` and write it to `path` as PNG.
pub fn render_png(dataset: &Dataset, options: &RenderOptions, path: impl AsRef<Path>) -> Result<()> {
    let mut backend = SkiaBackend::to_png(path.as_ref());
    render(dataset, options, &mut backend)?;
    Ok(())
}

/// Render `dataset` to an in-memory RGBA frame.
pub fn render_frame(dataset: &Dataset, options: &RenderOptions) -> Result<Frame> {
    let mut backend = SkiaBackend::in_memory();
    render(dataset, options, &mut backend)?;
    backend.into_frame().context("backend produced no frame")
}

/// Render `dataset` to encoded PNG bytes.
pub fn render_png_bytes(dataset: &Dataset, options: &RenderOptions) -> Result<Vec<u8>> {
    render_frame(dataset, options)?.to_png_bytes()
}
