//! Minimal host loop: one Cairo image surface, one scene, PNG out.

use crate::config::Config;
use crate::draw::{CairoSurface, Renderer, Size};
use crate::scene::Scene;
use anyhow::{Context, Result};
use std::path::Path;

/// Surface size and cycle count for a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOptions {
    pub width: i32,
    pub height: i32,
    pub frames: u32,
}

impl RunOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.output.width,
            height: config.output.height,
            frames: config.output.frames,
        }
    }
}

/// Initializes `scene`, renders it `options.frames` times and writes the
/// final surface to `output` as PNG.
pub fn render_to_png(
    scene: &mut dyn Scene,
    config: &Config,
    options: RunOptions,
    output: &Path,
) -> Result<()> {
    let mut surface = CairoSurface::image(options.width, options.height)
        .context("Failed to create image surface")?;

    {
        let size = Size::new(options.width as f64, options.height as f64);
        let mut renderer = Renderer::with_defaults(&mut surface, size, config.drawing_state());
        renderer.init(scene).context("Scene init failed")?;
        for frame in 0..options.frames.max(1) {
            renderer
                .render(scene)
                .with_context(|| format!("Render cycle {frame} failed"))?;
        }
    }

    surface
        .write_png(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!(
        "Wrote {}x{} image to {}",
        options.width,
        options.height,
        output.display()
    );
    Ok(())
}
