//! Render drivers.
//!
//! Each pixel is traced independently, so the parallel driver simply hands
//! whole rows to rayon and reassembles them in order. Both drivers produce
//! identical images.

use std::time::Instant;

use log::{debug, info};
use phos_core::{Color, Image, ImageError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tracer::trace_ray;
use crate::Scene;

/// Errors from the render driver.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Failed to assemble image: {0}")]
    Image(#[from] ImageError),
}

/// How pixels are dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// One row after another on the calling thread
    Sequential,
    /// Rows distributed over a rayon pool
    #[default]
    Parallel,
}

/// Render driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub mode: RenderMode,
    /// Worker count for a dedicated pool; `None` uses rayon's global pool.
    /// Ignored in sequential mode.
    pub threads: Option<usize>,
}

/// Color of pixel column `x`, row `y`.
pub fn render_pixel(scene: &Scene, x: u32, y: u32) -> Color {
    trace_ray(&scene.camera.get_ray(x, y), scene, 0)
}

fn render_row(scene: &Scene, y: u32) -> Vec<Color> {
    (0..scene.camera.horizontal_resolution())
        .map(|x| render_pixel(scene, x, y))
        .collect()
}

/// Render on the calling thread, row by row.
pub fn render_sequential(scene: &Scene) -> Image {
    let width = scene.camera.horizontal_resolution();
    let height = scene.camera.vertical_resolution();

    let mut image = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(x, y, render_pixel(scene, x, y));
        }
    }
    image
}

/// Render with one rayon task per row on the current pool.
pub fn render_parallel(scene: &Scene) -> Result<Image, RenderError> {
    let width = scene.camera.horizontal_resolution();
    let height = scene.camera.vertical_resolution();

    let rows: Vec<Vec<Color>> = (0..height)
        .into_par_iter()
        .map(|y| render_row(scene, y))
        .collect();

    Ok(Image::from_rows(width, height, rows)?)
}

/// Render `scene` according to `config`.
pub fn render(scene: &Scene, config: &RenderConfig) -> Result<Image, RenderError> {
    let width = scene.camera.horizontal_resolution();
    let height = scene.camera.vertical_resolution();
    info!(
        "Rendering {}x{} ({} objects, {} lights, {:?})",
        width,
        height,
        scene.objects().len(),
        scene.lights().len(),
        config.mode
    );

    let start = Instant::now();
    let image = match (config.mode, config.threads) {
        (RenderMode::Sequential, _) => render_sequential(scene),
        (RenderMode::Parallel, None) => render_parallel(scene)?,
        (RenderMode::Parallel, Some(threads)) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            debug!("Using dedicated pool with {} threads", pool.current_num_threads());
            pool.install(|| render_parallel(scene))?
        }
    };

    info!("Render complete in {:.2?}", start.elapsed());
    Ok(image)
}
