//! Shared plumbing for the Cubo binaries: logging setup and rendering a
//! scene to standard output.

use anyhow::{Context, Result};
use cubo_renderer::scene::Scene;
use cubo_renderer::{render_buckets, DEFAULT_BUCKET_SIZE};
use rand::Rng;
use std::io::{self, BufWriter};

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
///
/// Stdout carries the image, so nothing else may be printed there.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();
}

/// Fresh seed for a production render.
///
/// Logged by the renderer so an interesting frame can be reproduced.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().gen()
}

/// Render `scene` in parallel and write it to stdout as ASCII PPM.
pub fn render_to_stdout(mut scene: Scene, seed: u64) -> Result<()> {
    scene
        .camera
        .initialize()
        .context("Failed to set up camera")?;

    let image = render_buckets(&scene.camera, &scene.world, seed, DEFAULT_BUCKET_SIZE);

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    image
        .write_ppm(&mut writer)
        .context("Failed to write image to stdout")?;

    log::info!("Wrote {}x{} image", image.width, image.height);
    Ok(())
}
