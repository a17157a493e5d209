// Renders a single diffuse cube on a ground sphere.
// Run with: cargo run --release --bin cubo > cubo.ppm

use anyhow::Result;
use cubo_app::{entropy_seed, init_logging, render_to_stdout};
use cubo_renderer::scene;

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting Cubo");

    render_to_stdout(scene::single_cube(), entropy_seed())
}
