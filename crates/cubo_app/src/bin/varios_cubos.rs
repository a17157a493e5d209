// Renders the field of random cubes around the glass, diffuse and metal cubes.
// Run with: cargo run --release --bin varios_cubos > varios_cubos.ppm

use anyhow::Result;
use cubo_app::{entropy_seed, init_logging, render_to_stdout};
use cubo_renderer::scene;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<()> {
    init_logging();

    // One seed drives both the layout and the render
    let seed = entropy_seed();
    log::info!("Starting Varios Cubos (seed {})", seed);

    let mut rng = StdRng::seed_from_u64(seed);
    let scene = scene::many_cubes(&mut rng);
    log::info!("Scene built with {} objects", scene.world.len());

    render_to_stdout(scene, seed)
}
