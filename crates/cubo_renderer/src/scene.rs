//! Built-in scenes.
//!
//! Each builder returns the world together with the camera that frames it.
//! Cameras come back uninitialized so callers can still tweak quality
//! settings before rendering.

use crate::sampling::{gen_f32, gen_range_f32, random_vec3};
use crate::{Camera, Color, Cube, CubeSides, HittableList, Material, Sphere};
use cubo_math::Vec3;
use rand::RngCore;
use std::sync::Arc;

/// A world and the camera set up to look at it.
pub struct Scene {
    pub world: HittableList,
    pub camera: Camera,
}

/// Half the side of the small cubes scattered by [`many_cubes`].
const SMALL_CUBE_HALF: f32 = 0.2;

/// A single diffuse cube resting on a huge ground sphere.
pub fn single_cube() -> Scene {
    let mut world = HittableList::new();

    let ground_material = Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    world.add(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground_material));

    let cube_material = Arc::new(Material::lambertian(Color::new(0.7, 0.3, 0.3)));
    world.add(Cube::new(
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 2.0, 1.0),
        cube_material,
    ));

    let camera = Camera::new()
        .with_image(720, 16.0 / 9.0)
        .with_quality(100, 20)
        .with_position(Vec3::new(8.0, 4.0, 8.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(30.0, 0.3, 12.0);

    Scene { world, camera }
}

/// A field of small random cubes around three large feature cubes
/// (glass, diffuse, mirror metal).
///
/// The layout is drawn from `rng`, so a fixed seed gives a fixed scene.
pub fn many_cubes(rng: &mut dyn RngCore) -> Scene {
    let mut world = HittableList::new();

    // Ground: a huge flat box standing in for a plane
    let ground_material = Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    world.add(CubeSides::new(
        Vec3::new(-1000.0, -1.0, -1000.0),
        Vec3::new(1000.0, 0.0, 1000.0),
        ground_material,
    ));

    // Centers of the feature cubes, kept clear of small cubes
    let feature_centers = [
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(-3.0, 1.0, 0.0),
        Vec3::new(5.0, 1.0, 0.0),
    ];
    let mut placed: Vec<Vec3> = Vec::new();

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f32(rng);
            let center = Vec3::new(
                a as f32 + 0.9 * gen_f32(rng),
                SMALL_CUBE_HALF,
                b as f32 + 0.9 * gen_f32(rng),
            );

            let near_feature = feature_centers.iter().any(|f| overlaps_xz(center, *f, 1.2));
            let near_placed = placed.iter().any(|p| overlaps_xz(center, *p, 2.0 * SMALL_CUBE_HALF));
            if near_feature || near_placed {
                continue;
            }

            // Equal odds for each material kind
            let material = if choose_mat < 1.0 / 3.0 {
                let albedo = random_vec3(rng, 0.0, 1.0) * random_vec3(rng, 0.0, 1.0);
                Material::lambertian(albedo)
            } else if choose_mat < 2.0 / 3.0 {
                let albedo = random_vec3(rng, 0.5, 1.0);
                let fuzz = gen_range_f32(rng, 0.0, 0.5);
                Material::metal(albedo, fuzz)
            } else {
                Material::dielectric(1.5)
            };

            let half = Vec3::splat(SMALL_CUBE_HALF);
            world.add(CubeSides::new(center - half, center + half, Arc::new(material)));
            placed.push(center);
        }
    }

    log::debug!("Placed {} small cubes", placed.len());

    world.add(CubeSides::new(
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 2.0, 1.0),
        Arc::new(Material::dielectric(1.5)),
    ));
    world.add(CubeSides::new(
        Vec3::new(-4.0, 0.0, -1.0),
        Vec3::new(-2.0, 2.0, 1.0),
        Arc::new(Material::lambertian(Color::new(0.4, 0.2, 0.1))),
    ));
    world.add(CubeSides::new(
        Vec3::new(4.0, 0.0, -1.0),
        Vec3::new(6.0, 2.0, 1.0),
        Arc::new(Material::metal(Color::new(0.7, 0.6, 0.5), 0.0)),
    ));

    let camera = Camera::new()
        .with_image(500, 16.0 / 9.0)
        .with_quality(50, 25)
        .with_position(Vec3::new(13.0, 2.0, 3.0), Vec3::ZERO, Vec3::Y)
        .with_lens(20.0, 0.6, 10.0);

    Scene { world, camera }
}

/// Ground sphere and a glass cube, small and cheap to render.
///
/// Used as the end-to-end regression scene.
pub fn glass_cube_regression() -> Scene {
    let mut world = HittableList::new();

    let ground_material = Arc::new(Material::lambertian(Color::new(0.5, 0.5, 0.5)));
    world.add(Sphere::new(Vec3::new(0.0, -1000.0, 0.0), 1000.0, ground_material));

    world.add(Cube::new(
        Vec3::new(-1.0, 0.0, -1.0),
        Vec3::new(1.0, 2.0, 1.0),
        Arc::new(Material::dielectric(1.5)),
    ));

    let camera = Camera::new()
        .with_image(32, 2.0)
        .with_quality(4, 8)
        .with_position(Vec3::new(6.0, 3.0, 6.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y)
        .with_lens(40.0, 0.0, 8.0);

    Scene { world, camera }
}

/// True if two footprints on the ground plane are closer than `min_gap` on
/// both x and z.
fn overlaps_xz(a: Vec3, b: Vec3, min_gap: f32) -> bool {
    (a.x - b.x).abs() < min_gap && (a.z - b.z).abs() < min_gap
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render, render_buckets, ImageBuffer, Ray};
    use cubo_math::Interval;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::ops::Range;

    /// Mean 8-bit value per channel over a block of pixels.
    fn region_mean(image: &ImageBuffer, xs: Range<u32>, ys: Range<u32>) -> [f32; 3] {
        let rgb = image.to_rgb();
        let mut sum = [0.0f32; 3];
        let mut count = 0;

        for y in ys {
            for x in xs.clone() {
                let i = ((y * image.width + x) * 3) as usize;
                for c in 0..3 {
                    sum[c] += rgb[i + c] as f32;
                }
                count += 1;
            }
        }

        sum.map(|s| s / count as f32)
    }

    fn assert_region(name: &str, actual: [f32; 3], expected: [f32; 3], tolerance: f32) {
        for c in 0..3 {
            assert!(
                (actual[c] - expected[c]).abs() <= tolerance,
                "{} channel {}: got {:.2}, expected {:.2} +/- {}",
                name,
                c,
                actual[c],
                expected[c],
                tolerance
            );
        }
    }

    #[test]
    fn test_single_cube_scene() {
        let mut scene = single_cube();
        assert_eq!(scene.world.len(), 2);

        scene.camera.initialize().unwrap();
        assert_eq!(scene.camera.image_height(), 405);

        // Looking straight down onto the cube top from above
        let ray = Ray::new_simple(Vec3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let rec = scene.world.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 3.0).abs() < 1e-4);
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_many_cubes_layout() {
        let mut rng = StdRng::seed_from_u64(2024);
        let scene = many_cubes(&mut rng);

        // Ground plus three feature cubes plus at least some small ones
        assert!(scene.world.len() > 4);
        assert!(scene.world.len() <= 4 + 22 * 22);

        // Same seed, same layout
        let mut rng = StdRng::seed_from_u64(2024);
        assert_eq!(many_cubes(&mut rng).world.len(), scene.world.len());
    }

    #[test]
    fn test_many_cubes_ground_is_hit_from_above() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = many_cubes(&mut rng);

        // Far from any cube the ground box top is at y = 0
        let ray = Ray::new_simple(Vec3::new(50.0, 10.0, 50.0), -Vec3::Y);
        let rec = scene.world.hit(&ray, Interval::new(0.001, f32::INFINITY)).unwrap();
        assert!((rec.t - 10.0).abs() < 1e-4);
        assert_eq!(rec.normal, Vec3::Y);
    }

    #[test]
    fn test_overlaps_xz() {
        assert!(overlaps_xz(Vec3::ZERO, Vec3::new(1.0, 5.0, 1.0), 1.2));
        assert!(!overlaps_xz(Vec3::ZERO, Vec3::new(1.3, 0.0, 0.0), 1.2));
    }

    #[test]
    fn test_regression_render_is_reproducible() {
        let mut scene = glass_cube_regression();
        scene.camera.initialize().unwrap();

        let first = render(&scene.camera, &scene.world, &mut StdRng::seed_from_u64(1234));
        let second = render(&scene.camera, &scene.world, &mut StdRng::seed_from_u64(1234));

        let mut first_ppm = Vec::new();
        let mut second_ppm = Vec::new();
        first.write_ppm(&mut first_ppm).unwrap();
        second.write_ppm(&mut second_ppm).unwrap();
        assert_eq!(first_ppm, second_ppm);
        assert!(first_ppm.starts_with(b"P3\n32 16\n255\n"));
    }

    #[test]
    fn test_regression_render_is_plausible() {
        let mut scene = glass_cube_regression();
        scene.camera.initialize().unwrap();
        let image = render(&scene.camera, &scene.world, &mut StdRng::seed_from_u64(1234));

        for pixel in &image.pixels {
            assert!(pixel.is_finite());
            assert!(pixel.min_element() >= 0.0);
            assert!(pixel.max_element() <= 1.0 + 1e-5);
        }

        // Top row is sky, bottom row is the grey ground
        let top = image.get(0, 0);
        assert!(top.z > top.x);
        assert!(top.z > 0.8);

        let bottom = image.get(0, image.height - 1);
        assert!(bottom.max_element() < 0.75);
        assert!(bottom.length() > 0.0);

        // Mean brightness stays within a loose band
        let mean: f32 = image.pixels.iter().map(|p| p.element_sum() / 3.0).sum::<f32>()
            / image.pixels.len() as f32;
        assert!(mean > 0.2 && mean < 0.95, "mean brightness {}", mean);
    }

    #[test]
    fn test_regression_render_matches_baseline() {
        let mut scene = glass_cube_regression();
        scene.camera.initialize().unwrap();
        let image = render(&scene.camera, &scene.world, &mut StdRng::seed_from_u64(1234));

        // Each tolerance is at least five standard deviations of that region's mean at 4 spp
        assert_region("sky", region_mean(&image, 0..32, 0..4), [219.1, 233.9, 255.0], 1.5);
        assert_region("ground", region_mean(&image, 0..32, 12..16), [136.3, 154.8, 179.1], 4.0);
        assert_region("glass cube", region_mean(&image, 12..20, 9..12), [161.0, 179.5, 204.2], 15.0);
    }

    #[test]
    fn test_regression_bucket_render_is_reproducible() {
        let mut scene = glass_cube_regression();
        scene.camera.initialize().unwrap();

        let first = render_buckets(&scene.camera, &scene.world, 99, 8);
        let second = render_buckets(&scene.camera, &scene.world, 99, 8);
        assert_eq!(first, second);

        // Different seed, different noise
        let third = render_buckets(&scene.camera, &scene.world, 100, 8);
        assert_ne!(first.pixels, third.pixels);
    }
}
