//! Core path tracing renderer.
//!
//! Implements Monte Carlo path tracing with:
//! - Recursive ray tracing with a bounded bounce depth
//! - Anti-aliasing via multi-sampling
//! - Gamma correction and ASCII PPM output

use crate::error::RenderResult;
use crate::{Background, Camera, Color, HittableList, Ray};
use cubo_math::Interval;
use rand::RngCore;
use std::io::Write;
use std::time::Instant;

/// Nearest accepted hit distance. Keeps scattered rays from re-hitting the
/// surface they start on.
pub const T_MIN: f32 = 0.001;

/// Compute the color seen by a ray.
///
/// This is the core path tracing function. It traces the ray through
/// the scene, bouncing off surfaces and multiplying in their attenuation.
pub fn ray_color(
    ray: &Ray,
    world: &HittableList,
    depth: u32,
    background: &Background,
    rng: &mut dyn RngCore,
) -> Color {
    // If we've exceeded max depth, return black (no light)
    if depth == 0 {
        return Color::ZERO;
    }

    let Some(rec) = world.hit(ray, Interval::new(T_MIN, f32::INFINITY)) else {
        return background.color(ray);
    };

    match rec.material.scatter(ray, &rec, rng) {
        Some(result) => result.attenuation * ray_color(&result.scattered, world, depth - 1, background, rng),
        // Absorbed
        None => Color::ZERO,
    }
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to gamma-corrected 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let intensity = Interval::new(0.0, 1.0);
    let r = (255.0 * intensity.clamp(linear_to_gamma(color.x))) as u8;
    let g = (255.0 * intensity.clamp(linear_to_gamma(color.y))) as u8;
    let b = (255.0 * intensity.clamp(linear_to_gamma(color.z))) as u8;
    [r, g, b]
}

/// Render a single pixel with multi-sampling.
pub fn render_pixel(camera: &Camera, world: &HittableList, x: u32, y: u32, rng: &mut dyn RngCore) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..camera.samples_per_pixel {
        // Camera.get_ray already adds random offset for anti-aliasing
        let ray = camera.get_ray(x, y, rng);
        pixel_color += ray_color(&ray, world, camera.max_depth, &camera.background, rng);
    }

    pixel_color * camera.samples_scale()
}

/// Linear color image, row-major with the top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Gamma-corrected 8-bit RGB bytes, three per pixel.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write the image as an ASCII PPM (P3) stream.
    ///
    /// One `r g b` line per pixel, scanlines top to bottom.
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> RenderResult<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for rgb in self.to_rgb().chunks_exact(3) {
            writeln!(writer, "{} {} {}", rgb[0], rgb[1], rgb[2])?;
        }

        writer.flush()?;
        Ok(())
    }
}

/// Render the entire scene to an image buffer on the calling thread.
///
/// Consumes a single random stream in scanline order, so the result is fully
/// determined by the state of `rng`. The camera must be initialized.
pub fn render(camera: &Camera, world: &HittableList, rng: &mut dyn RngCore) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height();
    let mut image = ImageBuffer::new(width, height);

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} objects",
        width,
        height,
        camera.samples_per_pixel,
        camera.max_depth,
        world.len()
    );
    let start = Instant::now();

    for y in 0..height {
        log::debug!("Scanlines remaining: {}", height - y);
        for x in 0..width {
            let color = render_pixel(camera, world, x, y, rng);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
