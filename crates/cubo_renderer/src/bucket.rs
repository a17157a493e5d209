//! Bucket-based tile rendering.
//!
//! Divides the image into tiles (buckets) that can be rendered
//! independently and in parallel using rayon. Each bucket owns its own
//! random stream seeded from its position, so the image depends only on the
//! base seed and never on thread scheduling.

use crate::renderer::render_pixel;
use crate::{Camera, Color, HittableList, ImageBuffer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use std::time::Instant;

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Seed for this bucket's random stream.
    ///
    /// Derived from the top-left corner, not the render order, so reordering
    /// buckets never changes the image.
    pub fn seed(&self, base_seed: u64) -> u64 {
        let position = ((self.y as u64) << 32) | self.x as u64;
        // SplitMix64 finalizer to spread neighbouring positions apart
        let mut z = base_seed ^ position.wrapping_mul(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 32;

/// Generate buckets for an image, sorted in spiral order from center.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let bucket_size = bucket_size.max(1);
    let mut buckets = Vec::new();
    let mut index = 0;

    // Generate grid of buckets
    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    // Sort by distance from center (spiral order)
    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from image center (spiral order).
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;

    buckets.sort_by(|a, b| {
        let a_center_x = a.x as f32 + a.width as f32 / 2.0;
        let a_center_y = a.y as f32 + a.height as f32 / 2.0;
        let b_center_x = b.x as f32 + b.width as f32 / 2.0;
        let b_center_y = b.y as f32 + b.height as f32 / 2.0;

        let a_dist = (a_center_x - center_x).powi(2) + (a_center_y - center_y).powi(2);
        let b_dist = (b_center_x - center_x).powi(2) + (b_center_y - center_y).powi(2);

        a_dist.partial_cmp(&b_dist).unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
}

/// Render a single bucket with its own random stream.
///
/// Returns pixels in row-major order within the bucket.
pub fn render_bucket(bucket: &Bucket, camera: &Camera, world: &HittableList, base_seed: u64) -> BucketResult {
    let mut rng = StdRng::seed_from_u64(bucket.seed(base_seed));
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            let global_x = bucket.x + local_x;
            let global_y = bucket.y + local_y;
            pixels.push(render_pixel(camera, world, global_x, global_y, &mut rng));
        }
    }

    BucketResult { bucket: *bucket, pixels }
}

/// Render the entire scene across the rayon thread pool.
///
/// The camera must be initialized. Output layout is scanline order no
/// matter which bucket finishes first.
pub fn render_buckets(camera: &Camera, world: &HittableList, base_seed: u64, bucket_size: u32) -> ImageBuffer {
    let width = camera.image_width;
    let height = camera.image_height();
    let buckets = generate_buckets(width, height, bucket_size);

    log::info!(
        "Rendering {}x{} @ {} spp, depth {}, {} objects in {} buckets (seed {})",
        width,
        height,
        camera.samples_per_pixel,
        camera.max_depth,
        world.len(),
        buckets.len(),
        base_seed
    );
    let start = Instant::now();

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| {
            let result = render_bucket(bucket, camera, world, base_seed);
            log::debug!("Bucket {} at ({}, {}) done", bucket.index, bucket.x, bucket.y);
            result
        })
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in results {
        let bucket = result.bucket;
        for (i, color) in result.pixels.into_iter().enumerate() {
            let local_x = i as u32 % bucket.width;
            let local_y = i as u32 / bucket.width;
            image.set(bucket.x + local_x, bucket.y + local_y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    image
}
