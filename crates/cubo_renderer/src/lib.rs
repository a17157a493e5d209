//! Cubo Renderer - CPU Path Tracing
//!
//! A Monte Carlo path tracer for scenes built from spheres and axis-aligned
//! cubes, with diffuse, metal and glass materials and a thin-lens camera.
//!
//! ```ignore
//! use cubo_renderer::{render_buckets, scene, DEFAULT_BUCKET_SIZE};
//!
//! let mut scene = scene::single_cube();
//! scene.camera.initialize()?;
//! let image = render_buckets(&scene.camera, &scene.world, 42, DEFAULT_BUCKET_SIZE);
//! image.write_ppm(&mut std::io::stdout().lock())?;
//! ```

mod bucket;
mod camera;
mod cube;
mod error;
mod hittable;
mod material;
mod rect;
mod renderer;
mod sampling;
mod sphere;

pub mod scene;

pub use bucket::{generate_buckets, render_bucket, render_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::{Background, Camera};
pub use cube::Cube;
pub use error::{RenderError, RenderResult};
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Material, ScatterResult};
pub use rect::{Axis, AxisRect, CubeSides};
pub use renderer::{color_to_rgb, linear_to_gamma, ray_color, render, render_pixel, ImageBuffer, T_MIN};
pub use sphere::Sphere;

/// Re-export Vec3 and common math types from cubo_math
pub use cubo_math::{Aabb, Interval, Ray, Vec3};
