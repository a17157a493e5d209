//! Camera for ray generation.

use crate::error::{RenderError, RenderResult};
use crate::sampling::{gen_f32, random_in_unit_disk, sample_square};
use crate::{Color, Ray};
use cubo_math::Vec3;
use rand::RngCore;

/// What a ray sees when it leaves the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Background {
    /// Vertical white-to-blue gradient approximating a sky.
    Sky,
    /// A constant color.
    Solid(Color),
}

impl Background {
    /// Color for a ray that hit nothing.
    pub fn color(&self, ray: &Ray) -> Color {
        match *self {
            Background::Sky => {
                let unit_direction = ray.direction().normalize();
                let a = 0.5 * (unit_direction.y + 1.0);
                let white = Color::new(1.0, 1.0, 1.0);
                let blue = Color::new(0.5, 0.7, 1.0);
                white * (1.0 - a) + blue * a
            }
            Background::Solid(color) => color,
        }
    }
}

/// Camera for generating rays into the scene.
#[derive(Debug, Clone)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub aspect_ratio: f32,
    pub samples_per_pixel: u32,
    pub max_depth: u32,

    // Camera positioning
    look_from: Vec3,
    look_at: Vec3,
    vup: Vec3,

    // Lens settings
    vfov: f32,          // Vertical field of view in degrees
    defocus_angle: f32, // Variation angle of rays through each pixel
    focus_dist: f32,    // Distance from camera to plane of perfect focus

    pub background: Background,

    // Cached computed values (set by initialize())
    image_height: u32,
    center: Vec3,
    pixel00_loc: Vec3,
    pixel_delta_u: Vec3,
    pixel_delta_v: Vec3,
    u: Vec3,
    v: Vec3,
    w: Vec3,
    defocus_disk_u: Vec3,
    defocus_disk_v: Vec3,
    samples_scale: f32,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 400,
            aspect_ratio: 16.0 / 9.0,
            samples_per_pixel: 10,
            max_depth: 10,
            look_from: Vec3::new(0.0, 0.0, 0.0),
            look_at: Vec3::new(0.0, 0.0, -1.0),
            vup: Vec3::new(0.0, 1.0, 0.0),
            vfov: 90.0,
            defocus_angle: 0.0,
            focus_dist: 10.0,
            background: Background::Sky,
            // Cached values (initialized to defaults)
            image_height: 0,
            center: Vec3::ZERO,
            pixel00_loc: Vec3::ZERO,
            pixel_delta_u: Vec3::ZERO,
            pixel_delta_v: Vec3::ZERO,
            u: Vec3::X,
            v: Vec3::Y,
            w: Vec3::Z,
            defocus_disk_u: Vec3::ZERO,
            defocus_disk_v: Vec3::ZERO,
            samples_scale: 0.1,
        }
    }

    /// Set image width and aspect ratio (width / height).
    pub fn with_image(mut self, width: u32, aspect_ratio: f32) -> Self {
        self.image_width = width;
        self.aspect_ratio = aspect_ratio;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set camera position.
    pub fn with_position(mut self, look_from: Vec3, look_at: Vec3, vup: Vec3) -> Self {
        self.look_from = look_from;
        self.look_at = look_at;
        self.vup = vup;
        self
    }

    /// Set lens settings.
    pub fn with_lens(mut self, vfov: f32, defocus_angle: f32, focus_dist: f32) -> Self {
        self.vfov = vfov;
        self.defocus_angle = defocus_angle;
        self.focus_dist = focus_dist;
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Validate settings and derive the view basis.
    ///
    /// Must be called before generating rays. Configurations that would
    /// normalize a zero vector or divide by zero are rejected here rather
    /// than surfacing as NaN pixels later.
    pub fn initialize(&mut self) -> RenderResult<()> {
        if self.image_width == 0 {
            return Err(RenderError::InvalidConfig("image width must be positive".into()));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig("samples per pixel must be positive".into()));
        }
        if !(self.aspect_ratio > 0.0) || !self.aspect_ratio.is_finite() {
            return Err(RenderError::InvalidConfig(format!(
                "aspect ratio {} must be positive",
                self.aspect_ratio
            )));
        }
        if !(self.focus_dist > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "focus distance {} must be positive",
                self.focus_dist
            )));
        }
        if !(self.vfov > 0.0 && self.vfov < 180.0) {
            return Err(RenderError::InvalidConfig(format!(
                "vertical field of view {} must be in (0, 180) degrees",
                self.vfov
            )));
        }

        let view = self.look_from - self.look_at;
        if view.length_squared() == 0.0 {
            return Err(RenderError::DegenerateView("look_from equals look_at".into()));
        }
        if self.vup.cross(view).length_squared() <= f32::EPSILON * view.length_squared() {
            return Err(RenderError::DegenerateView(
                "up vector is parallel to the view direction".into(),
            ));
        }

        self.image_height = ((self.image_width as f32 / self.aspect_ratio) as u32).max(1);
        self.samples_scale = 1.0 / self.samples_per_pixel as f32;
        self.center = self.look_from;

        // Calculate viewport dimensions
        let theta = self.vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h * self.focus_dist;
        let viewport_width = viewport_height * (self.image_width as f32 / self.image_height as f32);

        // Calculate camera basis vectors
        self.w = view.normalize();
        self.u = self.vup.cross(self.w).normalize();
        self.v = self.w.cross(self.u);

        // Calculate viewport vectors
        let viewport_u = viewport_width * self.u;
        let viewport_v = -viewport_height * self.v;

        // Calculate pixel delta vectors
        self.pixel_delta_u = viewport_u / self.image_width as f32;
        self.pixel_delta_v = viewport_v / self.image_height as f32;

        // Calculate upper left pixel location
        let viewport_upper_left =
            self.center - self.focus_dist * self.w - viewport_u / 2.0 - viewport_v / 2.0;

        self.pixel00_loc = viewport_upper_left + 0.5 * (self.pixel_delta_u + self.pixel_delta_v);

        // Calculate defocus disk basis vectors
        let defocus_radius = self.focus_dist * (self.defocus_angle / 2.0).to_radians().tan();
        self.defocus_disk_u = self.u * defocus_radius;
        self.defocus_disk_v = self.v * defocus_radius;

        log::debug!(
            "Camera initialized: {}x{}, vfov {}, defocus {}, focus {}",
            self.image_width,
            self.image_height,
            self.vfov,
            self.defocus_angle,
            self.focus_dist
        );

        Ok(())
    }

    /// Image height derived from width and aspect ratio (0 before `initialize`).
    pub fn image_height(&self) -> u32 {
        self.image_height
    }

    /// Generate a ray for pixel (i, j) with random sampling.
    pub fn get_ray(&self, i: u32, j: u32, rng: &mut dyn RngCore) -> Ray {
        let offset = sample_square(rng);

        let pixel_sample = self.pixel00_loc
            + ((i as f32) + offset.x) * self.pixel_delta_u
            + ((j as f32) + offset.y) * self.pixel_delta_v;

        let ray_origin = if self.defocus_angle <= 0.0 {
            self.center
        } else {
            self.defocus_disk_sample(rng)
        };

        let ray_direction = pixel_sample - ray_origin;
        let ray_time = gen_f32(rng);

        Ray::new(ray_origin, ray_direction, ray_time)
    }

    /// Sample a point on the defocus disk.
    fn defocus_disk_sample(&self, rng: &mut dyn RngCore) -> Vec3 {
        let p = random_in_unit_disk(rng);
        self.center + p.x * self.defocus_disk_u + p.y * self.defocus_disk_v
    }

    /// Get the samples scale factor (1 / samples_per_pixel).
    pub fn samples_scale(&self) -> f32 {
        self.samples_scale
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
