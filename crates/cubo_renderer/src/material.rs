//! Surface materials and how they scatter light.

use crate::sampling::{gen_f32, near_zero, random_in_unit_sphere, random_unit_vector, reflect, refract};
use crate::{HitRecord, Ray};
use cubo_math::Vec3;
use rand::RngCore;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Outcome of a ray scattering off a surface.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Fraction of light carried back along the scattered ray, per channel
    pub attenuation: Color,
    /// The outgoing ray
    pub scattered: Ray,
}

/// Describes how light interacts with a surface.
///
/// Materials are created once and shared between primitives through `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// Ideal diffuse reflector.
    Lambertian { albedo: Color },
    /// Specular reflector. `fuzz` of 0.0 is a perfect mirror.
    Metal { albedo: Color, fuzz: f32 },
    /// Clear refractive material such as glass or water.
    Dielectric { ior: f32 },
}

impl Material {
    /// Create a diffuse material. Albedo channels are clamped to [0, 1].
    pub fn lambertian(albedo: Color) -> Self {
        Material::Lambertian {
            albedo: clamp_albedo(albedo),
        }
    }

    /// Create a metal material.
    ///
    /// - `albedo`: The color of the metal, clamped to [0, 1]
    /// - `fuzz`: Roughness, 0.0 = perfect mirror, 1.0 = very rough
    pub fn metal(albedo: Color, fuzz: f32) -> Self {
        if !(0.0..=1.0).contains(&fuzz) {
            log::warn!("Metal fuzz {} clamped to [0, 1]", fuzz);
        }
        Material::Metal {
            albedo: clamp_albedo(albedo),
            fuzz: fuzz.clamp(0.0, 1.0),
        }
    }

    /// Create a dielectric material.
    ///
    /// - `ior`: Index of refraction (1.0 = air, 1.5 = glass, 2.4 = diamond)
    pub fn dielectric(ior: f32) -> Self {
        Material::Dielectric { ior }
    }

    /// Scatter an incoming ray.
    ///
    /// Returns `None` if the ray is absorbed.
    pub fn scatter(&self, ray_in: &Ray, rec: &HitRecord, rng: &mut dyn RngCore) -> Option<ScatterResult> {
        match *self {
            Material::Lambertian { albedo } => {
                let mut scatter_direction = rec.normal + random_unit_vector(rng);

                // Catch degenerate scatter direction
                if near_zero(scatter_direction) {
                    scatter_direction = rec.normal;
                }

                Some(ScatterResult {
                    attenuation: albedo,
                    scattered: Ray::new(rec.p, scatter_direction, ray_in.time()),
                })
            }
            Material::Metal { albedo, fuzz } => {
                let reflected = reflect(ray_in.direction().normalize(), rec.normal);
                let direction = reflected + fuzz * random_in_unit_sphere(rng);

                // Fuzz pushed the ray below the surface
                if direction.dot(rec.normal) <= 0.0 {
                    return None;
                }

                Some(ScatterResult {
                    attenuation: albedo,
                    scattered: Ray::new(rec.p, direction, ray_in.time()),
                })
            }
            Material::Dielectric { ior } => {
                let refraction_ratio = if rec.front_face { 1.0 / ior } else { ior };

                let unit_direction = ray_in.direction().normalize();
                let cos_theta = (-unit_direction).dot(rec.normal).min(1.0);
                let sin_theta = (1.0 - cos_theta * cos_theta).sqrt();

                // Total internal reflection
                let cannot_refract = refraction_ratio * sin_theta > 1.0;

                let direction = if cannot_refract || reflectance(cos_theta, refraction_ratio) > gen_f32(rng) {
                    reflect(unit_direction, rec.normal)
                } else {
                    refract(unit_direction, rec.normal, refraction_ratio)
                };

                Some(ScatterResult {
                    attenuation: Color::ONE,
                    scattered: Ray::new(rec.p, direction, ray_in.time()),
                })
            }
        }
    }
}

/// Schlick's approximation for reflectance.
fn reflectance(cosine: f32, ior: f32) -> f32 {
    let r0 = ((1.0 - ior) / (1.0 + ior)).powi(2);
    r0 + (1.0 - r0) * (1.0 - cosine).powi(5)
}

fn clamp_albedo(albedo: Color) -> Color {
    let clamped = albedo.clamp(Color::ZERO, Color::ONE);
    if clamped != albedo {
        log::warn!("Albedo {:?} clamped to [0, 1]", albedo);
    }
    clamped
}
