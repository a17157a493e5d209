//! Axis-aligned cube intersected with the slab method.

use crate::{HitRecord, Material, Ray};
use cubo_math::{Aabb, Interval, Vec3};
use std::sync::Arc;

/// A solid axis-aligned box.
#[derive(Debug, Clone)]
pub struct Cube {
    bounds: Aabb,
    material: Arc<Material>,
}

impl Cube {
    /// Create a cube spanning two opposite corners, given in any order.
    pub fn new(p0: Vec3, p1: Vec3, material: Arc<Material>) -> Self {
        Self {
            bounds: Aabb::from_points(p0, p1),
            material,
        }
    }

    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let hit = self.bounds.intersect(ray, ray_t)?;
        let p = ray.at(hit.t);
        Some(HitRecord::new(ray, hit.t, p, hit.outward_normal, &self.material))
    }
}
