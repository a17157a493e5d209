//! Hittable primitives, HitRecord, and the scene list.

use crate::{Cube, CubeSides, Material, Ray, Sphere};
use cubo_math::{Interval, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord<'a> {
    /// Point of intersection
    pub p: Vec3,
    /// Unit surface normal at intersection (always points against the ray)
    pub normal: Vec3,
    /// Material of the primitive that was hit
    pub material: &'a Material,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Whether the ray hit the front face (outside) of the surface
    pub front_face: bool,
}

impl<'a> HitRecord<'a> {
    /// Build a record from the geometric outward normal.
    ///
    /// The stored normal always points against the ray, so we also track
    /// whether the front or back face was hit. `outward_normal` must be unit
    /// length.
    pub fn new(ray: &Ray, t: f32, p: Vec3, outward_normal: Vec3, material: &'a Material) -> Self {
        // If the ray and normal point in the same direction, we're inside
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        Self {
            p,
            normal,
            material,
            t,
            front_face,
        }
    }
}

/// Any object that can be hit by rays.
#[derive(Debug, Clone)]
pub enum Hittable {
    Sphere(Sphere),
    /// Axis-aligned box intersected with the slab method.
    Cube(Cube),
    /// Axis-aligned box built from six rectangles.
    CubeSides(CubeSides),
}

impl Hittable {
    /// Test if a ray hits this object strictly inside `ray_t`.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        match self {
            Hittable::Sphere(sphere) => sphere.hit(ray, ray_t),
            Hittable::Cube(cube) => cube.hit(ray, ray_t),
            Hittable::CubeSides(sides) => sides.hit(ray, ray_t),
        }
    }
}

impl From<Sphere> for Hittable {
    fn from(sphere: Sphere) -> Self {
        Hittable::Sphere(sphere)
    }
}

impl From<Cube> for Hittable {
    fn from(cube: Cube) -> Self {
        Hittable::Cube(cube)
    }
}

impl From<CubeSides> for Hittable {
    fn from(sides: CubeSides) -> Self {
        Hittable::CubeSides(sides)
    }
}

/// A list of hittable objects. This is the scene.
#[derive(Debug, Clone, Default)]
pub struct HittableList {
    objects: Vec<Hittable>,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: impl Into<Hittable>) {
        self.objects.push(object.into());
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Find the closest hit among all objects.
    ///
    /// The upper bound shrinks to the closest `t` found so far, so a later
    /// object only wins if it is strictly closer.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<HitRecord<'_>> = None;

        for object in &self.objects {
            let closest_so_far = closest.map_or(ray_t.max, |rec| rec.t);
            if let Some(rec) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest = Some(rec);
            }
        }

        closest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn range() -> Interval {
        Interval::new(0.001, f32::INFINITY)
    }

    #[test]
    fn test_face_normal_orientation() {
        let mat = Material::dielectric(1.5);
        let ray = Ray::new_simple(Vec3::ZERO, Vec3::X);

        let outside = HitRecord::new(&ray, 1.0, Vec3::X, -Vec3::X, &mat);
        assert!(outside.front_face);
        assert_eq!(outside.normal, -Vec3::X);

        let inside = HitRecord::new(&ray, 1.0, Vec3::X, Vec3::X, &mat);
        assert!(!inside.front_face);
        assert_eq!(inside.normal, -Vec3::X);
    }

    #[test]
    fn test_empty_list_misses() {
        let world = HittableList::new();
        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);

        assert!(world.is_empty());
        assert!(world.hit(&ray, range()).is_none());
    }

    #[test]
    fn test_list_returns_closest() {
        let near = Arc::new(Material::lambertian(Vec3::new(1.0, 0.0, 0.0)));
        let far = Arc::new(Material::lambertian(Vec3::new(0.0, 0.0, 1.0)));

        // Insert the far sphere first so ordering can't hide a bug
        let mut world = HittableList::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, far));
        world.add(Cube::new(Vec3::new(-1.0, -1.0, -4.0), Vec3::new(1.0, 1.0, -3.0), near.clone()));
        assert_eq!(world.len(), 2);

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let rec = world.hit(&ray, range()).unwrap();

        assert!((rec.t - 3.0).abs() < 1e-5);
        assert_eq!(rec.material, near.as_ref());
    }

    #[test]
    fn test_list_respects_interval() {
        let mat = Arc::new(Material::lambertian(Vec3::splat(0.5)));
        let mut world = HittableList::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, mat));

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        assert!(world.hit(&ray, Interval::new(0.001, 5.0)).is_none());

        world.clear();
        assert!(world.is_empty());
    }

    #[test]
    fn test_first_hit_wins_ties() {
        let first = Arc::new(Material::lambertian(Vec3::new(1.0, 0.0, 0.0)));
        let second = Arc::new(Material::lambertian(Vec3::new(0.0, 1.0, 0.0)));

        let mut world = HittableList::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, first.clone()));
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, second));

        let ray = Ray::new_simple(Vec3::ZERO, -Vec3::Z);
        let rec = world.hit(&ray, range()).unwrap();
        assert_eq!(rec.material, first.as_ref());
    }
}
