//! Axis-aligned rectangles and the six-sided cube built from them.

use crate::{HitRecord, Material, Ray};
use cubo_math::{Aabb, Interval, Vec3};
use std::sync::Arc;

/// Coordinate axis a rectangle is perpendicular to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Component index into a `Vec3`.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The two other axes, in x, y, z order.
    fn plane_indices(self) -> (usize, usize) {
        match self {
            Axis::X => (1, 2),
            Axis::Y => (0, 2),
            Axis::Z => (0, 1),
        }
    }
}

/// A rectangle lying in the plane `axis = k`.
///
/// `a` and `b` bound the rectangle on the two remaining axes, in x, y, z
/// order (an xz-rectangle has `a` on x and `b` on z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRect {
    axis: Axis,
    k: f32,
    a: Interval,
    b: Interval,
    /// Outward normal: +axis or -axis
    outward_normal: Vec3,
}

impl AxisRect {
    /// Create a rectangle in the plane `axis = k`, facing `+axis` when
    /// `positive` is set and `-axis` otherwise.
    pub fn new(axis: Axis, k: f32, a: Interval, b: Interval, positive: bool) -> Self {
        let sign = if positive { 1.0 } else { -1.0 };
        Self {
            axis,
            k,
            a,
            b,
            outward_normal: Vec3::AXES[axis.index()] * sign,
        }
    }

    /// Ray parameter of the crossing with this rectangle, if it lies inside
    /// `ray_t` and within the rectangle's bounds.
    pub fn intersect(&self, ray: &Ray, ray_t: Interval) -> Option<f32> {
        let axis = self.axis.index();
        let dir = ray.direction()[axis];
        // Parallel to the plane
        if dir == 0.0 {
            return None;
        }

        let t = (self.k - ray.origin()[axis]) / dir;
        if !ray_t.surrounds(t) {
            return None;
        }

        let p = ray.at(t);
        let (ia, ib) = self.axis.plane_indices();
        if !self.a.contains(p[ia]) || !self.b.contains(p[ib]) {
            return None;
        }

        Some(t)
    }

    pub fn outward_normal(&self) -> Vec3 {
        self.outward_normal
    }
}

/// An axis-aligned box expressed as the union of its six faces.
///
/// Renders the same as [`crate::Cube`] for non-degenerate boxes.
#[derive(Debug, Clone)]
pub struct CubeSides {
    sides: [AxisRect; 6],
    material: Arc<Material>,
}

impl CubeSides {
    /// Create a box spanning two opposite corners, given in any order.
    pub fn new(p0: Vec3, p1: Vec3, material: Arc<Material>) -> Self {
        let bounds = Aabb::from_points(p0, p1);
        let (x, y, z) = (bounds.x, bounds.y, bounds.z);

        let sides = [
            AxisRect::new(Axis::X, x.min, y, z, false),
            AxisRect::new(Axis::X, x.max, y, z, true),
            AxisRect::new(Axis::Y, y.min, x, z, false),
            AxisRect::new(Axis::Y, y.max, x, z, true),
            AxisRect::new(Axis::Z, z.min, x, y, false),
            AxisRect::new(Axis::Z, z.max, x, y, true),
        ];

        Self { sides, material }
    }

    pub fn sides(&self) -> &[AxisRect; 6] {
        &self.sides
    }

    /// Closest face hit, narrowing the interval the same way the scene does.
    pub fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let mut closest: Option<(f32, Vec3)> = None;

        for side in &self.sides {
            let closest_so_far = closest.map_or(ray_t.max, |(t, _)| t);
            if let Some(t) = side.intersect(ray, ray_t.with_max(closest_so_far)) {
                closest = Some((t, side.outward_normal()));
            }
        }

        let (t, outward_normal) = closest?;
        Some(HitRecord::new(ray, t, ray.at(t), outward_normal, &self.material))
    }
}
