use crate::{Interval, Ray, Vec3};

/// Axis-Aligned Bounding Box.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// Cubes in the scene are AABBs intersected with the slab method.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

/// Where a ray crosses the surface of an [`Aabb`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AabbHit {
    /// Ray parameter of the crossing
    pub t: f32,
    /// Outward unit normal of the face that was crossed
    pub outward_normal: Vec3,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points, in any order.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Get the interval for a specific axis (0=X, 1=Y, 2=Z).
    pub fn axis_interval(&self, n: usize) -> Interval {
        match n {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    /// Corner with the smallest coordinates.
    pub fn min_corner(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Corner with the largest coordinates.
    pub fn max_corner(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Find the first crossing of the box surface strictly inside `ray_t`.
    ///
    /// Slab method: each axis narrows a running `[t_enter, t_exit]`. The entry
    /// crossing wins when it lies in `ray_t`; otherwise the exit crossing is
    /// used, which is what a ray starting inside the box sees.
    ///
    /// A zero direction component never divides. The ray is parallel to that
    /// slab, so it either lies between the planes (no constraint) or misses.
    pub fn intersect(&self, r: &Ray, ray_t: Interval) -> Option<AabbHit> {
        if r.direction == Vec3::ZERO {
            return None;
        }

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut enter_normal = Vec3::ZERO;
        let mut exit_normal = Vec3::ZERO;

        for axis in 0..3 {
            let slab = self.axis_interval(axis);
            let orig = r.origin[axis];
            let dir = r.direction[axis];

            if dir == 0.0 {
                if !slab.contains(orig) {
                    return None;
                }
                continue;
            }

            let adinv = 1.0 / dir;
            let t0 = (slab.min - orig) * adinv;
            let t1 = (slab.max - orig) * adinv;

            // Travelling towards +axis enters through the min face
            let (near, far, near_sign) = if adinv < 0.0 {
                (t1, t0, 1.0)
            } else {
                (t0, t1, -1.0)
            };

            if near > t_enter {
                t_enter = near;
                enter_normal = Vec3::AXES[axis] * near_sign;
            }
            if far < t_exit {
                t_exit = far;
                exit_normal = Vec3::AXES[axis] * -near_sign;
            }
            if t_exit <= t_enter {
                return None;
            }
        }

        if ray_t.surrounds(t_enter) {
            Some(AabbHit {
                t: t_enter,
                outward_normal: enter_normal,
            })
        } else if ray_t.surrounds(t_exit) {
            Some(AabbHit {
                t: t_exit,
                outward_normal: exit_normal,
            })
        } else {
            None
        }
    }

    /// Pad intervals to avoid zero-width AABBs (degenerate cases).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = self.x.expand(delta);
        }
        if self.y.size() < delta {
            self.y = self.y.expand(delta);
        }
        if self.z.size() < delta {
            self.z = self.z.expand(delta);
        }
    }
}
