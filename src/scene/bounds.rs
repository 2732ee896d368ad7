use glam::Vec3;

use crate::camera::Ray;

/// World-space pick volume attached to a scene node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// Bounding sphere.
    Sphere {
        /// Sphere center.
        center: Vec3,
        /// Sphere radius.
        radius: f32,
    },
    /// Axis-aligned box.
    Aabb {
        /// Minimum corner.
        min: Vec3,
        /// Maximum corner.
        max: Vec3,
    },
}

impl Bounds {
    /// Axis-aligned box from a center and half extents.
    #[must_use]
    pub fn cuboid(center: Vec3, half_extents: Vec3) -> Self {
        let half = half_extents.abs();
        Self::Aabb {
            min: center - half,
            max: center + half,
        }
    }

    /// Distance along `ray` to the first contact with this volume.
    ///
    /// A ray that starts inside the volume hits at distance `0`. Contacts
    /// behind the ray origin are ignored.
    #[must_use]
    pub fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        match *self {
            Self::Sphere { center, radius } => {
                let oc = ray.origin - center;
                let b = oc.dot(ray.direction);
                let c = oc.length_squared() - radius * radius;
                let disc = b * b - c;
                if disc < 0.0 {
                    return None;
                }
                let s = disc.sqrt();
                let (near, far) = (-b - s, -b + s);
                (far >= 0.0).then(|| near.max(0.0))
            }
            Self::Aabb { min, max } => {
                // Slab test; zero direction components divide to ±inf.
                let inv = ray.direction.recip();
                let t1 = (min - ray.origin) * inv;
                let t2 = (max - ray.origin) * inv;
                let near = t1.min(t2).max_element();
                let far = t1.max(t2).min_element();
                (far >= 0.0 && near <= far).then(|| near.max(0.0))
            }
        }
    }
}
