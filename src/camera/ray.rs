//! Screen-to-world ray construction.
//!
//! Pointer positions arrive in pixels; the resolver works in normalized
//! device coordinates (`x` right, `y` up, both in `[-1, 1]`).

use glam::{Vec2, Vec3};

use super::core::Camera;

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray start point.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray, normalizing `direction`.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[inline]
    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Convert a pixel position inside a `width` x `height` viewport to
/// normalized device coordinates.
///
/// Returns `None` for an empty viewport.
#[must_use]
pub fn ndc_from_pixels(position: Vec2, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (2.0 * position.x / width) - 1.0,
        1.0 - (2.0 * position.y / height),
    ))
}

impl Camera {
    /// Cast a ray from the near plane through the given NDC point.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv_view_proj = self.build_matrix().inverse();

        // [0,1] depth range: near plane is z = 0, far plane is z = 1.
        let near = inv_view_proj.project_point3(ndc.extend(0.0));
        let far = inv_view_proj.project_point3(ndc.extend(1.0));

        Ray::new(near, far - near)
    }
}
