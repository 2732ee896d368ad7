use glam::{Mat4, Vec3};

/// Perspective camera defined by eye position, target, and projection
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform block holding the view-projection matrix and camera metadata.
///
/// Renderers upload this verbatim; the layout is 16-byte aligned.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Camera {
    /// Create a camera with the given projection parameters, placed at
    /// `+Z` looking at the origin.
    #[must_use]
    pub fn new(aspect: f32, fovy: f32, znear: f32, zfar: f32) -> Self {
        Self {
            eye: Vec3::Z,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy,
            znear,
            zfar,
        }
    }

    /// View matrix (world → camera space).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.view_matrix()
    }

    /// Update the aspect ratio from a viewport size in pixels. Degenerate
    /// sizes (zero height) leave the aspect unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Snapshot the camera into a GPU uniform block.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let forward = (self.target - self.eye).normalize_or_zero();
        CameraUniform {
            view_proj: self.build_matrix().to_cols_array_2d(),
            position: self.eye.to_array(),
            aspect: self.aspect,
            forward: forward.to_array(),
            fovy: self.fovy,
        }
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }
}
