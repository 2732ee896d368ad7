use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection, orbit limits, and smoothing parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Exponential smoothing rate (per second). Higher settles faster.
    #[schemars(title = "Damping", range(min = 0.5, max = 30.0), extend("step" = 0.5))]
    pub damping_factor: f32,
    /// Largest frame delta (seconds) the rig will integrate in one step.
    #[schemars(skip)]
    pub max_frame_dt: f32,
    /// Closest allowed orbit radius.
    #[schemars(title = "Min Distance", range(min = 1.0, max = 1000.0), extend("step" = 5.0))]
    pub min_radius: f32,
    /// Farthest allowed orbit radius.
    #[schemars(title = "Max Distance", range(min = 1.0, max = 5000.0), extend("step" = 5.0))]
    pub max_radius: f32,
    /// Lowest allowed camera height.
    #[schemars(skip)]
    pub min_height: f32,
    /// Highest allowed camera height.
    #[schemars(skip)]
    pub max_height: f32,
    /// Orbit radius at construction and after reset.
    #[schemars(skip)]
    pub initial_radius: f32,
    /// Orbit angle (radians) at construction and after reset.
    #[schemars(skip)]
    pub initial_angle: f32,
    /// Camera height at construction and after reset.
    #[schemars(skip)]
    pub initial_height: f32,
    /// Look-at point at construction and after reset.
    #[schemars(skip)]
    pub initial_look_at: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 1.0,
            zfar: 5000.0,
            damping_factor: 5.0,
            max_frame_dt: 0.1,
            min_radius: 150.0,
            max_radius: 600.0,
            min_height: 40.0,
            max_height: 500.0,
            initial_radius: 400.0,
            initial_angle: 0.78,
            initial_height: 220.0,
            initial_look_at: [0.0; 3],
        }
    }
}
