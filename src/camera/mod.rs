//! Camera system for orbit viewing.
//!
//! Provides the projection camera, the damped orbit rig that poses it, and
//! screen-to-world ray construction for picking.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Screen-space to world-space rays.
pub mod ray;
/// Damped orbit rig: targets, limits, and per-frame smoothing.
pub mod rig;

pub use self::core::{Camera, CameraUniform};
pub use ray::{ndc_from_pixels, Ray};
pub use rig::{CameraPose, OrbitLimits, OrbitRig, OrbitState, Smoothed};
