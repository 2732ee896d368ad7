//! Frame-rate independent smoothing primitives for the orbit rig.
//!
//! Every smoothed quantity moves a fraction of its remaining distance each
//! frame, where the fraction is `damping * dt` clamped to `[0, 1]`. Because
//! the fraction never exceeds one, a smoothed value can reach its target but
//! never pass it.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

/// Per-frame interpolation fraction for the given damping rate and frame
/// delta (seconds).
///
/// The result is always in `[0, 1]`; negative or non-finite products
/// collapse to `0`.
#[inline]
#[must_use]
pub fn lerp_factor(damping: f32, dt: f32) -> f32 {
    let t = damping * dt;
    if t.is_nan() {
        return 0.0;
    }
    t.clamp(0.0, 1.0)
}

/// Signed shortest-arc difference `to - from`, normalized into `(-π, π]`.
///
/// Equivalent to repeatedly adding or subtracting `2π` until the difference
/// lands in range, but O(1) for arbitrarily large inputs.
#[inline]
#[must_use]
pub fn shortest_angle_delta(from: f32, to: f32) -> f32 {
    let wrapped = (to - from).rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Move `current` toward `target` by `factor` of the remaining distance.
#[inline]
#[must_use]
pub fn approach(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Move an angle toward `target` along the shorter arc.
///
/// The result is not re-wrapped; angles are unbounded and only ever compared
/// through [`shortest_angle_delta`].
#[inline]
#[must_use]
pub fn approach_angle(current: f32, target: f32, factor: f32) -> f32 {
    current + shortest_angle_delta(current, target) * factor
}

/// Component-wise [`approach`] for points.
#[inline]
#[must_use]
pub fn approach_point(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current.lerp(target, factor)
}
