use glam::Vec3;

use super::core::Camera;
use crate::options::CameraOptions;
use crate::util::damping::{
    approach, approach_angle, approach_point, lerp_factor,
};

/// A smoothed quantity: the value shown this frame and the value it is
/// heading toward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed<T> {
    /// Value used for the current frame.
    pub current: T,
    /// Value `current` is converging on.
    pub target: T,
}

impl<T: Copy> Smoothed<T> {
    /// Start settled at `value`.
    #[must_use]
    pub fn settled(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    fn snap(&mut self) {
        self.current = self.target;
    }
}

/// Spherical orbit parameters, each carried as a `(current, target)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitState {
    /// Orbit angle around the vertical axis (radians, unbounded).
    pub angle: Smoothed<f32>,
    /// Horizontal distance from the vertical axis.
    pub radius: Smoothed<f32>,
    /// Camera height.
    pub height: Smoothed<f32>,
    /// Point the camera looks at.
    pub look_at: Smoothed<Vec3>,
}

/// Clamp ranges for the orbit radius and camera height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLimits {
    /// Closest orbit radius.
    pub min_radius: f32,
    /// Farthest orbit radius.
    pub max_radius: f32,
    /// Lowest camera height.
    pub min_height: f32,
    /// Highest camera height.
    pub max_height: f32,
}

impl OrbitLimits {
    /// Build limits from options. Reversed ranges are swapped and
    /// non-finite bounds fall back to their defaults; nothing is rejected.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        let defaults = CameraOptions::default();
        let (min_radius, max_radius) = ordered(
            finite_or(options.min_radius, defaults.min_radius),
            finite_or(options.max_radius, defaults.max_radius),
        );
        let (min_height, max_height) = ordered(
            finite_or(options.min_height, defaults.min_height),
            finite_or(options.max_height, defaults.max_height),
        );
        Self {
            min_radius,
            max_radius,
            min_height,
            max_height,
        }
    }

    /// Clamp a radius into `[min_radius, max_radius]`.
    #[must_use]
    pub fn clamp_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.min_radius, self.max_radius)
    }

    /// Clamp a height into `[min_height, max_height]`.
    #[must_use]
    pub fn clamp_height(&self, height: f32) -> f32 {
        height.clamp(self.min_height, self.max_height)
    }
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Damping rate and frame-dt cap from options, non-negative and finite.
fn smoothing(options: &CameraOptions) -> (f32, f32) {
    let defaults = CameraOptions::default();
    (
        finite_or(options.damping_factor, defaults.damping_factor).max(0.0),
        finite_or(options.max_frame_dt, defaults.max_frame_dt).max(0.0),
    )
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Camera placement produced by one rig step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Point looked at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Copy this pose onto a camera, leaving its projection untouched.
    pub fn apply(&self, camera: &mut Camera) {
        camera.eye = self.eye;
        camera.target = self.target;
        camera.up = self.up;
    }
}

/// Spherical camera rig with exponential smoothing.
///
/// Targets are written by input handling; current values only move inside
/// [`advance`](Self::advance). The eye sits at
/// `(radius·sin(angle), height, radius·cos(angle))` and looks at the current
/// look-at point.
#[derive(Debug, Clone)]
pub struct OrbitRig {
    state: OrbitState,
    initial: OrbitState,
    limits: OrbitLimits,
    damping_factor: f32,
    max_frame_dt: f32,
}

impl OrbitRig {
    /// Create a rig settled at the configured initial pose.
    #[must_use]
    pub fn new(options: &CameraOptions) -> Self {
        let defaults = CameraOptions::default();
        let limits = OrbitLimits::from_options(options);
        let look_at = Vec3::from_array(options.initial_look_at);
        let initial = OrbitState {
            angle: Smoothed::settled(finite_or(
                options.initial_angle,
                defaults.initial_angle,
            )),
            radius: Smoothed::settled(limits.clamp_radius(finite_or(
                options.initial_radius,
                defaults.initial_radius,
            ))),
            height: Smoothed::settled(limits.clamp_height(finite_or(
                options.initial_height,
                defaults.initial_height,
            ))),
            look_at: Smoothed::settled(if look_at.is_finite() {
                look_at
            } else {
                Vec3::from_array(defaults.initial_look_at)
            }),
        };
        let (damping_factor, max_frame_dt) = smoothing(options);
        Self {
            state: initial,
            initial,
            limits,
            damping_factor,
            max_frame_dt,
        }
    }

    /// Re-read limits and smoothing from options. Existing targets are
    /// re-clamped into the new ranges; current values follow on the next
    /// frames.
    pub fn apply_options(&mut self, options: &CameraOptions) {
        self.limits = OrbitLimits::from_options(options);
        (self.damping_factor, self.max_frame_dt) = smoothing(options);
        self.state.radius.target =
            self.limits.clamp_radius(self.state.radius.target);
        self.state.height.target =
            self.limits.clamp_height(self.state.height.target);
    }

    /// Current orbit state.
    #[must_use]
    pub fn state(&self) -> &OrbitState {
        &self.state
    }

    /// Active clamp ranges.
    #[must_use]
    pub fn limits(&self) -> &OrbitLimits {
        &self.limits
    }

    // -- Target mutation --

    /// Overwrite the look-at target. The current look-at point smooths
    /// toward it; nothing snaps.
    pub fn set_look_target(&mut self, point: Vec3) {
        if point.is_finite() {
            self.state.look_at.target = point;
        }
    }

    /// Set the orbit angle target (radians).
    pub fn set_angle_target(&mut self, angle: f32) {
        if angle.is_finite() {
            self.state.angle.target = angle;
        }
    }

    /// Shift the orbit angle target by `delta` radians.
    pub fn rotate_by(&mut self, delta: f32) {
        self.set_angle_target(self.state.angle.target + delta);
    }

    /// Set the height target, clamped into the height range.
    pub fn set_height_target(&mut self, height: f32) {
        if height.is_finite() {
            self.state.height.target = self.limits.clamp_height(height);
        }
    }

    /// Shift the height target by `delta`, clamped.
    pub fn raise_by(&mut self, delta: f32) {
        self.set_height_target(self.state.height.target + delta);
    }

    /// Set the radius target, clamped into the radius range.
    pub fn set_radius_target(&mut self, radius: f32) {
        if radius.is_finite() {
            self.state.radius.target = self.limits.clamp_radius(radius);
        }
    }

    /// Shift the radius target by `delta`, clamped.
    pub fn zoom_by(&mut self, delta: f32) {
        self.set_radius_target(self.state.radius.target + delta);
    }

    // -- Per-frame update --

    /// Advance current values toward targets by one frame of `dt` seconds
    /// and return the resulting pose.
    ///
    /// `dt` is clamped to `[0, max_frame_dt]` so a stalled frame loop cannot
    /// make the rig jump.
    pub fn advance(&mut self, dt: f32) -> CameraPose {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_frame_dt)
        } else {
            0.0
        };
        let t = lerp_factor(self.damping_factor, dt);

        let s = &mut self.state;
        s.angle.current = approach_angle(s.angle.current, s.angle.target, t);
        s.radius.current = approach(s.radius.current, s.radius.target, t);
        s.height.current = approach(s.height.current, s.height.target, t);
        s.look_at.current =
            approach_point(s.look_at.current, s.look_at.target, t);

        self.pose()
    }

    /// Jump current values onto their targets with no smoothing.
    pub fn snap_to_targets(&mut self) -> CameraPose {
        self.state.angle.snap();
        self.state.radius.snap();
        self.state.height.snap();
        self.state.look_at.snap();
        self.pose()
    }

    /// Retarget the configured initial pose; the camera glides back.
    pub fn reset(&mut self) {
        self.state.angle.target = self.initial.angle.target;
        self.state.radius.target = self.initial.radius.target;
        self.state.height.target = self.initial.height.target;
        self.state.look_at.target = self.initial.look_at.target;
    }

    /// Pose derived from the current values.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        let s = &self.state;
        let (sin, cos) = s.angle.current.sin_cos();
        CameraPose {
            eye: Vec3::new(
                s.radius.current * sin,
                s.height.current,
                s.radius.current * cos,
            ),
            target: s.look_at.current,
            up: Vec3::Y,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::TAU;

    use super::*;
    use crate::util::damping::shortest_angle_delta;

    fn rig() -> OrbitRig {
        OrbitRig::new(&CameraOptions::default())
    }

    #[test]
    fn test_initial_pose_matches_options() {
        let rig = rig();
        let s = rig.state();
        assert_eq!(s.radius.current, 400.0);
        assert_eq!(s.angle.current, 0.78);
        assert_eq!(s.height.current, 220.0);

        let pose = rig.pose();
        assert!((pose.eye.x - 400.0 * 0.78_f32.sin()).abs() < 1e-3);
        assert!((pose.eye.z - 400.0 * 0.78_f32.cos()).abs() < 1e-3);
        assert_eq!(pose.eye.y, 220.0);
        assert_eq!(pose.target, Vec3::ZERO);
    }

    #[test]
    fn test_wheel_zoom_converges_without_overshoot() {
        let mut rig = rig();
        rig.zoom_by(100.0 * 0.5);
        assert_eq!(rig.state().radius.target, 450.0);

        let mut prev = rig.state().radius.current;
        for _ in 0..600 {
            let _ = rig.advance(0.016);
            let r = rig.state().radius.current;
            assert!(r >= prev, "radius moved backwards");
            assert!(r <= 450.0, "radius overshot: {r}");
            prev = r;
        }
        assert!((prev - 450.0).abs() < 1e-2);
    }

    #[test]
    fn test_height_and_look_at_converge_monotonically() {
        let mut rig = rig();
        rig.set_height_target(100.0);
        rig.set_look_target(Vec3::new(30.0, 0.0, -30.0));

        let mut prev_h = rig.state().height.current;
        let mut prev_d = rig.state().look_at.current.distance(
            rig.state().look_at.target,
        );
        for _ in 0..400 {
            let _ = rig.advance(0.016);
            let h = rig.state().height.current;
            let d = rig
                .state()
                .look_at
                .current
                .distance(rig.state().look_at.target);
            assert!(h <= prev_h && h >= 100.0);
            assert!(d <= prev_d);
            prev_h = h;
            prev_d = d;
        }
        assert!((prev_h - 100.0).abs() < 1e-2);
        assert!(prev_d < 1e-2);
    }

    #[test]
    fn test_set_look_target_does_not_snap() {
        let mut rig = rig();
        rig.set_look_target(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(rig.state().look_at.current, Vec3::ZERO);
        let pose = rig.advance(0.016);
        assert!(pose.target.x > 0.0 && pose.target.x < 10.0);
    }

    #[test]
    fn test_angle_takes_shorter_arc() {
        let mut opts = CameraOptions::default();
        opts.initial_angle = 1.0_f32.to_radians();
        let mut rig = OrbitRig::new(&opts);
        rig.set_angle_target(359.0_f32.to_radians());

        for _ in 0..600 {
            let _ = rig.advance(0.016);
            let a = rig.state().angle.current;
            // Never wanders toward 180 degrees: stays within a couple of
            // degrees of zero on either side.
            assert!(a <= 1.0_f32.to_radians() + 1e-6);
            assert!(a >= -2.0_f32.to_radians() - 1e-4);
        }
        let remaining = shortest_angle_delta(
            rig.state().angle.current,
            rig.state().angle.target,
        );
        assert!(remaining.abs() < 1e-4);
    }

    #[test]
    fn test_angle_target_many_turns_away() {
        let mut rig = rig();
        rig.set_angle_target(0.78 + 3.0 * TAU + 0.1);
        let pose_before = rig.pose();
        let _ = rig.advance(0.1);
        // Moves by a fraction of 0.1 rad, not of three full turns.
        let moved = rig.state().angle.current - 0.78;
        assert!(moved > 0.0 && moved < 0.1);
        assert!(rig.pose().eye.distance(pose_before.eye) < 40.0);
    }

    #[test]
    fn test_dt_is_clamped_after_stall() {
        let mut a = rig();
        let mut b = rig();
        a.zoom_by(200.0);
        b.zoom_by(200.0);
        let _ = a.advance(5.0);
        let _ = b.advance(0.1);
        assert_eq!(a.state(), b.state());
        // 0.1s at damping 5 is half way, not a snap.
        assert!((a.state().radius.current - 500.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_and_nan_dt_freeze() {
        let mut rig = rig();
        rig.zoom_by(100.0);
        let before = *rig.state();
        let _ = rig.advance(-1.0);
        let _ = rig.advance(f32::NAN);
        assert_eq!(*rig.state(), before);
    }

    #[test]
    fn test_targets_always_clamped() {
        let mut rig = rig();
        rig.zoom_by(1.0e9);
        assert_eq!(rig.state().radius.target, 600.0);
        rig.zoom_by(-1.0e9);
        assert_eq!(rig.state().radius.target, 150.0);
        rig.raise_by(1.0e9);
        assert_eq!(rig.state().height.target, 500.0);
        rig.raise_by(-1.0e9);
        assert_eq!(rig.state().height.target, 40.0);
        rig.zoom_by(f32::INFINITY);
        assert_eq!(rig.state().radius.target, 150.0);
    }

    #[test]
    fn test_reversed_limits_are_swapped() {
        let mut opts = CameraOptions::default();
        opts.min_radius = 700.0;
        opts.max_radius = 100.0;
        let rig = OrbitRig::new(&opts);
        assert_eq!(rig.limits().min_radius, 100.0);
        assert_eq!(rig.limits().max_radius, 700.0);
    }

    #[test]
    fn test_snap_and_reset() {
        let mut rig = rig();
        rig.zoom_by(100.0);
        rig.rotate_by(1.0);
        let pose = rig.snap_to_targets();
        assert_eq!(rig.state().radius.current, 500.0);
        assert_eq!(pose.eye.y, 220.0);

        rig.reset();
        assert_eq!(rig.state().radius.target, 400.0);
        assert_eq!(rig.state().radius.current, 500.0);
    }

    #[test]
    fn test_apply_options_reclamps_targets() {
        let mut rig = rig();
        rig.zoom_by(150.0);
        let mut opts = CameraOptions::default();
        opts.max_radius = 450.0;
        rig.apply_options(&opts);
        assert_eq!(rig.state().radius.target, 450.0);
    }

    #[test]
    fn test_pose_applies_to_camera() {
        let mut camera = Camera::new(1.0, 45.0, 1.0, 5000.0);
        let pose = rig().pose();
        pose.apply(&mut camera);
        assert_eq!(camera.eye, pose.eye);
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_non_finite_options_fall_back_to_defaults() {
        let options = CameraOptions {
            min_radius: f32::NAN,
            max_height: f32::INFINITY,
            damping_factor: f32::NAN,
            max_frame_dt: f32::NAN,
            initial_height: f32::NAN,
            initial_look_at: [f32::NAN, 0.0, 0.0],
            ..CameraOptions::default()
        };
        let mut rig = OrbitRig::new(&options);
        let defaults = OrbitLimits::from_options(&CameraOptions::default());
        assert_eq!(*rig.limits(), defaults);
        assert_eq!(rig.state().height.current, 220.0);
        assert_eq!(rig.state().look_at.current, Vec3::ZERO);

        // Smoothing still runs with the default rate.
        rig.zoom_by(50.0);
        let _ = rig.advance(0.016);
        let r = rig.state().radius.current;
        assert!(r > 400.0 && r < 450.0);

        rig.apply_options(&options);
        assert_eq!(*rig.limits(), defaults);
        rig.zoom_by(1.0e6);
        assert_eq!(rig.state().radius.target, 600.0);
    }
}
