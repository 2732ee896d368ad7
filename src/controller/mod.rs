//! The viewpoint controller: orbit rig, gesture classifier, and click
//! resolver wired together behind one façade.
//!
//! The controller owns camera pose and pointer interpretation only. Scene
//! content stays with the host and is lent per call through
//! [`PickScene`](crate::scene::PickScene).

mod command;
mod input;

pub use command::ViewCommand;
pub use input::InputResponse;

use glam::{Vec2, Vec3};

use crate::camera::{Camera, CameraPose, OrbitRig};
use crate::input::{GestureClassifier, GestureGates};
use crate::options::Options;
use crate::picking::InteractionResolver;
use crate::scene::NodeId;

/// Interactive orbit-camera controller for a single 3D view.
///
/// # Frame loop
///
/// ```
/// # use viewpoint::{ViewController, options::Options, input::InputEvent};
/// # use viewpoint::scene::SceneGraph;
/// let scene = SceneGraph::new();
/// let mut controller = ViewController::new(Options::default());
/// controller.attach_camera(1280, 720);
///
/// // Input callbacks, in arrival order:
/// let response = controller.handle_input(
///     InputEvent::Wheel { delta: 100.0, on_surface: true },
///     &scene,
/// );
/// assert!(response.prevent_default);
///
/// // Once per rendered frame:
/// let pose = controller.update(0.016);
/// assert!(pose.is_some());
/// ```
pub struct ViewController {
    rig: OrbitRig,
    classifier: GestureClassifier,
    resolver: InteractionResolver,
    camera: Option<Camera>,
    viewport: (u32, u32),
    options: Options,
}

impl ViewController {
    /// Create a controller with no camera attached. Until one is attached,
    /// [`update`](Self::update) and click resolution do nothing.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            rig: OrbitRig::new(&options.camera),
            classifier: GestureClassifier::new(&options.input),
            resolver: InteractionResolver::new(&options.picking),
            camera: None,
            viewport: (0, 0),
            options,
        }
    }

    // -- Camera --

    /// Create a camera from the configured projection for a `width` x
    /// `height` viewport and place it at the rig's current pose.
    pub fn attach_camera(&mut self, width: u32, height: u32) {
        let opts = &self.options.camera;
        let mut camera = Camera::new(1.0, opts.fovy, opts.znear, opts.zfar);
        camera.resize(width, height);
        self.set_camera(Some(camera));
        self.viewport = (width, height);
    }

    /// Install a host-built camera (or detach with `None`). The rig's
    /// current pose is applied immediately.
    pub fn set_camera(&mut self, camera: Option<Camera>) {
        self.camera = camera;
        let pose = self.rig.pose();
        if let Some(camera) = self.camera.as_mut() {
            pose.apply(camera);
        }
    }

    /// The attached camera, if any.
    #[must_use]
    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    /// Track a viewport resize for pixel → NDC conversion and aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
        if let Some(camera) = self.camera.as_mut() {
            camera.resize(width, height);
        }
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    // -- External mutators --

    /// Enable or disable pointer/wheel handling. Disabling drops any drag in
    /// progress without a click.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.classifier.set_enabled(enabled);
    }

    /// Lock or unlock pointer/wheel handling. Locking drops any drag in
    /// progress without a click.
    pub fn set_locked(&mut self, locked: bool) {
        self.classifier.set_locked(locked);
    }

    /// Current gesture gates.
    #[must_use]
    pub fn gates(&self) -> GestureGates {
        self.classifier.gates()
    }

    /// Move the look-at target; the camera glides there over the next
    /// frames.
    pub fn set_look_target(&mut self, point: Vec3) {
        self.rig.set_look_target(point);
    }

    /// Install the click callback. It runs at most once per qualifying
    /// click, with the resolved interactable node.
    pub fn set_on_object_clicked(
        &mut self,
        callback: impl FnMut(NodeId) + 'static,
    ) {
        self.resolver.set_on_object_clicked(callback);
    }

    /// Remove the click callback.
    pub fn clear_on_object_clicked(&mut self) {
        self.resolver.clear_on_object_clicked();
    }

    // -- Options --

    /// Active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replace options. Limits, sensitivities, and projection take effect
    /// immediately; targets are re-clamped; a drag in progress survives.
    pub fn set_options(&mut self, options: Options) {
        self.rig.apply_options(&options.camera);
        self.classifier.apply_options(&options.input);
        self.resolver
            .set_max_ancestor_depth(options.picking.max_ancestor_depth);
        if let Some(camera) = self.camera.as_mut() {
            camera.fovy = options.camera.fovy;
            camera.znear = options.camera.znear;
            camera.zfar = options.camera.zfar;
        }
        self.options = options;
    }

    // -- Frame --

    /// Read-only view of the orbit rig.
    #[must_use]
    pub fn rig(&self) -> &OrbitRig {
        &self.rig
    }

    /// Advance smoothing by `dt` seconds and pose the camera. Call once per
    /// rendered frame. Returns `None` (and leaves the rig untouched) while
    /// no camera is attached.
    pub fn update(&mut self, dt: f32) -> Option<CameraPose> {
        let camera = self.camera.as_mut()?;
        let pose = self.rig.advance(dt);
        pose.apply(camera);
        Some(pose)
    }

    /// Pixel position → normalized device coordinates for the current
    /// viewport.
    fn ndc(&self, position: Vec2) -> Option<Vec2> {
        let (w, h) = self.viewport;
        crate::camera::ndc_from_pixels(position, w as f32, h as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_without_camera_is_noop() {
        let mut controller = ViewController::new(Options::default());
        controller.set_look_target(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(controller.update(0.016), None);
        assert_eq!(controller.rig().state().look_at.current, Vec3::ZERO);
    }

    #[test]
    fn test_attach_places_camera_at_rig_pose() {
        let mut controller = ViewController::new(Options::default());
        controller.attach_camera(800, 400);
        let camera = controller.camera().unwrap();
        assert_eq!(camera.eye, controller.rig().pose().eye);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
        assert_eq!(controller.viewport(), (800, 400));
    }

    #[test]
    fn test_update_poses_camera() {
        let mut controller = ViewController::new(Options::default());
        controller.attach_camera(800, 600);
        controller.set_look_target(Vec3::new(0.0, 10.0, 0.0));
        let pose = controller.update(0.05).unwrap();
        assert_eq!(controller.camera().unwrap().target, pose.target);
        assert!(pose.target.y > 0.0 && pose.target.y < 10.0);
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut controller = ViewController::new(Options::default());
        controller.attach_camera(800, 600);
        controller.resize(1000, 500);
        assert!((controller.camera().unwrap().aspect - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_options_reclamps_and_updates_projection() {
        let mut controller = ViewController::new(Options::default());
        controller.attach_camera(800, 600);
        let mut options = Options::default();
        options.camera.max_radius = 300.0;
        options.camera.fovy = 60.0;
        controller.set_options(options);
        assert_eq!(controller.rig().state().radius.target, 300.0);
        assert_eq!(controller.camera().unwrap().fovy, 60.0);
        assert_eq!(controller.options().camera.max_radius, 300.0);
    }

    #[test]
    fn test_detach_camera() {
        let mut controller = ViewController::new(Options::default());
        controller.attach_camera(800, 600);
        controller.set_camera(None);
        assert!(controller.camera().is_none());
        assert_eq!(controller.update(0.016), None);
    }

    #[test]
    fn test_nan_bounds_in_options_file_are_normalized() {
        let options =
            Options::from_toml_str("[camera]\nmin_radius = nan\n").unwrap();
        assert!(options.camera.min_radius.is_nan());

        let mut controller = ViewController::new(options.clone());
        controller.attach_camera(800, 600);
        assert_eq!(controller.rig().limits().min_radius, 150.0);
        assert!(controller.update(0.016).is_some());

        controller.set_options(Options::default());
        controller.set_options(options);
        assert_eq!(controller.rig().state().radius.target, 400.0);
    }
}
