//! Converts raw pointer/wheel events into controller commands.
//!
//! The `GestureClassifier` owns all transient input state (drag session,
//! gesture gates) and the sensitivities that scale pixel deltas into orbit
//! changes. It is the only thing that sits between raw events and
//! [`ViewController::execute`](crate::ViewController::execute).

use glam::Vec2;

use super::event::InputEvent;
use super::gesture::{GestureGates, GestureState, ReleaseResult};
use crate::controller::ViewCommand;
use crate::options::InputOptions;

/// What the classifier made of one event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureOutcome {
    /// Command to execute, if the event meant anything.
    pub command: Option<ViewCommand>,
    /// Whether the host should suppress the platform default (page scroll).
    pub prevent_default: bool,
}

impl GestureOutcome {
    fn ignored() -> Self {
        Self::default()
    }

    fn command(command: ViewCommand) -> Self {
        Self {
            command: Some(command),
            prevent_default: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// GestureClassifier
// ─────────────────────────────────────────────────────────────────────────────

/// Idle/Dragging state machine that turns pointer input into
/// [`ViewCommand`]s.
///
/// # Usage
///
/// ```
/// # use viewpoint::input::{GestureClassifier, InputEvent};
/// # use viewpoint::options::InputOptions;
/// let mut classifier = GestureClassifier::new(&InputOptions::default());
/// let outcome = classifier.handle_event(InputEvent::Wheel {
///     delta: 100.0,
///     on_surface: true,
/// });
/// assert!(outcome.prevent_default);
/// assert!(outcome.command.is_some());
/// ```
#[derive(Debug, Clone)]
pub struct GestureClassifier {
    state: GestureState,
    gates: GestureGates,
    rotate_speed: f32,
    pan_speed: f32,
    zoom_speed: f32,
    click_threshold: f32,
}

impl GestureClassifier {
    /// Create an idle, enabled classifier.
    #[must_use]
    pub fn new(options: &InputOptions) -> Self {
        let mut classifier = Self {
            state: GestureState::Idle,
            gates: GestureGates::default(),
            rotate_speed: 0.0,
            pan_speed: 0.0,
            zoom_speed: 0.0,
            click_threshold: 0.0,
        };
        classifier.apply_options(options);
        classifier
    }

    /// Re-read sensitivities. Does not disturb a drag in progress.
    pub fn apply_options(&mut self, options: &InputOptions) {
        self.rotate_speed = options.rotate_speed;
        self.pan_speed = options.pan_speed;
        self.zoom_speed = options.zoom_speed;
        self.click_threshold = options.click_threshold.max(0.0);
    }

    /// Current drag state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Current gates.
    #[must_use]
    pub fn gates(&self) -> GestureGates {
        self.gates
    }

    /// Enable or disable input. Disabling drops any drag in progress
    /// without a click. Idempotent.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.gates.enabled = enabled;
        self.enforce_gates();
    }

    /// Lock or unlock input. Locking drops any drag in progress without a
    /// click. Idempotent.
    pub fn set_locked(&mut self, locked: bool) {
        self.gates.locked = locked;
        self.enforce_gates();
    }

    fn enforce_gates(&mut self) {
        if !self.gates.allows_input() && self.state.cancel() {
            log::debug!("drag cancelled by gates {:?}", self.gates);
        }
    }

    /// Process a raw input event.
    pub fn handle_event(&mut self, event: InputEvent) -> GestureOutcome {
        match event {
            InputEvent::PointerDown {
                x,
                y,
                button,
                on_surface,
            } => {
                if self.gates.allows_input()
                    && on_surface
                    && button.starts_drag()
                {
                    self.state.press(Vec2::new(x, y));
                    log::trace!("drag start at ({x}, {y}) with {button:?}");
                }
                GestureOutcome::ignored()
            }
            InputEvent::PointerMove { x, y } => self.handle_move(x, y),
            InputEvent::PointerUp { x, y, on_surface } => {
                self.handle_release(Vec2::new(x, y), on_surface)
            }
            InputEvent::PointerCancel => {
                if self.state.cancel() {
                    log::trace!("drag cancelled by pointer loss");
                }
                GestureOutcome::ignored()
            }
            InputEvent::Wheel { delta, on_surface } => {
                if !on_surface {
                    return GestureOutcome::ignored();
                }
                let command = (self.gates.allows_input() && delta != 0.0)
                    .then(|| ViewCommand::Zoom {
                        radius_delta: delta * self.zoom_speed,
                    });
                GestureOutcome {
                    command,
                    prevent_default: true,
                }
            }
        }
    }

    /// Pointer moved: while dragging, horizontal travel orbits and vertical
    /// travel raises or lowers the camera.
    fn handle_move(&mut self, x: f32, y: f32) -> GestureOutcome {
        if !self.gates.allows_input() {
            return GestureOutcome::ignored();
        }
        match self.state.track(Vec2::new(x, y)) {
            Some(delta) if delta != Vec2::ZERO => {
                GestureOutcome::command(ViewCommand::Orbit {
                    angle_delta: delta.x * self.rotate_speed,
                    height_delta: delta.y * self.pan_speed,
                })
            }
            _ => GestureOutcome::ignored(),
        }
    }

    /// Pointer released: end the drag and decide whether it was a click.
    fn handle_release(
        &mut self,
        position: Vec2,
        on_surface: bool,
    ) -> GestureOutcome {
        if !self.gates.allows_input() {
            let _ = self.state.cancel();
            return GestureOutcome::ignored();
        }
        match self
            .state
            .release(position, on_surface, self.click_threshold)
        {
            ReleaseResult::Click { position } => {
                log::trace!("click at {position}");
                GestureOutcome::command(ViewCommand::Click { position })
            }
            ReleaseResult::DragEnd => {
                log::trace!("drag end at {position}");
                GestureOutcome::ignored()
            }
            ReleaseResult::NoAction => GestureOutcome::ignored(),
        }
    }
}
