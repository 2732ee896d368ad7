//! Input dispatch and command execution for [`ViewController`].

use super::{ViewCommand, ViewController};
use crate::input::InputEvent;
use crate::scene::{NodeId, PickScene};

/// What the host should do after forwarding an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputResponse {
    /// Suppress the platform default (page scroll on wheel).
    pub prevent_default: bool,
    /// Interactable node resolved by a click, if this event completed one.
    pub picked: Option<NodeId>,
}

impl ViewController {
    /// Process a platform-agnostic input event.
    ///
    /// This is the primary input entry point. Drags update orbit targets,
    /// wheel updates the radius target, and a click is resolved against
    /// `scene` (firing the click callback at most once). All target changes
    /// land before the next [`update`](Self::update).
    pub fn handle_input<S: PickScene + ?Sized>(
        &mut self,
        event: InputEvent,
        scene: &S,
    ) -> InputResponse {
        let outcome = self.classifier.handle_event(event);
        let picked = outcome
            .command
            .and_then(|command| self.execute(command, scene));
        InputResponse {
            prevent_default: outcome.prevent_default,
            picked,
        }
    }

    /// Execute a command. Returns the resolved node for
    /// [`ViewCommand::Click`].
    ///
    /// Orbit, zoom, and click commands obey the gesture gates exactly like
    /// pointer input: while disabled or locked they do nothing.
    /// [`ViewCommand::SetLookTarget`] is always applied, matching
    /// [`set_look_target`](Self::set_look_target).
    pub fn execute<S: PickScene + ?Sized>(
        &mut self,
        command: ViewCommand,
        scene: &S,
    ) -> Option<NodeId> {
        let gated = !matches!(command, ViewCommand::SetLookTarget { .. });
        if gated && !self.classifier.gates().allows_input() {
            log::trace!("{command:?} dropped by gates");
            return None;
        }
        match command {
            ViewCommand::Orbit {
                angle_delta,
                height_delta,
            } => {
                self.rig.rotate_by(angle_delta);
                self.rig.raise_by(height_delta);
                None
            }
            ViewCommand::Zoom { radius_delta } => {
                self.rig.zoom_by(radius_delta);
                None
            }
            ViewCommand::Click { position } => {
                let ndc = self.ndc(position)?;
                self.resolver.resolve_click(ndc, self.camera.as_ref(), scene)
            }
            ViewCommand::SetLookTarget { point } => {
                self.rig.set_look_target(point);
                None
            }
        }
    }
}
