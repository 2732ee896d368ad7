use glam::Vec2;

/// Mode flags owned by the host (dialog open, cut-scene playing).
///
/// Input is only interpreted while `enabled && !locked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureGates {
    /// Master switch for pointer and wheel handling.
    pub enabled: bool,
    /// Temporary freeze; wins over `enabled`.
    pub locked: bool,
}

impl Default for GestureGates {
    fn default() -> Self {
        Self {
            enabled: true,
            locked: false,
        }
    }
}

impl GestureGates {
    /// Whether pointer/wheel input may mutate targets or resolve clicks.
    #[must_use]
    pub fn allows_input(&self) -> bool {
        self.enabled && !self.locked
    }
}

/// Pointer positions recorded for the drag in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSession {
    /// Where the button went down.
    pub down_position: Vec2,
    /// Last position seen while dragging.
    pub last_position: Vec2,
}

/// Drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No button held on the surface.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging(PointerSession),
}

/// Result of processing a pointer-up through the state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseResult {
    /// Nothing was being dragged, or the release landed off-surface.
    NoAction,
    /// The pointer stayed within the click threshold.
    Click {
        /// Release position in pixels.
        position: Vec2,
    },
    /// The pointer travelled; the drag simply ends.
    DragEnd,
}

impl GestureState {
    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Begin a drag at `position`. A press while already dragging keeps the
    /// original session.
    pub fn press(&mut self, position: Vec2) {
        if !self.is_dragging() {
            *self = Self::Dragging(PointerSession {
                down_position: position,
                last_position: position,
            });
        }
    }

    /// Record a move and return the delta since the last position, or
    /// `None` when idle. Non-finite positions are skipped and leave the
    /// session untouched.
    pub fn track(&mut self, position: Vec2) -> Option<Vec2> {
        match self {
            Self::Dragging(_) if !position.is_finite() => None,
            Self::Dragging(session) => {
                let delta = position - session.last_position;
                session.last_position = position;
                Some(delta)
            }
            Self::Idle => None,
        }
    }

    /// End the drag at `position` and classify it.
    ///
    /// Travel strictly below `click_threshold` pixels is a click. A release
    /// off the render surface always ends the drag without a click.
    pub fn release(
        &mut self,
        position: Vec2,
        on_surface: bool,
        click_threshold: f32,
    ) -> ReleaseResult {
        let Self::Dragging(session) = std::mem::take(self) else {
            return ReleaseResult::NoAction;
        };
        if !on_surface {
            return ReleaseResult::NoAction;
        }
        if position.distance(session.down_position) < click_threshold {
            ReleaseResult::Click { position }
        } else {
            ReleaseResult::DragEnd
        }
    }

    /// Drop any drag in progress. Returns whether one was dropped.
    pub fn cancel(&mut self) -> bool {
        std::mem::take(self).is_dragging()
    }
}
