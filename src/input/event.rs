use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer and wheel events.
///
/// Positions are in viewport pixels with the origin at the top-left. The
/// host decides whether an event originated on the 3D render surface (as
/// opposed to overlay UI) and reports it in `on_surface`.
///
/// These are fed into a
/// [`GestureClassifier`](super::GestureClassifier), usually through
/// [`ViewController::handle_input`](crate::ViewController::handle_input).
///
/// # Example
///
/// ```
/// # use viewpoint::input::{InputEvent, PointerButton};
/// let down = InputEvent::PointerDown {
///     x: 100.0,
///     y: 100.0,
///     button: PointerButton::Primary,
///     on_surface: true,
/// };
/// # let _ = down;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// A pointer button was pressed.
    PointerDown {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Which button went down.
        button: PointerButton,
        /// Whether the event originated on the render surface.
        on_surface: bool,
    },
    /// The pointer moved.
    PointerMove {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// A pointer button was released.
    PointerUp {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
        /// Whether the release happened over the render surface.
        on_surface: bool,
    },
    /// The pointer was lost (capture lost, window blurred). Ends any drag
    /// without a click.
    PointerCancel,
    /// Scroll wheel (positive = away from the look-at point).
    Wheel {
        /// Scroll amount in wheel units.
        delta: f32,
        /// Whether the event originated on the render surface.
        on_surface: bool,
    },
}

/// Platform-agnostic pointer button identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PointerButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Auxiliary (wheel click) button.
    Auxiliary,
}

impl PointerButton {
    /// Map a DOM-style button index (`0` primary, `1` auxiliary, `2`
    /// secondary). Other indices (back/forward) have no mapping.
    #[must_use]
    pub fn from_index(index: i16) -> Option<Self> {
        match index {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// Whether this button may start an orbit drag.
    #[must_use]
    pub fn starts_drag(self) -> bool {
        matches!(self, Self::Primary | Self::Secondary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_index_mapping() {
        assert_eq!(PointerButton::from_index(0), Some(PointerButton::Primary));
        assert_eq!(
            PointerButton::from_index(2),
            Some(PointerButton::Secondary)
        );
        assert_eq!(
            PointerButton::from_index(1),
            Some(PointerButton::Auxiliary)
        );
        assert_eq!(PointerButton::from_index(3), None);
        assert!(!PointerButton::Auxiliary.starts_drag());
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"{"type":"pointer_down","x":1.0,"y":2.0,"button":"secondary","on_surface":true}"#;
        let event: InputEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            InputEvent::PointerDown {
                x: 1.0,
                y: 2.0,
                button: PointerButton::Secondary,
                on_surface: true,
            }
        );

        let cancel: InputEvent =
            serde_json::from_str(r#"{"type":"pointer_cancel"}"#).unwrap();
        assert_eq!(cancel, InputEvent::PointerCancel);
    }
}
