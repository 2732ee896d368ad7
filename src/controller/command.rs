//! The controller's interactive vocabulary.
//!
//! Pointer gestures are translated into `ViewCommand`s by the
//! [`GestureClassifier`](crate::input::GestureClassifier); hosts may also
//! construct them directly and pass them to
//! [`ViewController::execute`](super::ViewController::execute).

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// A single mutation of orbit targets or a click to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewCommand {
    /// Shift the orbit angle and height targets.
    Orbit {
        /// Angle change in radians.
        angle_delta: f32,
        /// Height change in world units.
        height_delta: f32,
    },
    /// Shift the orbit radius target.
    Zoom {
        /// Radius change in world units.
        radius_delta: f32,
    },
    /// Resolve a click at a pixel position.
    Click {
        /// Release position in viewport pixels.
        position: Vec2,
    },
    /// Move the look-at target.
    SetLookTarget {
        /// New look-at point.
        point: Vec3,
    },
}
