//! Input handling: event types, the drag/click state machine, and the
//! classifier that converts raw pointer events into controller commands.

/// Platform-agnostic input events.
pub mod event;
/// Gesture gates, drag session, and release classification.
pub mod gesture;
/// Converts raw events into controller commands.
pub mod processor;

pub use event::{InputEvent, PointerButton};
pub use gesture::{GestureGates, GestureState, PointerSession, ReleaseResult};
pub use processor::{GestureClassifier, GestureOutcome};
