//! Shared math utilities.
//!
//! Exponential smoothing and shortest-arc angle helpers used by the orbit
//! rig.

pub mod damping;
