// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Damped orbit camera control with click-versus-drag gesture
//! classification and interactable-object resolution.
//!
//! Viewpoint drives a single 3D view: pointer drags orbit the camera around
//! a look-at point, the wheel zooms, and short press/release pairs become
//! clicks that are ray cast into the host's scene and resolved to the
//! nearest registered interactable ancestor.
//!
//! # Key entry points
//!
//! - [`ViewController`] - the controller façade the host talks to
//! - [`camera::OrbitRig`] - orbit targets, limits, and per-frame damping
//! - [`input::GestureClassifier`] - pointer events to [`ViewCommand`]s
//! - [`picking::InteractionResolver`] - ray cast plus bounded ancestor walk
//! - [`scene::PickScene`] - the scene seam the host implements (or use
//!   [`scene::SceneGraph`])
//! - [`options::Options`] - runtime configuration (camera, input, picking)
//!
//! # Architecture
//!
//! Input callbacks only move targets. Once per rendered frame the host calls
//! [`ViewController::update`], which advances every smoothed value toward its
//! target with a frame-rate-independent factor and poses the camera. Clicks
//! are resolved synchronously inside the input call that completes them.

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;

pub use controller::{InputResponse, ViewCommand, ViewController};
pub use error::ViewpointError;
