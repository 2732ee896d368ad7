//! Scene-side collaborators for click resolution.
//!
//! The controller never owns scene content. It reaches the scene through
//! [`PickScene`]: the interactable registry, a ray query, and the ownership
//! chain. [`SceneGraph`] is a flat node table implementing the trait for
//! hosts that have no scene graph of their own (and for tests).

mod bounds;
mod graph;

pub use bounds::Bounds;
pub use graph::{SceneGraph, SceneNode};

use crate::camera::Ray;

// ---------------------------------------------------------------------------
// Node identity
// ---------------------------------------------------------------------------

/// Stable handle to a scene node. Parent links are stored as ids, so a
/// handle never keeps a node alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Index into a node table.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One entry of a hit list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Node whose pick volume the ray touched.
    pub node: NodeId,
    /// Distance from the ray origin.
    pub distance: f32,
}

// ---------------------------------------------------------------------------
// Collaborator contract
// ---------------------------------------------------------------------------

/// Read-only scene access needed to resolve a click.
pub trait PickScene {
    /// Registered interactable roots to ray-cast against.
    fn interactables(&self) -> &[NodeId];

    /// All nodes among `roots` (and their descendants when `recursive`)
    /// intersected by `ray`, sorted nearest first.
    fn intersect(&self, ray: &Ray, roots: &[NodeId], recursive: bool)
        -> Vec<Hit>;

    /// Owning node of `node`, or `None` at a root.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Whether `node` is flagged as a valid click target.
    fn is_interactable(&self, node: NodeId) -> bool;
}
