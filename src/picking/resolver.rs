use glam::Vec2;

use crate::camera::Camera;
use crate::options::PickingOptions;
use crate::scene::{NodeId, PickScene};

/// Single-slot click notification.
pub type ClickCallback = Box<dyn FnMut(NodeId)>;

/// Resolves a click at a normalized pointer position into the interactable
/// node that owns whatever the ray hit first.
pub struct InteractionResolver {
    max_ancestor_depth: usize,
    on_object_clicked: Option<ClickCallback>,
}

impl InteractionResolver {
    /// Create a resolver with no callback registered.
    #[must_use]
    pub fn new(options: &PickingOptions) -> Self {
        Self {
            max_ancestor_depth: options.max_ancestor_depth,
            on_object_clicked: None,
        }
    }

    /// Number of nodes (the hit node included) inspected on the way up.
    #[must_use]
    pub fn max_ancestor_depth(&self) -> usize {
        self.max_ancestor_depth
    }

    /// Change the ownership walk bound.
    pub fn set_max_ancestor_depth(&mut self, depth: usize) {
        self.max_ancestor_depth = depth;
    }

    /// Install the click callback, replacing any previous one.
    pub fn set_on_object_clicked(
        &mut self,
        callback: impl FnMut(NodeId) + 'static,
    ) {
        self.on_object_clicked = Some(Box::new(callback));
    }

    /// Remove the click callback.
    pub fn clear_on_object_clicked(&mut self) {
        self.on_object_clicked = None;
    }

    /// Whether a click callback is installed.
    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.on_object_clicked.is_some()
    }

    /// Resolve a click and notify the callback.
    ///
    /// Casts a ray from `camera` through `ndc`, takes the nearest hit among
    /// the scene's interactable roots and their descendants, and walks its
    /// ownership chain for the first interactable node. The callback fires
    /// at most once; the resolved node is also returned.
    ///
    /// A missing camera, an empty registry, a miss, or a chain with no
    /// interactable node within the bound all resolve to `None`.
    pub fn resolve_click<S: PickScene + ?Sized>(
        &mut self,
        ndc: Vec2,
        camera: Option<&Camera>,
        scene: &S,
    ) -> Option<NodeId> {
        let camera = camera?;
        let roots = scene.interactables();
        if roots.is_empty() {
            return None;
        }

        let ray = camera.ray_from_ndc(ndc);
        let hits = scene.intersect(&ray, roots, true);
        let Some(nearest) = hits.first() else {
            log::trace!("click at {ndc} hit nothing");
            return None;
        };

        let Some(owner) = find_interactable_ancestor(
            scene,
            nearest.node,
            self.max_ancestor_depth,
        ) else {
            log::debug!(
                "click hit {:?} but no interactable owner within {} levels",
                nearest.node,
                self.max_ancestor_depth
            );
            return None;
        };

        log::debug!("clicked {owner:?} (hit {:?})", nearest.node);
        if let Some(callback) = self.on_object_clicked.as_mut() {
            callback(owner);
        }
        Some(owner)
    }
}

/// Walk from `node` toward the root, inspecting at most `max_depth` nodes
/// (`node` itself first), and return the first interactable one.
///
/// The bound is a hard loop limit, so malformed (cyclic) hierarchies
/// terminate.
pub fn find_interactable_ancestor<S: PickScene + ?Sized>(
    scene: &S,
    node: NodeId,
    max_depth: usize,
) -> Option<NodeId> {
    let mut cursor = Some(node);
    for _ in 0..max_depth {
        let id = cursor?;
        if scene.is_interactable(id) {
            return Some(id);
        }
        cursor = scene.parent(id);
    }
    None
}
