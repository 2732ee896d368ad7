use rustc_hash::FxHashSet;

use super::{Bounds, Hit, NodeId, PickScene};
use crate::camera::Ray;

/// A node in the [`SceneGraph`] table.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// Display name (diagnostics only).
    pub name: String,
    /// Owning node, if any. A lookup key, never an owning pointer.
    pub parent: Option<NodeId>,
    /// Pick volume; nodes without one are pure grouping nodes.
    pub bounds: Option<Bounds>,
    /// Whether clicks may resolve to this node.
    pub interactable: bool,
    children: Vec<NodeId>,
}

impl SceneNode {
    /// Direct children in insertion order.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Flat node table with id-based parent/child links and an interactable
/// registry.
///
/// This is the in-crate implementation of [`PickScene`]; hosts with their
/// own scene representation implement the trait directly instead.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    registry: Vec<NodeId>,
}

impl SceneGraph {
    /// Create an empty scene graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    /// Add a node under `parent` (or as a root). An unknown parent id makes
    /// the node a root.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        bounds: Option<Bounds>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let parent = parent.filter(|p| p.index() < self.nodes.len());
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(id);
        }
        self.nodes.push(SceneNode {
            name: name.into(),
            parent,
            bounds,
            interactable: false,
            children: Vec::new(),
        });
        id
    }

    /// Move `node` under `parent` (or make it a root).
    ///
    /// Returns `false` and changes nothing if either id is unknown or the
    /// move would create a cycle.
    pub fn set_parent(&mut self, node: NodeId, parent: Option<NodeId>) -> bool {
        if self.node(node).is_none() {
            return false;
        }
        if let Some(p) = parent {
            if self.node(p).is_none() || self.is_ancestor_or_self(node, p) {
                return false;
            }
        }

        if let Some(old) = self.nodes[node.index()].parent {
            self.nodes[old.index()].children.retain(|&c| c != node);
        }
        if let Some(p) = parent {
            self.nodes[p.index()].children.push(node);
        }
        self.nodes[node.index()].parent = parent;
        true
    }

    /// Whether `ancestor` is `node` or lies on its parent chain.
    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        // Links are only created through `add_node`/`set_parent`, so the
        // chain is acyclic and at most `len` long.
        for _ in 0..=self.nodes.len() {
            match cursor {
                Some(id) if id == ancestor => return true,
                Some(id) => cursor = self.nodes[id.index()].parent,
                None => return false,
            }
        }
        false
    }

    /// Replace a node's pick volume.
    pub fn set_bounds(&mut self, node: NodeId, bounds: Option<Bounds>) {
        if let Some(n) = self.nodes.get_mut(node.index()) {
            n.bounds = bounds;
        }
    }

    /// Set or clear the interactable flag without touching the registry.
    pub fn set_interactable(&mut self, node: NodeId, interactable: bool) {
        if let Some(n) = self.nodes.get_mut(node.index()) {
            n.interactable = interactable;
        }
    }

    /// Flag `node` interactable and add it to the registry of ray-cast
    /// roots. Registering twice is a no-op.
    pub fn register_interactable(&mut self, node: NodeId) {
        if self.node(node).is_none() {
            return;
        }
        self.set_interactable(node, true);
        if !self.registry.contains(&node) {
            self.registry.push(node);
        }
    }

    /// Remove `node` from the registry and clear its flag.
    pub fn unregister_interactable(&mut self, node: NodeId) {
        self.registry.retain(|&n| n != node);
        self.set_interactable(node, false);
    }
}

impl PickScene for SceneGraph {
    fn interactables(&self) -> &[NodeId] {
        &self.registry
    }

    fn intersect(
        &self,
        ray: &Ray,
        roots: &[NodeId],
        recursive: bool,
    ) -> Vec<Hit> {
        let mut hits = Vec::new();
        let mut visited = FxHashSet::default();
        let mut stack: Vec<NodeId> = roots.iter().rev().copied().collect();

        while let Some(id) = stack.pop() {
            let Some(node) = self.node(id) else { continue };
            if !visited.insert(id) {
                continue;
            }
            if let Some(distance) =
                node.bounds.and_then(|b| b.ray_distance(ray))
            {
                hits.push(Hit { node: id, distance });
            }
            if recursive {
                stack.extend(node.children.iter().rev().copied());
            }
        }

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).and_then(|n| n.parent)
    }

    fn is_interactable(&self, node: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.interactable)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn sphere(z: f32) -> Option<Bounds> {
        Some(Bounds::Sphere {
            center: Vec3::new(0.0, 0.0, z),
            radius: 1.0,
        })
    }

    fn ray() -> Ray {
        Ray::new(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z)
    }

    #[test]
    fn test_hits_sorted_nearest_first() {
        let mut scene = SceneGraph::new();
        let far = scene.add_node("far", None, sphere(-5.0));
        let near = scene.add_node("near", None, sphere(5.0));
        let mid = scene.add_node("mid", None, sphere(0.0));

        let hits = scene.intersect(&ray(), &[far, near, mid], true);
        let order: Vec<NodeId> = hits.iter().map(|h| h.node).collect();
        assert_eq!(order, vec![near, mid, far]);
        assert!(hits.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn test_recursive_includes_descendants() {
        let mut scene = SceneGraph::new();
        let group = scene.add_node("group", None, None);
        let child = scene.add_node("child", Some(group), None);
        let mesh = scene.add_node("mesh", Some(child), sphere(0.0));

        let hits = scene.intersect(&ray(), &[group], true);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].node, mesh);

        assert!(scene.intersect(&ray(), &[group], false).is_empty());
    }

    #[test]
    fn test_overlapping_roots_report_once() {
        let mut scene = SceneGraph::new();
        let group = scene.add_node("group", None, None);
        let mesh = scene.add_node("mesh", Some(group), sphere(0.0));
        let hits = scene.intersect(&ray(), &[group, mesh], true);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_registry_dedups_and_flags() {
        let mut scene = SceneGraph::new();
        let a = scene.add_node("a", None, None);
        scene.register_interactable(a);
        scene.register_interactable(a);
        scene.register_interactable(NodeId(99));
        assert_eq!(scene.interactables(), &[a]);
        assert!(scene.is_interactable(a));

        scene.unregister_interactable(a);
        assert!(scene.interactables().is_empty());
        assert!(!scene.is_interactable(a));
    }

    #[test]
    fn test_set_parent_rejects_cycles() {
        let mut scene = SceneGraph::new();
        let a = scene.add_node("a", None, None);
        let b = scene.add_node("b", Some(a), None);
        let c = scene.add_node("c", Some(b), None);

        assert!(!scene.set_parent(a, Some(c)));
        assert!(!scene.set_parent(a, Some(a)));
        assert_eq!(scene.parent(a), None);

        assert!(scene.set_parent(c, Some(a)));
        assert_eq!(scene.parent(c), Some(a));
        assert_eq!(scene.node(a).unwrap().children(), &[b, c]);
        assert!(scene.node(b).unwrap().children().is_empty());
    }

    #[test]
    fn test_unknown_parent_becomes_root() {
        let mut scene = SceneGraph::new();
        let orphan = scene.add_node("orphan", Some(NodeId(7)), None);
        assert_eq!(scene.parent(orphan), None);
        assert_eq!(scene.len(), 1);
    }
}
