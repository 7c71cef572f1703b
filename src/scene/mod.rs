//! Pickable scene: a node arena with bounds and materials, the
//! name registry the selection controller resolves hits against, and the
//! per-frame animation callbacks.
//!
//! The host renderer owns the real scene graph. [`SceneHost`] is the narrow
//! boundary the selection code needs from it; [`Scene`] is the in-crate
//! implementation used by the engine, the binary and the tests.

mod animation;
mod material;
mod raycast;
mod registry;

pub use animation::{AnimationCallbacks, AnimationFn};
use glam::Vec3;
pub use material::{Material, MaterialId};
pub use raycast::{Bounds, Ray, RayHit};
pub use registry::RegisteredObject;
use rustc_hash::FxHashMap;

// ---------------------------------------------------------------------------
// Host boundary
// ---------------------------------------------------------------------------

/// What the selection controller needs from a scene.
///
/// Everything is queried or mutated through this trait, so the controllers
/// never hold registry state of their own.
pub trait SceneHost {
    /// All pickable intersections along `ray`, nearest first.
    fn raycast(&self, ray: &Ray) -> Vec<RayHit>;

    /// Nearest registered object owning `node` (the node itself or an
    /// ancestor).
    fn resolve_registered_ancestor(
        &self,
        node: NodeId,
    ) -> Option<RegisteredObject>;

    /// Name of the currently selected registered object.
    fn selected_name(&self) -> Option<&str>;

    /// Record the selected registered object.
    fn set_selected_name(&mut self, name: Option<String>);

    /// `root` and every descendant that carries a material.
    fn mesh_nodes(&self, root: NodeId) -> Vec<NodeId>;

    /// Material handle assigned to `node`.
    fn node_material(&self, node: NodeId) -> Option<MaterialId>;

    /// Assign a material handle to `node`.
    fn set_node_material(&mut self, node: NodeId, material: MaterialId);

    /// Material data behind a handle.
    fn material(&self, id: MaterialId) -> Option<&Material>;

    /// Store a new material and return its handle.
    fn add_material(&mut self, material: Material) -> MaterialId;

    /// Drop a material that is no longer assigned anywhere.
    fn release_material(&mut self, id: MaterialId);
}

// ---------------------------------------------------------------------------
// Nodes
// ---------------------------------------------------------------------------

/// Index of a node in its [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Raw index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One scene node.
#[derive(Debug, Clone)]
pub struct Node {
    /// Display name (not necessarily the registry name).
    pub name: String,
    /// Parent node. Parents are always created before their children.
    pub parent: Option<NodeId>,
    /// World-space hit volume; groups usually have none.
    pub bounds: Option<Bounds>,
    /// Assigned material; groups usually have none.
    pub material: Option<MaterialId>,
    /// Whether raycasts consider this node (glows and halos opt out).
    pub pickable: bool,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// Flat node arena plus materials, registry and selection.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<Node>,
    materials: Vec<Option<Material>>,
    registry: FxHashMap<String, NodeId>,
    /// Registered names in registration order.
    order: Vec<String>,
    selected: Option<String>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Node construction --

    /// Add a bounds-less grouping node.
    pub fn add_group(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
    ) -> NodeId {
        self.push_node(Node {
            name: name.into(),
            parent: self.valid_parent(parent),
            bounds: None,
            material: None,
            pickable: true,
        })
    }

    /// Add a pickable mesh node with its own material.
    pub fn add_mesh(
        &mut self,
        name: impl Into<String>,
        parent: Option<NodeId>,
        bounds: Bounds,
        material: Material,
    ) -> NodeId {
        let material = self.add_material(material);
        self.push_node(Node {
            name: name.into(),
            parent: self.valid_parent(parent),
            bounds: Some(bounds),
            material: Some(material),
            pickable: true,
        })
    }

    /// Convenience: a registered sphere at the top level.
    pub fn add_sphere(
        &mut self,
        name: &str,
        center: Vec3,
        radius: f32,
        color: [f32; 3],
    ) -> NodeId {
        let node = self.add_mesh(
            name,
            None,
            Bounds::sphere(center, radius),
            Material::solid(color),
        );
        let _ = self.register(name, node);
        node
    }

    /// Include or exclude a node from raycasts.
    pub fn set_pickable(&mut self, node: NodeId, pickable: bool) {
        if let Some(n) = self.nodes.get_mut(node.index()) {
            n.pickable = pickable;
        }
    }

    fn valid_parent(&self, parent: Option<NodeId>) -> Option<NodeId> {
        parent.filter(|p| {
            let ok = p.index() < self.nodes.len();
            if !ok {
                log::warn!("ignoring unknown parent node {}", p.0);
            }
            ok
        })
    }

    fn push_node(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    // -- Queries --

    /// Node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Direct children of `parent`.
    pub fn children(
        &self,
        parent: NodeId,
    ) -> impl Iterator<Item = NodeId> + '_ {
        self.ids()
            .filter(move |&id| self.nodes[id.index()].parent == Some(parent))
    }

    fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Whether `node` is `root` or lies beneath it.
    #[must_use]
    pub fn is_descendant(&self, node: NodeId, root: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == root {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }
}

impl SceneHost for Scene {
    fn raycast(&self, ray: &Ray) -> Vec<RayHit> {
        let mut hits: Vec<RayHit> = self
            .ids()
            .zip(&self.nodes)
            .filter(|(_, node)| node.pickable)
            .filter_map(|(id, node)| {
                let distance = node.bounds?.intersect(ray)?;
                Some(RayHit {
                    node: id,
                    distance,
                    point: ray.at(distance),
                })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    fn resolve_registered_ancestor(
        &self,
        node: NodeId,
    ) -> Option<RegisteredObject> {
        self.registered_ancestor(node)
    }

    fn selected_name(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn set_selected_name(&mut self, name: Option<String>) {
        self.selected = name;
    }

    fn mesh_nodes(&self, root: NodeId) -> Vec<NodeId> {
        // Parents precede children, so one forward pass marks the subtree.
        let mut in_tree = vec![false; self.nodes.len()];
        let mut meshes = Vec::new();
        for (id, node) in self.ids().zip(&self.nodes) {
            let inside = id == root
                || node.parent.is_some_and(|p| in_tree[p.index()]);
            in_tree[id.index()] = inside;
            if inside && node.material.is_some() {
                meshes.push(id);
            }
        }
        meshes
    }

    fn node_material(&self, node: NodeId) -> Option<MaterialId> {
        self.node(node).and_then(|n| n.material)
    }

    fn set_node_material(&mut self, node: NodeId, material: MaterialId) {
        if let Some(n) = self.nodes.get_mut(node.index()) {
            n.material = Some(material);
        }
    }

    fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize).and_then(Option::as_ref)
    }

    fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.materials.push(Some(material));
        id
    }

    fn release_material(&mut self, id: MaterialId) {
        if let Some(slot) = self.materials.get_mut(id.0 as usize) {
            *slot = None;
        }
    }
}
