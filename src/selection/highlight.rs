use crate::scene::{MaterialId, NodeId, SceneHost};

/// Emissive swap applied to a selected object's meshes.
///
/// Each mesh under the highlighted node gets a cloned material with the
/// highlight emissive; the original handles are kept and put back on
/// [`Highlight::restore`], and the clones are released.
#[derive(Debug, Default)]
pub struct Highlight {
    target: Option<NodeId>,
    /// (mesh, original material, highlight clone)
    saved: Vec<(NodeId, MaterialId, MaterialId)>,
}

impl Highlight {
    /// Create an inactive highlight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Node currently highlighted.
    #[must_use]
    pub fn target(&self) -> Option<NodeId> {
        self.target
    }

    /// Highlight every mesh under `root`, restoring any previous highlight
    /// first.
    pub fn apply(
        &mut self,
        host: &mut dyn SceneHost,
        root: NodeId,
        emissive: [f32; 3],
        intensity: f32,
    ) {
        self.restore(host);
        for mesh in host.mesh_nodes(root) {
            let Some(original) = host.node_material(mesh) else {
                continue;
            };
            let Some(base) = host.material(original).copied() else {
                continue;
            };
            let clone =
                host.add_material(base.with_emissive(emissive, intensity));
            host.set_node_material(mesh, clone);
            self.saved.push((mesh, original, clone));
        }
        self.target = Some(root);
    }

    /// Put every saved material back and release the clones.
    pub fn restore(&mut self, host: &mut dyn SceneHost) {
        for (mesh, original, clone) in self.saved.drain(..) {
            host.set_node_material(mesh, original);
            host.release_material(clone);
        }
        self.target = None;
    }
}
