//! Name registry: stable names for top-level scene objects.

use super::{NodeId, Scene};

/// A registered object found by ancestor lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredObject {
    /// Registry name.
    pub name: String,
    /// Registered node.
    pub node: NodeId,
}

impl Scene {
    /// Register `node` under `name`, replacing any previous binding of that
    /// name. Returns the node that was previously registered.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        node: NodeId,
    ) -> Option<NodeId> {
        let name = name.into();
        if self.node(node).is_none() {
            log::warn!("cannot register '{name}': unknown node {}", node.0);
            return None;
        }
        let previous = self.registry.insert(name.clone(), node);
        if previous.is_none() {
            self.order.push(name);
        }
        previous
    }

    /// Remove a registration. Clears the selection if it named this object.
    ///
    /// The selection highlight is restored on the controller's next frame;
    /// `GestureEngine::unregister` restores it immediately.
    pub fn unregister(&mut self, name: &str) -> Option<NodeId> {
        let node = self.registry.remove(name)?;
        self.order.retain(|n| n != name);
        if self.selected.as_deref() == Some(name) {
            self.selected = None;
        }
        Some(node)
    }

    /// Node registered under `name`.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<NodeId> {
        self.registry.get(name).copied()
    }

    /// Registered names, oldest first.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.order
    }

    /// Drop every registration and the selection. Nodes stay in place.
    ///
    /// As with [`Scene::unregister`], the highlight is restored on the
    /// controller's next frame.
    pub fn clear_registry(&mut self) {
        self.registry.clear();
        self.order.clear();
        self.selected = None;
    }

    /// Walk from `node` toward the root and return the first registered
    /// node on the way.
    #[must_use]
    pub fn registered_ancestor(
        &self,
        node: NodeId,
    ) -> Option<RegisteredObject> {
        let mut current = Some(node);
        while let Some(id) = current {
            // oldest name wins when a node is registered twice
            let found = self
                .order
                .iter()
                .find(|name| self.registry.get(name.as_str()) == Some(&id));
            if let Some(name) = found {
                return Some(RegisteredObject {
                    name: name.clone(),
                    node: id,
                });
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        None
    }
}
