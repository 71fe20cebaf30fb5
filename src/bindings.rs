//! Event Bindings
//!
//! Which behavior is attached to which rendered element. Replacing an
//! element's markup destroys its descendants and everything bound to them,
//! so every structural mutation is followed by a rebinding pass scoped to
//! the replaced or relocated subtree.

use std::collections::HashMap;

use tracing::trace;

use crate::models::{BoardTree, ContainerNode, ItemNode, NodeId, Role};

/// Behavior attached to one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// Delete-container button of the given host container
    DeleteContainer { container: NodeId },
    /// "Add an item" button
    OpenItemForm { container: NodeId },
    /// Close button inside the add-item form
    CloseItemForm { container: NodeId },
    /// Add-item form submit
    SubmitItem { container: NodeId },
    /// Delete button of an item
    DeleteItem { item: NodeId },
    /// dragstart / dragover / drop / dragend on a container or item
    Draggable(Role),
    OpenCreator,
    CloseCreator,
    SubmitCreator,
}

/// Bindings of live nodes, at most one per node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindingTable {
    bound: HashMap<NodeId, Binding>,
}

impl BindingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `binding` to `node` unless it already carries one.
    ///
    /// Returns `false` when the node was already bound; attaching twice
    /// would fire every handler twice.
    pub fn bind(&mut self, node: NodeId, binding: Binding) -> bool {
        if let Some(existing) = self.bound.get(&node) {
            trace!(%node, ?existing, "already bound");
            return false;
        }
        self.bound.insert(node, binding);
        true
    }

    pub fn get(&self, node: NodeId) -> Option<Binding> {
        self.bound.get(&node).copied()
    }

    pub fn is_bound(&self, node: NodeId) -> bool {
        self.bound.contains_key(&node)
    }

    /// Forget destroyed nodes
    pub fn release(&mut self, nodes: &[NodeId]) {
        for node in nodes {
            self.bound.remove(node);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.bound.len()
    }

    /// Bind a container's controls and drag handlers. Items are not included.
    ///
    /// Returns how many bindings were newly attached.
    pub fn bind_container(&mut self, container: &ContainerNode) -> usize {
        let host = container.id;
        let body = &container.body;
        [
            (body.delete_button, Binding::DeleteContainer { container: host }),
            (body.form.button, Binding::OpenItemForm { container: host }),
            (body.form.close_button, Binding::CloseItemForm { container: host }),
            (body.form.form, Binding::SubmitItem { container: host }),
            (host, Binding::Draggable(Role::Container)),
        ]
        .into_iter()
        .filter(|(node, binding)| self.bind(*node, *binding))
        .count()
    }

    /// Bind an item's delete button and drag handlers
    pub fn bind_item(&mut self, item: &ItemNode) -> usize {
        [
            (item.body.delete_button, Binding::DeleteItem { item: item.id }),
            (item.id, Binding::Draggable(Role::Item)),
        ]
        .into_iter()
        .filter(|(node, binding)| self.bind(*node, *binding))
        .count()
    }

    /// Bind a draggable element and everything inside it: a container plus
    /// every item it currently holds, or a single item.
    pub fn bind_subtree(&mut self, tree: &BoardTree, node: NodeId) -> usize {
        if let Some(container) = tree.container(node) {
            let mut count = self.bind_container(container);
            for item in &container.body.items {
                count += self.bind_item(item);
            }
            count
        } else if let Some(item) = tree.item(node) {
            self.bind_item(item)
        } else {
            0
        }
    }

    /// Bind the board-level "add container" controls
    pub fn bind_creator(&mut self, tree: &BoardTree) -> usize {
        let creator = &tree.creator;
        [
            (creator.button, Binding::OpenCreator),
            (creator.close_button, Binding::CloseCreator),
            (creator.form, Binding::SubmitCreator),
        ]
        .into_iter()
        .filter(|(node, binding)| self.bind(*node, *binding))
        .count()
    }

    /// Live controls that carry no behavior. Empty in a healthy board.
    pub fn unbound(&self, tree: &BoardTree) -> Vec<NodeId> {
        tree.live_controls()
            .into_iter()
            .filter(|node| !self.is_bound(*node))
            .collect()
    }

    /// Bindings whose node is no longer rendered
    pub fn stale(&self, tree: &BoardTree) -> Vec<NodeId> {
        let live = tree.live_controls();
        self.bound.keys().filter(|node| !live.contains(node)).copied().collect()
    }
}
