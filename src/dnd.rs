//! Drag and Drop
//!
//! Transient drag state plus the move/swap decision taken on drop.
//!
//! A drop is a *move* when an item lands on a container's background: the
//! item node is relocated to the end of that container's list. It is a
//! *swap* when source and target are distinct elements with the same role:
//! each one's content is replaced by the other's, which destroys every
//! descendant of both and requires rebinding both subtrees. Anything else is
//! rejected without touching the tree. Every path returns to idle.

use tracing::{debug, warn};

use crate::bindings::BindingTable;
use crate::error::BoardError;
use crate::forms::FormTracker;
use crate::models::{BoardTree, NodeId, Payload, Role};

/// What is being dragged
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    pub source: NodeId,
    pub role: Role,
    /// Content of the source at drag start
    pub payload: Payload,
}

/// Drag state machine. Single slot; events arrive one at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging(DragState),
}

/// Result of a drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Moved { item: NodeId, to: NodeId },
    Swapped { source: NodeId, target: NodeId },
    Rejected,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragDrop {
    phase: DragPhase,
}

impl DragDrop {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging(_))
    }

    /// Record `node` as the drag source and snapshot its content.
    ///
    /// Any open form is closed first.
    pub fn drag_start(
        &mut self,
        tree: &mut BoardTree,
        forms: &mut FormTracker,
        node: NodeId,
    ) -> Result<Payload, BoardError> {
        forms.close_any(tree);
        let payload = tree.snapshot(node).ok_or(BoardError::UnknownNode(node))?;
        if let DragPhase::Dragging(stale) = &self.phase {
            debug!(source = %stale.source, "discarding unfinished drag");
        }
        self.phase = DragPhase::Dragging(DragState {
            source: node,
            role: payload.role(),
            payload: payload.clone(),
        });
        debug!(source = %node, role = ?payload.role(), "drag started");
        Ok(payload)
    }

    /// Whether `node` accepts drops at all
    pub fn drag_over(&self, tree: &BoardTree, node: NodeId) -> bool {
        tree.role_of(node).is_some()
    }

    /// Consume the drag state and apply the move or swap onto `target`
    pub fn drop(
        &mut self,
        tree: &mut BoardTree,
        bindings: &mut BindingTable,
        target: NodeId,
    ) -> Result<DropOutcome, BoardError> {
        let DragPhase::Dragging(state) = std::mem::take(&mut self.phase) else {
            warn!(%target, "drop without a drag source");
            return Err(BoardError::NoDragSource);
        };
        let target_role = tree.role_of(target).ok_or(BoardError::UnknownNode(target))?;
        if tree.role_of(state.source) != Some(state.role) {
            warn!(source = %state.source, "drag source vanished before drop");
            return Err(BoardError::UnknownNode(state.source));
        }

        if state.role == Role::Item && target_role == Role::Container {
            tree.move_item(state.source, target)?;
            bindings.bind_subtree(tree, state.source);
            debug!(item = %state.source, to = %target, "item moved");
            return Ok(DropOutcome::Moved {
                item: state.source,
                to: target,
            });
        }

        if state.source != target && state.role == target_role {
            let prior = tree.snapshot(target).ok_or(BoardError::UnknownNode(target))?;
            let mut destroyed = tree.replace_markup(state.source, &prior)?;
            destroyed.extend(tree.replace_markup(target, &state.payload)?);
            bindings.release(&destroyed);
            bindings.bind_subtree(tree, state.source);
            bindings.bind_subtree(tree, target);
            debug!(source = %state.source, %target, "contents swapped");
            return Ok(DropOutcome::Swapped {
                source: state.source,
                target,
            });
        }

        debug!(source = %state.source, %target, "drop rejected");
        Ok(DropOutcome::Rejected)
    }

    /// Drag finished on `node`: clear the state and refresh its bindings.
    ///
    /// Returns how many bindings the refresh had to attach.
    pub fn drag_end(&mut self, tree: &BoardTree, bindings: &mut BindingTable, node: NodeId) -> usize {
        if let DragPhase::Dragging(state) = std::mem::take(&mut self.phase) {
            debug!(source = %state.source, "drag ended without drop");
        }
        bindings.bind_subtree(tree, node)
    }
}
