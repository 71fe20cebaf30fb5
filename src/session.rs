//! Board Session
//!
//! Owns the rendered tree together with its bindings, the open-form tracker
//! and the drag state, and routes UI events to whatever behavior is bound
//! to the addressed node. Events are handled one at a time, each to
//! completion.

use tracing::debug;

use crate::bindings::{Binding, BindingTable};
use crate::config::BoardConfig;
use crate::containers::{create_container, delete_container, insert_container};
use crate::dnd::{DragDrop, DropOutcome};
use crate::error::BoardError;
use crate::forms::{FormOwner, FormTracker, DEFAULT_VALIDATION_MESSAGE};
use crate::items::{create_item, delete_item};
use crate::models::{BoardTree, NodeId, Payload};

/// Input delivered by the platform, addressed to a rendered node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(NodeId),
    /// Text typed into a form's input
    Input { form: NodeId, value: String },
    Submit(NodeId),
    DragStart(NodeId),
    DragOver(NodeId),
    Drop(NodeId),
    DragEnd(NodeId),
}

/// What handling an event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// Nothing is bound to the node for this kind of event
    Unbound,
    /// Creation refused because of empty input; the form shows the message
    Rejected,
    DragStarted(Payload),
    DropAllowed,
    Dropped(DropOutcome),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    tree: BoardTree,
    bindings: BindingTable,
    forms: FormTracker,
    dnd: DragDrop,
    validation_message: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_VALIDATION_MESSAGE)
    }
}

impl Session {
    /// Empty board with its "add container" controls bound
    pub fn new(validation_message: &str) -> Self {
        let tree = BoardTree::new();
        let mut bindings = BindingTable::new();
        bindings.bind_creator(&tree);
        Self {
            tree,
            bindings,
            forms: FormTracker::new(),
            dnd: DragDrop::new(),
            validation_message: validation_message.to_string(),
        }
    }

    /// Board pre-populated with the configured columns, all bound
    pub fn from_config(config: &BoardConfig) -> Self {
        let mut session = Self::new(&config.validation_message);
        for column in &config.columns {
            insert_container(&mut session.tree, &mut session.bindings, &column.markup());
        }
        debug!(columns = config.columns.len(), "board seeded");
        session
    }

    pub fn tree(&self) -> &BoardTree {
        &self.tree
    }

    #[cfg(test)]
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    #[cfg(test)]
    pub fn open_form(&self) -> Option<FormOwner> {
        self.forms.current()
    }

    #[cfg(test)]
    pub fn drag(&self) -> &DragDrop {
        &self.dnd
    }

    /// Handle one event to completion
    pub fn dispatch(&mut self, event: UiEvent) -> Result<Outcome, BoardError> {
        match event {
            UiEvent::Input { form, value } => {
                let pair = self.tree.form_by_node_mut(form).ok_or(BoardError::UnknownNode(form))?;
                pair.input = value;
                Ok(Outcome::Applied)
            }
            UiEvent::Click(node) => self.click(node),
            UiEvent::Submit(node) => self.submit(node),
            UiEvent::DragStart(node) => {
                if !self.is_draggable(node) {
                    return Ok(unbound(node, "dragstart"));
                }
                let payload = self.dnd.drag_start(&mut self.tree, &mut self.forms, node)?;
                Ok(Outcome::DragStarted(payload))
            }
            UiEvent::DragOver(node) => {
                if self.accepts_drop(node) {
                    Ok(Outcome::DropAllowed)
                } else {
                    Ok(unbound(node, "dragover"))
                }
            }
            UiEvent::Drop(node) => {
                if !self.is_draggable(node) {
                    return Ok(unbound(node, "drop"));
                }
                let outcome = self.dnd.drop(&mut self.tree, &mut self.bindings, node)?;
                if let DropOutcome::Swapped { source, target } = outcome {
                    // replaced containers come back with their forms closed
                    self.forms.forget(source);
                    self.forms.forget(target);
                }
                Ok(Outcome::Dropped(outcome))
            }
            UiEvent::DragEnd(node) => {
                if !self.is_draggable(node) {
                    return Ok(unbound(node, "dragend"));
                }
                let refreshed = self.dnd.drag_end(&self.tree, &mut self.bindings, node);
                if refreshed > 0 {
                    debug!(%node, refreshed, "dragend attached missing bindings");
                }
                Ok(Outcome::Applied)
            }
        }
    }

    /// Whether a dragover on `node` should allow the drop. Drags that did
    /// not start on the board are refused.
    pub fn accepts_drop(&self, node: NodeId) -> bool {
        self.dnd.is_dragging() && self.is_draggable(node) && self.dnd.drag_over(&self.tree, node)
    }

    fn is_draggable(&self, node: NodeId) -> bool {
        matches!(self.bindings.get(node), Some(Binding::Draggable(_)))
    }

    fn click(&mut self, node: NodeId) -> Result<Outcome, BoardError> {
        match self.bindings.get(node) {
            Some(Binding::DeleteContainer { container }) => {
                delete_container(&mut self.tree, &mut self.bindings, container)?;
                self.forms.forget(container);
            }
            Some(Binding::OpenItemForm { container }) => {
                self.forms.open(&mut self.tree, FormOwner::Container(container));
            }
            Some(Binding::CloseItemForm { container }) => {
                self.forms.close(&mut self.tree, FormOwner::Container(container));
            }
            Some(Binding::DeleteItem { item }) => {
                delete_item(&mut self.tree, &mut self.bindings, item)?;
            }
            Some(Binding::OpenCreator) => self.forms.open(&mut self.tree, FormOwner::Creator),
            Some(Binding::CloseCreator) => self.forms.close(&mut self.tree, FormOwner::Creator),
            _ => return Ok(unbound(node, "click")),
        }
        Ok(Outcome::Applied)
    }

    fn submit(&mut self, node: NodeId) -> Result<Outcome, BoardError> {
        let created = match self.bindings.get(node) {
            Some(Binding::SubmitItem { container }) => {
                create_item(&mut self.tree, &mut self.bindings, container, &self.validation_message)
            }
            Some(Binding::SubmitCreator) => {
                create_container(&mut self.tree, &mut self.bindings, &self.validation_message)
            }
            _ => return Ok(unbound(node, "submit")),
        };
        match created {
            Ok(_) => Ok(Outcome::Applied),
            Err(BoardError::Validation(err)) => {
                debug!(%node, %err, "creation rejected");
                Ok(Outcome::Rejected)
            }
            Err(err) => Err(err),
        }
    }
}

fn unbound(node: NodeId, event: &str) -> Outcome {
    debug!(%node, event, "no behavior bound");
    Outcome::Unbound
}
