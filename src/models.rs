//! Board Models
//!
//! The rendered tree is the only state: there is no separate data model
//! behind it. Every element that can carry behavior has a `NodeId`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one rendered element for its lifetime.
///
/// Instantiating markup always mints fresh ids, so an element whose
/// content was replaced keeps its own id while all its descendants get new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared role marker of draggable elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Container,
    Item,
}

/// A button and the form it reveals. Exactly one of the two is visible.
#[derive(Debug, Clone, PartialEq)]
pub struct FormPair {
    pub button: NodeId,
    pub form: NodeId,
    pub close_button: NodeId,
    pub open: bool,
    /// Current value of the text input
    pub input: String,
    /// Validation message slot (empty = nothing shown)
    pub validation: String,
}

impl FormPair {
    pub fn button_visible(&self) -> bool {
        !self.open
    }

    pub fn form_visible(&self) -> bool {
        self.open
    }
}

/// Inner content of an item entry
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBody {
    pub text: String,
    pub delete_button: NodeId,
}

/// A draggable list entry
#[derive(Debug, Clone, PartialEq)]
pub struct ItemNode {
    pub id: NodeId,
    pub body: ItemBody,
}

/// Inner content of a container column
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerBody {
    pub title: String,
    pub delete_button: NodeId,
    pub items: Vec<ItemNode>,
    pub form: FormPair,
}

/// A titled, draggable column of items
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub id: NodeId,
    pub body: ContainerBody,
}

/// Root of the rendered tree.
///
/// `creator` is the fixed "add container" affordance, rendered after the
/// last container.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardTree {
    pub containers: Vec<ContainerNode>,
    pub creator: FormPair,
    pub(crate) next_id: u32,
}

/// Identity-free copy of an item's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMarkup {
    pub text: String,
}

/// Identity-free copy of a container's content.
///
/// Input values are not part of markup, so re-instantiated forms start
/// closed and empty; the validation slot text is carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerMarkup {
    pub title: String,
    pub items: Vec<ItemMarkup>,
    #[serde(default)]
    pub validation: String,
}

/// Snapshot of a drag source's content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Payload {
    Item(ItemMarkup),
    Container(ContainerMarkup),
}

impl Payload {
    pub fn role(&self) -> Role {
        match self {
            Payload::Item(_) => Role::Item,
            Payload::Container(_) => Role::Container,
        }
    }
}
