//! Form Toggling
//!
//! Every form is paired with the button that reveals it, and across the
//! whole board at most one form is open at any time.

use tracing::debug;

use crate::error::ValidationError;
use crate::models::{BoardTree, FormPair, NodeId};

/// Message shown when a creation form is submitted empty
pub const DEFAULT_VALIDATION_MESSAGE: &str = "Must be at least 1 character long";

/// Creation input must contain something besides whitespace
pub fn validate_input(raw: &str) -> Result<(), ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    Ok(())
}

/// Show the form and hide its button, or the reverse
pub fn toggle(pair: &mut FormPair, open: bool) {
    pair.open = open;
}

/// Owner of a form pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOwner {
    /// The board-level "add container" form
    Creator,
    /// The add-item form of a container
    Container(NodeId),
}

impl FormOwner {
    fn pair_mut(self, tree: &mut BoardTree) -> Option<&mut FormPair> {
        match self {
            FormOwner::Creator => Some(&mut tree.creator),
            FormOwner::Container(id) => tree.container_mut(id).map(|c| &mut c.body.form),
        }
    }
}

/// Tracks the single open form
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormTracker {
    open: Option<FormOwner>,
}

impl FormTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<FormOwner> {
        self.open
    }

    /// Open `owner`'s form, closing the previously open one first
    pub fn open(&mut self, tree: &mut BoardTree, owner: FormOwner) {
        if self.open == Some(owner) {
            return;
        }
        self.close_any(tree);
        if let Some(pair) = owner.pair_mut(tree) {
            toggle(pair, true);
            self.open = Some(owner);
            debug!(?owner, "form opened");
        }
    }

    /// Close `owner`'s form
    pub fn close(&mut self, tree: &mut BoardTree, owner: FormOwner) {
        if let Some(pair) = owner.pair_mut(tree) {
            toggle(pair, false);
        }
        if self.open == Some(owner) {
            self.open = None;
        }
    }

    /// Close whichever form is open. A form whose container is gone is
    /// simply forgotten.
    pub fn close_any(&mut self, tree: &mut BoardTree) {
        if let Some(owner) = self.open.take() {
            if let Some(pair) = owner.pair_mut(tree) {
                toggle(pair, false);
            }
            debug!(?owner, "form closed");
        }
    }

    /// Forget the tracked form if it belongs to a removed container
    pub fn forget(&mut self, container: NodeId) {
        if self.open == Some(FormOwner::Container(container)) {
            self.open = None;
        }
    }
}

/// Number of visible forms on the board
pub fn open_count(tree: &BoardTree) -> usize {
    let containers = tree.containers.iter().filter(|c| c.body.form.form_visible()).count();
    containers + usize::from(tree.creator.form_visible())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::ContainerMarkup;

    fn tree_with(n: usize) -> BoardTree {
        let mut tree = BoardTree::new();
        for i in 0..n {
            let node = tree.instantiate_container(&ContainerMarkup {
                title: format!("Column {}", i),
                items: Vec::new(),
                validation: String::new(),
            });
            tree.containers.push(node);
        }
        tree
    }

    #[test]
    fn test_validate_input() {
        assert_eq!(validate_input(""), Err(ValidationError::Empty));
        assert_eq!(validate_input("  \t "), Err(ValidationError::Empty));
        assert_eq!(validate_input(" x "), Ok(()));
    }

    #[test]
    fn test_toggle() {
        let mut tree = tree_with(0);
        toggle(&mut tree.creator, true);
        assert!(tree.creator.form_visible());
        assert!(!tree.creator.button_visible());
        toggle(&mut tree.creator, false);
        assert!(!tree.creator.form_visible());
        assert!(tree.creator.button_visible());
    }

    #[test]
    fn test_opening_closes_previous() {
        let mut tree = tree_with(3);
        let mut forms = FormTracker::new();
        let ids: Vec<_> = tree.containers.iter().map(|c| c.id).collect();

        forms.open(&mut tree, FormOwner::Container(ids[0]));
        forms.open(&mut tree, FormOwner::Container(ids[2]));
        assert_eq!(open_count(&tree), 1);
        assert!(tree.containers[2].body.form.open);

        forms.open(&mut tree, FormOwner::Creator);
        assert_eq!(open_count(&tree), 1);
        assert!(tree.creator.open);
        assert_eq!(forms.current(), Some(FormOwner::Creator));
    }

    proptest! {
        #[test]
        fn test_single_form_over_any_sequence(actions in prop::collection::vec((0usize..5, any::<bool>()), 0..200)) {
            let mut tree = tree_with(4);
            let mut forms = FormTracker::new();
            let mut owners: Vec<FormOwner> = tree.containers.iter().map(|c| FormOwner::Container(c.id)).collect();
            owners.push(FormOwner::Creator);

            for (index, open) in actions {
                let owner = owners[index];
                if open {
                    forms.open(&mut tree, owner);
                    prop_assert_eq!(forms.current(), Some(owner));
                } else {
                    forms.close(&mut tree, owner);
                }
                prop_assert!(open_count(&tree) <= 1);
                prop_assert_eq!(open_count(&tree), usize::from(forms.current().is_some()));
            }
        }
    }

    #[test]
    fn test_close_any_after_container_removed() {
        let mut tree = tree_with(1);
        let mut forms = FormTracker::new();
        let id = tree.containers[0].id;
        forms.open(&mut tree, FormOwner::Container(id));
        tree.remove_container(id);

        forms.close_any(&mut tree);
        assert_eq!(forms.current(), None);
    }
}
