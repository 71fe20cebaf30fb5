//! Container Lifecycle
//!
//! Creating columns from the board-level form and deleting them.

use tracing::debug;

use crate::bindings::BindingTable;
use crate::error::BoardError;
use crate::forms::validate_input;
use crate::models::{BoardTree, ContainerMarkup, NodeId};
use crate::tree::body_ids;

/// Insert a container built from `markup` after the last one and bind it
/// together with its items.
pub fn insert_container(tree: &mut BoardTree, bindings: &mut BindingTable, markup: &ContainerMarkup) -> NodeId {
    let node = tree.instantiate_container(markup);
    let id = node.id;
    tree.containers.push(node);
    bindings.bind_subtree(tree, id);
    id
}

/// Create an empty container titled with the creator form's input.
///
/// New containers always land at the end of the row, just before the
/// "add container" affordance.
pub fn create_container(tree: &mut BoardTree, bindings: &mut BindingTable, message: &str) -> Result<NodeId, BoardError> {
    let creator = &mut tree.creator;
    if let Err(err) = validate_input(&creator.input) {
        creator.validation = message.to_string();
        return Err(err.into());
    }
    creator.validation.clear();
    let title = std::mem::take(&mut creator.input);

    let id = insert_container(
        tree,
        bindings,
        &ContainerMarkup {
            title,
            items: Vec::new(),
            validation: String::new(),
        },
    );
    debug!(container = %id, "container created");
    Ok(id)
}

/// Remove a container with everything inside it
pub fn delete_container(tree: &mut BoardTree, bindings: &mut BindingTable, container: NodeId) -> Result<(), BoardError> {
    let node = tree
        .remove_container(container)
        .ok_or(BoardError::NotAContainer(container))?;
    bindings.release(&[node.id]);
    bindings.release(&body_ids(&node.body));
    debug!(%container, "container deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::forms::DEFAULT_VALIDATION_MESSAGE;
    use crate::models::ItemMarkup;

    fn setup() -> (BoardTree, BindingTable) {
        let tree = BoardTree::new();
        let mut bindings = BindingTable::new();
        bindings.bind_creator(&tree);
        (tree, bindings)
    }

    fn create(tree: &mut BoardTree, bindings: &mut BindingTable, title: &str) -> Result<NodeId, BoardError> {
        tree.creator.input = title.to_string();
        create_container(tree, bindings, DEFAULT_VALIDATION_MESSAGE)
    }

    fn titles(tree: &BoardTree) -> Vec<&str> {
        tree.containers.iter().map(|c| c.body.title.as_str()).collect()
    }

    #[test]
    fn test_create_appends_at_end() {
        let (mut tree, mut bindings) = setup();
        create(&mut tree, &mut bindings, "A").unwrap();
        create(&mut tree, &mut bindings, "B").unwrap();
        let c = create(&mut tree, &mut bindings, "C").unwrap();

        assert_eq!(titles(&tree), vec!["A", "B", "C"]);
        let node = tree.container(c).unwrap();
        assert!(node.body.items.is_empty());
        assert!(!node.body.form.open);
        assert!(tree.creator.input.is_empty());
        assert!(bindings.unbound(&tree).is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let (mut tree, mut bindings) = setup();
        let err = create(&mut tree, &mut bindings, " ").unwrap_err();
        assert_eq!(err, BoardError::Validation(ValidationError::Empty));
        assert!(tree.containers.is_empty());
        assert_eq!(tree.creator.validation, DEFAULT_VALIDATION_MESSAGE);

        create(&mut tree, &mut bindings, "Now").unwrap();
        assert!(tree.creator.validation.is_empty());
    }

    #[test]
    fn test_insert_binds_seeded_items() {
        let (mut tree, mut bindings) = setup();
        insert_container(
            &mut tree,
            &mut bindings,
            &ContainerMarkup {
                title: "Seeded".into(),
                items: vec![ItemMarkup { text: "one".into() }],
                validation: String::new(),
            },
        );
        assert!(bindings.unbound(&tree).is_empty());
    }

    #[test]
    fn test_delete_releases_subtree() {
        let (mut tree, mut bindings) = setup();
        let a = create(&mut tree, &mut bindings, "A").unwrap();
        let b = create(&mut tree, &mut bindings, "B").unwrap();

        delete_container(&mut tree, &mut bindings, a).unwrap();
        assert_eq!(titles(&tree), vec!["B"]);
        assert!(bindings.stale(&tree).is_empty());
        assert!(tree.container(b).is_some());
        assert_eq!(
            delete_container(&mut tree, &mut bindings, a),
            Err(BoardError::NotAContainer(a))
        );
    }
}
