//! Tree Utilities
//!
//! Template instantiation, document-order queries and markup replacement
//! on the rendered board tree.

use crate::error::BoardError;
use crate::models::{
    BoardTree, ContainerBody, ContainerMarkup, ContainerNode, FormPair, ItemBody, ItemMarkup, ItemNode, NodeId,
    Payload, Role,
};

impl Default for BoardTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardTree {
    /// Empty board: no containers, only the "add container" affordance
    pub fn new() -> Self {
        let mut tree = Self {
            containers: Vec::new(),
            creator: FormPair {
                button: NodeId(0),
                form: NodeId(0),
                close_button: NodeId(0),
                open: false,
                input: String::new(),
                validation: String::new(),
            },
            next_id: 1,
        };
        tree.creator = tree.form_pair(String::new());
        tree
    }

    fn mint(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    fn form_pair(&mut self, validation: String) -> FormPair {
        FormPair {
            button: self.mint(),
            form: self.mint(),
            close_button: self.mint(),
            open: false,
            input: String::new(),
            validation,
        }
    }

    fn item_body(&mut self, markup: &ItemMarkup) -> ItemBody {
        ItemBody {
            text: markup.text.clone(),
            delete_button: self.mint(),
        }
    }

    fn container_body(&mut self, markup: &ContainerMarkup) -> ContainerBody {
        let delete_button = self.mint();
        let items = markup.items.iter().map(|item| self.instantiate_item(item)).collect();
        let form = self.form_pair(markup.validation.clone());
        ContainerBody {
            title: markup.title.clone(),
            delete_button,
            items,
            form,
        }
    }

    /// Render the item template: a draggable entry with text and a delete control
    pub fn instantiate_item(&mut self, markup: &ItemMarkup) -> ItemNode {
        let id = self.mint();
        let body = self.item_body(markup);
        ItemNode { id, body }
    }

    /// Render the container template: title block, list, add button and a closed form
    pub fn instantiate_container(&mut self, markup: &ContainerMarkup) -> ContainerNode {
        let id = self.mint();
        let body = self.container_body(markup);
        ContainerNode { id, body }
    }

    pub fn container(&self, id: NodeId) -> Option<&ContainerNode> {
        self.containers.iter().find(|c| c.id == id)
    }

    pub fn container_mut(&mut self, id: NodeId) -> Option<&mut ContainerNode> {
        self.containers.iter_mut().find(|c| c.id == id)
    }

    /// Left-to-right position of a container
    pub fn container_index(&self, id: NodeId) -> Option<usize> {
        self.containers.iter().position(|c| c.id == id)
    }

    pub fn item(&self, id: NodeId) -> Option<&ItemNode> {
        self.containers
            .iter()
            .flat_map(|c| c.body.items.iter())
            .find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: NodeId) -> Option<&mut ItemNode> {
        self.containers
            .iter_mut()
            .flat_map(|c| c.body.items.iter_mut())
            .find(|item| item.id == id)
    }

    /// Container whose list currently holds `item`
    #[cfg(test)]
    pub fn parent_of(&self, item: NodeId) -> Option<NodeId> {
        self.containers
            .iter()
            .find(|c| c.body.items.iter().any(|i| i.id == item))
            .map(|c| c.id)
    }

    /// Role marker of a draggable element, `None` for anything else
    pub fn role_of(&self, id: NodeId) -> Option<Role> {
        if self.container(id).is_some() {
            Some(Role::Container)
        } else if self.item(id).is_some() {
            Some(Role::Item)
        } else {
            None
        }
    }

    /// Every delete-container control, in document order
    #[cfg(test)]
    pub fn delete_container_buttons(&self) -> Vec<NodeId> {
        self.containers.iter().map(|c| c.body.delete_button).collect()
    }

    /// Look a form pair up by its form node (containers and the creator)
    pub fn form_by_node_mut(&mut self, form: NodeId) -> Option<&mut FormPair> {
        if self.creator.form == form {
            return Some(&mut self.creator);
        }
        self.containers
            .iter_mut()
            .map(|c| &mut c.body.form)
            .find(|pair| pair.form == form)
    }

    /// Identity-free copy of a draggable element's content
    pub fn snapshot(&self, id: NodeId) -> Option<Payload> {
        if let Some(container) = self.container(id) {
            return Some(Payload::Container(container_markup(&container.body)));
        }
        self.item(id).map(|item| {
            Payload::Item(ItemMarkup {
                text: item.body.text.clone(),
            })
        })
    }

    /// Replace an element's content with freshly instantiated markup.
    ///
    /// The element keeps its id. Returns the ids of every destroyed
    /// descendant; whatever was bound to them is gone.
    pub fn replace_markup(&mut self, id: NodeId, payload: &Payload) -> Result<Vec<NodeId>, BoardError> {
        match payload {
            Payload::Item(markup) => {
                if self.item(id).is_none() {
                    return Err(self.mismatch(id));
                }
                let body = self.item_body(markup);
                let item = self.item_mut(id).ok_or(BoardError::UnknownNode(id))?;
                let old = std::mem::replace(&mut item.body, body);
                Ok(vec![old.delete_button])
            }
            Payload::Container(markup) => {
                if self.container(id).is_none() {
                    return Err(self.mismatch(id));
                }
                let body = self.container_body(markup);
                let container = self.container_mut(id).ok_or(BoardError::UnknownNode(id))?;
                let old = std::mem::replace(&mut container.body, body);
                Ok(body_ids(&old))
            }
        }
    }

    fn mismatch(&self, id: NodeId) -> BoardError {
        if self.role_of(id).is_some() {
            BoardError::RoleMismatch(id)
        } else {
            BoardError::UnknownNode(id)
        }
    }

    /// Relocate an existing item node to the end of `to`'s list. Ids are kept.
    pub fn move_item(&mut self, item: NodeId, to: NodeId) -> Result<(), BoardError> {
        if self.container(to).is_none() {
            return Err(BoardError::NotAContainer(to));
        }
        let node = self.remove_item(item).ok_or(BoardError::UnknownNode(item))?;
        let target = self.container_mut(to).ok_or(BoardError::NotAContainer(to))?;
        target.body.items.push(node);
        Ok(())
    }

    pub fn remove_item(&mut self, item: NodeId) -> Option<ItemNode> {
        self.containers.iter_mut().find_map(|c| {
            let pos = c.body.items.iter().position(|i| i.id == item)?;
            Some(c.body.items.remove(pos))
        })
    }

    pub fn remove_container(&mut self, id: NodeId) -> Option<ContainerNode> {
        let pos = self.container_index(id)?;
        Some(self.containers.remove(pos))
    }

    /// Every rendered element that must carry behavior
    pub fn live_controls(&self) -> Vec<NodeId> {
        let mut ids = vec![self.creator.button, self.creator.form, self.creator.close_button];
        for container in &self.containers {
            ids.push(container.id);
            ids.extend(body_ids(&container.body));
        }
        ids
    }
}

/// Ids of an item element and its descendants
pub fn item_ids(item: &ItemNode) -> Vec<NodeId> {
    vec![item.id, item.body.delete_button]
}

/// Ids of every descendant of a container (not the container itself)
pub fn body_ids(body: &ContainerBody) -> Vec<NodeId> {
    let mut ids = vec![
        body.delete_button,
        body.form.button,
        body.form.form,
        body.form.close_button,
    ];
    ids.extend(body.items.iter().flat_map(item_ids));
    ids
}

fn container_markup(body: &ContainerBody) -> ContainerMarkup {
    ContainerMarkup {
        title: body.title.clone(),
        items: body
            .items
            .iter()
            .map(|item| ItemMarkup {
                text: item.body.text.clone(),
            })
            .collect(),
        validation: body.form.validation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(title: &str, items: &[&str]) -> ContainerMarkup {
        ContainerMarkup {
            title: title.to_string(),
            items: items.iter().map(|t| ItemMarkup { text: t.to_string() }).collect(),
            validation: String::new(),
        }
    }

    fn board(columns: &[(&str, &[&str])]) -> BoardTree {
        let mut tree = BoardTree::new();
        for (title, items) in columns {
            let node = tree.instantiate_container(&markup(title, items));
            tree.containers.push(node);
        }
        tree
    }

    #[test]
    fn test_instantiate_mints_unique_ids() {
        let tree = board(&[("Todo", &["a", "b"]), ("Done", &["c"])]);
        let mut ids = tree.live_controls();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
        // creator (3) + per container (1 host + 4 controls) + per item (2)
        assert_eq!(total, 3 + 2 * 5 + 3 * 2);
    }

    #[test]
    fn test_new_container_form_is_closed() {
        let tree = board(&[("Todo", &[])]);
        let form = &tree.containers[0].body.form;
        assert!(form.button_visible());
        assert!(!form.form_visible());
        assert!(form.input.is_empty());
    }

    #[test]
    fn test_replace_item_markup_keeps_host() {
        let mut tree = board(&[("Todo", &["a"])]);
        let item = tree.containers[0].body.items[0].clone();

        let destroyed = tree
            .replace_markup(item.id, &Payload::Item(ItemMarkup { text: "z".into() }))
            .unwrap();

        assert_eq!(destroyed, vec![item.body.delete_button]);
        let replaced = tree.item(item.id).unwrap();
        assert_eq!(replaced.body.text, "z");
        assert_ne!(replaced.body.delete_button, item.body.delete_button);
    }

    #[test]
    fn test_replace_container_markup_destroys_whole_body() {
        let mut tree = board(&[("Todo", &["a", "b"]), ("Done", &[])]);
        let host = tree.containers[0].id;
        let old_body = tree.containers[0].body.clone();

        let destroyed = tree.replace_markup(host, &Payload::Container(markup("Done", &["x"]))).unwrap();

        assert_eq!(destroyed, body_ids(&old_body));
        let c = tree.container(host).unwrap();
        assert_eq!(c.body.title, "Done");
        assert_eq!(c.body.items.len(), 1);
        assert!(body_ids(&c.body).iter().all(|id| !destroyed.contains(id)));
    }

    #[test]
    fn test_replace_markup_rejects_role_mismatch() {
        let mut tree = board(&[("Todo", &["a"])]);
        let host = tree.containers[0].id;
        let err = tree
            .replace_markup(host, &Payload::Item(ItemMarkup { text: "z".into() }))
            .unwrap_err();
        assert_eq!(err, BoardError::RoleMismatch(host));
    }

    #[test]
    fn test_move_item_appends_and_keeps_ids() {
        let mut tree = board(&[("Todo", &["a", "b", "c"]), ("Done", &["d"])]);
        let moved = tree.containers[0].body.items[1].clone();
        let done = tree.containers[1].id;

        tree.move_item(moved.id, done).unwrap();

        let todo: Vec<_> = tree.containers[0].body.items.iter().map(|i| i.body.text.as_str()).collect();
        let done_items: Vec<_> = tree.containers[1].body.items.iter().map(|i| i.body.text.as_str()).collect();
        assert_eq!(todo, vec!["a", "c"]);
        assert_eq!(done_items, vec!["d", "b"]);
        assert_eq!(tree.containers[1].body.items[1], moved);
        assert_eq!(tree.parent_of(moved.id), Some(done));
    }

    #[test]
    fn test_move_item_into_non_container_fails_without_mutation() {
        let mut tree = board(&[("Todo", &["a", "b"])]);
        let a = tree.containers[0].body.items[0].id;
        let b = tree.containers[0].body.items[1].id;
        assert_eq!(tree.move_item(a, b), Err(BoardError::NotAContainer(b)));
        assert_eq!(tree.containers[0].body.items.len(), 2);
    }

    #[test]
    fn test_snapshot_is_identity_free() {
        let tree = board(&[("Todo", &["a", "b"])]);
        let host = tree.containers[0].id;
        assert_eq!(tree.snapshot(host), Some(Payload::Container(markup("Todo", &["a", "b"]))));
        assert_eq!(tree.snapshot(NodeId(9999)), None);
    }

    #[test]
    fn test_role_of() {
        let tree = board(&[("Todo", &["a"])]);
        let c = &tree.containers[0];
        assert_eq!(tree.role_of(c.id), Some(Role::Container));
        assert_eq!(tree.role_of(c.body.items[0].id), Some(Role::Item));
        assert_eq!(tree.role_of(c.body.delete_button), None);
    }
}
