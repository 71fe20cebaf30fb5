//! Item Lifecycle
//!
//! Creating entries from a container's add-item form and deleting them.

use tracing::debug;

use crate::bindings::BindingTable;
use crate::error::BoardError;
use crate::forms::validate_input;
use crate::models::{BoardTree, ItemMarkup, NodeId};
use crate::tree::item_ids;

/// Append a new item built from `container`'s form input.
///
/// Empty input sets the form's validation message and leaves the list and
/// the input untouched. On success the message and the input are cleared
/// and the new item is bound before it is returned.
pub fn create_item(
    tree: &mut BoardTree,
    bindings: &mut BindingTable,
    container: NodeId,
    message: &str,
) -> Result<NodeId, BoardError> {
    let form = &mut tree
        .container_mut(container)
        .ok_or(BoardError::NotAContainer(container))?
        .body
        .form;
    if let Err(err) = validate_input(&form.input) {
        form.validation = message.to_string();
        return Err(err.into());
    }
    form.validation.clear();
    let text = std::mem::take(&mut form.input);

    let item = tree.instantiate_item(&ItemMarkup { text });
    bindings.bind_item(&item);
    let id = item.id;
    tree.container_mut(container)
        .ok_or(BoardError::NotAContainer(container))?
        .body
        .items
        .push(item);
    debug!(item = %id, %container, "item created");
    Ok(id)
}

/// Remove an item from whichever list holds it
pub fn delete_item(tree: &mut BoardTree, bindings: &mut BindingTable, item: NodeId) -> Result<(), BoardError> {
    let node = tree.remove_item(item).ok_or(BoardError::UnknownNode(item))?;
    bindings.release(&item_ids(&node));
    debug!(%item, "item deleted");
    Ok(())
}
