//! Board Column Component
//!
//! One container: title block, item list and add-item form. The column
//! element itself is draggable and is the drop zone for moves.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::{ItemCard, PairedForm};
use crate::models::NodeId;
use crate::session::UiEvent;
use crate::store::{
    column_form, column_item_ids, column_title, store_accepts_drop, store_click, store_dispatch, store_drag_start,
    use_app_store, AppStateStoreFields,
};

#[component]
pub fn BoardColumn(id: NodeId, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let raw = id.0;

    let title = column_title(&store, id);
    let item_ids = column_item_ids(&store, id);
    let form = column_form(&store, id);

    let on_dragstart = make_on_dragstart(dnd, raw, move |_| store_drag_start(&store, id));
    let on_dragover = make_on_dragover(dnd, raw, move |_| store_accepts_drop(&store, id));
    let on_dragleave = make_on_dragleave(dnd, raw);
    let on_drop = make_on_drop(dnd, raw, move |_| {
        store_dispatch(&store, UiEvent::Drop(id));
    });
    let on_dragend = make_on_dragend(dnd, raw, move |_| {
        store_dispatch(&store, UiEvent::DragEnd(id));
    });

    let on_delete = move |_| {
        let button = store
            .session()
            .with_untracked(|s| s.tree().container(id).map(|c| c.body.delete_button));
        if let Some(button) = button {
            store_click(&store, button);
        }
    };

    let column_class = move || {
        let mut c = String::from("items-container");
        if dnd.dragging_id_read.get() == Some(raw) { c.push_str(" dragging"); }
        if dnd.drop_target_read.get() == Some(raw) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <div
            class=column_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <div class="top-container">
                <h2>{move || title.get()}</h2>
                <button class="delete-container-btn" on:click=on_delete>"X"</button>
            </div>
            <ul>
                <For
                    each=move || item_ids.get()
                    key=|item| *item
                    children=move |item| view! { <ItemCard id=item dnd=dnd /> }
                />
            </ul>
            <PairedForm
                pair=form
                button_class="add-item-btn"
                button_label="Add an item"
                form_label="Add a new item"
            />
        </div>
    }
}
