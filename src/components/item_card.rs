//! Item Card Component
//!
//! A draggable list entry with its text and a delete control.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::models::NodeId;
use crate::session::UiEvent;
use crate::store::{item_body, store_accepts_drop, store_click, store_dispatch, store_drag_start, use_app_store};

#[component]
pub fn ItemCard(id: NodeId, dnd: DndSignals) -> impl IntoView {
    let store = use_app_store();
    let raw = id.0;

    let body = item_body(&store, id);

    let on_dragstart = make_on_dragstart(dnd, raw, move |_| store_drag_start(&store, id));
    let on_dragover = make_on_dragover(dnd, raw, move |_| store_accepts_drop(&store, id));
    let on_dragleave = make_on_dragleave(dnd, raw);
    let on_drop = make_on_drop(dnd, raw, move |_| {
        store_dispatch(&store, UiEvent::Drop(id));
    });
    let on_dragend = make_on_dragend(dnd, raw, move |_| {
        store_dispatch(&store, UiEvent::DragEnd(id));
    });

    let item_class = move || {
        let mut c = String::from("item");
        if dnd.dragging_id_read.get() == Some(raw) { c.push_str(" dragging"); }
        if dnd.drop_target_read.get() == Some(raw) { c.push_str(" drop-target"); }
        c
    };

    view! {
        <li
            class=item_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:dragend=on_dragend
        >
            <p>{move || body.get().map(|b| b.text).unwrap_or_default()}</p>
            <button on:click=move |ev| {
                ev.stop_propagation();
                if let Some(b) = body.get_untracked() {
                    store_click(&store, b.delete_button);
                }
            }>"X"</button>
        </li>
    }
}
