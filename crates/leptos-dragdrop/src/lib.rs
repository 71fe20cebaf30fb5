//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop for Leptos.
//! Every handler stops propagation so a draggable nested inside another
//! draggable (an entry inside a column) owns the gesture alone.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// MIME type the payload is written under. Firefox refuses to start a
/// drag unless some data is set.
pub const PAYLOAD_MIME: &str = "text/plain";

/// DnD state signals, used for visual feedback only
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<u32>>,
    pub drop_target_write: WriteSignal<Option<u32>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<u32>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
}

/// Write the payload into the event's DataTransfer
pub fn set_payload(ev: &DragEvent, payload: &str) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data(PAYLOAD_MIME, payload);
        dt.set_effect_allowed("move");
    }
}

/// Text selections dragged out of an input are not element drags
fn starts_on_control(ev: &DragEvent) -> bool {
    ev.target()
        .map(|target| {
            target.dyn_ref::<web_sys::HtmlInputElement>().is_some()
                || target.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
        })
        .unwrap_or(false)
}

/// Create dragstart handler for a draggable element.
///
/// `on_start` returns the serialized payload, or `None` to refuse the drag
/// (the default action is then cancelled).
pub fn make_on_dragstart<F>(dnd: DndSignals, id: u32, on_start: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(u32) -> Option<String> + Clone + 'static,
{
    move |ev: DragEvent| {
        if starts_on_control(&ev) {
            return;
        }
        ev.stop_propagation();
        match on_start(id) {
            Some(payload) => {
                set_payload(&ev, &payload);
                dnd.dragging_id_write.set(Some(id));
            }
            None => ev.prevent_default(),
        }
    }
}

/// Create dragover handler for a drop zone.
///
/// Suppressing the default is what tells the browser a drop is allowed here.
pub fn make_on_dragover<F>(dnd: DndSignals, id: u32, accepts: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(u32) -> bool + Clone + 'static,
{
    move |ev: DragEvent| {
        if !accepts(id) {
            return;
        }
        ev.prevent_default();
        ev.stop_propagation();
        if dnd.drop_target_read.get_untracked() != Some(id) {
            dnd.drop_target_write.set(Some(id));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, id: u32) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        if dnd.drop_target_read.get_untracked() == Some(id) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Create drop handler.
///
/// Ends the visual drag state itself: a relocated source element may be
/// unmounted before its `dragend` fires.
pub fn make_on_drop<F>(dnd: DndSignals, id: u32, on_drop: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(u32) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        end_drag(&dnd);
        on_drop(id);
    }
}

/// Create dragend handler (fires on the source)
pub fn make_on_dragend<F>(dnd: DndSignals, id: u32, on_end: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(u32) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.stop_propagation();
        end_drag(&dnd);
        on_end(id);
    }
}
