//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::config::BoardConfig;
use crate::models::{FormPair, ItemBody, NodeId};
use crate::session::{Outcome, Session, UiEvent};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The board and everything bound to it
    pub session: Session,
}

impl AppState {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            session: Session::from_config(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Route a UI event into the session. Errors are logged, never raised
/// into the view.
pub fn store_dispatch(store: &AppStore, event: UiEvent) -> Option<Outcome> {
    let result = store.session().write().dispatch(event.clone());
    match result {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            tracing::warn!(?event, %err, "event failed");
            None
        }
    }
}

/// Dispatch a click on `node`
pub fn store_click(store: &AppStore, node: NodeId) {
    store_dispatch(store, UiEvent::Click(node));
}

/// Start dragging `node`; returns the serialized payload for the platform
pub fn store_drag_start(store: &AppStore, node: NodeId) -> Option<String> {
    match store_dispatch(store, UiEvent::DragStart(node))? {
        Outcome::DragStarted(payload) => serde_json::to_string(&payload).ok(),
        _ => None,
    }
}

/// Whether `node` accepts a drop. Read-only: dragover fires continuously.
pub fn store_accepts_drop(store: &AppStore, node: NodeId) -> bool {
    store.session().with_untracked(|s| s.accepts_drop(node))
}

// ========================
// View Projections
// ========================
// One memo per view. An edit elsewhere on the board re-runs the memo but
// stops there when the projected value is unchanged.

/// Column ids, left to right
pub fn column_ids(store: &AppStore) -> Memo<Vec<NodeId>> {
    let store = *store;
    Memo::new(move |_| {
        store
            .session()
            .with(|s| s.tree().containers.iter().map(|c| c.id).collect())
    })
}

pub fn column_title(store: &AppStore, id: NodeId) -> Memo<String> {
    let store = *store;
    Memo::new(move |_| {
        store
            .session()
            .with(|s| s.tree().container(id).map(|c| c.body.title.clone()))
            .unwrap_or_default()
    })
}

/// Item ids of one column, top to bottom
pub fn column_item_ids(store: &AppStore, id: NodeId) -> Memo<Vec<NodeId>> {
    let store = *store;
    Memo::new(move |_| {
        store.session().with(|s| {
            s.tree()
                .container(id)
                .map(|c| c.body.items.iter().map(|item| item.id).collect())
                .unwrap_or_default()
        })
    })
}

pub fn column_form(store: &AppStore, id: NodeId) -> Memo<Option<FormPair>> {
    let store = *store;
    Memo::new(move |_| store.session().with(|s| s.tree().container(id).map(|c| c.body.form.clone())))
}

pub fn creator_form(store: &AppStore) -> Memo<Option<FormPair>> {
    let store = *store;
    Memo::new(move |_| store.session().with(|s| Some(s.tree().creator.clone())))
}

/// Content of one item. A swap replaces it under the same id.
pub fn item_body(store: &AppStore, id: NodeId) -> Memo<Option<ItemBody>> {
    let store = *store;
    Memo::new(move |_| store.session().with(|s| s.tree().item(id).map(|item| item.body.clone())))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::config::SeedColumn;

    fn store() -> AppStore {
        let config = BoardConfig {
            columns: vec![
                SeedColumn {
                    title: "A".into(),
                    items: vec!["a1".into()],
                },
                SeedColumn {
                    title: "B".into(),
                    items: vec!["b1".into()],
                },
            ],
            ..BoardConfig::default()
        };
        Store::new(AppState::new(&config))
    }

    fn column(store: &AppStore, index: usize) -> NodeId {
        store.session().with_untracked(|s| s.tree().containers[index].id)
    }

    fn form_node(store: &AppStore, index: usize) -> NodeId {
        store.session().with_untracked(|s| s.tree().containers[index].body.form.form)
    }

    /// Memo downstream of `source` that counts how often it re-runs
    fn counted<T>(source: Memo<T>) -> (Memo<T>, Arc<AtomicUsize>)
    where
        T: Clone + PartialEq + Send + Sync + 'static,
    {
        let runs = Arc::new(AtomicUsize::new(0));
        let memo = Memo::new({
            let runs = Arc::clone(&runs);
            move |_| {
                runs.fetch_add(1, Ordering::SeqCst);
                source.get()
            }
        });
        (memo, runs)
    }

    #[test]
    fn test_typing_stays_within_its_form() {
        let store = store();
        let b = column(&store, 1);
        let (b_form, b_runs) = counted(column_form(&store, b));
        let (b_title, title_runs) = counted(column_title(&store, b));
        assert!(b_form.get().is_some());
        assert_eq!(b_title.get(), "B");

        store_dispatch(
            &store,
            UiEvent::Input {
                form: form_node(&store, 0),
                value: "x".into(),
            },
        );
        b_form.get();
        b_title.get();
        assert_eq!(b_runs.load(Ordering::SeqCst), 1);
        assert_eq!(title_runs.load(Ordering::SeqCst), 1);

        store_dispatch(
            &store,
            UiEvent::Input {
                form: form_node(&store, 1),
                value: "y".into(),
            },
        );
        assert_eq!(b_form.get().map(|p| p.input), Some("y".to_string()));
        assert_eq!(b_runs.load(Ordering::SeqCst), 2);
        assert_eq!(title_runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_item_projection_follows_swap() {
        let store = store();
        let (a1, b1) = store
            .session()
            .with_untracked(|s| (s.tree().containers[0].body.items[0].id, s.tree().containers[1].body.items[0].id));
        let body = item_body(&store, a1);
        let ids = column_ids(&store);
        assert_eq!(body.get().map(|b| b.text), Some("a1".to_string()));

        assert!(store_drag_start(&store, a1).is_some());
        assert!(store_accepts_drop(&store, b1));
        store_dispatch(&store, UiEvent::Drop(b1));
        store_dispatch(&store, UiEvent::DragEnd(a1));

        assert_eq!(body.get().map(|b| b.text), Some("b1".to_string()));
        assert_eq!(ids.get(), vec![column(&store, 0), column(&store, 1)]);
    }
}
