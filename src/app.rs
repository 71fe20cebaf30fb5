//! Kanban Board App
//!
//! A row of columns followed by the "add a list" affordance.

use leptos::prelude::*;
use leptos_dragdrop::create_dnd_signals;
use reactive_stores::Store;

use crate::components::{BoardColumn, ContainerCreator};
use crate::config::BoardConfig;
use crate::store::{column_ids, AppState};

#[component]
pub fn App(config: BoardConfig) -> impl IntoView {
    let store = Store::new(AppState::new(&config));
    provide_context(store);

    let dnd = create_dnd_signals();

    let columns = column_ids(&store);

    view! {
        <main class="main-content">
            <For
                each=move || columns.get()
                key=|id| *id
                children=move |id| view! { <BoardColumn id=id dnd=dnd /> }
            />
            <ContainerCreator />
        </main>
    }
}
