//! Container Creator Component
//!
//! The fixed "add a list" affordance after the last column.

use leptos::prelude::*;

use crate::components::PairedForm;
use crate::store::{creator_form, use_app_store};

#[component]
pub fn ContainerCreator() -> impl IntoView {
    let store = use_app_store();
    let pair = creator_form(&store);

    view! {
        <div class="add-new-container">
            <PairedForm
                pair=pair
                button_class="add-container-btn"
                button_label="Add a list"
                form_label="Add a new list"
            />
        </div>
    }
}
