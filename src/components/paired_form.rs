//! Paired Form Component
//!
//! A reveal button and the form it opens. Only one of the two is shown.

use leptos::prelude::*;

use crate::models::FormPair;
use crate::session::UiEvent;
use crate::store::{store_click, store_dispatch, use_app_store};

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Button + form with label, close control, input, validation slot and submit
#[component]
pub fn PairedForm(
    /// Current state of the pair; its node ids change when the owner's
    /// markup is replaced
    #[prop(into)] pair: Signal<Option<FormPair>>,
    button_class: &'static str,
    button_label: &'static str,
    form_label: &'static str,
) -> impl IntoView {
    let store = use_app_store();

    let button_visible = move || pair.get().map(|p| p.button_visible()).unwrap_or(false);
    let form_visible = move || pair.get().map(|p| p.form_visible()).unwrap_or(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(p) = pair.get_untracked() {
            store_dispatch(&store, UiEvent::Submit(p.form));
        }
    };

    view! {
        <button
            class=button_class
            style:display=move || display(button_visible())
            on:click=move |_| {
                if let Some(p) = pair.get_untracked() {
                    store_click(&store, p.button);
                }
            }
        >
            {button_label}
        </button>
        <form
            autocomplete="off"
            style:display=move || display(form_visible())
            on:submit=on_submit
        >
            <div class="top-form-container">
                <label>{form_label}</label>
                <button
                    type="button"
                    class="close-form-btn"
                    on:click=move |_| {
                        if let Some(p) = pair.get_untracked() {
                            store_click(&store, p.close_button);
                        }
                    }
                >
                    "X"
                </button>
            </div>
            <input
                type="text"
                prop:value=move || pair.get().map(|p| p.input).unwrap_or_default()
                on:input=move |ev| {
                    if let Some(p) = pair.get_untracked() {
                        store_dispatch(&store, UiEvent::Input { form: p.form, value: event_target_value(&ev) });
                    }
                }
            />
            <span class="validation-msg">{move || pair.get().map(|p| p.validation).unwrap_or_default()}</span>
            <button type="submit">"Submit"</button>
        </form>
    }
}
