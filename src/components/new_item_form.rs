//! New Item Form Component
//!
//! Single-input form used to add organizations, boards, lists and cards.

use leptos::prelude::*;

#[component]
pub fn NewItemForm(
    #[prop(into)] placeholder: String,
    #[prop(into, default = "Add".to_string())] button_label: String,
    #[prop(into, default = "new-item-form".to_string())] class: String,
    /// Called with the trimmed, non-empty name
    #[prop(into)] on_create: Callback<String>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get_untracked().trim().to_string();
        if text.is_empty() { return; }
        set_new_text.set(String::new());
        on_create.run(text);
    };

    view! {
        <form class=class on:submit=submit on:mousedown=|ev| ev.stop_propagation()>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">{button_label}</button>
        </form>
    }
}
