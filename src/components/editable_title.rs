//! Editable Title Component
//!
//! Text that turns into an input on click. Enter commits, Escape cancels.

use leptos::prelude::*;

#[component]
pub fn EditableTitle(
    /// Current value, read reactively
    #[prop(into)] value: Signal<String>,
    #[prop(into, default = "title".to_string())] class: String,
    /// Called with the trimmed new value when it changed
    #[prop(into)] on_commit: Callback<String>,
) -> impl IntoView {
    let (editing, set_editing) = signal(false);
    let (draft, set_draft) = signal(String::new());

    let commit = move || {
        // Enter removes the input, which fires blur a second time
        if !editing.get_untracked() {
            return;
        }
        let next = draft.get_untracked().trim().to_string();
        set_editing.set(false);
        if !next.is_empty() && next != value.get_untracked() {
            on_commit.run(next);
        }
    };

    let class_for_text = class.clone();
    view! {
        <Show
            when=move || editing.get()
            fallback=move || view! {
                <span
                    class=class_for_text.clone()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_draft.set(value.get_untracked());
                        set_editing.set(true);
                    }
                >
                    {move || value.get()}
                </span>
            }
        >
            <input
                type="text"
                class=format!("{} editing", class)
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                on:mousedown=|ev| ev.stop_propagation()
                on:keydown=move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
                    "Enter" => commit(),
                    "Escape" => set_editing.set(false),
                    _ => {}
                }
                on:blur=move |_| commit()
            />
        </Show>
    }
}
