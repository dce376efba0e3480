//! Inline Error Component

use leptos::prelude::*;

/// Error text of a store container, hidden when empty
#[component]
pub fn InlineError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|msg| view! { <div class="inline-error">{msg}</div> })
}
