//! Top Bar Component
//!
//! Search box, signed-in member and logout.

use leptos::prelude::*;

use crate::actions;
use crate::components::{InlineError, SearchBox};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TopBar() -> impl IntoView {
    let store = use_app_store();

    let member_label = move || {
        store
            .session()
            .read()
            .member
            .as_ref()
            .map(|m| if m.full_name.is_empty() { m.username.clone() } else { m.full_name.clone() })
            .unwrap_or_default()
    };
    let initials = move || {
        store.session().read().member.as_ref().map(|m| m.initials.clone()).unwrap_or_default()
    };
    let error = Signal::derive(move || store.session().read().error.clone());

    view! {
        <header class="top-bar">
            <SearchBox />
            <div class="member">
                <span class="member-initials" title=member_label>{initials}</span>
                <button class="logout-btn" on:click=move |_| actions::logout(store)>"Log out"</button>
            </div>
            <InlineError message=error />
        </header>
    }
}
