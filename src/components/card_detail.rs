//! Card Detail Component
//!
//! Side panel for the open card: name, description, archive and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{ConfirmButton, EditableTitle};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardDetail(card_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = card_id.clone();
    let name = Signal::derive(move || {
        store.cache().read().cards.get(&id).map(|c| c.name.clone()).unwrap_or_default()
    });
    let id = card_id.clone();
    let list_name = move || {
        let cache = store.cache().read();
        cache
            .cards
            .get(&id)
            .and_then(|c| cache.lists.get(&c.id_list))
            .map(|l| l.name.clone())
            .unwrap_or_default()
    };
    let id = card_id.clone();
    let url = move || store.cache().read().cards.get(&id).map(|c| c.url.clone()).unwrap_or_default();

    let id = card_id.clone();
    let (desc, set_desc) = signal(
        store.cache().read_untracked().cards.get(&id).map(|c| c.desc.clone()).unwrap_or_default(),
    );

    // Card archived or deleted elsewhere
    let id = card_id.clone();
    Effect::new(move |_| {
        if !store.cache().read().cards.contains_key(&id) {
            ctx.open_card.set(None);
        }
    });

    let id = card_id.clone();
    let on_rename = Callback::new(move |name: String| {
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            actions::rename_card(store, &client, &id, &name).await;
        });
    });

    let id = card_id.clone();
    let save_desc = move |_: web_sys::MouseEvent| {
        let client = ctx.client();
        let id = id.clone();
        let text = desc.get_untracked();
        spawn_local(async move {
            actions::update_card_desc(store, &client, &id, &text).await;
        });
    };

    let id = card_id.clone();
    let on_archive = Callback::new(move |_: ()| {
        let client = ctx.client();
        let id = id.clone();
        ctx.open_card.set(None);
        spawn_local(async move {
            actions::archive_card(store, &client, &id).await;
        });
    });

    let id = card_id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let client = ctx.client();
        let id = id.clone();
        ctx.open_card.set(None);
        spawn_local(async move {
            actions::delete_card(store, &client, &id).await;
        });
    });

    view! {
        <aside class="card-detail">
            <button class="close-btn" on:click=move |_| ctx.open_card.set(None)>"×"</button>
            <EditableTitle value=name class="card-detail-name" on_commit=on_rename />
            <div class="card-detail-list">"in list " {list_name}</div>
            <textarea
                class="card-detail-desc"
                placeholder="Add a more detailed description..."
                prop:value=move || desc.get()
                on:input=move |ev| set_desc.set(event_target_value(&ev))
            />
            <button class="save-btn" on:click=save_desc>"Save"</button>
            <a class="card-link" href=url target="_blank" rel="noopener">"Open on the web"</a>
            <div class="card-detail-actions">
                <ConfirmButton label="Archive" prompt="Archive card?" on_confirm=on_archive />
                <ConfirmButton label="Delete" prompt="Delete card forever?" on_confirm=on_delete />
            </div>
        </aside>
    }
}
