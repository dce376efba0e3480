//! Board Grid Component
//!
//! Tiles of the boards in the selected organization (or the personal ones).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{InlineError, NewItemForm};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Refresh an organization's boards when it gets selected
    Effect::new(move |_| {
        if let Some(org_id) = ctx.selected_org.get() {
            let client = ctx.client();
            spawn_local(async move {
                actions::load_organization_boards(store, &client, &org_id).await;
            });
        }
    });

    let boards = move || {
        let cache = store.cache().read();
        match ctx.selected_org.get() {
            Some(org_id) => cache.boards_of(&org_id),
            None => cache.personal_boards(),
        }
    };
    let title = move || match ctx.selected_org.get() {
        Some(org_id) => store
            .cache()
            .read()
            .organizations
            .get(&org_id)
            .map(|o| o.label().to_string())
            .unwrap_or_default(),
        None => "Personal boards".to_string(),
    };
    let error = Signal::derive(move || store.boards_error().get());

    let on_create = Callback::new(move |name: String| {
        let client = ctx.client();
        let org_id = ctx.selected_org.get_untracked();
        spawn_local(async move {
            if let Some(id) = actions::create_board(store, &client, &name, org_id.as_deref()).await {
                ctx.show_board(id);
            }
        });
    });

    view! {
        <section class="board-grid">
            <h2>{title}</h2>
            <InlineError message=error />
            <div class="board-tiles">
                <For
                    each=boards
                    key=|board| (board.id.clone(), board.name.clone(), board.background_style())
                    children=move |board| {
                        let id = board.id.clone();
                        view! {
                            <button
                                class="board-tile"
                                style=board.background_style()
                                on:click=move |_| ctx.show_board(id.clone())
                            >
                                <span class="board-tile-name">{board.name.clone()}</span>
                            </button>
                        }
                    }
                />
                <NewItemForm placeholder="New board..." button_label="Create" class="board-add-form" on_create=on_create />
            </div>
        </section>
    }
}
