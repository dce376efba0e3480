//! Organization Sidebar Component
//!
//! Organizations of the member plus a "Personal boards" entry, with create,
//! rename and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::{ConfirmButton, EditableTitle, InlineError, NewItemForm};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OrganizationSidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let organizations = move || store.cache().read().organizations();
    let error = Signal::derive(move || store.organizations_error().get());

    let on_create = Callback::new(move |name: String| {
        let client = ctx.client();
        spawn_local(async move {
            if let Some(id) = actions::create_organization(store, &client, &name).await {
                ctx.select_org(Some(id));
            }
        });
    });

    view! {
        <nav class="org-sidebar">
            <div class="org-sidebar-header">"Workspaces"</div>
            <button
                class=move || if ctx.selected_org.get().is_none() { "org-row selected" } else { "org-row" }
                on:click=move |_| ctx.select_org(None)
            >
                "Personal boards"
            </button>
            <For
                each=organizations
                key=|org| org.id.clone()
                children=move |org| {
                    let id = org.id.clone();
                    view! { <OrganizationRow id=id /> }
                }
            />
            <NewItemForm placeholder="New workspace..." button_label="+" class="org-add-form" on_create=on_create />
            <InlineError message=error />
        </nav>
    }
}

#[component]
fn OrganizationRow(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id_for_label = id.clone();
    let label = Signal::derive(move || {
        store
            .cache()
            .read()
            .organizations
            .get(&id_for_label)
            .map(|o| o.label().to_string())
            .unwrap_or_default()
    });

    let id_for_class = id.clone();
    let row_class = move || {
        if ctx.selected_org.get().as_deref() == Some(id_for_class.as_str()) { "org-row selected" } else { "org-row" }
    };

    let id_for_rename = id.clone();
    let on_rename = Callback::new(move |name: String| {
        let client = ctx.client();
        let id = id_for_rename.clone();
        spawn_local(async move {
            actions::rename_organization(store, &client, &id, &name).await;
        });
    });

    let id_for_delete = id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let client = ctx.client();
        let id = id_for_delete.clone();
        if ctx.selected_org.get_untracked().as_deref() == Some(id.as_str()) {
            ctx.select_org(None);
        }
        spawn_local(async move {
            actions::delete_organization(store, &client, &id).await;
        });
    });

    let id_for_select = id.clone();
    view! {
        <div class=row_class on:click=move |_| ctx.select_org(Some(id_for_select.clone()))>
            <EditableTitle value=label class="org-name" on_commit=on_rename />
            <ConfirmButton label="×" prompt="Delete workspace?" on_confirm=on_delete />
        </div>
    }
}
