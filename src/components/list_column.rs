//! List Column Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::actions;
use crate::components::{CardItem, ConfirmButton, DropSlot, EditableTitle, NewItemForm};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ListColumn(list_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let store = use_app_store();

    let id = list_id.clone();
    let name = Signal::derive(move || {
        store.cache().read().lists.get(&id).map(|l| l.name.clone()).unwrap_or_default()
    });
    let id = list_id.clone();
    let cards = move || store.cache().read().cards_of(&id).into_iter().enumerate().collect::<Vec<_>>();
    let id = list_id.clone();
    let card_count = move || store.cache().read().lists.get(&id).map(|l| l.card_ids.len()).unwrap_or(0);

    let id = list_id.clone();
    let on_rename = Callback::new(move |name: String| {
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            actions::rename_list(store, &client, &id, &name).await;
        });
    });

    let id = list_id.clone();
    let on_archive = Callback::new(move |_: ()| {
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            actions::archive_list(store, &client, &id).await;
        });
    });

    let id = list_id.clone();
    let on_add_card = Callback::new(move |name: String| {
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            actions::create_card(store, &client, &id, &name).await;
        });
    });

    let id = list_id.clone();
    let column_class = move || {
        if dnd.is_dragging(DragKind::List, &id) { "list-column dragging" } else { "list-column" }
    };

    let on_mousedown = make_on_mousedown(dnd, DragItem::new(DragKind::List, list_id.clone()));
    let list_container = DropTarget::Container { kind: DragKind::Card, container: list_id.clone() };
    let list_for_slots = list_id.clone();
    let list_for_tail = list_id.clone();
    view! {
        <div class=column_class>
            <div class="list-header" on:mousedown=on_mousedown>
                <EditableTitle value=name class="list-name" on_commit=on_rename />
                <ConfirmButton label="…" prompt="Archive list?" button_class="list-archive-btn" on_confirm=on_archive />
            </div>
            <div
                class="list-cards"
                on:mouseenter=make_on_target_mouseenter(dnd, list_container)
            >
                <For
                    each=cards
                    key=|(index, card)| (card.id.clone(), *index)
                    children=move |(index, card)| {
                        view! {
                            <DropSlot dnd=dnd kind=DragKind::Card container=list_for_slots.clone() index=index />
                            <CardItem card_id=card.id.clone() />
                        }
                    }
                />
                {move || view! {
                    <DropSlot dnd=dnd kind=DragKind::Card container=list_for_tail.clone() index=card_count() />
                }}
            </div>
            <NewItemForm placeholder="Add a card..." button_label="+" class="card-add-form" on_create=on_add_card />
        </div>
    }
}
