//! Card Item Component

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardItem(card_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let store = use_app_store();

    let id = card_id.clone();
    let name = move || store.cache().read().cards.get(&id).map(|c| c.name.clone()).unwrap_or_default();
    let id = card_id.clone();
    let has_desc = move || store.cache().read().cards.get(&id).map(|c| !c.desc.is_empty()).unwrap_or(false);

    let id = card_id.clone();
    let card_class = move || {
        let mut c = String::from("card-item");
        if dnd.is_dragging(DragKind::Card, &id) { c.push_str(" dragging"); }
        if ctx.open_card.get().as_deref() == Some(id.as_str()) { c.push_str(" selected"); }
        c
    };

    let id = card_id.clone();
    let on_click = move |_: web_sys::MouseEvent| {
        // mouseup of a drag also produces a click
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.open_card.set(Some(id.clone()));
    };

    view! {
        <div
            class=card_class
            on:mousedown=make_on_mousedown(dnd, DragItem::new(DragKind::Card, card_id))
            on:click=on_click
        >
            <span class="card-name">{name}</span>
            <Show when=has_desc>
                <span class="card-desc-badge" title="Has description">"≡"</span>
            </Show>
        </div>
    }
}
