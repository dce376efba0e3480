//! Board View Component
//!
//! Columns of lists with their cards. Lists and cards are reordered by
//! drag-and-drop through the slots between them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::actions;
use crate::components::{ConfirmButton, DropSlot, EditableTitle, InlineError, ListColumn, NewItemForm};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Background colors the API accepts by name
const BOARD_COLORS: &[&str] = &["blue", "orange", "green", "red", "purple", "pink", "lime", "sky", "grey"];

#[component]
pub fn BoardView(board_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let store = use_app_store();

    {
        let board_id = board_id.clone();
        Effect::new(move |_| {
            let client = ctx.client();
            let board_id = board_id.clone();
            spawn_local(async move {
                if !store.cache().read_untracked().boards.contains_key(&board_id) {
                    actions::load_board(store, &client, &board_id).await;
                }
                // Cards need their lists to attach to
                if actions::load_lists(store, &client, &board_id).await {
                    actions::load_cards(store, &client, &board_id).await;
                }
            });
        });
    }

    let id = board_id.clone();
    let name = Signal::derive(move || {
        store.cache().read().boards.get(&id).map(|b| b.name.clone()).unwrap_or_default()
    });
    let id = board_id.clone();
    let style = move || store.cache().read().boards.get(&id).map(|b| b.background_style()).unwrap_or_default();
    let id = board_id.clone();
    let lists = move || store.cache().read().lists_of(&id).into_iter().enumerate().collect::<Vec<_>>();
    let id = board_id.clone();
    let list_count = move || store.cache().read().boards.get(&id).map(|b| b.list_ids.len()).unwrap_or(0);

    let lists_error = Signal::derive(move || store.lists_error().get());
    let cards_error = Signal::derive(move || store.cards_error().get());

    let id = board_id.clone();
    let on_rename = Callback::new(move |name: String| {
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            actions::rename_board(store, &client, &id, &name).await;
        });
    });

    let id = board_id.clone();
    let on_close = Callback::new(move |_: ()| {
        let client = ctx.client();
        let id = id.clone();
        ctx.open_board.set(None);
        spawn_local(async move {
            actions::close_board(store, &client, &id).await;
        });
    });

    let id = board_id.clone();
    let on_delete = Callback::new(move |_: ()| {
        let client = ctx.client();
        let id = id.clone();
        ctx.open_board.set(None);
        spawn_local(async move {
            actions::delete_board(store, &client, &id).await;
        });
    });

    let id = board_id.clone();
    let saved_desc = Memo::new(move |_| {
        store.cache().read().boards.get(&id).map(|b| b.desc.clone()).unwrap_or_default()
    });
    let (desc, set_desc) = signal(String::new());
    Effect::new(move |_| set_desc.set(saved_desc.get()));

    let id = board_id.clone();
    let save_desc = move |_: web_sys::MouseEvent| {
        let text = desc.get_untracked();
        if text == saved_desc.get_untracked() {
            return;
        }
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            actions::update_board_desc(store, &client, &id, &text).await;
        });
    };

    let id = board_id.clone();
    let on_add_list = Callback::new(move |name: String| {
        let client = ctx.client();
        let id = id.clone();
        spawn_local(async move {
            actions::create_list(store, &client, &id, &name).await;
        });
    });

    let id = board_id.clone();
    let color_buttons = BOARD_COLORS
        .iter()
        .map(|color| {
            let id = id.clone();
            view! {
                <button
                    class="color-btn"
                    title=*color
                    style=format!("background-color: {};", color)
                    on:click=move |_| {
                        let client = ctx.client();
                        let id = id.clone();
                        spawn_local(async move {
                            actions::set_board_background(store, &client, &id, color).await;
                        });
                    }
                />
            }
        })
        .collect_view();

    let board_for_slots = board_id.clone();
    let board_for_tail = board_id.clone();
    let board_container = DropTarget::Container { kind: DragKind::List, container: board_id.clone() };
    view! {
        <section class="board-view" style=style>
            <header class="board-header">
                <button class="back-btn" on:click=move |_| ctx.open_board.set(None)>"←"</button>
                <EditableTitle value=name class="board-name" on_commit=on_rename />
                <div class="board-colors">{color_buttons}</div>
                <ConfirmButton label="Close board" prompt="Close this board?" on_confirm=on_close />
                <ConfirmButton label="Delete board" prompt="Delete this board forever?" on_confirm=on_delete />
            </header>
            <div class="board-desc">
                <textarea
                    placeholder="Describe this board..."
                    prop:value=move || desc.get()
                    on:input=move |ev| set_desc.set(event_target_value(&ev))
                />
                <button class="save-btn" on:click=save_desc>"Save"</button>
            </div>
            <InlineError message=lists_error />
            <InlineError message=cards_error />
            <div
                class="list-columns"
                on:mouseenter=make_on_target_mouseenter(dnd, board_container)
            >
                <For
                    each=lists
                    key=|(index, list)| (list.id.clone(), *index)
                    children=move |(index, list)| {
                        view! {
                            <DropSlot dnd=dnd kind=DragKind::List container=board_for_slots.clone() index=index />
                            <ListColumn list_id=list.id.clone() />
                        }
                    }
                />
                {move || view! {
                    <DropSlot dnd=dnd kind=DragKind::List container=board_for_tail.clone() index=list_count() />
                }}
                <NewItemForm placeholder="Add a list..." button_label="Add list" class="list-add-form" on_create=on_add_list />
            </div>
        </section>
    }
}
