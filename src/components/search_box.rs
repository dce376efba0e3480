//! Search Box Component
//!
//! Debounced search over boards and cards; results open the board or card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::components::InlineError;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let debounce_ms = ctx.config().search_debounce_ms;

    let on_input = move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        let client = ctx.client();
        spawn_local(async move {
            actions::run_search(store, &client, query, debounce_ms).await;
        });
    };

    let boards = move || store.search().read().results.boards.clone();
    let cards = move || store.search().read().results.cards.clone();
    let has_results = move || !store.search().read().results.is_empty();
    let loading = move || store.search().read().loading;
    let error = Signal::derive(move || store.search().read().error.clone());

    view! {
        <div class="search-box">
            <input
                type="search"
                placeholder="Search boards and cards..."
                prop:value=move || store.search().read().query.clone()
                on:input=on_input
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        actions::clear_search(store);
                    }
                }
            />
            <Show when=loading>
                <span class="search-spinner">"…"</span>
            </Show>
            <InlineError message=error />
            <Show when=has_results>
                <div class="search-results">
                    <div class="search-section">"Boards"</div>
                    <For
                        each=boards
                        key=|board| board.id.clone()
                        children=move |board| {
                            let id = board.id.clone();
                            view! {
                                <button
                                    class="search-result"
                                    on:click=move |_| {
                                        ctx.show_board(id.clone());
                                        actions::clear_search(store);
                                    }
                                >
                                    {board.name.clone()}
                                </button>
                            }
                        }
                    />
                    <div class="search-section">"Cards"</div>
                    <For
                        each=cards
                        key=|card| card.id.clone()
                        children=move |card| {
                            let id = card.id.clone();
                            let board_id = card.id_board.clone();
                            view! {
                                <button
                                    class="search-result"
                                    on:click=move |_| {
                                        ctx.show_card(board_id.clone(), id.clone());
                                        actions::clear_search(store);
                                    }
                                >
                                    {card.name.clone()}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
