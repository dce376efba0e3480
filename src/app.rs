//! Taskboard App
//!
//! Root component: session handling, drag-and-drop dispatch and layout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;
use reactive_stores::Store;

use crate::actions;
use crate::auth::{self, AuthChange};
use crate::components::{BoardGrid, BoardView, CardDetail, LoginScreen, OrganizationSidebar, TopBar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::{store_clear_all, AppState, AppStateStoreFields, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    let token = auth::startup_token();
    log::info!("[APP] starting, token present: {}", token.is_some());

    let store: AppStore = Store::new(AppState::new(config.refetch_guard_ms, token.is_some()));
    provide_context(store);

    let poll_ms = config.auth_poll_ms;
    let ctx = AppContext::new(config, token);
    provide_context(ctx);

    let authenticated = Memo::new(move |_| store.session().read().authenticated);

    // Initial fetch once signed in
    Effect::new(move |_| {
        if authenticated.get() {
            let client = ctx.client();
            spawn_local(async move {
                actions::load_member(store, &client).await;
                actions::load_organizations(store, &client).await;
                actions::load_boards(store, &client).await;
            });
        }
    });

    // Poll the auth flag; signing out wipes everything fetched
    spawn_local(async move {
        let mut previous = store.session().read_untracked().authenticated;
        loop {
            TimeoutFuture::new(poll_ms).await;
            let current = store.session().read_untracked().authenticated;
            match auth::auth_change(previous, current) {
                Some(AuthChange::SignedOut) => {
                    log::info!("[AUTH] signed out, clearing state");
                    auth::forget_token(&auth::LocalStorage);
                    ctx.set_token(None);
                    ctx.reset();
                    store_clear_all(&store);
                }
                Some(AuthChange::SignedIn) => log::info!("[AUTH] signed in"),
                None => {}
            }
            previous = current;
        }
    });

    // Create DnD signals
    let dnd = create_dnd_signals();
    provide_context(dnd);

    // Bind global mouseup handler for dropping
    bind_global_mouseup(dnd, move |item, target| {
        let client = ctx.client();
        let container = target.container().to_string();
        let slot = match target {
            DropTarget::Slot { index, .. } => index,
            // Dropped on the body of a board or list: append
            DropTarget::Container { .. } => usize::MAX,
        };
        log::debug!("[DND] drop {:?} {} on {} slot {}", item.kind, item.id, container, slot);
        spawn_local(async move {
            match item.kind {
                DragKind::List => actions::move_list(store, &client, &item.id, &container, slot).await,
                DragKind::Card => actions::move_card(store, &client, &item.id, &container, slot).await,
            }
        });
    });

    view! {
        <Show when=move || authenticated.get() fallback=|| view! { <LoginScreen /> }>
            <div class="app-layout">
                <OrganizationSidebar />
                <main class="main-content">
                    <TopBar />
                    {move || match ctx.open_board.get() {
                        Some(board_id) => view! { <BoardView board_id=board_id /> }.into_any(),
                        None => view! { <BoardGrid /> }.into_any(),
                    }}
                </main>
                {move || ctx.open_card.get().map(|card_id| view! { <CardDetail card_id=card_id /> })}
            </div>
        </Show>
    }
}
