//! List Actions

use leptos::prelude::*;

use crate::api::{ApiClient, ListUpdate};
use crate::debounce::now_ms;
use crate::models::List;
use crate::position::Pos;
use crate::store::{store_update_cache, AppStateStoreFields, AppStore, ErrorSlot};

use super::{clear_error, load_cards, report};

pub(crate) fn lists_key(board_id: &str) -> String {
    format!("lists:{}", board_id)
}

pub(crate) fn cards_key(board_id: &str) -> String {
    format!("cards:{}", board_id)
}

/// Make the next load of a board's lists and cards hit the API
pub fn invalidate_board(store: AppStore, board_id: &str) {
    let refetch_field = store.refetch();
    let mut guard = refetch_field.write();
    guard.forget(&lists_key(board_id));
    guard.forget(&cards_key(board_id));
}

/// Fetch a board's lists unless they were fetched a moment ago.
/// Returns false when the fetch failed.
pub async fn load_lists(store: AppStore, client: &ApiClient, board_id: &str) -> bool {
    let key = lists_key(board_id);
    if !store.refetch().write().try_acquire(&key, now_ms()) {
        log::debug!("[STORE] lists of {} fetched recently, skipping", board_id);
        return true;
    }
    match client.list_board_lists(board_id).await {
        Ok(lists) => {
            store_update_cache(&store, |cache| cache.replace_lists_of(board_id, lists));
            clear_error(&store, ErrorSlot::Lists);
            true
        }
        Err(e) => {
            store.refetch().write().forget(&key);
            report(&store, ErrorSlot::Lists, "load lists", &e);
            false
        }
    }
}

pub async fn create_list(store: AppStore, client: &ApiClient, board_id: &str, name: &str) {
    match client.create_list(board_id, name, Pos::Bottom).await {
        Ok(list) => {
            store_update_cache(&store, |cache| cache.upsert_list(list));
            clear_error(&store, ErrorSlot::Lists);
        }
        Err(e) => report(&store, ErrorSlot::Lists, "add the list", &e),
    }
}

pub async fn rename_list(store: AppStore, client: &ApiClient, id: &str, name: &str) {
    let edit = |l: &mut List| std::mem::replace(&mut l.name, name.to_string());
    let Some(old) = store_update_cache(&store, |cache| cache.edit_list(id, edit)) else { return };

    let update = ListUpdate { name: Some(name), ..Default::default() };
    match client.update_list(id, &update).await {
        Ok(list) => {
            store_update_cache(&store, |cache| cache.upsert_list(list));
            clear_error(&store, ErrorSlot::Lists);
        }
        Err(e) => {
            store_update_cache(&store, |cache| cache.edit_list(id, |l| l.name = old));
            report(&store, ErrorSlot::Lists, "rename the list", &e);
        }
    }
}

pub async fn archive_list(store: AppStore, client: &ApiClient, id: &str) {
    let Some(removed) = store_update_cache(&store, |cache| cache.remove_list(id)) else { return };

    let update = ListUpdate { closed: Some(true), ..Default::default() };
    if let Err(e) = client.update_list(id, &update).await {
        report(&store, ErrorSlot::Lists, "archive the list", &e);
        reload_board(store, client, &removed.id_board).await;
    }
}

/// Drop a list into `slot` of `target_board` and persist the new position
pub async fn move_list(store: AppStore, client: &ApiClient, list_id: &str, target_board: &str, slot: usize) {
    let Some(outcome) = store_update_cache(&store, |cache| cache.move_list(list_id, target_board, slot)) else {
        return;
    };
    log::info!("[DND] list {} -> board {} at {}", list_id, outcome.to, outcome.pos.as_param());

    let update = ListUpdate {
        pos: Some(outcome.pos),
        id_board: outcome.changed_parent().then_some(outcome.to.as_str()),
        ..Default::default()
    };
    match client.update_list(list_id, &update).await {
        Ok(list) => {
            store_update_cache(&store, |cache| cache.upsert_list(list));
            clear_error(&store, ErrorSlot::Lists);
        }
        Err(e) => {
            report(&store, ErrorSlot::Lists, "move the list", &e);
            reload_board(store, client, &outcome.from).await;
            if outcome.changed_parent() {
                reload_board(store, client, &outcome.to).await;
            }
        }
    }
}

/// Fetch a board's lists and cards again, bypassing the refetch guard
pub async fn reload_board(store: AppStore, client: &ApiClient, board_id: &str) {
    invalidate_board(store, board_id);
    if load_lists(store, client, board_id).await {
        load_cards(store, client, board_id).await;
    }
}
