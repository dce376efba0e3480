//! Card Actions

use leptos::prelude::*;

use crate::api::{ApiClient, CardUpdate, NewCard};
use crate::debounce::now_ms;
use crate::models::Card;
use crate::position::Pos;
use crate::store::{store_update_cache, AppStateStoreFields, AppStore, ErrorSlot};

use super::lists::cards_key;
use super::{clear_error, report};

/// Fetch every card of a board unless they were fetched a moment ago
pub async fn load_cards(store: AppStore, client: &ApiClient, board_id: &str) {
    let key = cards_key(board_id);
    if !store.refetch().write().try_acquire(&key, now_ms()) {
        log::debug!("[STORE] cards of {} fetched recently, skipping", board_id);
        return;
    }
    match client.list_board_cards(board_id).await {
        Ok(cards) => {
            store_update_cache(&store, |cache| cache.replace_cards_of_board(board_id, cards));
            clear_error(&store, ErrorSlot::Cards);
        }
        Err(e) => {
            store.refetch().write().forget(&key);
            report(&store, ErrorSlot::Cards, "load cards", &e);
        }
    }
}

/// Fetch one list's cards, discarding local guesses
pub async fn load_list_cards(store: AppStore, client: &ApiClient, list_id: &str) {
    match client.list_list_cards(list_id).await {
        Ok(cards) => store_update_cache(&store, |cache| cache.replace_cards_of_list(list_id, cards)),
        Err(e) => report(&store, ErrorSlot::Cards, "reload the list", &e),
    }
}

pub async fn create_card(store: AppStore, client: &ApiClient, list_id: &str, name: &str) {
    let args = NewCard { id_list: list_id, name, desc: None, pos: Pos::Bottom };
    match client.create_card(&args).await {
        Ok(card) => {
            store_update_cache(&store, |cache| cache.upsert_card(card));
            clear_error(&store, ErrorSlot::Cards);
        }
        Err(e) => report(&store, ErrorSlot::Cards, "add the card", &e),
    }
}

/// Apply `edit` locally and send `update`. On failure `undo` gets back
/// whatever `edit` returned, so a move made meanwhile is left alone.
async fn update_card_optimistic<R>(
    store: AppStore,
    client: &ApiClient,
    id: &str,
    edit: impl FnOnce(&mut Card) -> R,
    undo: impl FnOnce(&mut Card, R),
    update: CardUpdate<'_>,
    action: &str,
) {
    let Some(saved) = store_update_cache(&store, |cache| cache.edit_card(id, edit)) else { return };

    match client.update_card(id, &update).await {
        Ok(card) => {
            store_update_cache(&store, |cache| cache.upsert_card(card));
            clear_error(&store, ErrorSlot::Cards);
        }
        Err(e) => {
            store_update_cache(&store, |cache| cache.edit_card(id, |c| undo(c, saved)));
            report(&store, ErrorSlot::Cards, action, &e);
        }
    }
}

pub async fn rename_card(store: AppStore, client: &ApiClient, id: &str, name: &str) {
    let update = CardUpdate { name: Some(name), ..Default::default() };
    let edit = |c: &mut Card| std::mem::replace(&mut c.name, name.to_string());
    update_card_optimistic(store, client, id, edit, |c, old| c.name = old, update, "rename the card").await;
}

pub async fn update_card_desc(store: AppStore, client: &ApiClient, id: &str, desc: &str) {
    let update = CardUpdate { desc: Some(desc), ..Default::default() };
    let edit = |c: &mut Card| std::mem::replace(&mut c.desc, desc.to_string());
    update_card_optimistic(store, client, id, edit, |c, old| c.desc = old, update, "save the description").await;
}

pub async fn archive_card(store: AppStore, client: &ApiClient, id: &str) {
    let Some(removed) = store_update_cache(&store, |cache| cache.remove_card(id)) else { return };

    let update = CardUpdate { closed: Some(true), ..Default::default() };
    if let Err(e) = client.update_card(id, &update).await {
        report(&store, ErrorSlot::Cards, "archive the card", &e);
        load_list_cards(store, client, &removed.id_list).await;
    }
}

pub async fn delete_card(store: AppStore, client: &ApiClient, id: &str) {
    let Some(removed) = store_update_cache(&store, |cache| cache.remove_card(id)) else { return };

    if let Err(e) = client.delete_card(id).await {
        report(&store, ErrorSlot::Cards, "delete the card", &e);
        load_list_cards(store, client, &removed.id_list).await;
    }
}

/// Drop a card into `slot` of `target_list` and persist the new position
pub async fn move_card(store: AppStore, client: &ApiClient, card_id: &str, target_list: &str, slot: usize) {
    let Some(outcome) = store_update_cache(&store, |cache| cache.move_card(card_id, target_list, slot)) else {
        return;
    };
    log::info!("[DND] card {} -> list {} at {}", card_id, outcome.to, outcome.pos.as_param());

    let update = CardUpdate {
        pos: Some(outcome.pos),
        id_list: outcome.changed_parent().then_some(outcome.to.as_str()),
        ..Default::default()
    };
    match client.update_card(card_id, &update).await {
        Ok(card) => {
            store_update_cache(&store, |cache| cache.upsert_card(card));
            clear_error(&store, ErrorSlot::Cards);
        }
        Err(e) => {
            report(&store, ErrorSlot::Cards, "move the card", &e);
            load_list_cards(store, client, &outcome.from).await;
            if outcome.changed_parent() {
                load_list_cards(store, client, &outcome.to).await;
            }
        }
    }
}
