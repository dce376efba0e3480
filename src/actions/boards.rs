//! Board Actions

use crate::api::{ApiClient, BoardUpdate, NewBoard};
use crate::models::Board;
use crate::store::{store_update_cache, AppStore, ErrorSlot};

use super::{clear_error, report};

/// Every board the member can see, organization boards included
pub async fn load_boards(store: AppStore, client: &ApiClient) {
    match client.list_my_boards().await {
        Ok(boards) => {
            log::debug!("[STORE] loaded {} boards", boards.len());
            store_update_cache(&store, |cache| cache.replace_member_boards(boards));
            clear_error(&store, ErrorSlot::Boards);
        }
        Err(e) => report(&store, ErrorSlot::Boards, "load boards", &e),
    }
}

pub async fn load_organization_boards(store: AppStore, client: &ApiClient, org_id: &str) {
    match client.list_organization_boards(org_id).await {
        Ok(boards) => {
            store_update_cache(&store, |cache| cache.replace_boards_of(org_id, boards));
            clear_error(&store, ErrorSlot::Boards);
        }
        Err(e) => report(&store, ErrorSlot::Boards, "load the organization's boards", &e),
    }
}

pub async fn load_board(store: AppStore, client: &ApiClient, id: &str) {
    match client.get_board(id).await {
        Ok(board) => store_update_cache(&store, |cache| cache.upsert_board(board)),
        Err(e) => report(&store, ErrorSlot::Boards, "load the board", &e),
    }
}

pub async fn create_board(store: AppStore, client: &ApiClient, name: &str, org_id: Option<&str>) -> Option<String> {
    let args = NewBoard { name, id_organization: org_id, desc: None, default_lists: false };
    match client.create_board(&args).await {
        Ok(board) => {
            let id = board.id.clone();
            store_update_cache(&store, |cache| cache.upsert_board(board));
            clear_error(&store, ErrorSlot::Boards);
            Some(id)
        }
        Err(e) => {
            report(&store, ErrorSlot::Boards, "create the board", &e);
            None
        }
    }
}

/// Apply `edit` locally and send `update`. On failure `undo` gets back
/// whatever `edit` returned, so fields changed meanwhile are left alone.
async fn update_board_optimistic<R>(
    store: AppStore,
    client: &ApiClient,
    id: &str,
    edit: impl FnOnce(&mut Board) -> R,
    undo: impl FnOnce(&mut Board, R),
    update: BoardUpdate<'_>,
    action: &str,
) {
    let Some(saved) = store_update_cache(&store, |cache| cache.edit_board(id, edit)) else { return };

    match client.update_board(id, &update).await {
        Ok(board) => {
            store_update_cache(&store, |cache| cache.upsert_board(board));
            clear_error(&store, ErrorSlot::Boards);
        }
        Err(e) => {
            store_update_cache(&store, |cache| cache.edit_board(id, |b| undo(b, saved)));
            report(&store, ErrorSlot::Boards, action, &e);
        }
    }
}

pub async fn rename_board(store: AppStore, client: &ApiClient, id: &str, name: &str) {
    let update = BoardUpdate { name: Some(name), ..Default::default() };
    let edit = |b: &mut Board| std::mem::replace(&mut b.name, name.to_string());
    update_board_optimistic(store, client, id, edit, |b, old| b.name = old, update, "rename the board").await;
}

pub async fn update_board_desc(store: AppStore, client: &ApiClient, id: &str, desc: &str) {
    let update = BoardUpdate { desc: Some(desc), ..Default::default() };
    let edit = |b: &mut Board| std::mem::replace(&mut b.desc, desc.to_string());
    update_board_optimistic(store, client, id, edit, |b, old| b.desc = old, update, "update the board").await;
}

/// Named background color (`blue`, `green`, ...)
pub async fn set_board_background(store: AppStore, client: &ApiClient, id: &str, color: &str) {
    let update = BoardUpdate { background: Some(color), ..Default::default() };
    let edit = |b: &mut Board| {
        let old = b.prefs.clone();
        b.prefs.background_color = Some(color.to_string());
        b.prefs.background_image = None;
        old
    };
    update_board_optimistic(store, client, id, edit, |b, old| b.prefs = old, update, "change the background").await;
}

pub async fn close_board(store: AppStore, client: &ApiClient, id: &str) {
    store_update_cache(&store, |cache| cache.remove_board(id));

    let update = BoardUpdate { closed: Some(true), ..Default::default() };
    if let Err(e) = client.update_board(id, &update).await {
        report(&store, ErrorSlot::Boards, "close the board", &e);
        super::invalidate_board(store, id);
        load_board(store, client, id).await;
    }
}

pub async fn delete_board(store: AppStore, client: &ApiClient, id: &str) {
    store_update_cache(&store, |cache| cache.remove_board(id));

    if let Err(e) = client.delete_board(id).await {
        report(&store, ErrorSlot::Boards, "delete the board", &e);
        super::invalidate_board(store, id);
        load_board(store, client, id).await;
    }
}
