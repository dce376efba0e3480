//! Session Actions

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::auth::{forget_token, LocalStorage};
use crate::store::{store_mark_logged_out, AppStateStoreFields, AppStore, ErrorSlot};

use super::{clear_error, report};

/// Fetch the signed-in member
pub async fn load_member(store: AppStore, client: &ApiClient) {
    match client.get_me().await {
        Ok(member) => {
            log::info!("[AUTH] signed in as {}", member.username);
            store.session().write().member = Some(member);
            clear_error(&store, ErrorSlot::Session);
        }
        Err(e) => report(&store, ErrorSlot::Session, "load your profile", &e),
    }
}

/// Drop the token; the auth watcher clears the cached data
pub fn logout(store: AppStore) {
    log::info!("[AUTH] logout");
    forget_token(&LocalStorage);
    store_mark_logged_out(&store);
}
