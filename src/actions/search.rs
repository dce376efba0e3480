//! Search Actions

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::api::ApiClient;
use crate::store::{AppStateStoreFields, AppStore, ErrorSlot};

use super::report;

/// Minimum query length before hitting the API
const MIN_QUERY_LEN: usize = 2;

/// Record the query and run it once typing pauses for `debounce_ms`
pub async fn run_search(store: AppStore, client: &ApiClient, query: String, debounce_ms: u32) {
    let ticket = {
        let search_field = store.search();
        let mut search = search_field.write();
        search.query = query.clone();
        search.debouncer.bump()
    };

    let trimmed = query.trim().to_string();
    if trimmed.chars().count() < MIN_QUERY_LEN {
        let search_field = store.search();
        let mut search = search_field.write();
        search.results = Default::default();
        search.loading = false;
        search.error = None;
        return;
    }

    TimeoutFuture::new(debounce_ms).await;
    if !store.search().read_untracked().debouncer.is_current(ticket) {
        return;
    }

    store.search().write().loading = true;
    log::debug!("[SEARCH] query {:?}", trimmed);
    let result = client.search(&trimmed).await;

    // A newer query may have started while this one was in flight
    if !store.search().read_untracked().debouncer.is_current(ticket) {
        return;
    }
    store.search().write().loading = false;
    match result {
        Ok(results) => {
            let search_field = store.search();
            let mut search = search_field.write();
            search.results = results;
            search.error = None;
        }
        Err(e) => report(&store, ErrorSlot::Search, "search", &e),
    }
}

pub fn clear_search(store: AppStore) {
    let search_field = store.search();
    let mut search = search_field.write();
    search.debouncer.bump();
    search.query.clear();
    search.results = Default::default();
    search.loading = false;
    search.error = None;
}
