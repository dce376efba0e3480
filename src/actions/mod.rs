//! Store Actions
//!
//! Async flows combining API calls with optimistic updates of the store.
//! Mutations are applied locally first; on failure they are reverted or the
//! affected parent collection is fetched again.

mod session;
mod organizations;
mod boards;
mod lists;
mod cards;
mod search;

pub use session::*;
pub use organizations::*;
pub use boards::*;
pub use lists::*;
pub use cards::*;
pub use search::*;

use crate::auth::{self, LocalStorage};
use crate::error::ApiError;
use crate::store::{store_mark_logged_out, store_set_error, AppStore, ErrorSlot};

/// Log a failed call and surface it on the matching container
fn report(store: &AppStore, slot: ErrorSlot, action: &str, err: &ApiError) {
    log::error!("[STORE] {} failed: {}", action, err);
    store_set_error(store, slot, Some(format!("Could not {}: {}", action, err)));
    if auth::drop_rejected_token(err, &LocalStorage) {
        store_mark_logged_out(store);
    }
}

fn clear_error(store: &AppStore, slot: ErrorSlot) {
    store_set_error(store, slot, None);
}
