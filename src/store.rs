//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One container per
//! entity type holds the last error message shown inline for that type.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::cache::EntityCache;
use crate::debounce::{Debouncer, RefetchGuard};
use crate::models::{Member, SearchResults};

/// Search box state
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub results: SearchResults,
    pub loading: bool,
    pub error: Option<String>,
    pub debouncer: Debouncer,
}

/// Who is signed in
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub member: Option<Member>,
    /// Failure loading the member profile
    pub error: Option<String>,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Every fetched organization, board, list and card
    pub cache: EntityCache,
    pub organizations_error: Option<String>,
    pub boards_error: Option<String>,
    pub lists_error: Option<String>,
    pub cards_error: Option<String>,
    pub search: SearchState,
    pub session: Session,
    /// Last fetch time of board children
    pub refetch: RefetchGuard,
}

impl AppState {
    pub fn new(refetch_guard_ms: f64, authenticated: bool) -> Self {
        Self {
            refetch: RefetchGuard::new(refetch_guard_ms),
            session: Session { authenticated, ..Default::default() },
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Which container an error message belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorSlot {
    Organizations,
    Boards,
    Lists,
    Cards,
    Search,
    Session,
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_error(store: &AppStore, slot: ErrorSlot, message: Option<String>) {
    match slot {
        ErrorSlot::Organizations => *store.organizations_error().write() = message,
        ErrorSlot::Boards => *store.boards_error().write() = message,
        ErrorSlot::Lists => *store.lists_error().write() = message,
        ErrorSlot::Cards => *store.cards_error().write() = message,
        ErrorSlot::Search => store.search().write().error = message,
        ErrorSlot::Session => store.session().write().error = message,
    }
}

/// Mutate the entity cache
pub fn store_update_cache<R>(store: &AppStore, f: impl FnOnce(&mut EntityCache) -> R) -> R {
    f(&mut store.cache().write())
}

/// Forget everything fetched for the signed-in member
pub fn store_clear_all(store: &AppStore) {
    store.cache().write().clear();
    store.refetch().write().clear();
    {
        // Keep the generation so a pending search can't match a fresh ticket
        let search_field = store.search();
        let mut search = search_field.write();
        let mut debouncer = search.debouncer;
        debouncer.bump();
        *search = SearchState { debouncer, ..Default::default() };
    }
    for slot in [ErrorSlot::Organizations, ErrorSlot::Boards, ErrorSlot::Lists, ErrorSlot::Cards] {
        store_set_error(store, slot, None);
    }
    let session_field = store.session();
    let mut session = session_field.write();
    session.member = None;
    session.error = None;
}

/// Flip the session to signed out; the auth watcher clears the rest
pub fn store_mark_logged_out(store: &AppStore) {
    store.session().write().authenticated = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_error_has_its_own_slot() {
        let store: AppStore = Store::new(AppState::new(2000.0, true));
        store_set_error(&store, ErrorSlot::Session, Some("Could not load your profile".into()));
        assert_eq!(store.session().read_untracked().error.as_deref(), Some("Could not load your profile"));
        assert_eq!(store.organizations_error().get_untracked(), None);

        store_clear_all(&store);
        assert_eq!(store.session().read_untracked().error, None);
    }

    #[test]
    fn test_clear_all_invalidates_pending_search() {
        let store: AppStore = Store::new(AppState::new(2000.0, true));
        let ticket = store.search().write().debouncer.bump();
        store.search().write().query = "plan".into();

        store_clear_all(&store);
        let search = store.search().read_untracked();
        assert!(search.query.is_empty());
        assert!(!search.debouncer.is_current(ticket));
    }
}
