//! Authentication
//!
//! Implicit-grant token plumbing: building the authorize URL, reading the
//! token back from the return URL fragment, and persisting it.

use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};

/// Local storage key of the member token
pub const TOKEN_KEY: &str = "taskboard_token";

/// Where the member token is kept between visits
pub trait TokenStorage {
    fn load(&self) -> ApiResult<Option<String>>;
    fn save(&self, token: &str) -> ApiResult<()>;
    fn clear(&self) -> ApiResult<()>;
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> ApiResult<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| ApiError::Storage("localStorage unavailable".to_string()))
    }
}

impl TokenStorage for LocalStorage {
    fn load(&self) -> ApiResult<Option<String>> {
        let storage = Self::storage()?;
        storage
            .get_item(TOKEN_KEY)
            .map(|t| t.filter(|t| !t.is_empty()))
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn save(&self, token: &str) -> ApiResult<()> {
        Self::storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> ApiResult<()> {
        Self::storage()?
            .remove_item(TOKEN_KEY)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// URL the browser is sent to for granting access
pub fn authorize_url(config: &AppConfig, return_url: &str) -> String {
    format!(
        "{}?expiration={}&name={}&scope={}&response_type=token&key={}&return_url={}",
        config.authorize_url,
        encode(&config.expiration),
        encode(&config.app_name),
        encode(&config.scope),
        encode(&config.api_key),
        encode(return_url),
    )
}

/// Token from a `#token=...` return fragment
pub fn token_from_fragment(fragment: &str) -> Option<String> {
    fragment
        .trim_start_matches('#')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == "token")
        .map(|(_, value)| percent_decode_str(value).decode_utf8_lossy().into_owned())
        .filter(|token| !token.is_empty())
}

/// Token to start the session with: a fresh one from the fragment wins over
/// the persisted one, and is persisted in turn.
pub fn resolve_token(fragment: Option<&str>, storage: &impl TokenStorage) -> ApiResult<Option<String>> {
    if let Some(token) = fragment.and_then(token_from_fragment) {
        log::info!("[AUTH] token received from authorize redirect");
        storage.save(&token)?;
        return Ok(Some(token));
    }
    storage.load()
}

/// Token at startup, read from the current location and local storage.
/// The fragment is stripped so the token does not stay in the address bar.
pub fn startup_token() -> Option<String> {
    let window = web_sys::window()?;
    let location = window.location();
    let hash = location.hash().ok().filter(|h| !h.is_empty());

    let token = match resolve_token(hash.as_deref(), &LocalStorage) {
        Ok(token) => token,
        Err(e) => {
            log::error!("[AUTH] could not restore token: {}", e);
            None
        }
    };

    if hash.as_deref().and_then(token_from_fragment).is_some() {
        if let (Ok(history), Ok(path)) = (window.history(), location.pathname()) {
            if let Err(e) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&path)) {
                log::warn!("[AUTH] could not strip token from the address bar: {:?}", e);
            }
        }
    }
    token
}

/// Current page without fragment, used as the authorize return URL
pub fn current_return_url() -> String {
    web_sys::window()
        .and_then(|w| {
            let location = w.location();
            Some(format!("{}{}", location.origin().ok()?, location.pathname().ok()?))
        })
        .unwrap_or_default()
}

/// Send the browser to the authorize page
pub fn start_login(config: &AppConfig) {
    let url = authorize_url(config, &current_return_url());
    log::info!("[AUTH] redirecting to authorize page");
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_href(&url) {
            log::error!("[AUTH] redirect failed: {:?}", e);
        }
    }
}

/// Transition of the authenticated flag between two polls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthChange {
    SignedIn,
    SignedOut,
}

pub fn auth_change(previous: bool, current: bool) -> Option<AuthChange> {
    match (previous, current) {
        (false, true) => Some(AuthChange::SignedIn),
        (true, false) => Some(AuthChange::SignedOut),
        _ => None,
    }
}

/// Forget the persisted token
pub fn forget_token(storage: &impl TokenStorage) {
    if let Err(e) = storage.clear() {
        log::warn!("[AUTH] could not clear token: {}", e);
    }
}

/// Forget the persisted token when `err` says the API rejected it.
/// Returns whether the session is over.
pub fn drop_rejected_token(err: &ApiError, storage: &impl TokenStorage) -> bool {
    if !err.is_auth_failure() {
        return false;
    }
    log::warn!("[AUTH] token rejected: {}", err);
    forget_token(storage);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Storage that lives only as long as the value
    #[derive(Debug, Default)]
    struct MemoryStorage {
        token: RefCell<Option<String>>,
    }

    impl TokenStorage for MemoryStorage {
        fn load(&self) -> ApiResult<Option<String>> {
            Ok(self.token.borrow().clone())
        }

        fn save(&self, token: &str) -> ApiResult<()> {
            *self.token.borrow_mut() = Some(token.to_string());
            Ok(())
        }

        fn clear(&self) -> ApiResult<()> {
            *self.token.borrow_mut() = None;
            Ok(())
        }
    }

    #[test]
    fn test_token_from_fragment() {
        assert_eq!(token_from_fragment("#token=abc123"), Some("abc123".into()));
        assert_eq!(token_from_fragment("#state=x&token=a%2Bb"), Some("a+b".into()));
        assert_eq!(token_from_fragment("#error=access_denied"), None);
        assert_eq!(token_from_fragment("#token="), None);
        assert_eq!(token_from_fragment(""), None);
    }

    #[test]
    fn test_authorize_url() {
        let config = AppConfig { api_key: "k1".into(), app_name: "My Boards".into(), ..Default::default() };
        let url = authorize_url(&config, "http://localhost:8080/");
        assert!(url.starts_with("https://trello.com/1/authorize?"));
        assert!(url.contains("name=My%20Boards"));
        assert!(url.contains("scope=read%2Cwrite"));
        assert!(url.contains("response_type=token"));
        assert!(url.contains("key=k1"));
        assert!(url.contains("return_url=http%3A%2F%2Flocalhost%3A8080%2F"));
    }

    #[test]
    fn test_auth_change() {
        assert_eq!(auth_change(true, false), Some(AuthChange::SignedOut));
        assert_eq!(auth_change(false, true), Some(AuthChange::SignedIn));
        assert_eq!(auth_change(true, true), None);
        assert_eq!(auth_change(false, false), None);
    }

    #[test]
    fn test_fragment_token_is_persisted() {
        let storage = MemoryStorage::default();
        storage.save("old").unwrap();
        let token = resolve_token(Some("#token=fresh"), &storage).unwrap();
        assert_eq!(token.as_deref(), Some("fresh"));
        assert_eq!(storage.load().unwrap().as_deref(), Some("fresh"));
    }

    #[test]
    fn test_falls_back_to_stored_token() {
        let storage = MemoryStorage::default();
        assert_eq!(resolve_token(None, &storage).unwrap(), None);
        storage.save("kept").unwrap();
        assert_eq!(resolve_token(Some("#other=1"), &storage).unwrap().as_deref(), Some("kept"));
        forget_token(&storage);
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_rejected_token_is_forgotten() {
        let storage = MemoryStorage::default();
        storage.save("revoked").unwrap();
        assert!(!drop_rejected_token(&ApiError::Network("offline".into()), &storage));
        assert_eq!(storage.load().unwrap().as_deref(), Some("revoked"));

        assert!(drop_rejected_token(&ApiError::Unauthorized, &storage));
        assert_eq!(storage.load().unwrap(), None);
        // Next startup has nothing to restore
        assert_eq!(resolve_token(None, &storage).unwrap(), None);
    }
}
