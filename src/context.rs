//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Member token, `None` when signed out
    token: RwSignal<Option<String>>,
    /// Organization shown in the board grid (None = personal boards)
    pub selected_org: RwSignal<Option<String>>,
    /// Board shown in the board view
    pub open_board: RwSignal<Option<String>>,
    /// Card shown in the detail panel
    pub open_card: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new(config: AppConfig, token: Option<String>) -> Self {
        Self {
            config: StoredValue::new(config),
            token: RwSignal::new(token),
            selected_org: RwSignal::new(None),
            open_board: RwSignal::new(None),
            open_card: RwSignal::new(None),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Client for the current token
    pub fn client(&self) -> ApiClient {
        self.config.with_value(|config| ApiClient::new(config, self.token.get_untracked()))
    }

    pub fn set_token(&self, token: Option<String>) {
        self.token.set(token);
    }

    pub fn select_org(&self, org_id: Option<String>) {
        self.open_card.set(None);
        self.open_board.set(None);
        self.selected_org.set(org_id);
    }

    pub fn show_board(&self, board_id: String) {
        self.open_card.set(None);
        self.open_board.set(Some(board_id));
    }

    pub fn show_card(&self, board_id: String, card_id: String) {
        if self.open_board.get_untracked().as_deref() != Some(board_id.as_str()) {
            self.open_board.set(Some(board_id));
        }
        self.open_card.set(Some(card_id));
    }

    /// Drop every selection
    pub fn reset(&self) {
        self.open_card.set(None);
        self.open_board.set(None);
        self.selected_org.set(None);
    }
}
