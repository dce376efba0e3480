//! App Configuration
//!
//! Values baked in at build time through environment variables, with
//! defaults for everything but the API key.

pub const DEFAULT_API_BASE: &str = "https://api.trello.com/1";
pub const DEFAULT_AUTHORIZE_URL: &str = "https://trello.com/1/authorize";
pub const DEFAULT_APP_NAME: &str = "Taskboard";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub authorize_url: String,
    pub api_key: String,
    pub app_name: String,
    pub scope: String,
    pub expiration: String,
    /// Delay after the last keystroke before a search fires
    pub search_debounce_ms: u32,
    /// Minimum interval between two fetches of the same board's children
    pub refetch_guard_ms: f64,
    /// Interval of the auth flag polling loop
    pub auth_poll_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            authorize_url: DEFAULT_AUTHORIZE_URL.to_string(),
            api_key: String::new(),
            app_name: DEFAULT_APP_NAME.to_string(),
            scope: "read,write".to_string(),
            expiration: "never".to_string(),
            search_debounce_ms: 300,
            refetch_guard_ms: 2000.0,
            auth_poll_ms: 1000,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TASKBOARD_API_BASE"),
            option_env!("TASKBOARD_AUTHORIZE_URL"),
            option_env!("TASKBOARD_API_KEY"),
            option_env!("TASKBOARD_APP_NAME"),
        )
    }

    fn from_values(
        api_base: Option<&str>,
        authorize_url: Option<&str>,
        api_key: Option<&str>,
        app_name: Option<&str>,
    ) -> Self {
        let pick = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };
        let defaults = Self::default();
        Self {
            api_base_url: pick(api_base, defaults.api_base_url.clone())
                .trim_end_matches('/')
                .to_string(),
            authorize_url: pick(authorize_url, defaults.authorize_url.clone()),
            api_key: pick(api_key, defaults.api_key.clone()),
            app_name: pick(app_name, defaults.app_name.clone()),
            ..defaults
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_values(None, None, None, Some("   "));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
        assert_eq!(config.app_name, DEFAULT_APP_NAME);
        assert!(!config.has_api_key());
        assert_eq!(config.search_debounce_ms, 300);
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = AppConfig::from_values(Some("http://localhost:8080/1/"), None, Some("k123"), None);
        assert_eq!(config.api_base_url, "http://localhost:8080/1");
        assert_eq!(config.api_key, "k123");
        assert!(config.has_api_key());
    }
}
