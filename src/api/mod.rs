//! Task-Board API Client
//!
//! Thin wrappers over the remote REST API, organized by domain. Every request
//! is authenticated with `key` and `token` query parameters.

mod member;
mod organization;
mod board;
mod list;
mod card;
mod search;

use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;

use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};

pub use board::{BoardUpdate, NewBoard};
pub use card::{CardUpdate, NewCard};
pub use list::ListUpdate;

/// Empty query for requests without parameters
const NO_PARAMS: &[(&str, &str)] = &[];

/// API client carrying the app key and the member token
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    key: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: &AppConfig, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            key: config.api_key.clone(),
            token,
        }
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn request<Q>(&self, method: Method, path: &str, query: &Q) -> ApiResult<String>
    where
        Q: Serialize + ?Sized,
    {
        let token = self.token.as_deref().ok_or(ApiError::NotAuthenticated)?;
        log::debug!("[API] {} {}", method, path);

        let response = self
            .http
            .request(method.clone(), self.url(path))
            .query(&[("key", self.key.as_str()), ("token", token)])
            .query(query)
            .send()
            .await
            .map_err(|e| {
                log::error!("[API] {} {} network failure: {}", method, path, e);
                ApiError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let err = ApiError::from_status(status.as_u16(), body);
            log::warn!("[API] {} {} failed: {}", method, path, err);
            return Err(err);
        }
        Ok(body)
    }

    async fn send<Q, T>(&self, method: Method, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = self.request(method, path, query).await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("[API] {} decode failed: {}", path, e);
            ApiError::from(e)
        })
    }

    async fn get<Q, T>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::GET, path, query).await
    }

    async fn post<Q, T>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::POST, path, query).await
    }

    async fn put<Q, T>(&self, path: &str, query: &Q) -> ApiResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::PUT, path, query).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        let body = self.request(Method::DELETE, path, NO_PARAMS).await?;
        if !body.trim().is_empty() {
            let _: IgnoredAny = serde_json::from_str(&body)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_path() {
        let config = AppConfig { api_base_url: "https://api.example.com/1/".into(), ..Default::default() };
        let client = ApiClient::new(&config, None);
        assert_eq!(client.url("/boards/b1/lists"), "https://api.example.com/1/boards/b1/lists");
        assert_eq!(client.url("members/me"), "https://api.example.com/1/members/me");
    }
}
