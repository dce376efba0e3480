//! Search Endpoint

use crate::error::ApiResult;
use crate::models::SearchResults;

use super::ApiClient;

/// Boards and cards returned per search
const SEARCH_LIMIT: &str = "20";

impl ApiClient {
    /// Partial-word search over open boards and cards
    pub async fn search(&self, query: &str) -> ApiResult<SearchResults> {
        let params = [
            ("query", query),
            ("modelTypes", "boards,cards"),
            ("partial", "true"),
            ("boards_limit", SEARCH_LIMIT),
            ("cards_limit", SEARCH_LIMIT),
        ];
        self.get("search", &params).await
    }
}
