//! Board Endpoints

use serde::Serialize;

use crate::error::ApiResult;
use crate::models::{Board, Card, List};

use super::{ApiClient, NO_PARAMS};

/// Arguments for creating a board
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBoard<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_organization: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<&'a str>,
    pub default_lists: bool,
}

/// Partial board update; unset fields are left alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct BoardUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(rename = "prefs/background", skip_serializing_if = "Option::is_none")]
    pub background: Option<&'a str>,
}

impl ApiClient {
    pub async fn get_board(&self, id: &str) -> ApiResult<Board> {
        self.get(&format!("boards/{}", id), NO_PARAMS).await
    }

    pub async fn create_board(&self, args: &NewBoard<'_>) -> ApiResult<Board> {
        self.post("boards", args).await
    }

    pub async fn update_board(&self, id: &str, update: &BoardUpdate<'_>) -> ApiResult<Board> {
        self.put(&format!("boards/{}", id), update).await
    }

    pub async fn delete_board(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("boards/{}", id)).await
    }

    pub async fn list_board_lists(&self, id: &str) -> ApiResult<Vec<List>> {
        self.get(&format!("boards/{}/lists", id), &[("filter", "open")]).await
    }

    pub async fn list_board_cards(&self, id: &str) -> ApiResult<Vec<Card>> {
        self.get(&format!("boards/{}/cards", id), &[("filter", "open")]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_args() {
        let args = NewBoard { name: "Roadmap", id_organization: Some("o1"), desc: None, default_lists: false };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["idOrganization"], "o1");
        assert_eq!(value["defaultLists"], false);
        assert!(value.get("desc").is_none());
    }

    #[test]
    fn test_update_only_sends_set_fields() {
        let update = BoardUpdate { background: Some("green"), ..Default::default() };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "prefs/background": "green" }));
    }
}
