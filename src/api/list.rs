//! List Endpoints

use serde::Serialize;

use crate::error::ApiResult;
use crate::models::{Card, List};
use crate::position::Pos;

use super::ApiClient;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewListArgs<'a> {
    name: &'a str,
    id_board: &'a str,
    pos: Pos,
}

/// Partial list update; unset fields are left alone
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_board: Option<&'a str>,
}

impl ApiClient {
    pub async fn create_list(&self, board_id: &str, name: &str, pos: Pos) -> ApiResult<List> {
        self.post("lists", &NewListArgs { name, id_board: board_id, pos }).await
    }

    pub async fn update_list(&self, id: &str, update: &ListUpdate<'_>) -> ApiResult<List> {
        self.put(&format!("lists/{}", id), update).await
    }

    pub async fn list_list_cards(&self, id: &str) -> ApiResult<Vec<Card>> {
        self.get(&format!("lists/{}/cards", id), &[("filter", "open")]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_update() {
        let update = ListUpdate { pos: Some(Pos::At(150.0)), id_board: Some("b2"), ..Default::default() };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, serde_json::json!({ "pos": 150.0, "idBoard": "b2" }));
    }

    #[test]
    fn test_new_list_args() {
        let args = NewListArgs { name: "Doing", id_board: "b1", pos: Pos::Bottom };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["pos"], "bottom");
        assert_eq!(value["idBoard"], "b1");
    }
}
