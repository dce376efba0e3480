//! Card Endpoints

use serde::Serialize;

use crate::error::ApiResult;
use crate::models::Card;
use crate::position::Pos;

use super::ApiClient;

/// Arguments for creating a card
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard<'a> {
    pub id_list: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<&'a str>,
    pub pos: Pos,
}

/// Partial card update; unset fields are left alone
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pos: Option<Pos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_list: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
}

impl ApiClient {
    pub async fn create_card(&self, args: &NewCard<'_>) -> ApiResult<Card> {
        self.post("cards", args).await
    }

    pub async fn update_card(&self, id: &str, update: &CardUpdate<'_>) -> ApiResult<Card> {
        self.put(&format!("cards/{}", id), update).await
    }

    pub async fn delete_card(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("cards/{}", id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_archive_update() {
        let update = CardUpdate { closed: Some(true), ..Default::default() };
        assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "closed": true }));
    }

    #[test]
    fn test_new_card_at_top() {
        let args = NewCard { id_list: "l1", name: "Ship it", desc: None, pos: Pos::Top };
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value["idList"], "l1");
        assert_eq!(value["pos"], "top");
    }
}
