//! Frontend Models
//!
//! Data structures matching the remote task-board API. Fields marked
//! `#[serde(skip)]` are client-side bookkeeping maintained by the cache.

use serde::{Deserialize, Serialize};

/// The authenticated member
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub initials: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub url: String,
    /// Owned boards, in display order
    #[serde(skip)]
    pub board_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPrefs {
    #[serde(default)]
    pub background_color: Option<String>,
    #[serde(default)]
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub id_organization: Option<String>,
    #[serde(default)]
    pub prefs: BoardPrefs,
    /// Lists on this board, ordered by pos
    #[serde(skip)]
    pub list_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
    pub id: String,
    pub name: String,
    pub id_board: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub pos: f64,
    /// Cards in this list, ordered by pos
    #[serde(skip)]
    pub card_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub pos: f64,
    pub id_list: String,
    pub id_board: String,
    #[serde(default)]
    pub url: String,
}

impl Organization {
    /// Label shown in the sidebar
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() { &self.name } else { &self.display_name }
    }
}

impl Board {
    /// Inline CSS for the board tile background
    pub fn background_style(&self) -> String {
        match (&self.prefs.background_image, &self.prefs.background_color) {
            (Some(img), _) => format!("background-image: url('{}'); background-size: cover;", img),
            (None, Some(color)) => format!("background-color: {};", color),
            (None, None) => String::new(),
        }
    }
}

/// Response of the search endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty() && self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_from_api_json() {
        let json = r#"{
            "id": "c1", "name": "Write docs", "desc": "", "closed": false,
            "pos": 16384.5, "idList": "l1", "idBoard": "b1",
            "url": "https://example.com/c/c1", "idMembers": []
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id_list, "l1");
        assert_eq!(card.id_board, "b1");
        assert_eq!(card.pos, 16384.5);
    }

    #[test]
    fn test_board_optional_fields() {
        let json = r##"{"id": "b1", "name": "Roadmap", "idOrganization": null,
            "prefs": {"backgroundColor": "#0079BF", "backgroundImage": null}}"##;
        let board: Board = serde_json::from_str(json).unwrap();
        assert!(board.id_organization.is_none());
        assert!(!board.closed);
        assert!(board.list_ids.is_empty());
        assert_eq!(board.background_style(), "background-color: #0079BF;");
    }

    #[test]
    fn test_bookkeeping_not_serialized() {
        let list = List {
            id: "l1".into(),
            name: "Todo".into(),
            id_board: "b1".into(),
            card_ids: vec!["c1".into()],
            ..Default::default()
        };
        let value = serde_json::to_value(&list).unwrap();
        assert!(value.get("cardIds").is_none());
        assert_eq!(value["idBoard"], "b1");
    }

    #[test]
    fn test_org_label_falls_back_to_name() {
        let org = Organization { id: "o1".into(), name: "acme".into(), ..Default::default() };
        assert_eq!(org.label(), "acme");
    }
}
