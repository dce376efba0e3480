//! Entity Cache
//!
//! Keyed maps of everything fetched from the API, plus the denormalized
//! parent -> children id lists used for rendering. All parent/child links go
//! through this type so that a card's `id_list` always names a list holding
//! the card, and a list's `id_board` a board holding the list.

use std::collections::{HashMap, HashSet};

use crate::models::{Board, Card, List, Organization};
use crate::position::{drop_position, Pos};

/// Result of an optimistic move
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    /// Position to send to the API
    pub pos: Pos,
    /// Parent the item left
    pub from: String,
    /// Parent the item landed in
    pub to: String,
}

impl MoveOutcome {
    pub fn changed_parent(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityCache {
    pub organizations: HashMap<String, Organization>,
    /// Organizations in the order the API listed them
    pub org_order: Vec<String>,
    pub boards: HashMap<String, Board>,
    pub lists: HashMap<String, List>,
    pub cards: HashMap<String, Card>,
}

impl EntityCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.organizations.is_empty() && self.boards.is_empty() && self.lists.is_empty() && self.cards.is_empty()
    }

    // ========================
    // Organizations
    // ========================

    pub fn upsert_organization(&mut self, mut org: Organization) {
        let id = org.id.clone();
        match self.organizations.get(&id) {
            Some(existing) => org.board_ids = existing.board_ids.clone(),
            None => {
                org.board_ids = self
                    .boards
                    .values()
                    .filter(|b| b.id_organization.as_deref() == Some(id.as_str()))
                    .map(|b| b.id.clone())
                    .collect();
                org.board_ids.sort_by_key(|bid| self.boards.get(bid).map(|b| b.name.to_lowercase()));
                self.org_order.push(id.clone());
            }
        }
        self.organizations.insert(id, org);
    }

    /// Replace the member's organizations after a full fetch
    pub fn replace_organizations(&mut self, orgs: Vec<Organization>) {
        let keep: HashSet<&str> = orgs.iter().map(|o| o.id.as_str()).collect();
        let stale: Vec<String> = self.org_order.iter().filter(|id| !keep.contains(id.as_str())).cloned().collect();
        for id in stale {
            self.remove_organization(&id);
        }
        let order: Vec<String> = orgs.iter().map(|o| o.id.clone()).collect();
        for org in orgs {
            self.upsert_organization(org);
        }
        self.org_order = order;
    }

    /// Remove an organization and the boards it owns
    pub fn remove_organization(&mut self, id: &str) -> Option<Organization> {
        let org = self.organizations.remove(id)?;
        self.org_order.retain(|o| o != id);
        for board_id in &org.board_ids {
            self.remove_board(board_id);
        }
        Some(org)
    }

    /// Change fields of an organization that don't link it to anything
    pub fn edit_organization<R>(&mut self, id: &str, f: impl FnOnce(&mut Organization) -> R) -> Option<R> {
        self.organizations.get_mut(id).map(f)
    }

    pub fn organizations(&self) -> Vec<Organization> {
        self.org_order.iter().filter_map(|id| self.organizations.get(id).cloned()).collect()
    }

    // ========================
    // Boards
    // ========================

    /// Insert or update a board; closed boards are dropped
    pub fn upsert_board(&mut self, mut board: Board) {
        if board.closed {
            self.remove_board(&board.id);
            return;
        }
        let id = board.id.clone();
        match self.boards.get(&id) {
            Some(existing) => {
                board.list_ids = existing.list_ids.clone();
                if existing.id_organization != board.id_organization {
                    if let Some(old_org) = existing.id_organization.clone() {
                        self.unlink_board(&old_org, &id);
                    }
                }
            }
            // Lists fetched before their board
            None => board.list_ids = self.lists.values().filter(|l| l.id_board == id).map(|l| l.id.clone()).collect(),
        }
        if let Some(org) = board.id_organization.as_ref().and_then(|o| self.organizations.get_mut(o)) {
            if !org.board_ids.contains(&id) {
                org.board_ids.push(id.clone());
            }
        }
        self.boards.insert(id.clone(), board);
        self.sort_lists(&id);
    }

    /// Change fields of a board that don't link it to anything
    pub fn edit_board<R>(&mut self, id: &str, f: impl FnOnce(&mut Board) -> R) -> Option<R> {
        self.boards.get_mut(id).map(f)
    }

    /// Replace an organization's boards after a fetch
    pub fn replace_boards_of(&mut self, org_id: &str, boards: Vec<Board>) {
        let keep: HashSet<&str> = boards.iter().map(|b| b.id.as_str()).collect();
        let stale: Vec<String> = self
            .boards
            .values()
            .filter(|b| b.id_organization.as_deref() == Some(org_id) && !keep.contains(b.id.as_str()))
            .map(|b| b.id.clone())
            .collect();
        for id in stale {
            self.remove_board(&id);
        }
        let order: Vec<String> = boards.iter().filter(|b| !b.closed).map(|b| b.id.clone()).collect();
        for board in boards {
            self.upsert_board(board);
        }
        if let Some(org) = self.organizations.get_mut(org_id) {
            org.board_ids = order.into_iter().filter(|id| self.boards.contains_key(id)).collect();
        }
    }

    /// Replace every board the member can see
    pub fn replace_member_boards(&mut self, boards: Vec<Board>) {
        let keep: HashSet<&str> = boards.iter().map(|b| b.id.as_str()).collect();
        let stale: Vec<String> = self.boards.keys().filter(|id| !keep.contains(id.as_str())).cloned().collect();
        for id in stale {
            self.remove_board(&id);
        }
        for board in boards {
            self.upsert_board(board);
        }
    }

    /// Remove a board, its lists and cards
    pub fn remove_board(&mut self, id: &str) -> Option<Board> {
        let board = self.boards.remove(id)?;
        if let Some(org_id) = &board.id_organization {
            self.unlink_board(org_id, id);
        }
        for list_id in &board.list_ids {
            self.remove_list(list_id);
        }
        let orphans: Vec<String> = self.cards.values().filter(|c| c.id_board == id).map(|c| c.id.clone()).collect();
        for card_id in orphans {
            self.remove_card(&card_id);
        }
        Some(board)
    }

    fn unlink_board(&mut self, org_id: &str, board_id: &str) {
        if let Some(org) = self.organizations.get_mut(org_id) {
            org.board_ids.retain(|b| b != board_id);
        }
    }

    pub fn boards_of(&self, org_id: &str) -> Vec<Board> {
        self.organizations
            .get(org_id)
            .map(|org| org.board_ids.iter().filter_map(|id| self.boards.get(id).cloned()).collect())
            .unwrap_or_default()
    }

    /// Boards with no cached owning organization, by name
    pub fn personal_boards(&self) -> Vec<Board> {
        let mut boards: Vec<Board> = self
            .boards
            .values()
            .filter(|b| {
                b.id_organization
                    .as_ref()
                    .map(|o| !self.organizations.contains_key(o))
                    .unwrap_or(true)
            })
            .cloned()
            .collect();
        boards.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()).then(a.id.cmp(&b.id)));
        boards
    }

    // ========================
    // Lists
    // ========================

    /// Insert or update a list; closed (archived) lists are dropped
    pub fn upsert_list(&mut self, mut list: List) {
        if list.closed {
            self.remove_list(&list.id);
            return;
        }
        let id = list.id.clone();
        match self.lists.get(&id) {
            Some(existing) => {
                list.card_ids = existing.card_ids.clone();
                if existing.id_board != list.id_board {
                    let old_board = existing.id_board.clone();
                    self.unlink_list(&old_board, &id);
                }
            }
            // Cards fetched before their list
            None => list.card_ids = self.cards.values().filter(|c| c.id_list == id).map(|c| c.id.clone()).collect(),
        }
        let board_id = list.id_board.clone();
        for card_id in &list.card_ids {
            if let Some(card) = self.cards.get_mut(card_id) {
                card.id_board = board_id.clone();
            }
        }
        self.lists.insert(id.clone(), list);
        self.sort_cards(&id);
        if let Some(board) = self.boards.get_mut(&board_id) {
            if !board.list_ids.contains(&id) {
                board.list_ids.push(id);
            }
        }
        self.sort_lists(&board_id);
    }

    /// Replace a board's lists after a fetch
    pub fn replace_lists_of(&mut self, board_id: &str, lists: Vec<List>) {
        let keep: HashSet<&str> = lists.iter().map(|l| l.id.as_str()).collect();
        let stale: Vec<String> = self
            .lists
            .values()
            .filter(|l| l.id_board == board_id && !keep.contains(l.id.as_str()))
            .map(|l| l.id.clone())
            .collect();
        for id in stale {
            self.remove_list(&id);
        }
        for list in lists {
            self.upsert_list(list);
        }
    }

    /// Remove a list and its cards
    pub fn remove_list(&mut self, id: &str) -> Option<List> {
        let list = self.lists.remove(id)?;
        self.unlink_list(&list.id_board, id);
        for card_id in &list.card_ids {
            self.cards.remove(card_id);
        }
        Some(list)
    }

    /// Change fields of a list that don't link it to anything
    pub fn edit_list<R>(&mut self, id: &str, f: impl FnOnce(&mut List) -> R) -> Option<R> {
        self.lists.get_mut(id).map(f)
    }

    fn unlink_list(&mut self, board_id: &str, list_id: &str) {
        if let Some(board) = self.boards.get_mut(board_id) {
            board.list_ids.retain(|l| l != list_id);
        }
    }

    fn sort_lists(&mut self, board_id: &str) {
        let lists = &self.lists;
        if let Some(board) = self.boards.get_mut(board_id) {
            board.list_ids.retain(|id| lists.contains_key(id));
            board.list_ids.sort_by(|a, b| lists[a].pos.total_cmp(&lists[b].pos));
        }
    }

    pub fn lists_of(&self, board_id: &str) -> Vec<List> {
        self.boards
            .get(board_id)
            .map(|board| board.list_ids.iter().filter_map(|id| self.lists.get(id).cloned()).collect())
            .unwrap_or_default()
    }

    /// Optimistically move a list to `slot` of `target_board`.
    ///
    /// `slot` counts gaps in the currently rendered order, the moved list
    /// included; anything past the end appends. Returns `None` when nothing
    /// moves.
    pub fn move_list(&mut self, list_id: &str, target_board: &str, slot: usize) -> Option<MoveOutcome> {
        let from = self.lists.get(list_id)?.id_board.clone();
        let slot = slot.min(self.boards.get(target_board)?.list_ids.len());
        let current = self.boards.get(&from).and_then(|b| b.list_ids.iter().position(|id| id == list_id));
        let index = effective_index(&from, target_board, current, slot);
        if from == target_board && current == Some(index) {
            return None;
        }
        let siblings: Vec<String> = self.boards.get(target_board)?.list_ids.iter().filter(|id| *id != list_id).cloned().collect();
        let positions: Vec<f64> = siblings.iter().filter_map(|id| self.lists.get(id).map(|l| l.pos)).collect();
        let index = index.min(siblings.len());
        let pos = drop_position(&positions, index);
        let local = local_pos(pos, &positions, index);

        self.unlink_list(&from, list_id);
        if let Some(list) = self.lists.get_mut(list_id) {
            list.id_board = target_board.to_string();
            list.pos = local;
        }
        if from != target_board {
            let cards: Vec<String> = self.lists.get(list_id).map(|l| l.card_ids.clone()).unwrap_or_default();
            for card_id in cards {
                if let Some(card) = self.cards.get_mut(&card_id) {
                    card.id_board = target_board.to_string();
                }
            }
        }
        if let Some(board) = self.boards.get_mut(target_board) {
            let at = index.min(board.list_ids.len());
            board.list_ids.insert(at, list_id.to_string());
        }
        Some(MoveOutcome { pos, from, to: target_board.to_string() })
    }

    // ========================
    // Cards
    // ========================

    /// Insert or update a card; closed (archived) cards are dropped
    pub fn upsert_card(&mut self, card: Card) {
        if card.closed {
            self.remove_card(&card.id);
            return;
        }
        let id = card.id.clone();
        if let Some(existing) = self.cards.get(&id) {
            if existing.id_list != card.id_list {
                let old_list = existing.id_list.clone();
                self.unlink_card(&old_list, &id);
            }
        }
        let list_id = card.id_list.clone();
        self.cards.insert(id.clone(), card);
        if let Some(list) = self.lists.get_mut(&list_id) {
            if !list.card_ids.contains(&id) {
                list.card_ids.push(id);
            }
        }
        self.sort_cards(&list_id);
    }

    /// Replace one list's cards after a fetch
    pub fn replace_cards_of_list(&mut self, list_id: &str, cards: Vec<Card>) {
        let keep: HashSet<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        let stale: Vec<String> = self
            .cards
            .values()
            .filter(|c| c.id_list == list_id && !keep.contains(c.id.as_str()))
            .map(|c| c.id.clone())
            .collect();
        for id in stale {
            self.remove_card(&id);
        }
        for card in cards {
            self.upsert_card(card);
        }
    }

    /// Replace every card of a board after a fetch
    pub fn replace_cards_of_board(&mut self, board_id: &str, cards: Vec<Card>) {
        let keep: HashSet<&str> = cards.iter().map(|c| c.id.as_str()).collect();
        let stale: Vec<String> = self
            .cards
            .values()
            .filter(|c| c.id_board == board_id && !keep.contains(c.id.as_str()))
            .map(|c| c.id.clone())
            .collect();
        for id in stale {
            self.remove_card(&id);
        }
        for card in cards {
            self.upsert_card(card);
        }
    }

    pub fn remove_card(&mut self, id: &str) -> Option<Card> {
        let card = self.cards.remove(id)?;
        self.unlink_card(&card.id_list, id);
        Some(card)
    }

    /// Change fields of a card that don't link it to anything
    pub fn edit_card<R>(&mut self, id: &str, f: impl FnOnce(&mut Card) -> R) -> Option<R> {
        self.cards.get_mut(id).map(f)
    }

    fn unlink_card(&mut self, list_id: &str, card_id: &str) {
        if let Some(list) = self.lists.get_mut(list_id) {
            list.card_ids.retain(|c| c != card_id);
        }
    }

    fn sort_cards(&mut self, list_id: &str) {
        let cards = &self.cards;
        if let Some(list) = self.lists.get_mut(list_id) {
            list.card_ids.retain(|id| cards.contains_key(id));
            list.card_ids.sort_by(|a, b| cards[a].pos.total_cmp(&cards[b].pos));
        }
    }

    pub fn cards_of(&self, list_id: &str) -> Vec<Card> {
        self.lists
            .get(list_id)
            .map(|list| list.card_ids.iter().filter_map(|id| self.cards.get(id).cloned()).collect())
            .unwrap_or_default()
    }

    /// Optimistically move a card to `slot` of `target_list`.
    ///
    /// `slot` counts gaps in the currently rendered order, the moved card
    /// included; anything past the end appends. Returns `None` when nothing
    /// moves.
    pub fn move_card(&mut self, card_id: &str, target_list: &str, slot: usize) -> Option<MoveOutcome> {
        let from = self.cards.get(card_id)?.id_list.clone();
        let target = self.lists.get(target_list)?;
        let target_board = target.id_board.clone();
        let slot = slot.min(target.card_ids.len());
        let current = self.lists.get(&from).and_then(|l| l.card_ids.iter().position(|id| id == card_id));
        let index = effective_index(&from, target_list, current, slot);
        if from == target_list && current == Some(index) {
            return None;
        }
        let siblings: Vec<String> = self.lists[target_list].card_ids.iter().filter(|id| *id != card_id).cloned().collect();
        let positions: Vec<f64> = siblings.iter().filter_map(|id| self.cards.get(id).map(|c| c.pos)).collect();
        let index = index.min(siblings.len());
        let pos = drop_position(&positions, index);
        let local = local_pos(pos, &positions, index);

        self.unlink_card(&from, card_id);
        if let Some(card) = self.cards.get_mut(card_id) {
            card.id_list = target_list.to_string();
            card.id_board = target_board;
            card.pos = local;
        }
        if let Some(list) = self.lists.get_mut(target_list) {
            let at = index.min(list.card_ids.len());
            list.card_ids.insert(at, card_id.to_string());
        }
        Some(MoveOutcome { pos, from, to: target_list.to_string() })
    }

    /// Verify parent/child links; returns the first broken one
    #[cfg(test)]
    pub fn check_links(&self) -> Result<(), String> {
        for card in self.cards.values() {
            let list = self.lists.get(&card.id_list).ok_or(format!("card {} has no list", card.id))?;
            if !list.card_ids.contains(&card.id) {
                return Err(format!("list {} misses card {}", list.id, card.id));
            }
            if card.id_board != list.id_board {
                return Err(format!("card {} board mismatch", card.id));
            }
        }
        for list in self.lists.values() {
            if let Some(board) = self.boards.get(&list.id_board) {
                if !board.list_ids.contains(&list.id) {
                    return Err(format!("board {} misses list {}", board.id, list.id));
                }
            }
            for pair in list.card_ids.windows(2) {
                if self.cards[&pair[0]].pos > self.cards[&pair[1]].pos {
                    return Err(format!("list {} out of order", list.id));
                }
            }
        }
        for board in self.boards.values() {
            if let Some(org) = board.id_organization.as_ref().and_then(|o| self.organizations.get(o)) {
                if !org.board_ids.contains(&board.id) {
                    return Err(format!("org {} misses board {}", org.id, board.id));
                }
            }
            for pair in board.list_ids.windows(2) {
                if self.lists[&pair[0]].pos > self.lists[&pair[1]].pos {
                    return Err(format!("board {} out of order", board.id));
                }
            }
        }
        Ok(())
    }
}

/// Index among siblings (moved item removed) for a rendered slot
fn effective_index(from: &str, to: &str, current: Option<usize>, slot: usize) -> usize {
    match current {
        Some(i) if from == to && i < slot => slot - 1,
        _ => slot,
    }
}

/// Numeric key to sort by locally until the server answers
fn local_pos(pos: Pos, positions: &[f64], index: usize) -> f64 {
    match pos {
        Pos::Top => pos.resolve(positions),
        Pos::Bottom => pos.resolve(&positions[..index.min(positions.len())]),
        Pos::At(value) => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(id: &str) -> Organization {
        Organization { id: id.into(), name: id.into(), display_name: id.to_uppercase(), ..Default::default() }
    }

    fn board(id: &str, org: Option<&str>) -> Board {
        Board { id: id.into(), name: id.into(), id_organization: org.map(String::from), ..Default::default() }
    }

    fn list(id: &str, board: &str, pos: f64) -> List {
        List { id: id.into(), name: id.into(), id_board: board.into(), pos, ..Default::default() }
    }

    fn card(id: &str, list: &str, board: &str, pos: f64) -> Card {
        Card { id: id.into(), name: id.into(), id_list: list.into(), id_board: board.into(), pos, ..Default::default() }
    }

    fn card_ids(cache: &EntityCache, list: &str) -> Vec<String> {
        cache.cards_of(list).into_iter().map(|c| c.id).collect()
    }

    /// o1 -> b1 -> [l1: c1 c2 c3, l2: c4], b2 personal
    fn seeded() -> EntityCache {
        let mut cache = EntityCache::new();
        cache.replace_organizations(vec![org("o1")]);
        cache.replace_boards_of("o1", vec![board("b1", Some("o1"))]);
        cache.upsert_board(board("b2", None));
        cache.replace_lists_of("b1", vec![list("l2", "b1", 200.0), list("l1", "b1", 100.0)]);
        cache.replace_cards_of_board(
            "b1",
            vec![
                card("c3", "l1", "b1", 300.0),
                card("c1", "l1", "b1", 100.0),
                card("c2", "l1", "b1", 200.0),
                card("c4", "l2", "b1", 100.0),
            ],
        );
        cache
    }

    #[test]
    fn test_children_sorted_by_pos() {
        let cache = seeded();
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c2", "c3"]);
        let lists: Vec<String> = cache.lists_of("b1").into_iter().map(|l| l.id).collect();
        assert_eq!(lists, vec!["l1", "l2"]);
        assert_eq!(cache.boards_of("o1").len(), 1);
        assert_eq!(cache.personal_boards()[0].id, "b2");
        cache.check_links().unwrap();
    }

    #[test]
    fn test_move_card_within_list() {
        let mut cache = seeded();
        // c1 dropped into the gap after c2
        let outcome = cache.move_card("c1", "l1", 2).unwrap();
        assert_eq!(outcome.pos, Pos::At(250.0));
        assert!(!outcome.changed_parent());
        assert_eq!(card_ids(&cache, "l1"), vec!["c2", "c1", "c3"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_move_card_to_same_slot_is_noop() {
        let mut cache = seeded();
        assert!(cache.move_card("c2", "l1", 1).is_none());
        assert!(cache.move_card("c2", "l1", 2).is_none());
        assert!(cache.move_card("missing", "l1", 0).is_none());
        assert!(cache.move_card("c1", "missing", 0).is_none());
    }

    #[test]
    fn test_move_card_across_lists() {
        let mut cache = seeded();
        let outcome = cache.move_card("c3", "l2", 0).unwrap();
        assert_eq!(outcome.pos, Pos::Top);
        assert_eq!(outcome.from, "l1");
        assert_eq!(outcome.to, "l2");
        assert_eq!(card_ids(&cache, "l2"), vec!["c3", "c4"]);
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c2"]);
        assert_eq!(cache.cards["c3"].id_list, "l2");
        cache.check_links().unwrap();
    }

    #[test]
    fn test_move_card_to_bottom() {
        let mut cache = seeded();
        let outcome = cache.move_card("c4", "l1", 3).unwrap();
        assert_eq!(outcome.pos, Pos::Bottom);
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c2", "c3", "c4"]);
        assert!(card_ids(&cache, "l2").is_empty());
        cache.check_links().unwrap();
    }

    #[test]
    fn test_server_position_wins() {
        let mut cache = seeded();
        cache.move_card("c1", "l1", 3).unwrap();
        assert_eq!(card_ids(&cache, "l1"), vec!["c2", "c3", "c1"]);
        // Server settles the card between c2 and c3
        cache.upsert_card(card("c1", "l1", "b1", 250.0));
        assert_eq!(card_ids(&cache, "l1"), vec!["c2", "c1", "c3"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_refetch_discards_optimistic_move() {
        let mut cache = seeded();
        cache.move_card("c1", "l2", 1).unwrap();
        cache.replace_cards_of_list("l1", vec![card("c1", "l1", "b1", 100.0), card("c2", "l1", "b1", 200.0), card("c3", "l1", "b1", 300.0)]);
        cache.replace_cards_of_list("l2", vec![card("c4", "l2", "b1", 100.0)]);
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c2", "c3"]);
        assert_eq!(card_ids(&cache, "l2"), vec!["c4"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_move_list_between_boards() {
        let mut cache = seeded();
        let outcome = cache.move_list("l1", "b2", 0).unwrap();
        assert_eq!(outcome.pos, Pos::Bottom);
        assert!(outcome.changed_parent());
        assert_eq!(cache.boards["b2"].list_ids, vec!["l1"]);
        assert_eq!(cache.boards["b1"].list_ids, vec!["l2"]);
        assert_eq!(cache.cards["c1"].id_board, "b2");
        cache.check_links().unwrap();
    }

    #[test]
    fn test_move_list_within_board() {
        let mut cache = seeded();
        let outcome = cache.move_list("l2", "b1", 0).unwrap();
        assert_eq!(outcome.pos, Pos::Top);
        assert_eq!(cache.boards["b1"].list_ids, vec!["l2", "l1"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_archived_entities_are_dropped() {
        let mut cache = seeded();
        let mut archived = cache.cards["c2"].clone();
        archived.closed = true;
        cache.upsert_card(archived);
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c3"]);

        let mut closed = cache.lists["l1"].clone();
        closed.closed = true;
        cache.upsert_list(closed);
        assert!(!cache.cards.contains_key("c1"));
        assert_eq!(cache.boards["b1"].list_ids, vec!["l2"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_remove_board_cascades() {
        let mut cache = seeded();
        cache.remove_board("b1");
        assert!(cache.lists.is_empty());
        assert!(cache.cards.is_empty());
        assert!(cache.organizations["o1"].board_ids.is_empty());
    }

    #[test]
    fn test_board_changes_organization() {
        let mut cache = seeded();
        cache.upsert_organization(org("o2"));
        cache.upsert_board(board("b1", Some("o2")));
        assert!(cache.boards_of("o1").is_empty());
        assert_eq!(cache.boards_of("o2")[0].id, "b1");
        // lists survive the update
        assert_eq!(cache.boards["b1"].list_ids.len(), 2);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_replace_organizations_drops_stale() {
        let mut cache = seeded();
        cache.replace_organizations(vec![org("o3")]);
        assert_eq!(cache.org_order, vec!["o3"]);
        assert!(!cache.boards.contains_key("b1"));
        assert!(cache.boards.contains_key("b2"));
    }

    #[test]
    fn test_container_drop_appends() {
        let mut cache = seeded();
        assert!(cache.move_card("c3", "l1", usize::MAX).is_none());
        assert!(cache.move_list("l2", "b1", usize::MAX).is_none());

        let outcome = cache.move_card("c1", "l1", usize::MAX).unwrap();
        assert_eq!(outcome.pos, Pos::Bottom);
        assert_eq!(card_ids(&cache, "l1"), vec!["c2", "c3", "c1"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_failed_rename_restores_name() {
        let mut cache = seeded();
        let old = cache.edit_card("c2", |c| std::mem::replace(&mut c.name, "renamed".into())).unwrap();
        assert_eq!(cache.cards["c2"].name, "renamed");
        cache.edit_card("c2", |c| c.name = old);
        assert_eq!(cache.cards["c2"].name, "c2");
        assert!(cache.edit_card("missing", |c| c.name.clear()).is_none());

        let old = cache.edit_board("b1", |b| std::mem::replace(&mut b.desc, "draft".into())).unwrap();
        cache.edit_board("b1", |b| b.desc = old);
        assert_eq!(cache.boards["b1"].desc, "");
    }

    #[test]
    fn test_failed_rename_keeps_concurrent_move() {
        let mut cache = seeded();
        let old = cache.edit_card("c1", |c| std::mem::replace(&mut c.name, "renamed".into())).unwrap();
        // Card dragged while the rename is in flight; the move is confirmed
        cache.move_card("c1", "l2", 1).unwrap();
        cache.upsert_card(card("c1", "l2", "b1", 200.0));
        // Rename fails afterwards
        cache.edit_card("c1", |c| c.name = old);

        assert_eq!(cache.cards["c1"].name, "c1");
        assert_eq!(cache.cards["c1"].id_list, "l2");
        assert_eq!(card_ids(&cache, "l2"), vec!["c4", "c1"]);
        assert_eq!(card_ids(&cache, "l1"), vec!["c2", "c3"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_failed_archive_restored_by_refetch() {
        let mut cache = seeded();
        cache.remove_card("c2").unwrap();
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c3"]);
        cache.replace_cards_of_list(
            "l1",
            vec![card("c1", "l1", "b1", 100.0), card("c2", "l1", "b1", 200.0), card("c3", "l1", "b1", 300.0)],
        );
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c2", "c3"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_children_fetched_before_parent() {
        let mut cache = EntityCache::new();
        cache.replace_cards_of_board("b1", vec![card("c2", "l1", "b1", 200.0), card("c1", "l1", "b1", 100.0)]);
        cache.upsert_list(list("l1", "b1", 100.0));
        assert_eq!(card_ids(&cache, "l1"), vec!["c1", "c2"]);

        cache.upsert_board(board("b1", None));
        assert_eq!(cache.boards["b1"].list_ids, vec!["l1"]);
        cache.check_links().unwrap();
    }

    #[test]
    fn test_clear() {
        let mut cache = seeded();
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.org_order.is_empty());
    }
}
