use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier for a page in the deck.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(String);

impl PageId {
    /// Rehydrate a page identifier from a stored string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PageId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Errors raised by deck construction and reordering.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    /// An index fell outside the deck bounds. Callers resolve indices from
    /// the same deck snapshot they reorder, so this marks a caller bug.
    #[error("Index {index} is out of range for a deck of {len} pages")]
    InvalidIndex { index: usize, len: usize },
    /// The same identifier appeared twice while seeding a deck.
    #[error("Duplicate page id {0:?} in deck")]
    DuplicatePage(PageId),
}

/// Canonical ordered sequence of page identifiers.
///
/// The deck is seeded once and never grows or shrinks; the only mutation is
/// [`Deck::move_page`], applied exactly once when a drag session commits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    order: Vec<PageId>,
}

impl Deck {
    /// Build a deck from identifiers, rejecting duplicates.
    pub fn new(ids: impl IntoIterator<Item = PageId>) -> Result<Self, ReorderError> {
        let order: Vec<PageId> = ids.into_iter().collect();
        for (index, id) in order.iter().enumerate() {
            if order[..index].contains(id) {
                return Err(ReorderError::DuplicatePage(id.clone()));
            }
        }
        Ok(Self { order })
    }

    /// Seed a deck of `count` pages labeled "1".."count".
    pub fn numbered(count: usize) -> Self {
        Self {
            order: (1..=count)
                .map(|number| PageId::from_string(number.to_string()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Pages in canonical order.
    pub fn ids(&self) -> &[PageId] {
        &self.order
    }

    /// Position of a page in the canonical order.
    pub fn index_of(&self, id: &PageId) -> Option<usize> {
        self.order.iter().position(|candidate| candidate == id)
    }

    pub fn get(&self, index: usize) -> Option<&PageId> {
        self.order.get(index)
    }

    /// Compute the order with the page at `from` relocated to occupy `to`,
    /// preserving the relative order of every other page. `from == to`
    /// returns the current order unchanged.
    pub fn moved(&self, from: usize, to: usize) -> Result<Vec<PageId>, ReorderError> {
        let len = self.order.len();
        for index in [from, to] {
            if index >= len {
                return Err(ReorderError::InvalidIndex { index, len });
            }
        }
        let mut next = self.order.clone();
        if from != to {
            let page = next.remove(from);
            next.insert(to, page);
        }
        Ok(next)
    }

    /// Commit a move, replacing the canonical order atomically.
    pub fn move_page(&mut self, from: usize, to: usize) -> Result<(), ReorderError> {
        self.order = self.moved(from, to)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(ids: &[&str]) -> Deck {
        Deck::new(ids.iter().map(|id| PageId::from(*id))).unwrap()
    }

    fn order(deck: &Deck) -> Vec<&str> {
        deck.ids().iter().map(PageId::as_str).collect()
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Deck::new(["a", "b", "a"].map(PageId::from));
        assert_eq!(result, Err(ReorderError::DuplicatePage(PageId::from("a"))));
    }

    #[test]
    fn numbered_deck_labels_from_one() {
        let deck = Deck::numbered(3);
        assert_eq!(order(&deck), ["1", "2", "3"]);
    }

    #[test]
    fn move_to_same_index_is_identity() {
        let mut deck = deck(&["a", "b", "c"]);
        let before = deck.clone();
        for index in 0..deck.len() {
            deck.move_page(index, index).unwrap();
            assert_eq!(deck, before);
        }
    }

    #[test]
    fn move_forward_shifts_intermediate_pages_left() {
        let mut deck = deck(&["a", "b", "c", "d"]);
        deck.move_page(0, 2).unwrap();
        assert_eq!(order(&deck), ["b", "c", "a", "d"]);
    }

    #[test]
    fn move_backward_shifts_intermediate_pages_right() {
        let mut deck = deck(&["a", "b", "c", "d"]);
        deck.move_page(3, 1).unwrap();
        assert_eq!(order(&deck), ["a", "d", "b", "c"]);
    }

    #[test]
    fn move_preserves_the_page_multiset() {
        let original = deck(&["a", "b", "c", "d", "e"]);
        for from in 0..original.len() {
            for to in 0..original.len() {
                let moved = original.moved(from, to).unwrap();
                assert_eq!(moved.len(), original.len());
                let mut sorted: Vec<_> = moved.iter().map(PageId::as_str).collect();
                sorted.sort_unstable();
                assert_eq!(sorted, ["a", "b", "c", "d", "e"]);
            }
        }
    }

    #[test]
    fn out_of_range_indices_are_invalid() {
        let mut deck = deck(&["a", "b"]);
        assert_eq!(
            deck.move_page(2, 0),
            Err(ReorderError::InvalidIndex { index: 2, len: 2 })
        );
        assert_eq!(
            deck.move_page(0, 5),
            Err(ReorderError::InvalidIndex { index: 5, len: 2 })
        );
        assert_eq!(order(&deck), ["a", "b"]);
    }

    #[test]
    fn moved_does_not_touch_the_canonical_order() {
        let deck = deck(&["a", "b", "c"]);
        let preview = deck.moved(0, 2).unwrap();
        assert_eq!(preview.iter().map(PageId::as_str).collect::<Vec<_>>(), ["b", "c", "a"]);
        assert_eq!(order(&deck), ["a", "b", "c"]);
    }
}
