//! The two canonical total orders over cards.
//!
//! Both fall back to card identity so that duplicate rank/suit pairs still
//! sort deterministically.

use std::cmp::Ordering;

use crate::card::Card;

pub fn by_suit_then_rank(a: &Card, b: &Card) -> Ordering {
    (a.suit(), a.rank(), a.id()).cmp(&(b.suit(), b.rank(), b.id()))
}

pub fn by_rank_then_suit(a: &Card, b: &Card) -> Ordering {
    (a.rank(), a.suit(), a.id()).cmp(&(b.rank(), b.suit(), b.id()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// groups runs together
    SuitThenRank,
    /// groups sets together
    RankThenSuit,
}

impl SortOrder {
    pub fn compare(&self, a: &Card, b: &Card) -> Ordering {
        match self {
            SortOrder::SuitThenRank => by_suit_then_rank(a, b),
            SortOrder::RankThenSuit => by_rank_then_suit(a, b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardId;

    #[test]
    fn orders_disagree_on_mixed_cards() {
        let a = Card::new(CardId(0), 9, 0).unwrap();
        let b = Card::new(CardId(1), 2, 1).unwrap();
        assert_eq!(by_suit_then_rank(&a, &b), Ordering::Less);
        assert_eq!(by_rank_then_suit(&a, &b), Ordering::Greater);
        assert_eq!(SortOrder::RankThenSuit.compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn identity_breaks_ties() {
        let a = Card::new(CardId(4), 5, 2).unwrap();
        let b = Card::new(CardId(7), 5, 2).unwrap();
        assert_eq!(by_suit_then_rank(&a, &b), Ordering::Less);
        assert_eq!(by_rank_then_suit(&b, &a), Ordering::Greater);
    }
}
