//! Card metadata and the 52-card draw pile.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::card::{Card, CardId};
use crate::error::Result;
use crate::hand::Hand;

pub const NUM_RANKS: usize = 13;
pub const NUM_SUITS: usize = 4;
pub const DECK_SIZE: usize = NUM_RANKS * NUM_SUITS;

const RANK_POINTS: [u32; NUM_RANKS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 10, 10, 10];

/// Point value of a rank. Callers pass a rank already checked to be in
/// 1..=13.
pub(crate) fn points_for_rank(rank: u8) -> u32 {
    RANK_POINTS[rank as usize - 1]
}

/// Identity of the standard card with this rank and suit. Callers pass an
/// in-range rank and suit.
pub(crate) fn standard_id(rank: u8, suit: u8) -> CardId {
    CardId(suit as u32 * NUM_RANKS as u32 + (rank as u32 - 1))
}

/// Draw pile. Cards come off the end of the vector.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled, suit-major deck. The first draw is the king of suit 3.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in 0..NUM_SUITS as u8 {
            for rank in 1..=NUM_RANKS as u8 {
                cards.push(Card::unchecked(standard_id(rank, suit), rank, suit));
            }
        }
        Self { cards }
    }

    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::new();
        deck.cards.shuffle(rng);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if card.is_none() {
            log::warn!("deck exhausted");
        }
        card
    }

    /// Moves up to `n` cards into `hand`, returning how many were dealt.
    pub fn deal(&mut self, hand: &mut Hand, n: usize) -> Result<usize> {
        let mut dealt = 0;
        while dealt < n {
            let Some(card) = self.draw() else {
                break;
            };
            hand.push(card)?;
            dealt += 1;
        }
        log::debug!("dealt {} cards, {} left in deck", dealt, self.len());
        Ok(dealt)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_is_complete() {
        let deck = Deck::new();
        assert_eq!(deck.len(), DECK_SIZE);
        let pairs: HashSet<(u8, u8)> = deck.cards.iter().map(|c| (c.rank(), c.suit())).collect();
        assert_eq!(pairs.len(), DECK_SIZE);
        let ids: HashSet<CardId> = deck.cards.iter().map(|c| c.id()).collect();
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn shuffle_keeps_cards() {
        let ref mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::shuffled(rng);
        let mut ids: Vec<u32> = deck.cards.iter().map(|c| c.id().0).collect();
        ids.sort();
        assert_eq!(ids, (0..DECK_SIZE as u32).collect::<Vec<_>>());
    }

    #[test]
    fn deal_stops_when_exhausted() {
        let mut deck = Deck::new();
        let mut hand = Hand::new();
        assert_eq!(deck.deal(&mut hand, 10).unwrap(), 10);
        assert_eq!(deck.len(), DECK_SIZE - 10);
        let mut rest = Hand::new();
        assert_eq!(deck.deal(&mut rest, 60).unwrap(), DECK_SIZE - 10);
        assert!(deck.is_empty());
        assert!(deck.draw().is_none());
    }

    #[test]
    fn rank_points() {
        assert_eq!(points_for_rank(1), 1);
        assert_eq!(points_for_rank(9), 9);
        assert_eq!(points_for_rank(13), 10);
    }
}
