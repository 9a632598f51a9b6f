//! An ordered hand of unique cards.

use std::collections::BTreeMap;
use std::ops::Index;

use crate::card::{Card, CardId};
use crate::error::{Error, Result};
use crate::ordering::SortOrder;
use crate::MAX_HAND_SIZE;

/// Cards in display order. Identities are unique and the hand never holds
/// more than `MAX_HAND_SIZE` cards, so every position fits in a `HandMask`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Result<Self> {
        let mut hand = Self::new();
        for card in cards {
            hand.push(card)?;
        }
        Ok(hand)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.cards.iter()
    }
    pub fn contains(&self, id: CardId) -> bool {
        self.position(id).is_some()
    }
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    /// Appends a drawn card.
    pub fn push(&mut self, card: Card) -> Result<()> {
        self.insert(self.cards.len(), card)
    }

    pub fn insert(&mut self, index: usize, card: Card) -> Result<()> {
        if self.contains(card.id()) {
            return Err(Error::DuplicateCard(card.id()));
        }
        if self.cards.len() >= MAX_HAND_SIZE {
            return Err(Error::HandFull {
                limit: MAX_HAND_SIZE,
            });
        }
        if index > self.cards.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.cards.len(),
            });
        }
        log::debug!("card added: {} at {}", card, index);
        self.cards.insert(index, card);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Option<Card> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }

    /// Takes the card at `from` out and reinserts it so it ends up at `to`.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.cards.len();
        for index in [from, to] {
            if index >= len {
                return Err(Error::IndexOutOfBounds { index, len });
            }
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        log::debug!("card moved: {} -> {}", from, to);
        Ok(())
    }

    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.cards.len();
        for index in [a, b] {
            if index >= len {
                return Err(Error::IndexOutOfBounds { index, len });
            }
        }
        self.cards.swap(a, b);
        log::debug!("cards swapped: {} <-> {}", a, b);
        Ok(())
    }

    pub fn sort_by(&mut self, order: SortOrder) {
        self.cards.sort_by(|a, b| order.compare(a, b));
        log::debug!("hand sorted {:?}", order);
    }
    pub fn sort_by_rank(&mut self) {
        self.sort_by(SortOrder::RankThenSuit);
    }
    pub fn sort_by_suit(&mut self) {
        self.sort_by(SortOrder::SuitThenRank);
    }

    pub fn reset_groups(&mut self) {
        self.cards.iter_mut().for_each(|c| c.set_group(0));
    }
    pub fn set_group(&mut self, index: usize, group: u8) -> Result<()> {
        let len = self.cards.len();
        let card = self
            .cards
            .get_mut(index)
            .ok_or(Error::IndexOutOfBounds { index, len })?;
        card.set_group(group);
        Ok(())
    }

    pub(crate) fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// Grouped cards by group id, each in hand order. Group 0 is omitted.
    pub fn groups(&self) -> BTreeMap<u8, Vec<Card>> {
        let mut groups = BTreeMap::<u8, Vec<Card>>::new();
        for card in self.cards.iter().filter(|c| c.is_grouped()) {
            groups.entry(card.group()).or_default().push(*card);
        }
        groups
    }

    /// Points left in ungrouped cards.
    pub fn deadwood(&self) -> u32 {
        self.cards
            .iter()
            .filter(|c| !c.is_grouped())
            .map(Card::point_value)
            .sum()
    }

    pub fn total_points(&self) -> u32 {
        self.cards.iter().map(Card::point_value).sum()
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self> {
        Self::from_cards(cards)
    }
}

impl Index<usize> for Hand {
    type Output = Card;
    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards: Vec<String> = self
            .cards
            .iter()
            .map(|c| match c.group() {
                0 => c.to_string(),
                g => format!("{}/{}", c, g),
            })
            .collect();
        write!(f, "[{}]", cards.join(" "))
    }
}
