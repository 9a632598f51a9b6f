//! Card identity and classification.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::deck::{points_for_rank, standard_id, NUM_RANKS, NUM_SUITS};
use crate::error::{Error, Result};

/// Opaque identity token. Two cards are the same card iff their ids match,
/// regardless of rank or suit.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CardId(pub u32);

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A playing card. Rank runs 1 (ace) to 13 (king), suit 0 to 3.
/// `group` is 0 while the card is not part of a meld.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    id: CardId,
    rank: u8,
    suit: u8,
    group: u8,
}

impl Card {
    pub fn new(id: CardId, rank: u8, suit: u8) -> Result<Self> {
        if !(1..=NUM_RANKS as u8).contains(&rank) {
            return Err(Error::InvalidRank(rank));
        }
        if suit >= NUM_SUITS as u8 {
            return Err(Error::InvalidSuit(suit));
        }
        Ok(Self::unchecked(id, rank, suit))
    }

    /// The card a standard deck holds for this rank and suit, with the same
    /// identity `Deck` gives it.
    pub fn standard(rank: u8, suit: u8) -> Result<Self> {
        let mut card = Self::new(CardId(0), rank, suit)?;
        card.id = standard_id(rank, suit);
        Ok(card)
    }

    /// Caller guarantees rank and suit are in range.
    pub(crate) fn unchecked(id: CardId, rank: u8, suit: u8) -> Self {
        Self {
            id,
            rank,
            suit,
            group: 0,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }
    pub fn rank(&self) -> u8 {
        self.rank
    }
    pub fn suit(&self) -> u8 {
        self.suit
    }
    pub fn group(&self) -> u8 {
        self.group
    }
    pub fn set_group(&mut self, group: u8) {
        self.group = group;
    }
    pub fn is_grouped(&self) -> bool {
        self.group != 0
    }

    /// Face cards count 10, everything else its rank.
    pub fn point_value(&self) -> u32 {
        points_for_rank(self.rank)
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let rank = match self.rank {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        let suit = match self.suit {
            0 => "c",
            1 => "d",
            2 => "h",
            _ => "s",
        };
        write!(f, "{}{}", rank, suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, rank: u8, suit: u8) -> Card {
        Card::new(CardId(id), rank, suit).unwrap()
    }

    #[test]
    fn point_values() {
        assert_eq!(card(0, 1, 0).point_value(), 1);
        assert_eq!(card(1, 7, 0).point_value(), 7);
        assert_eq!(card(2, 10, 0).point_value(), 10);
        assert_eq!(card(3, 11, 0).point_value(), 10);
        assert_eq!(card(4, 12, 0).point_value(), 10);
        assert_eq!(card(5, 13, 0).point_value(), 10);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Card::new(CardId(0), 0, 0), Err(Error::InvalidRank(0)));
        assert_eq!(Card::new(CardId(0), 14, 0), Err(Error::InvalidRank(14)));
        assert_eq!(Card::new(CardId(0), 5, 4), Err(Error::InvalidSuit(4)));
    }

    #[test]
    fn equality_is_identity() {
        assert_ne!(card(1, 8, 2), card(2, 8, 2));
        let mut grouped = card(1, 8, 2);
        grouped.set_group(3);
        assert_eq!(grouped, card(1, 8, 2));
    }

    #[test]
    fn standard_cards_validate() {
        assert_eq!(Card::standard(1, 0).unwrap().id(), CardId(0));
        assert_eq!(Card::standard(13, 3).unwrap().id(), CardId(51));
        assert_eq!(Card::standard(0, 2), Err(Error::InvalidRank(0)));
        assert_eq!(Card::standard(5, 9), Err(Error::InvalidSuit(9)));
    }

    #[test]
    fn display() {
        assert_eq!(card(0, 1, 3).to_string(), "As");
        assert_eq!(card(0, 10, 1).to_string(), "10d");
        assert_eq!(card(0, 12, 2).to_string(), "Qh");
    }
}
