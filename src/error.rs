//! Errors raised while building or rearranging hands.

use thiserror::Error;

use crate::card::CardId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid rank {0}: expected 1..=13")]
    InvalidRank(u8),
    #[error("invalid suit {0}: expected 0..=3")]
    InvalidSuit(u8),
    #[error("card {0} is already in the hand")]
    DuplicateCard(CardId),
    #[error("hand is full ({limit} cards)")]
    HandFull { limit: usize },
    #[error("index {index} out of bounds for hand of {len} cards")]
    IndexOutOfBounds { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
