//! Bitsets over hand positions.
//!
//! Bit `i` stands for the card at index `i` of the hand a mask was built
//! from. Two masks over the same hand are equal iff they name the same
//! cards, which makes a mask a collision-free memo key.

use crate::MAX_HAND_SIZE;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct HandMask(u64);

impl HandMask {
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every position of a hand with `n` cards.
    pub fn full(n: usize) -> Self {
        assert!(n <= MAX_HAND_SIZE);
        if n == MAX_HAND_SIZE {
            Self(u64::MAX)
        } else {
            Self((1u64 << n) - 1)
        }
    }

    pub fn bit(index: usize) -> Self {
        assert!(index < MAX_HAND_SIZE);
        Self(1u64 << index)
    }

    pub fn with(self, index: usize) -> Self {
        Self(self.0 | Self::bit(index).0)
    }
    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < MAX_HAND_SIZE && (self.0 >> index) & 1 == 1
    }
    pub fn is_superset_of(&self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
    pub fn is_disjoint(&self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Set positions, lowest first.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                None
            } else {
                let index = bits.trailing_zeros() as usize;
                bits &= bits - 1;
                Some(index)
            }
        })
    }
}

impl FromIterator<usize> for HandMask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<HandMask> for u64 {
    fn from(mask: HandMask) -> u64 {
        mask.0
    }
}
