//! Enumeration of candidate melds (runs and sets).

use std::collections::BTreeMap;

use crate::bitset::HandMask;
use crate::card::Card;
use crate::hand::Hand;
use crate::ordering::{by_rank_then_suit, by_suit_then_rank};
use crate::{MAX_SET_SIZE, MIN_MELD_SIZE};

#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum MeldKind {
    Set,
    Run,
}

/// Three or more cards of one hand forming a run or a set. `mask` names the
/// positions of those cards in the hand the meld was generated from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meld {
    kind: MeldKind,
    cards: Vec<Card>,
    mask: HandMask,
}

impl Meld {
    fn from_positions(kind: MeldKind, hand: &Hand, positions: &[usize]) -> Self {
        Self {
            kind,
            cards: positions.iter().map(|&i| hand[i]).collect(),
            mask: positions.iter().copied().collect(),
        }
    }

    pub fn kind(&self) -> MeldKind {
        self.kind
    }
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
    pub fn mask(&self) -> HandMask {
        self.mask
    }
    pub fn len(&self) -> usize {
        self.cards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
    pub fn points(&self) -> u32 {
        self.cards.iter().map(Card::point_value).sum()
    }

    /// Re-checks the run or set predicate on the meld's cards. Suits inside
    /// a set are not required to be distinct.
    pub fn is_valid(&self) -> bool {
        if self.cards.len() < MIN_MELD_SIZE {
            return false;
        }
        let first = self.cards[0];
        match self.kind {
            MeldKind::Set => self.cards.iter().all(|c| c.rank() == first.rank()),
            MeldKind::Run => {
                self.cards.iter().all(|c| c.suit() == first.suit())
                    && self
                        .cards
                        .windows(2)
                        .all(|w| w[1].rank() == w[0].rank() + 1)
            }
        }
    }
}

impl std::fmt::Display for Meld {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        write!(f, "{:?}({})", self.kind, cards.join(" "))
    }
}

/// Every way of picking one position from each list, in list order.
fn cartesian_product(lists: &[&[usize]]) -> Vec<Vec<usize>> {
    fn recurse(
        lists: &[&[usize]],
        index: usize,
        current: &mut Vec<usize>,
        results: &mut Vec<Vec<usize>>,
    ) {
        if index == lists.len() {
            results.push(current.clone());
            return;
        }
        for &value in lists[index] {
            current.push(value);
            recurse(lists, index + 1, current, results);
            current.pop();
        }
    }
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(lists.len());
    recurse(lists, 0, &mut current, &mut results);
    results
}

/// Every contiguous window of size >= 3 inside every maximal same-suit run,
/// grouped by suit ascending, then size ascending, then left to right.
/// Chains are built over distinct ranks; cards repeating a rank and suit
/// give one window per choice among the repeats.
fn enumerate_runs(hand: &Hand) -> Vec<Meld> {
    let mut by_suit = BTreeMap::<u8, BTreeMap<u8, Vec<usize>>>::new();
    for (i, card) in hand.iter().enumerate() {
        by_suit
            .entry(card.suit())
            .or_default()
            .entry(card.rank())
            .or_default()
            .push(i);
    }

    let mut results = Vec::new();
    for by_rank in by_suit.values_mut() {
        for positions in by_rank.values_mut() {
            positions.sort_by(|&a, &b| by_suit_then_rank(&hand[a], &hand[b]));
        }
        let ranks: Vec<(u8, &[usize])> = by_rank
            .iter()
            .map(|(&rank, positions)| (rank, positions.as_slice()))
            .collect();
        let mut start = 0;
        while start < ranks.len() {
            let mut end = start;
            while end + 1 < ranks.len() && ranks[end + 1].0 == ranks[end].0 + 1 {
                end += 1;
            }
            let length = end - start + 1;
            for size in MIN_MELD_SIZE..=length {
                for offset in start..=end + 1 - size {
                    let lists: Vec<&[usize]> =
                        ranks[offset..offset + size].iter().map(|&(_, p)| p).collect();
                    for window in cartesian_product(&lists) {
                        results.push(Meld::from_positions(MeldKind::Run, hand, &window));
                    }
                }
            }
            start = end + 1;
        }
    }
    results
}

fn combinations(items: &[usize], k: usize) -> Vec<Vec<usize>> {
    fn recurse(
        items: &[usize],
        start: usize,
        k: usize,
        current: &mut Vec<usize>,
        results: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == k {
            results.push(current.clone());
            return;
        }
        for idx in start..items.len() {
            current.push(items[idx]);
            recurse(items, idx + 1, k, current, results);
            current.pop();
        }
    }
    let mut results = Vec::new();
    let mut current = Vec::with_capacity(k);
    recurse(items, 0, k, &mut current, &mut results);
    results
}

/// All 3- and 4-card combinations of each rank group, rank ascending.
fn enumerate_sets(hand: &Hand) -> Vec<Meld> {
    let mut by_rank = BTreeMap::<u8, Vec<usize>>::new();
    for (i, card) in hand.iter().enumerate() {
        by_rank.entry(card.rank()).or_default().push(i);
    }

    let mut results = Vec::new();
    for positions in by_rank.values_mut() {
        if positions.len() < MIN_MELD_SIZE {
            continue;
        }
        positions.sort_by(|&a, &b| by_rank_then_suit(&hand[a], &hand[b]));
        for size in MIN_MELD_SIZE..=MAX_SET_SIZE.min(positions.len()) {
            for combo in combinations(positions, size) {
                results.push(Meld::from_positions(MeldKind::Set, hand, &combo));
            }
        }
    }
    results
}

/// Every candidate run and set in `hand`. Overlapping windows of one run
/// are all emitted; nothing is deduplicated.
pub fn generate_candidates(hand: &Hand) -> Vec<Meld> {
    let mut melds = enumerate_runs(hand);
    melds.extend(enumerate_sets(hand));
    log::trace!("{} candidate melds for {}", melds.len(), hand);
    melds
}
