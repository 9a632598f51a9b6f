//! Single-pass left-to-right grouping.
//!
//! Fast and order dependent: a chain is taken as soon as it is long enough,
//! even when a shorter one would leave less deadwood downstream.

use crate::card::Card;
use crate::hand::Hand;
use crate::ordering::SortOrder;
use crate::runs_sets::MeldKind;
use crate::{MAX_SET_SIZE, MIN_MELD_SIZE};

/// Length of the chain of `kind` starting at `start`. Set chains stop at
/// `MAX_SET_SIZE`.
fn chain_len(cards: &[Card], start: usize, kind: MeldKind) -> usize {
    let head = cards[start];
    let mut length = 1;
    while start + length < cards.len() {
        let prev = cards[start + length - 1];
        let next = cards[start + length];
        let extends = match kind {
            MeldKind::Run => next.suit() == head.suit() && next.rank() == prev.rank() + 1,
            MeldKind::Set => length < MAX_SET_SIZE && next.rank() == head.rank(),
        };
        if !extends {
            break;
        }
        length += 1;
    }
    length
}

/// Groups chains of the given kinds in the hand's current order, trying
/// kinds in the order listed. Returns how many groups were assigned.
fn mark_chains(hand: &mut Hand, kinds: &[MeldKind]) -> u8 {
    hand.reset_groups();
    let n = hand.len();
    let mut group = 0u8;
    let mut index = 0;
    while index < n {
        let chain = kinds
            .iter()
            .map(|&kind| chain_len(hand.cards(), index, kind))
            .find(|&length| length >= MIN_MELD_SIZE);
        match chain {
            Some(length) => {
                group += 1;
                for card in &mut hand.cards_mut()[index..index + length] {
                    card.set_group(group);
                }
                log::trace!("group {} covers {}..{}", group, index, index + length);
                index += length;
            }
            None => index += 1,
        }
    }
    group
}

/// Greedy grouping on the hand as currently ordered, preferring a run over
/// a set when both start at the same card.
pub fn assign_groups_greedy(hand: &mut Hand) -> u8 {
    let groups = mark_chains(hand, &[MeldKind::Run, MeldKind::Set]);
    log::debug!("greedy grouping: {} groups, deadwood {}", groups, hand.deadwood());
    groups
}

/// Sorts by suit then rank and groups runs only.
pub fn group_runs(hand: &mut Hand) -> u8 {
    hand.sort_by(SortOrder::SuitThenRank);
    mark_chains(hand, &[MeldKind::Run])
}

/// Sorts by rank then suit and groups sets only.
pub fn group_sets(hand: &mut Hand) -> u8 {
    hand.sort_by(SortOrder::RankThenSuit);
    mark_chains(hand, &[MeldKind::Set])
}

pub fn sort_and_group(hand: &mut Hand, order: SortOrder) -> u8 {
    hand.sort_by(order);
    assign_groups_greedy(hand)
}
