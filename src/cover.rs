//! Search for the disjoint set of candidate melds that leaves the least
//! deadwood.

use std::collections::HashMap;

use crate::bitset::HandMask;
use crate::hand::Hand;
use crate::runs_sets::{generate_candidates, Meld};
use crate::SEARCH_WARN_SIZE;

/// Best packing found for a hand: melds in the order their group ids are
/// assigned, and the points left over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solution {
    pub deadwood: u32,
    pub melds: Vec<Meld>,
}

#[derive(Clone)]
struct Entry {
    deadwood: u32,
    melds: Vec<usize>,
}

/// Call-scoped search state for one hand. The memo is keyed by the mask of
/// still-unassigned hand positions and dies with the solver.
pub struct Solver<'a> {
    hand: &'a Hand,
    candidates: Vec<Meld>,
    memo: HashMap<HandMask, Entry>,
}

impl<'a> Solver<'a> {
    pub fn new(hand: &'a Hand) -> Self {
        if hand.len() > SEARCH_WARN_SIZE {
            log::warn!(
                "meld search over {} cards (expected at most {})",
                hand.len(),
                SEARCH_WARN_SIZE
            );
        }
        Self {
            hand,
            candidates: generate_candidates(hand),
            memo: HashMap::new(),
        }
    }

    pub fn candidates(&self) -> &[Meld] {
        &self.candidates
    }

    fn points(&self, remaining: HandMask) -> u32 {
        remaining
            .indices()
            .map(|i| self.hand[i].point_value())
            .sum()
    }

    fn search(&mut self, remaining: HandMask) -> Entry {
        if remaining.is_empty() {
            return Entry {
                deadwood: 0,
                melds: Vec::new(),
            };
        }
        if let Some(entry) = self.memo.get(&remaining) {
            return entry.clone();
        }

        let mut best = Entry {
            deadwood: self.points(remaining),
            melds: Vec::new(),
        };
        for idx in 0..self.candidates.len() {
            // nothing beats zero
            if best.deadwood == 0 {
                break;
            }
            let meld = self.candidates[idx].mask();
            if !remaining.is_superset_of(meld) {
                continue;
            }
            let sub = self.search(remaining.without(meld));
            if sub.deadwood < best.deadwood {
                let mut melds = sub.melds;
                melds.push(idx);
                best = Entry {
                    deadwood: sub.deadwood,
                    melds,
                };
            }
        }

        self.memo.insert(remaining, best.clone());
        best
    }

    pub fn solve(mut self) -> Solution {
        let entry = self.search(HandMask::full(self.hand.len()));
        log::debug!(
            "meld search: {} cards, {} candidates, {} states, deadwood {}",
            self.hand.len(),
            self.candidates.len(),
            self.memo.len(),
            entry.deadwood
        );
        Solution {
            deadwood: entry.deadwood,
            melds: entry
                .melds
                .into_iter()
                .map(|idx| self.candidates[idx].clone())
                .collect(),
        }
    }
}

pub fn solve_optimal(hand: &Hand) -> Solution {
    Solver::new(hand).solve()
}

/// Rewrites the hand's groups from `solution`: meld `k` gets group `k + 1`,
/// everything else group 0. Cards are matched by identity.
pub fn apply_solution(hand: &mut Hand, solution: &Solution) {
    hand.reset_groups();
    for (group, meld) in (1u8..).zip(solution.melds.iter()) {
        for card in meld.cards() {
            if let Some(position) = hand.position(card.id()) {
                hand.cards_mut()[position].set_group(group);
            }
        }
    }
}

/// Clears the hand's groups, finds the optimal packing and applies it.
pub fn optimize_groups(hand: &mut Hand) -> Solution {
    hand.reset_groups();
    let solution = solve_optimal(hand);
    apply_solution(hand, &solution);
    solution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, CardId};
    use crate::greedy::assign_groups_greedy;
    use crate::runs_sets::MeldKind;

    fn hand(cards: &[(u8, u8)]) -> Hand {
        Hand::from_cards(
            cards
                .iter()
                .enumerate()
                .map(|(i, &(rank, suit))| Card::new(CardId(i as u32), rank, suit).unwrap()),
        )
        .unwrap()
    }

    #[test]
    fn empty_hand() {
        let solution = solve_optimal(&Hand::new());
        assert_eq!(solution, Solution::default());
    }

    #[test]
    fn no_melds_keeps_baseline() {
        let h = hand(&[(1, 0), (5, 1), (9, 2), (13, 3)]);
        let solution = solve_optimal(&h);
        assert_eq!(solution.deadwood, 25);
        assert!(solution.melds.is_empty());
    }

    #[test]
    fn beats_greedy_when_greedy_grabs_wrong_chain() {
        // greedy takes the run 7s 8s 9s and strands the other sevens;
        // the optimum plays the set of sevens plus the 8-9-10 run
        let cards = [(7, 3), (8, 3), (9, 3), (10, 3), (7, 0), (7, 1)];
        let mut greedy = hand(&cards);
        assign_groups_greedy(&mut greedy);
        assert_eq!(greedy.deadwood(), 14);

        let solution = solve_optimal(&hand(&cards));
        assert_eq!(solution.deadwood, 0);
        let mut kinds: Vec<MeldKind> = solution.melds.iter().map(Meld::kind).collect();
        kinds.sort();
        assert_eq!(kinds, vec![MeldKind::Set, MeldKind::Run]);
    }

    #[test]
    fn repeated_cards_still_beat_greedy() {
        // two distinct 5s of the same suit; greedy in this order plays 4-5-6
        let cards = [(4, 0), (5, 0), (6, 0), (5, 0)];
        let mut greedy = hand(&cards);
        assign_groups_greedy(&mut greedy);
        assert_eq!(greedy.deadwood(), 5);

        let solution = solve_optimal(&hand(&cards));
        assert_eq!(solution.deadwood, 5);
        assert_eq!(solution.melds.len(), 1);
        assert_eq!(solution.melds[0].kind(), MeldKind::Run);
    }

    #[test]
    fn melds_are_disjoint() {
        let h = hand(&[
            (4, 0),
            (5, 0),
            (6, 0),
            (7, 0),
            (6, 1),
            (6, 2),
            (6, 3),
            (7, 2),
            (8, 2),
            (12, 1),
        ]);
        let solution = solve_optimal(&h);
        let mut seen = HandMask::empty();
        for meld in &solution.melds {
            assert!(meld.is_valid());
            assert!(seen.is_disjoint(meld.mask()));
            seen = seen.union(meld.mask());
        }
        let leftover: u32 = HandMask::full(h.len())
            .without(seen)
            .indices()
            .map(|i| h[i].point_value())
            .sum();
        assert_eq!(leftover, solution.deadwood);
    }

    #[test]
    fn apply_assigns_fresh_groups() {
        let mut h = hand(&[(2, 1), (3, 1), (4, 1), (9, 0), (9, 1), (9, 2), (13, 0)]);
        h.set_group(6, 5).unwrap();
        let solution = optimize_groups(&mut h);
        assert_eq!(solution.deadwood, 10);
        assert_eq!(solution.melds.len(), 2);
        assert_eq!(h.deadwood(), 10);
        assert_eq!(h.groups().keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(h[6].group(), 0);
    }

    #[test]
    fn apply_follows_identity_after_reorder() {
        let mut h = hand(&[(2, 1), (3, 1), (4, 1), (11, 0)]);
        let solution = solve_optimal(&h);
        h.move_card(3, 0).unwrap();
        apply_solution(&mut h, &solution);
        assert_eq!(h[0].group(), 0);
        assert!(h.iter().skip(1).all(|c| c.group() == 1));
    }
}
