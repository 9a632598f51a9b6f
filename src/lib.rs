//! Meld analysis for Gin Rummy hands: candidate enumeration, greedy
//! grouping and deadwood-minimizing meld selection.

mod bitset;
mod card;
mod cover;
mod deck;
mod error;
mod greedy;
mod hand;
mod ordering;
mod runs_sets;

#[cfg(feature = "python")]
mod python;

pub use bitset::HandMask;
pub use card::{Card, CardId};
pub use cover::{apply_solution, optimize_groups, solve_optimal, Solution, Solver};
pub use deck::{Deck, DECK_SIZE, NUM_RANKS, NUM_SUITS};
pub use error::{Error, Result};
pub use greedy::{assign_groups_greedy, group_runs, group_sets, sort_and_group};
pub use hand::Hand;
pub use ordering::{by_rank_then_suit, by_suit_then_rank, SortOrder};
pub use runs_sets::{generate_candidates, Meld, MeldKind};

/// Fewest cards in any meld.
pub const MIN_MELD_SIZE: usize = 3;
/// Largest set generated or grouped.
pub const MAX_SET_SIZE: usize = 4;
/// Width of `HandMask`.
pub const MAX_HAND_SIZE: usize = 64;
/// Meld search logs a warning above this many cards.
pub const SEARCH_WARN_SIZE: usize = 14;
