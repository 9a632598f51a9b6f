//! Python bindings. Hands cross the boundary as lists of `(rank, suit)`
//! pairs; melds come back as lists of positions into that list.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::{Card, CardId, Hand, Meld};

fn build_hand(cards: Vec<(u8, u8)>) -> PyResult<Hand> {
    let cards = cards
        .into_iter()
        .enumerate()
        .map(|(i, (rank, suit))| Card::new(CardId(i as u32), rank, suit))
        .collect::<crate::Result<Vec<Card>>>()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Hand::try_from(cards).map_err(|e| PyValueError::new_err(e.to_string()))
}

fn positions(meld: &Meld) -> Vec<usize> {
    meld.mask().indices().collect()
}

#[pyfunction]
fn generate_candidates(cards: Vec<(u8, u8)>) -> PyResult<Vec<Vec<usize>>> {
    let hand = build_hand(cards)?;
    Ok(crate::generate_candidates(&hand).iter().map(positions).collect())
}

#[pyfunction]
fn solve_optimal(cards: Vec<(u8, u8)>) -> PyResult<(u32, Vec<Vec<usize>>)> {
    let hand = build_hand(cards)?;
    let solution = crate::solve_optimal(&hand);
    Ok((solution.deadwood, solution.melds.iter().map(positions).collect()))
}

/// Group id of each card after greedy grouping in the given order.
#[pyfunction]
fn assign_groups_greedy(cards: Vec<(u8, u8)>) -> PyResult<Vec<u8>> {
    let mut hand = build_hand(cards)?;
    crate::assign_groups_greedy(&mut hand);
    Ok(hand.iter().map(Card::group).collect())
}

#[pymodule]
fn gin_melds(_py: Python<'_>, module: &Bound<'_, PyModule>) -> PyResult<()> {
    module.add_function(wrap_pyfunction!(generate_candidates, module)?)?;
    module.add_function(wrap_pyfunction!(solve_optimal, module)?)?;
    module.add_function(wrap_pyfunction!(assign_groups_greedy, module)?)?;
    Ok(())
}
