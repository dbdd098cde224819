#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gng/query_test.rs"]
mod query_test;

use super::*;
use crate::algorithms::math::squared_euclidean;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit found to be the closest one to some query.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Nearest {
    /// A slot index of the unit.
    pub slot: usize,
    /// Squared euclidean distance from the query to the unit.
    pub distance: Float,
}

/// Finds the nearest position. Positions are expected in ascending slot order: on equal distance
/// the first one wins.
pub fn find_nearest<'a, P>(positions: P, query: &[Float]) -> Option<Nearest>
where
    P: Iterator<Item = (usize, &'a [Float])>,
{
    positions.fold(None, |best, (slot, position)| {
        let distance = squared_euclidean(position, query);
        match best {
            Some(Nearest { distance: best_distance, .. }) if distance >= best_distance => best,
            _ => Some(Nearest { slot, distance }),
        }
    })
}

/// Finds the nearest and the second nearest positions with the same tie break policy as
/// [`find_nearest`].
pub fn find_two_nearest<'a, P>(positions: P, query: &[Float]) -> (Option<Nearest>, Option<Nearest>)
where
    P: Iterator<Item = (usize, &'a [Float])>,
{
    positions.fold((None, None), |(first, second), (slot, position)| {
        let candidate = Nearest { slot, distance: squared_euclidean(position, query) };

        match (first, second) {
            (None, _) => (Some(candidate), None),
            (Some(first), _) if candidate.distance < first.distance => (Some(candidate), Some(first)),
            (Some(first), None) => (Some(first), Some(candidate)),
            (Some(first), Some(second)) if candidate.distance < second.distance => (Some(first), Some(candidate)),
            (first, second) => (first, second),
        }
    })
}

/// Finds the nearest active prototype of the graph for every query. Returns `None` for a query
/// when the graph has no active unit.
pub fn test_prototypes<Q: Input>(topology: &Topology, queries: &[Q]) -> Vec<Option<Nearest>> {
    queries.iter().map(|query| topology.nearest(query.weights())).collect()
}
