#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gng/model_test.rs"]
mod model_test;

use super::*;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A result of flat graph training.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GngModel {
    /// Configuration used to train the graph.
    pub config: GngConfig,
    /// Step budget of the run.
    pub num_steps: usize,
    /// Final graph.
    pub topology: Topology,
    /// Winner slot of each sample, in sample order. Every winner is an active slot.
    pub winners: Vec<usize>,
    /// Growth state at the end of the run.
    pub growth: GrowthState,
    /// MQE measurements taken on insertion and growth check steps.
    pub mqe_history: Vec<MqeSample>,
}

impl GngModel {
    /// Returns active slots in ascending order.
    pub fn active_slots(&self) -> Vec<usize> {
        self.topology.active_slots().collect()
    }

    /// Returns amount of active units.
    pub fn active_count(&self) -> usize {
        self.topology.active_count()
    }

    /// Returns positions of active units keyed by slot.
    pub fn prototypes(&self) -> BTreeMap<usize, &[Float]> {
        self.topology.positions().collect()
    }

    /// Returns position of the unit at given slot if it is active.
    pub fn prototype(&self, slot: usize) -> Option<&[Float]> {
        self.topology.unit(slot).map(|unit| unit.position.as_slice())
    }

    /// Returns how many samples each active unit won. Units without samples are reported with zero.
    pub fn win_counts(&self) -> BTreeMap<usize, usize> {
        let mut counts = self.topology.active_slots().map(|slot| (slot, 0)).collect::<BTreeMap<_, _>>();
        self.winners.iter().for_each(|winner| {
            *counts.entry(*winner).or_insert(0) += 1;
        });

        counts
    }

    /// Returns indices of samples won by the unit at given slot.
    pub fn receptive_field(&self, slot: usize) -> Vec<usize> {
        self.winners.iter().enumerate().filter(|&(_, winner)| *winner == slot).map(|(idx, _)| idx).collect()
    }

    /// Returns the nearest active unit to the query.
    pub fn nearest(&self, query: &[Float]) -> Option<Nearest> {
        self.topology.nearest(query)
    }

    /// Returns the nearest active unit for every query.
    pub fn test_prototypes<Q: Input>(&self, queries: &[Q]) -> Vec<Option<Nearest>> {
        test_prototypes(&self.topology, queries)
    }

    /// Returns MQE measurements.
    pub fn mqe_history(&self) -> &[MqeSample] {
        self.mqe_history.as_slice()
    }

    /// Checks whether growth was stopped by the rollback heuristic.
    pub fn is_growth_halted(&self) -> bool {
        matches!(self.growth, GrowthState::Halted { .. })
    }
}
