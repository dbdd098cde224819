#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gng/topology_test.rs"]
mod topology_test;

use super::*;
use crate::algorithms::math::blend;
use crate::utils::{TrainingError, select_first_max};
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unit of the graph: a prototype vector with accumulated error.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unit {
    /// A prototype vector.
    pub position: Vec<Float>,
    /// An accumulated quantization error.
    pub error: Float,
}

/// A slot of the arena.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Slot {
    /// The slot holds no unit and can be activated.
    Free,
    /// The slot holds an active unit.
    Active(Unit),
}

impl Slot {
    /// Returns unit if slot is active.
    pub fn unit(&self) -> Option<&Unit> {
        match self {
            Slot::Active(unit) => Some(unit),
            Slot::Free => None,
        }
    }

    /// Checks whether slot is active.
    pub fn is_active(&self) -> bool {
        matches!(self, Slot::Active(_))
    }
}

/// A fixed capacity arena of units with a symmetric edge relation between them.
///
/// Edge age is a remaining lifetime: a refreshed edge gets `a_max`, every aging takes one unit
/// off and an edge aged down to zero ceases to exist. Edges are stored in both directions and
/// every mutation updates both, so `age(a, b) == age(b, a)` always holds. An edge only ever
/// joins two distinct active slots.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Topology {
    dimension: usize,
    a_max: usize,
    slots: Vec<Slot>,
    edges: Vec<FxHashMap<usize, usize>>,
}

impl Topology {
    /// Creates an arena with all slots free.
    pub fn new(dimension: usize, capacity: usize, a_max: usize) -> Self {
        Self {
            dimension,
            a_max,
            slots: vec![Slot::Free; capacity],
            edges: (0..capacity).map(|_| FxHashMap::default()).collect(),
        }
    }

    /// Returns dimension of unit positions.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns total amount of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns age assigned to a freshly connected edge.
    pub fn a_max(&self) -> usize {
        self.a_max
    }

    /// Returns slot by its index.
    pub fn slot(&self, slot: usize) -> Option<&Slot> {
        self.slots.get(slot)
    }

    /// Returns unit by its slot index if the slot is active.
    pub fn unit(&self, slot: usize) -> Option<&Unit> {
        self.slots.get(slot).and_then(Slot::unit)
    }

    /// Returns mutable unit by its slot index if the slot is active.
    pub fn unit_mut(&mut self, slot: usize) -> Option<&mut Unit> {
        match self.slots.get_mut(slot) {
            Some(Slot::Active(unit)) => Some(unit),
            _ => None,
        }
    }

    /// Checks whether slot is active.
    pub fn is_active(&self, slot: usize) -> bool {
        self.slots.get(slot).is_some_and(Slot::is_active)
    }

    /// Returns amount of active slots.
    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_active()).count()
    }

    /// Iterates over active units in ascending slot order.
    pub fn units(&self) -> impl Iterator<Item = (usize, &Unit)> + '_ {
        self.slots.iter().enumerate().filter_map(|(idx, slot)| slot.unit().map(|unit| (idx, unit)))
    }

    /// Iterates over active slot indices in ascending order.
    pub fn active_slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.units().map(|(idx, _)| idx)
    }

    /// Iterates over positions of active units in ascending slot order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, &[Float])> + '_ {
        self.units().map(|(idx, unit)| (idx, unit.position.as_slice()))
    }

    /// Returns the first free slot.
    pub fn free_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.is_active())
    }

    /// Activates a free slot with given position and zero error.
    pub fn activate(&mut self, slot: usize, position: Vec<Float>) -> Result<(), TrainingError> {
        if position.len() != self.dimension {
            return Err(TrainingError::DimensionMismatch { expected: self.dimension, found: position.len() });
        }

        let capacity = self.capacity();
        match self.slots.get_mut(slot) {
            None => Err(TrainingError::CapacityExceeded { capacity }),
            Some(Slot::Active(_)) => Err(TrainingError::InvalidSlot { slot }),
            Some(free) => {
                *free = Slot::Active(Unit { position, error: 0. });
                Ok(())
            }
        }
    }

    /// Activates the first free slot, returns its index.
    pub fn activate_free(&mut self, position: Vec<Float>) -> Result<usize, TrainingError> {
        let slot = self.free_slot().ok_or(TrainingError::CapacityExceeded { capacity: self.capacity() })?;
        self.activate(slot, position)?;

        Ok(slot)
    }

    /// Frees the slot dropping its unit and all edges touching it. Returns true if slot was active.
    pub fn deactivate(&mut self, slot: usize) -> bool {
        let Some(state) = self.slots.get_mut(slot) else {
            return false;
        };

        let was_active = state.is_active();
        *state = Slot::Free;

        let neighbours = std::mem::take(&mut self.edges[slot]);
        neighbours.keys().for_each(|&neighbour| {
            self.edges[neighbour].remove(&slot);
        });

        was_active
    }

    /// Creates an edge or refreshes an existing one, resetting its age to `a_max`.
    pub fn connect(&mut self, a: usize, b: usize) -> Result<(), TrainingError> {
        self.set_age(a, b, self.a_max)
    }

    /// Sets the age of the edge between two active slots. Zero age removes the edge.
    pub fn set_age(&mut self, a: usize, b: usize, age: usize) -> Result<(), TrainingError> {
        if a == b || !self.is_active(a) {
            return Err(TrainingError::InvalidSlot { slot: a });
        }

        if !self.is_active(b) {
            return Err(TrainingError::InvalidSlot { slot: b });
        }

        if age == 0 {
            self.disconnect(a, b);
        } else {
            self.edges[a].insert(b, age);
            self.edges[b].insert(a, age);
        }

        Ok(())
    }

    /// Removes the edge between two slots. Returns true if the edge existed.
    pub fn disconnect(&mut self, a: usize, b: usize) -> bool {
        match (self.edges.get(a).is_some(), self.edges.get(b).is_some()) {
            (true, true) => {
                let removed = self.edges[a].remove(&b).is_some();
                self.edges[b].remove(&a);
                removed
            }
            _ => false,
        }
    }

    /// Returns age of the edge between two slots.
    pub fn age(&self, a: usize, b: usize) -> Option<usize> {
        self.edges.get(a).and_then(|edges| edges.get(&b)).copied()
    }

    /// Ages every edge of the slot by one, removing edges aged down to zero.
    /// Returns slots which lost their edge to the given one, in ascending order.
    pub fn age_edges_from(&mut self, slot: usize) -> Vec<usize> {
        let Some(edges) = self.edges.get_mut(slot) else {
            return vec![];
        };

        edges.values_mut().for_each(|age| *age = age.saturating_sub(1));

        let mut expired =
            edges.iter().filter(|&(_, &age)| age == 0).map(|(&neighbour, _)| neighbour).collect::<Vec<_>>();
        edges.retain(|_, age| *age > 0);
        let aged = edges.iter().map(|(&neighbour, &age)| (neighbour, age)).collect::<Vec<_>>();

        aged.into_iter().for_each(|(neighbour, age)| {
            self.edges[neighbour].insert(slot, age);
        });

        expired.sort_unstable();
        expired.iter().for_each(|&neighbour| {
            self.edges[neighbour].remove(&slot);
        });

        expired
    }

    /// Returns slots connected to the given one, in ascending order.
    pub fn neighbours(&self, slot: usize) -> Vec<usize> {
        let mut neighbours =
            self.edges.get(slot).map(|edges| edges.keys().copied().collect::<Vec<_>>()).unwrap_or_default();
        neighbours.sort_unstable();

        neighbours
    }

    /// Returns amount of edges of the slot.
    pub fn degree(&self, slot: usize) -> usize {
        self.edges.get(slot).map_or(0, |edges| edges.len())
    }

    /// Returns all edges as `(a, b, age)` with `a < b`, ordered by `(a, b)`.
    pub fn edges(&self) -> Vec<(usize, usize, usize)> {
        let mut edges = self
            .edges
            .iter()
            .enumerate()
            .flat_map(|(a, edges)| edges.iter().filter(move |&(&b, _)| a < b).map(move |(&b, &age)| (a, b, age)))
            .collect::<Vec<_>>();
        edges.sort_unstable();

        edges
    }

    /// Deactivates all active slots without edges. Returns deactivated slots in ascending order.
    pub fn prune_isolated(&mut self) -> Vec<usize> {
        let isolated = self.active_slots().filter(|&slot| self.degree(slot) == 0).collect::<Vec<_>>();
        isolated.iter().for_each(|&slot| {
            self.deactivate(slot);
        });

        isolated
    }

    /// Moves active unit towards the target by given learning rate.
    pub fn adapt(&mut self, slot: usize, target: &[Float], rate: Float) {
        if let Some(unit) = self.unit_mut(slot) {
            blend(unit.position.as_mut_slice(), target, rate);
        }
    }

    /// Multiplies error of every active unit by the factor.
    pub fn decay_errors(&mut self, factor: Float) {
        self.slots.iter_mut().for_each(|slot| {
            if let Slot::Active(unit) = slot {
                unit.error *= factor;
            }
        });
    }

    /// Returns total error of active units.
    pub fn total_error(&self) -> Float {
        self.units().map(|(_, unit)| unit.error).sum()
    }

    /// Returns mean quantization error: total error divided by amount of active units.
    pub fn mqe(&self) -> Option<Float> {
        match self.active_count() {
            0 => None,
            count => Some(self.total_error() / count as Float),
        }
    }

    /// Returns active slot with the highest error, the lowest index wins a tie.
    pub fn max_error_slot(&self) -> Option<usize> {
        select_first_max(self.units().map(|(idx, unit)| (idx, unit.error)))
    }

    /// Returns neighbour of the slot with the highest error, the lowest index wins a tie.
    pub fn max_error_neighbour(&self, slot: usize) -> Option<usize> {
        select_first_max(
            self.neighbours(slot)
                .into_iter()
                .filter_map(|neighbour| self.unit(neighbour).map(|unit| (neighbour, unit.error))),
        )
    }

    /// Returns the nearest active unit.
    pub fn nearest(&self, query: &[Float]) -> Option<Nearest> {
        find_nearest(self.positions(), query)
    }

    /// Returns the nearest and the second nearest active units.
    pub fn nearest_two(&self, query: &[Float]) -> (Option<Nearest>, Option<Nearest>) {
        find_two_nearest(self.positions(), query)
    }
}
