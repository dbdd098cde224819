#[cfg(test)]
#[path = "../../../tests/unit/algorithms/ghng/model_test.rs"]
mod model_test;

use super::*;
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the hierarchy: a trained graph and optional child graphs keyed by unit slot.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HierarchyNode {
    /// A level of the node, the root is at level zero.
    pub level: usize,
    /// A graph trained on samples of this node.
    pub graph: GngModel,
    /// Children keyed by slot of the unit whose receptive field they refine. A unit with an empty
    /// receptive field or a pruned branch maps to `None`. A node with two units has no entries.
    pub children: BTreeMap<usize, Option<HierarchyNode>>,
}

/// A prototype of some hierarchy level with a positive win count.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelPrototype<'a> {
    /// A level of the node which owns the prototype.
    pub level: usize,
    /// A slot of the prototype within its graph.
    pub slot: usize,
    /// Prototype position.
    pub position: &'a [Float],
    /// Amount of samples won by the prototype.
    pub wins: usize,
}

impl HierarchyNode {
    /// Checks whether node has no child graphs.
    pub fn is_leaf(&self) -> bool {
        self.children.values().all(|child| child.is_none())
    }

    /// Returns child graph of the unit at given slot.
    pub fn child(&self, slot: usize) -> Option<&HierarchyNode> {
        self.children.get(&slot).and_then(|child| child.as_ref())
    }

    /// Returns how many samples each unit of this node's graph won.
    pub fn win_counts(&self) -> BTreeMap<usize, usize> {
        self.graph.win_counts()
    }

    /// Returns amount of levels in the subtree, a leaf has depth one.
    pub fn depth(&self) -> usize {
        1 + self.children.values().flatten().map(|child| child.depth()).max().unwrap_or(0)
    }

    /// Returns all nodes of the subtree in pre-order, children visited in ascending slot order.
    pub fn nodes(&self) -> Vec<&HierarchyNode> {
        let mut nodes = vec![];
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            nodes.push(node);
            stack.extend(node.children.values().rev().flatten());
        }

        nodes
    }

    /// Returns amount of active units per level.
    pub fn units_per_level(&self) -> BTreeMap<usize, usize> {
        self.nodes().into_iter().fold(BTreeMap::new(), |mut acc, node| {
            *acc.entry(node.level).or_insert(0) += node.graph.active_count();
            acc
        })
    }

    /// Returns prototypes which won at least one sample on the given level.
    pub fn prototypes_at_level(&self, level: usize) -> Vec<LevelPrototype<'_>> {
        self.nodes()
            .into_iter()
            .filter(|node| node.level == level)
            .flat_map(|node| {
                node.win_counts().into_iter().filter(|&(_, wins)| wins > 0).filter_map(move |(slot, wins)| {
                    node.graph.prototype(slot).map(|position| LevelPrototype { level, slot, position, wins })
                })
            })
            .collect()
    }

    /// Descends from this node choosing the nearest unit on every level. Returns chosen slots.
    pub fn locate(&self, query: &[Float]) -> Vec<usize> {
        let mut path = vec![];
        let mut node = Some(self);

        while let Some(current) = node {
            let Some(nearest) = current.graph.nearest(query) else {
                break;
            };

            path.push(nearest.slot);
            node = current.child(nearest.slot);
        }

        path
    }
}
