#[cfg(test)]
#[path = "../../../tests/unit/algorithms/ghng/driver_test.rs"]
mod driver_test;

use super::*;
use std::collections::BTreeMap;

/// Trains hierarchies of growing neural gas graphs.
///
/// A single random generator from the environment is used by every graph of every hierarchy
/// trained by the instance, so results are reproducible for the same seed, samples and call order.
pub struct Hierarchy {
    config: GngConfig,
    max_levels: usize,
    environment: Environment,
}

impl Hierarchy {
    /// Creates a new instance of `Hierarchy`. Use [`HierarchyBuilder`] to get validated settings.
    pub fn new(config: GngConfig, max_levels: usize, environment: Environment) -> Self {
        Self { config, max_levels, environment }
    }

    /// Returns configuration used for every graph.
    pub fn config(&self) -> &GngConfig {
        &self.config
    }

    /// Returns the deepest level which can be trained.
    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Trains a hierarchy starting from the root level.
    pub fn train(&mut self, samples: &[Sample]) -> Result<Option<HierarchyNode>, TrainingError> {
        self.train_at_level(samples, 0)
    }

    /// Trains a (sub)hierarchy as if it starts at the given level.
    pub fn train_at_level(&mut self, samples: &[Sample], level: usize) -> Result<Option<HierarchyNode>, TrainingError> {
        let samples = samples.iter().collect::<Vec<_>>();

        self.train_level(samples.as_slice(), level)
    }

    /// Groups samples by label and trains a separate hierarchy for every class, in ascending
    /// label order.
    pub fn train_by_class(
        &mut self,
        samples: &[Sample],
    ) -> Result<BTreeMap<i32, Option<HierarchyNode>>, TrainingError> {
        let classes = samples.iter().fold(BTreeMap::<i32, Vec<&Sample>>::new(), |mut acc, sample| {
            acc.entry(sample.label()).or_default().push(sample);
            acc
        });

        classes
            .into_iter()
            .map(|(label, class_samples)| {
                self.log(format!("training class {label} with {} samples", class_samples.len()).as_str());
                self.train_level(class_samples.as_slice(), 0).map(|node| (label, node))
            })
            .collect()
    }

    fn train_level(&mut self, samples: &[&Sample], level: usize) -> Result<Option<HierarchyNode>, TrainingError> {
        if level > self.max_levels {
            self.log(format!("level {level}: pruned, max level {} is reached", self.max_levels).as_str());
            return Ok(None);
        }

        let dimension = samples.first().map_or(0, |sample| sample.dimension());
        if level > 0 && samples.len() < dimension + 1 {
            self.log(
                format!("level {level}: pruned, {} samples are not enough for dimension {dimension}", samples.len())
                    .as_str(),
            );
            return Ok(None);
        }

        self.log(format!("level {level}: training graph on {} samples", samples.len()).as_str());

        let graph = match train_gng(&self.config, samples, self.environment.random.as_mut()) {
            Ok(graph) => graph,
            Err(TrainingError::InsufficientSamples { found }) => {
                self.log(format!("level {level}: pruned, cannot seed graph with {found} samples").as_str());
                return Ok(None);
            }
            Err(err) => return Err(err),
        };

        if let GrowthState::Halted { step } = graph.growth {
            self.log(format!("level {level}: growth halted at step {step}").as_str());
        }

        self.log(format!("level {level}: trained graph with {} units", graph.active_count()).as_str());

        if graph.active_count() == 2 {
            return Ok(Some(HierarchyNode { level, graph, children: BTreeMap::new() }));
        }

        let mut partitions = partition_by_winner(samples, graph.winners.as_slice());
        let children = graph
            .active_slots()
            .into_iter()
            .map(|slot| match partitions.remove(&slot) {
                Some(partition) if !partition.is_empty() => {
                    self.train_level(partition.as_slice(), level + 1).map(|child| (slot, child))
                }
                _ => Ok((slot, None)),
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;

        Ok(Some(HierarchyNode { level, graph, children }))
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}

/// Splits items by winner slot: an item at index `i` goes to the partition of `winners[i]`.
/// Items keep their relative order within a partition.
pub fn partition_by_winner<'a, T>(items: &[&'a T], winners: &[usize]) -> BTreeMap<usize, Vec<&'a T>> {
    items.iter().zip(winners.iter()).fold(BTreeMap::new(), |mut acc, (&item, &winner)| {
        acc.entry(winner).or_insert_with(Vec::new).push(item);
        acc
    })
}
