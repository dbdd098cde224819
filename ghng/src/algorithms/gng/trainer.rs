#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gng/trainer_test.rs"]
mod trainer_test;

use super::*;
use crate::algorithms::math::midpoint;
use crate::utils::{Random, TrainingError};
use rand::prelude::SliceRandom;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Specifies whether the graph is still allowed to grow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GrowthState {
    /// A unit is inserted every `lambda` steps.
    Growing,
    /// Growth was rolled back and disabled at the given step.
    Halted {
        /// A step when growth was stopped.
        step: usize,
    },
}

/// A mean quantization error measured during training.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MqeSample {
    /// A step when the error was measured.
    pub step: usize,
    /// Amount of active units at that step.
    pub units: usize,
    /// Mean quantization error.
    pub mqe: Float,
}

/// A deep copy of the live state taken right before an insertion.
struct Snapshot {
    topology: Topology,
    winners: Vec<Option<usize>>,
    units: usize,
    mqe: Float,
}

/// Trains a single flat graph over a sample set.
///
/// The trainer is created already seeded with two units (see [`Trainer::new`]), each
/// [`Trainer::step`] runs one competitive learning step and [`Trainer::run`] consumes the
/// trainer after the whole step budget is spent.
pub struct Trainer<'a, I: Input> {
    config: &'a GngConfig,
    samples: &'a [I],
    order: Vec<usize>,
    topology: Topology,
    winners: Vec<Option<usize>>,
    step: usize,
    num_steps: usize,
    growth: GrowthState,
    snapshot: Option<Snapshot>,
    mqe_history: Vec<MqeSample>,
}

impl<'a, I: Input> Trainer<'a, I> {
    /// Creates a new instance of `Trainer`: picks two distinct samples as initial units joined by
    /// an edge and draws the order in which samples are visited.
    pub fn new(config: &'a GngConfig, samples: &'a [I], random: &mut dyn Random) -> Result<Self, TrainingError> {
        if config.lambda == 0 {
            return Err(TrainingError::InvalidParameter { name: "lambda", message: "should be positive" });
        }

        if samples.len() < 2 {
            return Err(TrainingError::InsufficientSamples { found: samples.len() });
        }

        let dimension = samples[0].weights().len();
        if let Some(found) = samples.iter().map(|sample| sample.weights().len()).find(|&len| len != dimension) {
            return Err(TrainingError::DimensionMismatch { expected: dimension, found });
        }

        let first = random.uniform_index(samples.len());
        let second = loop {
            let idx = random.uniform_index(samples.len());
            if idx != first {
                break idx;
            }
        };

        let mut topology = Topology::new(dimension, config.max_units, config.a_max);
        topology.activate(0, samples[first].weights().to_vec())?;
        topology.activate(1, samples[second].weights().to_vec())?;
        topology.connect(0, 1)?;

        let mut order = (0..samples.len()).collect::<Vec<_>>();
        order.shuffle(random.get_rng());

        Ok(Self {
            config,
            samples,
            order,
            topology,
            winners: vec![None; samples.len()],
            step: 0,
            num_steps: config.num_steps(samples.len()),
            growth: GrowthState::Growing,
            snapshot: None,
            mqe_history: vec![],
        })
    }

    /// Returns current graph.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Returns winners recorded so far, `None` for samples not processed yet.
    pub fn winners(&self) -> &[Option<usize>] {
        self.winners.as_slice()
    }

    /// Returns amount of steps done.
    pub fn current_step(&self) -> usize {
        self.step
    }

    /// Returns index of the sample processed on the latest step.
    pub fn last_sample(&self) -> Option<usize> {
        self.step.checked_sub(1).map(|step| self.order[step % self.order.len()])
    }

    /// Returns growth state.
    pub fn growth(&self) -> GrowthState {
        self.growth
    }

    /// Runs one training step. Returns false without doing anything when the step budget is spent.
    pub fn step(&mut self) -> Result<bool, TrainingError> {
        if self.step >= self.num_steps {
            return Ok(false);
        }

        self.step += 1;

        let lambda = self.config.lambda;
        let sample_idx = self.order[(self.step - 1) % self.order.len()];
        self.adapt(sample_idx)?;

        if self.step % lambda == 0 && self.growth == GrowthState::Growing {
            self.grow()?;
        }

        if self.step % (2 * lambda) == (3 * lambda) / 2 {
            self.check_growth();
        }

        self.topology.decay_errors(self.config.decay);

        Ok(true)
    }

    /// Runs all remaining steps and returns trained graph.
    pub fn run(mut self) -> Result<GngModel, TrainingError> {
        while self.step()? {}

        self.finish()
    }

    /// Competitive learning on one sample.
    fn adapt(&mut self, sample_idx: usize) -> Result<(), TrainingError> {
        let samples = self.samples;
        let sample = samples[sample_idx].weights();

        let (Some(s1), s2) = self.topology.nearest_two(sample) else {
            return Err(TrainingError::EmptyGraph);
        };

        self.winners[sample_idx] = Some(s1.slot);

        self.topology.age_edges_from(s1.slot);

        if let Some(unit) = self.topology.unit_mut(s1.slot) {
            unit.error += s1.distance;
        }

        let (epsilon_b, epsilon_n) = (self.config.epsilon_b, self.config.epsilon_n);
        self.topology.adapt(s1.slot, sample, epsilon_b);
        self.topology.neighbours(s1.slot).into_iter().for_each(|neighbour| {
            self.topology.adapt(neighbour, sample, epsilon_n);
        });

        if let Some(s2) = s2 {
            self.topology.connect(s1.slot, s2.slot)?;
        }

        self.topology.prune_isolated();

        Ok(())
    }

    /// Remembers the state and inserts a new unit if capacity allows.
    fn grow(&mut self) -> Result<(), TrainingError> {
        let units = self.topology.active_count();
        let Some(mqe) = self.topology.mqe() else {
            return Ok(());
        };

        self.mqe_history.push(MqeSample { step: self.step, units, mqe });
        self.snapshot = Some(Snapshot { topology: self.topology.clone(), winners: self.winners.clone(), units, mqe });

        if units < self.config.max_units {
            self.insert_unit()?;
        }

        Ok(())
    }

    /// Inserts a unit halfway between the unit with the highest error and its neighbour with the
    /// highest error. Returns slot of the new unit or `None` if there is no room or no neighbour.
    fn insert_unit(&mut self) -> Result<Option<usize>, TrainingError> {
        let Some(q) = self.topology.max_error_slot() else {
            return Ok(None);
        };

        let Some(f) = self.topology.max_error_neighbour(q) else {
            return Ok(None);
        };

        if self.topology.free_slot().is_none() {
            return Ok(None);
        }

        let position = match (self.topology.unit(q), self.topology.unit(f)) {
            (Some(q), Some(f)) => midpoint(q.position.as_slice(), f.position.as_slice()),
            _ => return Err(TrainingError::InvalidSlot { slot: q }),
        };

        let new = self.topology.activate_free(position)?;

        self.topology.disconnect(q, f);
        self.topology.connect(q, new)?;
        self.topology.connect(f, new)?;

        let alpha = self.config.alpha;
        let q_error = self.topology.unit_mut(q).map_or(0., |unit| {
            unit.error *= alpha;
            unit.error
        });

        if let Some(unit) = self.topology.unit_mut(f) {
            unit.error *= alpha;
        }

        if let Some(unit) = self.topology.unit_mut(new) {
            unit.error = q_error;
        }

        Ok(Some(new))
    }

    /// Compares current MQE with the one remembered before the latest insertion and stops growth
    /// if the graph grew without enough improvement.
    fn check_growth(&mut self) {
        if self.growth != GrowthState::Growing {
            return;
        }

        let Some((old_units, old_mqe)) = self.snapshot.as_ref().map(|snapshot| (snapshot.units, snapshot.mqe)) else {
            return;
        };

        let units = self.topology.active_count();
        let Some(mqe) = self.topology.mqe() else {
            return;
        };

        self.mqe_history.push(MqeSample { step: self.step, units, mqe });

        if units <= old_units {
            return;
        }

        // NOTE zero previous error gives no meaningful ratio: keep growing
        if let Ok(ratio) = improvement_ratio(old_mqe, mqe) {
            if ratio < self.config.tau {
                self.rollback();
            }
        }
    }

    /// Restores the state remembered before the latest insertion and disables growth.
    fn rollback(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            self.topology = snapshot.topology;
            self.winners = snapshot.winners;
        }

        self.growth = GrowthState::Halted { step: self.step };
    }

    /// Builds trained graph. Samples which have no winner (processed only before a rolled back
    /// period) or whose winner was removed later are assigned to their nearest active unit.
    fn finish(self) -> Result<GngModel, TrainingError> {
        let topology = self.topology;
        let winners = self
            .winners
            .iter()
            .zip(self.samples.iter())
            .map(|(winner, sample)| match winner {
                Some(slot) if topology.is_active(*slot) => Ok(*slot),
                _ => topology.nearest(sample.weights()).map(|nearest| nearest.slot).ok_or(TrainingError::EmptyGraph),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GngModel {
            config: self.config.clone(),
            num_steps: self.num_steps,
            topology,
            winners,
            growth: self.growth,
            mqe_history: self.mqe_history,
        })
    }
}

/// Returns relative MQE improvement: `(old - new) / |old|`.
pub fn improvement_ratio(old_mqe: Float, new_mqe: Float) -> Result<Float, TrainingError> {
    if old_mqe == 0. { Err(TrainingError::DegenerateDivision) } else { Ok((old_mqe - new_mqe) / old_mqe.abs()) }
}

/// Trains a flat graph over the samples.
pub fn train_gng<I: Input>(
    config: &GngConfig,
    samples: &[I],
    random: &mut dyn Random,
) -> Result<GngModel, TrainingError> {
    Trainer::new(config, samples, random)?.run()
}
