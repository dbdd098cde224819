#[cfg(test)]
#[path = "../../../tests/unit/algorithms/gng/config_test.rs"]
mod config_test;

use crate::utils::{Float, GenericError, GenericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Growing Neural Gas hyper parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GngConfig {
    /// Amount of passes over the sample set: the run takes `epochs * samples` steps.
    pub epochs: usize,
    /// Arena capacity: maximum amount of simultaneously active units.
    pub max_units: usize,
    /// A unit is inserted every `lambda` steps while growth is enabled.
    pub lambda: usize,
    /// Learning rate of the winner, 0 < epsilon_b < 1.
    pub epsilon_b: Float,
    /// Learning rate of the winner's neighbours, 0 < epsilon_n < 1.
    pub epsilon_n: Float,
    /// Error reduction factor applied on insertion, 0 < alpha < 1.
    pub alpha: Float,
    /// Edge lifetime: a refreshed edge gets this age and is removed when it is aged down to zero.
    pub a_max: usize,
    /// Error decay factor applied to all units every step, 0 < decay < 1.
    pub decay: Float,
    /// Minimum relative MQE improvement required to keep growing.
    pub tau: Float,
}

impl Default for GngConfig {
    fn default() -> Self {
        Self {
            epochs: 20,
            max_units: 1000,
            lambda: 50,
            epsilon_b: 0.05,
            epsilon_n: 0.001,
            alpha: 0.5,
            a_max: 50,
            decay: 0.995,
            tau: 0.01,
        }
    }
}

impl GngConfig {
    /// Checks whether parameters are in their valid ranges.
    pub fn validate(&self) -> GenericResult<()> {
        let in_unit_interval = |value: Float| value > 0. && value < 1.;

        let mut errors: Vec<GenericError> = vec![];

        if self.epochs == 0 {
            errors.push("epochs should be positive".into());
        }

        if self.max_units < 2 {
            errors.push(format!("max units should be at least 2, got {}", self.max_units).into());
        }

        if self.lambda == 0 {
            errors.push("lambda should be positive".into());
        }

        if self.a_max == 0 {
            errors.push("a_max should be positive".into());
        }

        [("epsilon_b", self.epsilon_b), ("epsilon_n", self.epsilon_n), ("alpha", self.alpha), ("decay", self.decay)]
            .into_iter()
            .filter(|(_, value)| !in_unit_interval(*value))
            .for_each(|(name, value)| errors.push(format!("{name} should be in (0, 1) range, got {value}").into()));

        if !self.tau.is_finite() {
            errors.push("tau should be finite".into());
        }

        if errors.is_empty() { Ok(()) } else { Err(GenericError::join_many(&errors, ", ").into()) }
    }

    /// Returns amount of steps for the given amount of samples.
    pub fn num_steps(&self, num_samples: usize) -> usize {
        self.epochs * num_samples
    }
}
