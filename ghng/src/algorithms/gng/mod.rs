//! Provides implementation of Growing Neural Gas: a competitive learning vector quantization
//! which grows a topology graph of prototypes by error driven insertion.
//!
//! # Algorithm
//!
//! Training starts with two units seeded from random samples and joined by an edge. Every step
//! takes the next sample of a shuffled, epoch repeating order and:
//!
//! 1. finds the nearest (`s1`) and the second nearest (`s2`) unit;
//! 2. ages edges of `s1`, accumulates the squared distance into its error and moves `s1` and its
//!    topological neighbours towards the sample;
//! 3. refreshes the `s1 - s2` edge and removes units left without edges;
//! 4. every `lambda` steps inserts a unit between the unit with the highest error and its worst
//!    neighbour;
//! 5. periodically compares the mean quantization error (MQE) with the one before the latest
//!    insertion: if growth does not pay off anymore, the graph is rolled back and growth stops.
//!
//! Units live in a fixed capacity arena (see [`Topology`]), so slot indices are stable for the
//! whole run and can be used as keys by the hierarchical driver.

use crate::utils::Float;

mod config;
pub use self::config::*;

mod model;
pub use self::model::*;

mod query;
pub use self::query::*;

mod topology;
pub use self::topology::*;

mod trainer;
pub use self::trainer::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents an input for the graph.
pub trait Input {
    /// Returns weights.
    fn weights(&self) -> &[Float];
}

impl<T: Input + ?Sized> Input for &T {
    fn weights(&self) -> &[Float] {
        (**self).weights()
    }
}

impl Input for [Float] {
    fn weights(&self) -> &[Float] {
        self
    }
}

impl Input for Vec<Float> {
    fn weights(&self) -> &[Float] {
        self.as_slice()
    }
}

/// An immutable feature vector with an attached label. The label is not used by the clustering,
/// it is carried along to let callers interpret receptive fields.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    features: Vec<Float>,
    label: i32,
}

impl Sample {
    /// Creates a new instance of `Sample`.
    pub fn new(features: Vec<Float>, label: i32) -> Self {
        Self { features, label }
    }

    /// Returns feature vector.
    pub fn features(&self) -> &[Float] {
        self.features.as_slice()
    }

    /// Returns label.
    pub fn label(&self) -> i32 {
        self.label
    }

    /// Returns dimension of the feature vector.
    pub fn dimension(&self) -> usize {
        self.features.len()
    }
}

impl Input for Sample {
    fn weights(&self) -> &[Float] {
        self.features.as_slice()
    }
}
