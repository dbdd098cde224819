#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.clone()).collect::<Vec<_>>().join(separator)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<TrainingError> for GenericError {
    fn from(value: TrainingError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

/// Specifies failures which can happen while a single graph is trained.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TrainingError {
    /// Less than two samples are available, so the initial pair of units cannot be seeded.
    InsufficientSamples {
        /// Amount of samples supplied.
        found: usize,
    },

    /// A unit was requested while every slot of the arena is occupied.
    CapacityExceeded {
        /// Arena capacity.
        capacity: usize,
    },

    /// Quantization improvement ratio cannot be computed as the previous error is zero.
    DegenerateDivision,

    /// Samples have inconsistent dimensionality.
    DimensionMismatch {
        /// Expected dimensionality.
        expected: usize,
        /// Found dimensionality.
        found: usize,
    },

    /// An arena operation was applied to a slot in a wrong state.
    InvalidSlot {
        /// Slot index.
        slot: usize,
    },

    /// No active unit is left to assign samples to.
    EmptyGraph,

    /// A hyper parameter makes training impossible.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },
}

impl Display for TrainingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientSamples { found } => {
                write!(f, "insufficient samples: at least 2 are required to seed a graph, found {found}")
            }
            Self::CapacityExceeded { capacity } => write!(f, "capacity exceeded: all {capacity} slots are active"),
            Self::DegenerateDivision => write!(f, "degenerate division: previous quantization error is zero"),
            Self::DimensionMismatch { expected, found } => {
                write!(f, "dimension mismatch: expected {expected}, found {found}")
            }
            Self::InvalidSlot { slot } => write!(f, "invalid slot operation: {slot}"),
            Self::EmptyGraph => write!(f, "graph has no active units"),
            Self::InvalidParameter { name, message } => write!(f, "invalid parameter {name}: {message}"),
        }
    }
}

impl std::error::Error for TrainingError {}
