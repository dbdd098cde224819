//! Provides implementation of Growing Hierarchical Neural Gas: a tree of growing neural gas graphs
//! where every unit of a graph may be refined by a child graph trained on its receptive field.
//!
//! The driver trains a flat graph for the given sample set, partitions samples by their winner
//! unit and recurses into each partition with the next level. A branch is pruned when it is too
//! deep, has too few samples for the input dimension, or its graph cannot be seeded. A graph which
//! ends up with exactly two units is kept as a leaf and is not expanded further.

use crate::algorithms::gng::*;
use crate::utils::*;

mod builder;
pub use self::builder::*;

mod driver;
pub use self::driver::*;

mod model;
pub use self::model::*;
