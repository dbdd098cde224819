//! This module reimports commonly used types.

pub use crate::algorithms::gng::GngConfig;
pub use crate::algorithms::gng::GngModel;
pub use crate::algorithms::gng::GrowthState;
pub use crate::algorithms::gng::Input;
pub use crate::algorithms::gng::Nearest;
pub use crate::algorithms::gng::Sample;
pub use crate::algorithms::gng::Topology;
pub use crate::algorithms::gng::train_gng;

pub use crate::algorithms::ghng::Hierarchy;
pub use crate::algorithms::ghng::HierarchyBuilder;
pub use crate::algorithms::ghng::HierarchyNode;
pub use crate::algorithms::ghng::LevelPrototype;

pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::{GenericError, GenericResult, TrainingError};
pub use crate::utils::{Random, RandomGen};
