//! This module contains vector space related functionality shared by the algorithms.

mod distance;
pub use self::distance::*;
