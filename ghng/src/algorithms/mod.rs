//! This module contains the algorithms implemented by the crate.

pub mod ghng;
pub mod gng;
pub mod math;
