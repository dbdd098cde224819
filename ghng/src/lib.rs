//! This crate provides a Growing Hierarchical Neural Gas: an unsupervised vector quantization
//! method which grows a topology preserving graph of prototypes over a sample set and then refines
//! every prototype's receptive field with its own graph, producing a tree of clusterings.
//!
//! # Example
//!
//! ```
//! use ghng::prelude::*;
//! use std::sync::Arc;
//!
//! let samples = (0..40)
//!     .map(|idx| {
//!         let offset = if idx % 2 == 0 { 0. } else { 10. };
//!         Sample::new(vec![offset + (idx % 5) as f64 * 0.1, offset + (idx % 7) as f64 * 0.1], idx % 2)
//!     })
//!     .collect::<Vec<_>>();
//!
//! let mut hierarchy = HierarchyBuilder::default()
//!     .with_gng_config(GngConfig { epochs: 5, max_units: 10, lambda: 20, ..GngConfig::default() })
//!     .with_max_levels(1)
//!     .with_seed(42)
//!     .with_logger(Arc::new(|_| {}))
//!     .build()
//!     .expect("valid configuration");
//!
//! let root = hierarchy.train(&samples).expect("training succeeds").expect("root is not pruned");
//! assert!(root.graph.active_count() >= 2);
//! assert_eq!(root.graph.winners.len(), samples.len());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod algorithms;
pub mod prelude;
pub mod utils;
