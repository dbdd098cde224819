use crate::algorithms::gng::{GngConfig, Sample};
use proptest::prelude::*;

mod hierarchy_invariants;

prop_compose! {
    /// Generates a rectangular sample set with labels in 0..3.
    fn generate_samples(sizes: std::ops::Range<usize>)
    (dimension in 1_usize..4, size in sizes)
    (samples in prop::collection::vec(
        (prop::collection::vec(-100_f64..100., dimension), 0_i32..3),
        size
    )) -> Vec<Sample> {
        samples.into_iter().map(|(features, label)| Sample::new(features, label)).collect()
    }
}

prop_compose! {
    fn generate_config()
    (
        epochs in 1_usize..4,
        max_units in 2_usize..15,
        lambda in 1_usize..20,
        a_max in 1_usize..30,
        epsilon_b in 0.01_f64..0.5,
        alpha in 0.1_f64..0.9,
        tau in -1_f64..1.,
    ) -> GngConfig {
        GngConfig { epochs, max_units, lambda, epsilon_b, alpha, a_max, tau, ..GngConfig::default() }
    }
}
