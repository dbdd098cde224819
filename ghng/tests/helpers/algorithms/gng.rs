use crate::algorithms::gng::{GngConfig, GngModel, GrowthState, Sample, Topology};
use crate::utils::{DefaultRandom, Float, Random};

pub fn create_test_config() -> GngConfig {
    GngConfig { epochs: 20, max_units: 20, lambda: 10, ..GngConfig::default() }
}

/// Creates samples scattered uniformly in a square with the given center and half size.
pub fn create_cluster(center: (Float, Float), half_size: Float, size: usize, label: i32, seed: u64) -> Vec<Sample> {
    let mut random = DefaultRandom::new_with_seed(seed);

    (0..size)
        .map(|_| {
            let x = center.0 + random.uniform_real(-half_size, half_size);
            let y = center.1 + random.uniform_real(-half_size, half_size);
            Sample::new(vec![x, y], label)
        })
        .collect()
}

/// Creates two well separated clusters: label 0 around (0, 0) and label 1 around (10, 10).
pub fn create_two_clusters(per_cluster: usize) -> Vec<Sample> {
    let mut samples = create_cluster((0., 0.), 1., per_cluster, 0, 1);
    samples.extend(create_cluster((10., 10.), 1., per_cluster, 1, 2));

    samples
}

/// Creates samples on the corners of a square with the given side.
pub fn create_square(side: Float) -> Vec<Sample> {
    vec![
        Sample::new(vec![0., 0.], 0),
        Sample::new(vec![side, 0.], 0),
        Sample::new(vec![side, side], 0),
        Sample::new(vec![0., side], 0),
    ]
}

/// Creates a topology with active slots at given positions and no edges.
pub fn create_topology(capacity: usize, positions: Vec<Vec<Float>>) -> Topology {
    let dimension = positions.first().map_or(2, |position| position.len());
    let mut topology = Topology::new(dimension, capacity, 5);

    positions.into_iter().enumerate().for_each(|(slot, position)| {
        topology.activate(slot, position).unwrap();
    });

    topology
}

/// Checks structural invariants of the arena.
pub fn assert_topology_invariants(topology: &Topology) {
    assert!(topology.active_count() <= topology.capacity());

    topology.edges().into_iter().for_each(|(a, b, age)| {
        assert_ne!(a, b);
        assert!(topology.is_active(a), "edge references inactive slot {a}");
        assert!(topology.is_active(b), "edge references inactive slot {b}");
        assert!(age > 0 && age <= topology.a_max());
        assert_eq!(topology.age(a, b), topology.age(b, a));
    });
}

/// Creates a trained graph stub with active units at given positions.
pub fn create_test_model(positions: Vec<Vec<Float>>, winners: Vec<usize>) -> GngModel {
    let capacity = positions.len().max(2);

    GngModel {
        config: create_test_config(),
        num_steps: 10,
        topology: create_topology(capacity, positions),
        winners,
        growth: GrowthState::Growing,
        mqe_history: vec![],
    }
}
