use super::*;
use crate::algorithms::ghng::Hierarchy;
use crate::helpers::utils::create_test_environment;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]
    #[test]
    fn can_build_consistent_tree(
        samples in generate_samples(2..80),
        config in generate_config(),
        max_levels in 0_usize..3,
        seed in any::<u64>(),
    ) {
        let mut hierarchy = Hierarchy::new(config, max_levels, create_test_environment(seed));

        let root = hierarchy.train(&samples).unwrap();
        let root = root.expect("root level is always trained with at least two samples");

        prop_assert_eq!(root.graph.winners.len(), samples.len());
        prop_assert!(root.depth() <= max_levels + 1);

        for node in root.nodes() {
            let win_counts = node.win_counts();
            let active_slots = node.graph.active_slots();

            prop_assert!(node.level <= max_levels);
            prop_assert!(node.children.keys().all(|slot| active_slots.contains(slot)));

            if node.graph.active_count() == 2 {
                prop_assert!(node.children.is_empty());
            }

            for (slot, child) in node.children.iter() {
                if let Some(child) = child {
                    prop_assert_eq!(child.level, node.level + 1);
                    prop_assert_eq!(child.graph.winners.len(), win_counts[slot]);
                }
            }
        }
    }
}
