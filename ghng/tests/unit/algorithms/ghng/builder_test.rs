use super::*;
use crate::helpers::algorithms::gng::{create_test_config, create_two_clusters};
use crate::helpers::utils::create_collecting_logger;
use crate::helpers::utils::random::FakeRandom;

#[test]
fn can_build_with_defaults() {
    let hierarchy = HierarchyBuilder::default().with_logger(Arc::new(|_| {})).build().unwrap();

    assert_eq!(hierarchy.max_levels(), 4);
    assert_eq!(hierarchy.config(), &GngConfig::default());
}

#[test]
fn can_reject_invalid_config() {
    let result = HierarchyBuilder::default()
        .with_gng_config(GngConfig { lambda: 0, ..GngConfig::default() })
        .with_logger(Arc::new(|_| {}))
        .build();

    assert_eq!(result.err().map(|err| err.to_string()), Some("lambda should be positive".to_string()));
}

#[test]
fn can_log_configuration() {
    let (logger, messages) = create_collecting_logger();

    HierarchyBuilder::default().with_max_levels(2).with_logger(logger).build().unwrap();

    let messages = messages.lock().unwrap();
    assert_eq!(messages.len(), 2);
    assert!(messages[0].starts_with("configured hierarchy: max levels: 2, epochs: 20"));
}

#[test]
fn can_reproduce_hierarchy_with_seed() {
    let samples = create_two_clusters(20);
    let build = || {
        HierarchyBuilder::default()
            .with_gng_config(create_test_config())
            .with_max_levels(1)
            .with_seed(13)
            .with_logger(Arc::new(|_| {}))
            .build()
            .unwrap()
    };

    let first = build().train(&samples).unwrap().unwrap();
    let second = build().train(&samples).unwrap().unwrap();

    assert_eq!(first.graph.topology, second.graph.topology);
    assert_eq!(first.depth(), second.depth());
}

#[test]
fn can_use_custom_random() {
    let samples = vec![Sample::new(vec![0., 0.], 0), Sample::new(vec![1., 1.], 0), Sample::new(vec![5., 5.], 0)];
    let mut hierarchy = HierarchyBuilder::default()
        .with_gng_config(GngConfig { epochs: 1, ..create_test_config() })
        .with_random(Box::new(FakeRandom::new(vec![2, 0], vec![])))
        .with_seed(1)
        .with_max_levels(0)
        .with_logger(Arc::new(|_| {}))
        .build()
        .unwrap();

    let mut trainer_random = FakeRandom::new(vec![2, 0], vec![]);
    let expected = train_gng(&GngConfig { epochs: 1, ..create_test_config() }, samples.as_slice(), &mut trainer_random);

    let node = hierarchy.train(&samples).unwrap().unwrap();

    assert_eq!(node.graph.topology, expected.unwrap().topology);
}
