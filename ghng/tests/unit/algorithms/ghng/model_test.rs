use super::*;
use crate::helpers::algorithms::gng::create_test_model;

fn create_node(level: usize, graph: GngModel, children: Vec<(usize, Option<HierarchyNode>)>) -> HierarchyNode {
    HierarchyNode { level, graph, children: children.into_iter().collect() }
}

/// Creates a tree:
/// - root (level 0): units at (0, 0), (10, 10), (20, 20), the last one never wins;
/// - left child (level 1) of slot 0: two units without children;
/// - right child (level 1) of slot 1: three units, its slot 1 is refined by a level 2 graph.
fn create_test_tree() -> HierarchyNode {
    let grandchild = create_node(2, create_test_model(vec![vec![10.5, 10.5], vec![11.5, 11.5]], vec![0, 1]), vec![]);
    let left = create_node(1, create_test_model(vec![vec![-1., 0.], vec![1., 0.]], vec![0, 1]), vec![]);
    let right = create_node(
        1,
        create_test_model(vec![vec![9., 9.], vec![11., 11.], vec![10., 12.]], vec![0, 1, 2]),
        vec![(0, None), (1, Some(grandchild)), (2, None)],
    );

    create_node(
        0,
        create_test_model(vec![vec![0., 0.], vec![10., 10.], vec![20., 20.]], vec![0, 0, 1, 1, 1]),
        vec![(0, Some(left)), (1, Some(right)), (2, None)],
    )
}

#[test]
fn can_navigate_children() {
    let root = create_test_tree();

    assert!(!root.is_leaf());
    assert!(root.child(2).is_none());
    assert!(root.child(5).is_none());
    assert!(root.child(0).is_some_and(HierarchyNode::is_leaf));
    assert!(root.child(1).is_some_and(|child| !child.is_leaf()));
}

#[test]
fn can_calculate_depth() {
    let root = create_test_tree();

    assert_eq!(root.depth(), 3);
    assert_eq!(root.child(0).map(HierarchyNode::depth), Some(1));
}

#[test]
fn can_walk_nodes_in_pre_order() {
    let root = create_test_tree();

    let nodes = root.nodes().into_iter().map(|node| (node.level, node.graph.active_count())).collect::<Vec<_>>();

    assert_eq!(nodes, vec![(0, 3), (1, 2), (1, 3), (2, 2)]);
}

#[test]
fn can_count_units_per_level() {
    let root = create_test_tree();

    assert_eq!(root.units_per_level().into_iter().collect::<Vec<_>>(), vec![(0, 3), (1, 5), (2, 2)]);
}

parameterized_test! {can_get_prototypes_at_level, (level, expected), {
    let root = create_test_tree();

    let prototypes = root
        .prototypes_at_level(level)
        .into_iter()
        .map(|prototype| (prototype.level, prototype.slot, prototype.position.to_vec(), prototype.wins))
        .collect::<Vec<_>>();

    assert_eq!(prototypes, expected);
}}

can_get_prototypes_at_level! {
    case01_root_skips_idle_unit: (0, vec![(0, 0, vec![0., 0.], 2), (0, 1, vec![10., 10.], 3)]),
    case02_first_level: (1, vec![
        (1, 0, vec![-1., 0.], 1), (1, 1, vec![1., 0.], 1),
        (1, 0, vec![9., 9.], 1), (1, 1, vec![11., 11.], 1), (1, 2, vec![10., 12.], 1),
    ]),
    case03_missing_level: (3, vec![]),
}

parameterized_test! {can_locate_query, (query, expected), {
    let root = create_test_tree();

    assert_eq!(root.locate(query.as_slice()), expected);
}}

can_locate_query! {
    case01_deepest: (vec![10.9, 10.9], vec![1, 1, 0]),
    case02_leaf_on_first_level: (vec![0.9, 0.], vec![0, 1]),
    case03_root_only: (vec![19., 19.], vec![2]),
}
