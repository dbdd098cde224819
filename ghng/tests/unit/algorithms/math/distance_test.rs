use super::*;

parameterized_test! {can_calculate_squared_euclidean, (a, b, expected), {
    assert_eq!(squared_euclidean(a.as_slice(), b.as_slice()), expected);
}}

can_calculate_squared_euclidean! {
    case01_same: (vec![1., 2.], vec![1., 2.], 0.),
    case02_axis: (vec![0., 0.], vec![3., 0.], 9.),
    case03_diagonal: (vec![0., 0.], vec![3., 4.], 25.),
    case04_three_dims: (vec![1., 1., 1.], vec![2., 3., 4.], 14.),
    case05_empty: (Vec::<Float>::new(), Vec::<Float>::new(), 0.),
}

parameterized_test! {can_blend_towards_target, (position, target, rate, expected), {
    let mut position: Vec<Float> = position;
    blend(position.as_mut_slice(), target.as_slice(), rate);

    assert_vec_approx_eq!(position, expected, 1E-12);
}}

can_blend_towards_target! {
    case01_half: (vec![0., 0.], vec![2., 4.], 0.5, vec![1., 2.]),
    case02_small: (vec![1., 1.], vec![11., 1.], 0.1, vec![2., 1.]),
    case03_zero: (vec![1., 1.], vec![5., 5.], 0., vec![1., 1.]),
    case04_full: (vec![1., 1.], vec![5., 5.], 1., vec![5., 5.]),
}

#[test]
fn can_calculate_midpoint() {
    assert_eq!(midpoint(&[0., 2.], &[4., -2.]), vec![2., 0.]);
}
