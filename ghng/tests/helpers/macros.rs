// See https://stackoverflow.com/questions/34662713/how-can-i-create-parameterized-tests-in-rust
macro_rules! with_dollar_sign {
    ($($body:tt)*) => {
        macro_rules! __with_dollar_sign { $($body)* }
        __with_dollar_sign!($);
    }
}

#[macro_export]
macro_rules! parameterized_test {
    ($name:ident, $args:pat, $body:tt) => {
        with_dollar_sign! {
        ($d:tt) => {
            macro_rules! $name {
                ($d($d pname:ident: $d values:expr,)*) => {
                    mod $name {
                        use super::*;
                        $d(
                            #[test]
                            fn $d pname() {
                                let $args = $d values;
                                $body
                            }
                        )*
                    }}}}}
    };
}

/// Asserts that two float slices are equal within the given tolerance.
#[macro_export]
macro_rules! assert_vec_approx_eq {
    ($left:expr, $right:expr, $eps:expr) => {{
        let (left, right): (&[f64], &[f64]) = (&$left, &$right);
        assert_eq!(left.len(), right.len(), "lengths differ: {:?} vs {:?}", left, right);
        left.iter().zip(right.iter()).for_each(|(l, r)| {
            assert!((l - r).abs() < $eps, "values differ: {:?} vs {:?}", left, right);
        });
    }};
}
