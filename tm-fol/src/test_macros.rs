#[macro_export]
macro_rules! assert_eq_sorted_vecs {
    ($left:expr, $right:expr) => {{
        match (&$left, &$right) {
            (left_val, right_val) => {
                let mut l = left_val.to_vec();
                let mut r = right_val.to_vec();
                l.sort();
                r.sort();
                assert_eq!(l, r)
            }
        }
    }};
    ($left:expr, $right:expr ,) => {
        $crate::assert_eq_sorted_vecs!($left, $right)
    };
}

#[macro_export]
macro_rules! assert_debug_string {
    ($expected:expr, $value:expr) => {{
        match (&$expected, &$value) {
            (expected_val, val) => assert_eq!(*expected_val, format!("{:?}", val)),
        }
    }};
    ($expected:expr, $value:expr ,) => {
        $crate::assert_debug_string!($expected, $value)
    };
}

/// Asserts that the prefix input `$input` becomes `$expected` after applying `$transform`.
#[macro_export]
macro_rules! assert_rewrite {
    ($expected:expr, $input:expr, $transform:expr) => {{
        let tree = $crate::parser::parse_prefix($input);
        assert_eq!($expected, $transform(&tree).to_string())
    }};
    ($expected:expr, $input:expr, $transform:expr ,) => {
        $crate::assert_rewrite!($expected, $input, $transform)
    };
}
