use stackcalc::interpreter::normalizer::{
    collapse_whitespace,
    fold_negative_groups,
    fold_negative_literals,
    insert_implicit_multiplication,
    normalize,
    pad_symbols,
};

#[test]
fn padding_separates_every_symbol() {
    assert_eq!(pad_symbols("2+3*4"), "2 + 3 * 4");
    assert_eq!(pad_symbols("(1.5)/(2-1)"), "( 1.5 ) / ( 2 - 1 )");
    assert_eq!(pad_symbols("   12 \t+ 3  "), "12 + 3");
    assert_eq!(pad_symbols(""), "");
}

#[test]
fn whitespace_collapses_to_single_spaces() {
    assert_eq!(collapse_whitespace("  a \t b\n c  "), "a b c");
}

#[test]
fn juxtaposition_becomes_multiplication() {
    assert_eq!(insert_implicit_multiplication("( 1 ) ( 2 ) ( 3 )"), "( 1 ) * ( 2 ) * ( 3 )");
    assert_eq!(insert_implicit_multiplication("2.5 ( 4 )"), "2.5 * ( 4 )");
    assert_eq!(insert_implicit_multiplication("( 4 ) 2.5"), "( 4 ) * 2.5");
    assert_eq!(insert_implicit_multiplication("2 + ( 4 ) - 1"), "2 + ( 4 ) - 1");
}

#[test]
fn unary_minus_folds_into_literals() {
    assert_eq!(fold_negative_literals("- 1 - 2"), "-1 - 2");
    assert_eq!(fold_negative_literals("3 + - 2"), "3 + -2");
    assert_eq!(fold_negative_literals("3 / - 2.5"), "3 / -2.5");
    assert_eq!(fold_negative_literals("( - 7 )"), "( -7 )");
    assert_eq!(fold_negative_literals("( 1 ) - 7"), "( 1 ) - 7");
}

#[test]
fn unary_minus_before_a_group_becomes_a_product() {
    assert_eq!(normalize("-(2)"), "( -1 * ( 2 ) )");
    assert_eq!(normalize("-(1+(2))"), "( -1 * ( 1 + ( 2 ) ) )");
    assert_eq!(normalize("2/-(3)"), "2 / ( -1 * ( 3 ) )");
}

#[test]
fn negated_group_after_a_value_gets_a_connective() {
    assert_eq!(normalize("3-(2)"), "3 + ( -1 * ( 2 ) )");
    assert_eq!(normalize("(3)-(2)"), "( 3 ) + ( -1 * ( 2 ) )");
    assert_eq!(collapse_whitespace(&fold_negative_groups("5 - ( 1 ) - ( 2 )")),
               "5 + ( -1 * ( 1 ) ) + ( -1 * ( 2 ) )");
}

#[test]
fn negated_group_inside_a_group_gets_no_connective() {
    assert_eq!(normalize("(-(2))"), "( ( -1 * ( 2 ) ) )");
    assert_eq!(normalize("-(-(2))"), "( -1 * ( ( -1 * ( 2 ) ) ) )");
}

#[test]
fn passes_run_in_order() {
    assert_eq!(normalize("-2(3)"), "-2 * ( 3 )");
    assert_eq!(normalize("-(2)(3)"), "( -1 * ( 2 ) ) * ( 3 )");
    assert_eq!(normalize("(2)-3"), "( 2 ) - 3");
}
