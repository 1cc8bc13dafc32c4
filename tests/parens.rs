use stackcalc::util::parens::{closing_paren_index, depth_profile, is_balanced};

#[test]
fn depth_profile_tracks_every_byte() {
    let profile: Vec<(usize, i64)> = depth_profile("(()").collect();
    assert_eq!(profile, [(0, 1), (1, 2), (2, 1)]);

    let negative: Vec<i64> = depth_profile(")(").map(|(_, depth)| depth).collect();
    assert_eq!(negative, [-1, 0]);
}

#[test]
fn balance_requires_non_negative_depth_and_zero_end() {
    assert!(is_balanced(""));
    assert!(is_balanced("((1)(2))"));
    assert!(!is_balanced("())("));
    assert!(!is_balanced("(("));
}

#[test]
fn closing_index_skips_nested_groups() {
    let text = "( ( 1 ) + ( 2 ) ) ( 3 )";
    assert_eq!(closing_paren_index(text, 0), Some(16));
    assert_eq!(closing_paren_index(text, 2), Some(6));
    assert_eq!(closing_paren_index(text, 18), Some(22));
}

#[test]
fn closing_index_requires_an_open_paren() {
    assert_eq!(closing_paren_index("1 + 2", 0), None);
    assert_eq!(closing_paren_index("( 1 + 2", 0), None);
    assert_eq!(closing_paren_index("()", 5), None);
}
