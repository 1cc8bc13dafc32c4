/// Yields the parenthesis depth after every byte of `text`.
///
/// Depth starts at zero, goes up by one on `(` and down by one on `)`. Every
/// byte produces an item `(index, depth)`, so a caller can locate exactly where
/// the depth changes. The depth may go negative; the scan does not stop.
///
/// # Example
/// ```
/// use stackcalc::util::parens::depth_profile;
///
/// let depths: Vec<i64> = depth_profile("(a)").map(|(_, depth)| depth).collect();
/// assert_eq!(depths, [1, 1, 0]);
/// ```
pub fn depth_profile(text: &str) -> impl Iterator<Item = (usize, i64)> + '_ {
    text.bytes().enumerate().scan(0_i64, |depth, (index, byte)| {
                                match byte {
                                    b'(' => *depth += 1,
                                    b')' => *depth -= 1,
                                    _ => {},
                                }
                                Some((index, *depth))
                            })
}

/// Returns `true` if the depth never drops below zero and ends at zero.
///
/// # Example
/// ```
/// use stackcalc::util::parens::is_balanced;
///
/// assert!(is_balanced("(1 + (2))"));
/// assert!(!is_balanced(")1 + 2("));
/// assert!(!is_balanced("((1)"));
/// ```
pub fn is_balanced(text: &str) -> bool {
    let mut last = 0;
    for (_, depth) in depth_profile(text) {
        if depth < 0 {
            return false;
        }
        last = depth;
    }
    last == 0
}

/// Returns the byte index of the `)` that closes the group opened at `open`.
///
/// The scan starts at `open` and stops where the depth first returns to zero,
/// so nested groups are skipped over. Returns `None` if `open` is not a `(` or
/// the group is never closed.
///
/// # Example
/// ```
/// use stackcalc::util::parens::closing_paren_index;
///
/// let text = "2 * ( 1 + ( 3 ) ) - 4";
/// assert_eq!(closing_paren_index(text, 4), Some(16));
/// assert_eq!(closing_paren_index(text, 10), Some(14));
/// assert_eq!(closing_paren_index("( 1", 0), None);
/// ```
pub fn closing_paren_index(text: &str, open: usize) -> Option<usize> {
    if text.as_bytes().get(open) != Some(&b'(') {
        return None;
    }

    depth_profile(&text[open..]).find(|&(_, depth)| depth == 0)
                                .map(|(offset, _)| open + offset)
}
