use tracing::debug;

use crate::util::parens::closing_paren_index;

/// Characters that always stand alone as a token.
const SYMBOLS: [char; 6] = ['-', '+', '*', '/', '(', ')'];

/// Rewrites a raw expression into an explicit, whitespace-delimited form.
///
/// Runs the normalization passes in their fixed order. Each pass consumes the
/// output of the previous one:
///
/// 1. [`pad_symbols`]
/// 2. [`insert_implicit_multiplication`]
/// 3. [`fold_negative_literals`]
/// 4. [`fold_negative_groups`]
///
/// The result has exactly one space between tokens and can be split on
/// whitespace directly.
///
/// # Example
/// ```
/// use stackcalc::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("2(3+4)"), "2 * ( 3 + 4 )");
/// assert_eq!(normalize("-5+3"), "-5 + 3");
/// assert_eq!(normalize("3-(2)"), "3 + ( -1 * ( 2 ) )");
/// ```
pub fn normalize(raw: &str) -> String {
    let spaced = pad_symbols(raw);
    let explicit = insert_implicit_multiplication(&spaced);
    let literals = fold_negative_literals(&explicit);
    let groups = fold_negative_groups(&literals);
    let normalized = collapse_whitespace(&groups);

    debug!(raw, normalized = normalized.as_str(), "normalized expression");

    normalized
}

/// Surrounds every operator and parenthesis with single spaces.
///
/// Whitespace runs are collapsed to one space and the ends are trimmed.
///
/// # Example
/// ```
/// use stackcalc::interpreter::normalizer::pad_symbols;
///
/// assert_eq!(pad_symbols("  (1+2)*  3"), "( 1 + 2 ) * 3");
/// ```
pub fn pad_symbols(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() * 3);

    for c in raw.chars() {
        if SYMBOLS.contains(&c) {
            spaced.push(' ');
            spaced.push(c);
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }

    collapse_whitespace(&spaced)
}

/// Makes juxtaposition explicit by inserting `*`.
///
/// A `*` goes between `)` and `(`, between a number and `(`, and between `)`
/// and a number. Expects the output of [`pad_symbols`].
///
/// # Example
/// ```
/// use stackcalc::interpreter::normalizer::insert_implicit_multiplication;
///
/// assert_eq!(insert_implicit_multiplication("( 2 ) ( 3 )"), "( 2 ) * ( 3 )");
/// assert_eq!(insert_implicit_multiplication("2 ( 3 )"), "2 * ( 3 )");
/// assert_eq!(insert_implicit_multiplication("( 3 ) 2"), "( 3 ) * 2");
/// assert_eq!(insert_implicit_multiplication("2 - ( 3 )"), "2 - ( 3 )");
/// ```
pub fn insert_implicit_multiplication(spaced: &str) -> String {
    let words: Vec<&str> = spaced.split_whitespace().collect();
    let mut explicit = Vec::with_capacity(words.len() * 2);

    for (i, &word) in words.iter().enumerate() {
        if i > 0 && is_juxtaposed(words[i - 1], word) {
            explicit.push("*");
        }
        explicit.push(word);
    }

    explicit.join(" ")
}

/// Fuses a unary minus onto the number that follows it.
///
/// A `-` counts as unary when it starts the text or directly follows another
/// operator or an opening parenthesis. A binary minus is left alone.
///
/// # Example
/// ```
/// use stackcalc::interpreter::normalizer::fold_negative_literals;
///
/// assert_eq!(fold_negative_literals("- 5 + 3"), "-5 + 3");
/// assert_eq!(fold_negative_literals("2 * ( - 1.5 )"), "2 * ( -1.5 )");
/// assert_eq!(fold_negative_literals("4 - 1"), "4 - 1");
/// ```
pub fn fold_negative_literals(text: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut folded: Vec<String> = Vec::with_capacity(words.len());
    let mut i = 0;

    while i < words.len() {
        let word = words[i];
        let unary = i == 0 || is_operator_or_open(words[i - 1]);

        if word == "-"
           && unary
           && let Some(&number) = words.get(i + 1)
           && starts_with_digit(number)
        {
            folded.push(format!("-{number}"));
            i += 2;
            continue;
        }

        folded.push(word.to_string());
        i += 1;
    }

    folded.join(" ")
}

/// Rewrites `- ( ... )` as `( -1 * ( ... ) )`.
///
/// The extent of the group is found with [`closing_paren_index`], so nested
/// groups are carried along whole. When a value precedes the minus, a `+` is
/// inserted so the rewritten group stays an additive term: `3 - ( 2 )`
/// becomes `3 + ( -1 * ( 2 ) )`. No `+` is added after an operator or an
/// opening parenthesis.
///
/// # Example
/// ```
/// use stackcalc::interpreter::normalizer::fold_negative_groups;
///
/// assert_eq!(fold_negative_groups("- ( 2 )").trim(), "( -1 * ( 2 ) )");
/// assert_eq!(fold_negative_groups("4 * - ( 2 )").trim(), "4 * ( -1 * ( 2 ) )");
/// ```
pub fn fold_negative_groups(text: &str) -> String {
    let mut text = text.to_string();
    let mut i = 0;

    while i + 2 < text.len() {
        let bytes = text.as_bytes();
        let negates_group = bytes[i] == b'-' && bytes[i + 1] == b' ' && bytes[i + 2] == b'(';

        if negates_group && let Some(close) = closing_paren_index(&text, i + 2) {
            let before = &text[..i];
            let group = &text[i + 2..=close];
            let after = &text[close + 1..];
            let connective = !before.trim().is_empty() && !(i >= 2 && is_binding(bytes[i - 2]));

            let mut rewritten = String::with_capacity(text.len() + 16);
            rewritten.push_str(before);
            if connective {
                rewritten.push_str(" + ");
            }
            rewritten.push_str("( -1 * ");
            rewritten.push_str(group);
            rewritten.push_str(" ) ");
            rewritten.push_str(after);

            text = rewritten;
        }

        i += 1;
    }

    text
}

/// Collapses whitespace runs to one space and trims both ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Two adjacent tokens that multiply without an explicit operator.
fn is_juxtaposed(previous: &str, next: &str) -> bool {
    match (previous, next) {
        (")", "(") => true,
        (")", next) => starts_with_digit(next),
        (previous, "(") => ends_with_digit(previous),
        _ => false,
    }
}

fn is_operator_or_open(word: &str) -> bool {
    matches!(word, "+" | "-" | "*" | "/" | "(")
}

/// Tokens after which a negated group needs no `+` connective.
const fn is_binding(byte: u8) -> bool {
    matches!(byte, b'+' | b'-' | b'*' | b'/' | b'(')
}

fn starts_with_digit(word: &str) -> bool {
    word.as_bytes().first().is_some_and(u8::is_ascii_digit)
}

fn ends_with_digit(word: &str) -> bool {
    word.as_bytes().last().is_some_and(u8::is_ascii_digit)
}
