use stackcalc::{
    error::ExpressionError,
    interpreter::validator::{check_data, check_operators, check_parentheses, validate},
};

#[test]
fn balanced_parentheses_pass() {
    assert_eq!(check_parentheses("((1)+(2))"), Ok(()));
    assert_eq!(check_parentheses("1+2"), Ok(()));
}

#[test]
fn unbalanced_or_empty_parentheses_fail() {
    for src in ["(1", "1)", ")1(", "(()", "()", "( \t )", "2*()"] {
        assert_eq!(check_parentheses(src), Err(ExpressionError::Paren), "input {src:?}");
    }
}

#[test]
fn data_check_accepts_expression_alphabet() {
    assert_eq!(check_data("12.5 * (3 - 4) / 2 + 1"), Ok(()));
    assert_eq!(check_data("2(3)"), Ok(()));
}

#[test]
fn data_check_rejects_foreign_characters() {
    for src in ["2x", "1,5", "2^2", "[1]", "3%2", "1e5"] {
        assert_eq!(check_data(src), Err(ExpressionError::Data), "input {src:?}");
    }
}

#[test]
fn data_check_rejects_numbers_without_operator() {
    assert_eq!(check_data("2 3"), Err(ExpressionError::Data));
    assert_eq!(check_data("1.5   2.25"), Err(ExpressionError::Data));
    assert_eq!(check_data("(1 + 2) 3 4"), Err(ExpressionError::Data));
}

#[test]
fn vertical_tab_counts_as_whitespace() {
    assert_eq!(check_data("\u{b}1"), Ok(()));
    assert_eq!(check_data("1\u{b}+\u{b}2"), Ok(()));
    assert_eq!(check_data("1\u{b}2"), Err(ExpressionError::Data));
    assert_eq!(check_parentheses("(\u{b})"), Err(ExpressionError::Paren));
    assert_eq!(check_operators("2+\u{b}*3"), Err(ExpressionError::Op));
}

#[test]
fn unicode_digits_and_spaces_are_foreign() {
    assert_eq!(check_data("\u{663}"), Err(ExpressionError::Data));
    assert_eq!(check_data("1\u{a0}+2"), Err(ExpressionError::Data));
}

#[test]
fn data_check_rejects_blank_input() {
    assert_eq!(check_data(""), Err(ExpressionError::Data));
    assert_eq!(check_data(" \t "), Err(ExpressionError::Data));
}

#[test]
fn operator_check_accepts_signs() {
    for src in ["-5+3", "3*-2", "4+-2", "(-2)", "2/-(3)", "-(1)"] {
        assert_eq!(check_operators(src), Ok(()), "input {src:?}");
    }
}

#[test]
fn operator_check_rejects_misplaced_operators() {
    for src in ["2++3", "2* /3", "*3", " /3", "3+", "3- ", "3--2", "3- +2", "(2+)-3", "(2*)/3"] {
        assert_eq!(check_operators(src), Err(ExpressionError::Op), "input {src:?}");
    }
}

#[test]
fn dangling_operator_check_needs_adjacency() {
    assert_eq!(check_operators("(2+) -3"), Ok(()));
}

#[test]
fn first_failing_check_decides() {
    assert_eq!(validate("(2 3"), Err(ExpressionError::Paren));
    assert_eq!(validate("2 3+"), Err(ExpressionError::Data));
    assert_eq!(validate("2a+"), Err(ExpressionError::Data));
    assert_eq!(validate("2+"), Err(ExpressionError::Op));
    assert_eq!(validate("2+3"), Ok(()));
}
