use crate::error::{CalcError, ErrorKind};
use crate::limits::Limits;
use crate::parser::RPNExpr;
use crate::rpnprint::{needs_parens, to_infix};
use crate::token::Operator;

fn infix(expr: &str) -> Result<String, CalcError> {
    let rpn: RPNExpr = expr.parse().unwrap();
    rpn.to_infix()
}

fn infix_kind(expr: &str) -> ErrorKind {
    infix(expr).map_or_else(|e| e.kind(), |_| ErrorKind::Success)
}

#[test]
fn simple() {
    assert_eq!(infix("2 3 +").unwrap(), "2 + 3");
    assert_eq!(infix("x y *").unwrap(), "x * y");
    assert_eq!(infix("pi 2 /").unwrap(), "pi / 2");
    assert_eq!(infix("42").unwrap(), "42");
}

#[test]
fn precedence() {
    assert_eq!(infix("2 3 * 4 +").unwrap(), "2 * 3 + 4");
    assert_eq!(infix("2 3 4 * +").unwrap(), "2 + 3 * 4");
    assert_eq!(infix("2 3 + 4 *").unwrap(), "(2 + 3) * 4");
    assert_eq!(infix("4 2 3 - /").unwrap(), "4 / (2 - 3)");
    assert_eq!(infix("2 3 + 4 5 + *").unwrap(), "(2 + 3) * (4 + 5)");
    assert_eq!(infix("2 3 * 4 ^").unwrap(), "(2 * 3) ^ 4");
    assert_eq!(infix("2 3 4 / ^").unwrap(), "2 ^ (3 / 4)");
}

#[test]
fn flat_scan_quirks() {
    // an already wrapped operand further down is rescanned
    assert_eq!(infix("1 2 - 3 * 4 *").unwrap(), "((1 - 2) * 3) * 4");
    // a negative sign reads like a subtraction
    assert_eq!(infix("2 -3 *").unwrap(), "2 * (-3)");
    assert_eq!(infix("2 -3 +").unwrap(), "2 + -3");
    // '+' under '^' is never wrapped
    assert_eq!(infix("2 3 + 4 ^").unwrap(), "2 + 3 ^ 4");
    // outer parens on both ends count as wrapped even when unmatched
    assert_eq!(infix("1 2 + 3 4 + * 5 ^").unwrap(), "(1 + 2) * (3 + 4) ^ 5");
    // same precedence on the right is not wrapped
    assert_eq!(infix("1 2 3 - -").unwrap(), "1 - 2 - 3");
}

#[test]
fn unary_operators_join_two_operands() {
    assert_eq!(infix("5 0 !").unwrap(), "5 ! 0");
    assert_eq!(infix("2 3 + 0 !").unwrap(), "(2 + 3) ! 0");
    assert_eq!(infix("4 16 sqrt").unwrap(), "4 sqrt (16)");
    assert_eq!(infix("4 9 sqrt").unwrap(), "4 sqrt 9");
    assert_eq!(infix("1 2 + 9 sqrt").unwrap(), "(1 + 2) sqrt 9");
    assert_eq!(infix_kind("5 !"), ErrorKind::StackUnderflow);
    assert_eq!(infix_kind("16 sqrt"), ErrorKind::StackUnderflow);
}

#[test]
fn underflow() {
    assert_eq!(infix_kind("+"), ErrorKind::StackUnderflow);
    assert_eq!(infix_kind("3 +"), ErrorKind::StackUnderflow);
    assert_eq!(infix_kind("1 2"), ErrorKind::StackUnderflow);
    assert_eq!(infix_kind(""), ErrorKind::StackUnderflow);
}

#[test]
fn needs_parens_rules() {
    assert!(!needs_parens("x", Operator::Fact));
    assert!(!needs_parens("(a + b)", Operator::Mul));
    assert!(needs_parens("a + b", Operator::Mul));
    assert!(needs_parens("a - b", Operator::Div));
    assert!(!needs_parens("a * b", Operator::Mul));
    assert!(needs_parens("a * b", Operator::Pow));
    assert!(!needs_parens("a + b", Operator::Pow));
    assert!(needs_parens("12", Operator::Sqrt));
    assert!(!needs_parens("a + b", Operator::Add));
    assert!(!needs_parens("a + b", Operator::Sub));
}

#[test]
fn output_is_truncated() {
    let long = "a".repeat(600);
    let text = to_infix(&[long.as_str(), long.as_str(), "+"], &Limits::default()).unwrap();
    assert_eq!(text.len(), 999);
    assert!(text.starts_with(&format!("{} + a", long)));

    let limits = Limits { max_expr_len: 6, ..Limits::default() };
    assert_eq!(to_infix(&["2", "3", "+"], &limits).unwrap(), "2 + 3");
    assert_eq!(to_infix(&["10", "20", "+"], &limits).unwrap(), "10 + ");
}

#[test]
fn stack_capacity() {
    let over = vec!["1"; 101];
    assert_eq!(to_infix(&over, &Limits::default()), Err(CalcError::StackMaximum(100)));
    let mut tokens = vec!["1"; 100];
    tokens.extend(vec!["+"; 99]);
    let text = to_infix(&tokens, &Limits::default()).unwrap();
    assert_eq!(text.len(), 100 + 99 * 3);
    assert!(text.starts_with("1 + 1 + 1 + "));
}
