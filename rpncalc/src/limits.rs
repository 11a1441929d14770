/// Fixed bounds observed by the evaluator and the infix converter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    /// Slots available on the operand / expression-string stack.
    pub stack_capacity: usize,
    /// Maximum number of tokens in an expression. Also bounds the infix
    /// output, which keeps at most `max_expr_len - 1` bytes.
    pub max_expr_len: usize,
    /// Storage for a variable name, terminator included.
    pub max_var_name_len: usize,
}

pub const STACK_CAPACITY: usize = 100;
pub const MAX_EXPR_LEN: usize = 1000;
pub const MAX_VAR_NAME_LEN: usize = 50;

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            stack_capacity: STACK_CAPACITY,
            max_expr_len: MAX_EXPR_LEN,
            max_var_name_len: MAX_VAR_NAME_LEN,
        }
    }
}

// cut `s` to at most `max` bytes without splitting a char
pub(crate) fn truncate_at_boundary(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    s.truncate(cut);
}
