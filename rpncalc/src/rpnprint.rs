use crate::error::{CalcError, CalcResult};
use crate::limits::{truncate_at_boundary, Limits};
use crate::parser::RPNExpr;
use crate::rpneval::BoundedStack;
use crate::token::{Operator, RPNToken};

/// Decide if `expr` must be wrapped before becoming an operand of `op`.
///
/// This is a flat character scan: it ignores nesting, so chains such as
/// `(a + b) * (c + d)` are taken as already wrapped, and any `-` (even a
/// negative sign) counts as a lower precedence operator.
pub fn needs_parens(expr: &str, op: Operator) -> bool {
    if expr.len() <= 1 {
        return false;
    }
    if expr.starts_with('(') && expr.ends_with(')') {
        return false;
    }
    match op {
        Operator::Fact | Operator::Sqrt => true,
        Operator::Mul | Operator::Div => expr.contains(['+', '-']),
        Operator::Pow => expr.contains(['*', '/']),
        _ => false,
    }
}

fn combine(lhs: &str, op: Operator, rhs: &str) -> CalcResult<String> {
    let (lp, rp) = (needs_parens(lhs, op), needs_parens(rhs, op));
    let mut expr = String::new();
    expr.try_reserve(lhs.len() + rhs.len() + op.symbol().len() + 6)?;
    let wrap = |out: &mut String, side: &str, parens: bool| {
        if parens {
            out.push('(');
            out.push_str(side);
            out.push(')');
        } else {
            out.push_str(side);
        }
    };
    wrap(&mut expr, lhs, lp);
    expr.push(' ');
    expr.push_str(op.symbol());
    expr.push(' ');
    wrap(&mut expr, rhs, rp);
    Ok(expr)
}

/// Rebuild an infix string from postfix `tokens`. Every operator, unary
/// ones included, joins the two partial expressions on top of the stack.
pub fn to_infix<S: AsRef<str>>(tokens: &[S], limits: &Limits) -> CalcResult<String> {
    log::debug!("converting expression of {} tokens to infix", tokens.len());
    let mut partials: BoundedStack<String> = BoundedStack::new(limits.stack_capacity);

    for token in tokens.iter().map(AsRef::as_ref) {
        log::trace!("processing token: {}", token);
        match RPNToken::classify(token) {
            RPNToken::Operator(op) => {
                if partials.len() < 2 {
                    log::debug!("not enough operands for operator {}", op);
                    return Err(CalcError::StackUnderflow);
                }
                let rhs = partials.pop()?;
                let lhs = partials.pop()?;
                let expr = combine(&lhs, op, &rhs)?;
                log::trace!("created expression: {}", expr);
                partials.push(expr)?;
            }
            RPNToken::Number(_) | RPNToken::Variable(_) => {
                let mut operand = String::new();
                operand.try_reserve(token.len())?;
                operand.push_str(token);
                partials.push(operand)?;
            }
        }
    }
    let mut infix = partials.into_single()?;
    truncate_at_boundary(&mut infix, limits.max_expr_len.saturating_sub(1));
    log::debug!("final expression: {}", infix);
    Ok(infix)
}

impl RPNExpr {
    pub fn to_infix(&self) -> CalcResult<String> {
        to_infix(&self.0, &Limits::default())
    }

    pub fn to_infix_with_limits(&self, limits: &Limits) -> CalcResult<String> {
        to_infix(&self.0, limits)
    }
}
