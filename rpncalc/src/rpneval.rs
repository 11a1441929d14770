use crate::context::MathContext;
use crate::error::{CalcError, CalcResult};
use crate::ops;
use crate::parser::RPNExpr;
use crate::token::RPNToken;

/// A LIFO of pending values that refuses to grow past its capacity.
pub(crate) struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub(crate) fn new(capacity: usize) -> BoundedStack<T> {
        BoundedStack { items: Vec::new(), capacity }
    }

    pub(crate) fn push(&mut self, item: T) -> CalcResult<()> {
        if self.items.len() >= self.capacity {
            return Err(CalcError::StackMaximum(self.capacity));
        }
        self.items.push(item);
        Ok(())
    }

    pub(crate) fn pop(&mut self) -> CalcResult<T> {
        self.items.pop().ok_or(CalcError::StackUnderflow)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    // the sole remaining item, anything else is a malformed expression
    pub(crate) fn into_single(mut self) -> CalcResult<T> {
        if self.items.len() != 1 {
            return Err(CalcError::StackUnderflow);
        }
        self.pop()
    }
}

pub(crate) fn check_length(len: usize, max: usize) -> CalcResult<()> {
    if len > max {
        return Err(CalcError::ExpressionLength { len, max });
    }
    Ok(())
}

impl MathContext {
    pub fn eval(&self, rpn: &RPNExpr) -> CalcResult<f64> {
        self.eval_tokens(&rpn.0)
    }

    /// Evaluate postfix `tokens` against the variables of this context.
    pub fn eval_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> CalcResult<f64> {
        log::debug!("evaluating expression of {} tokens", tokens.len());
        check_length(tokens.len(), self.limits().max_expr_len)?;
        let mut operands = BoundedStack::new(self.limits().stack_capacity);

        for token in tokens.iter().map(AsRef::as_ref) {
            log::trace!("processing token: {}", token);
            match RPNToken::classify(token) {
                RPNToken::Operator(op) if op.is_unary() => {
                    let a = operands.pop()?;
                    operands.push(ops::apply(op, a, None)?)?;
                }
                RPNToken::Operator(op) => {
                    if operands.len() < 2 {
                        return Err(CalcError::StackUnderflow);
                    }
                    let b = operands.pop()?;
                    let a = operands.pop()?;
                    operands.push(ops::apply(op, a, Some(b))?)?;
                }
                RPNToken::Number(num) => operands.push(num)?,
                RPNToken::Variable(var) => operands.push(self.lookup(var)?)?,
            }
        }
        let result = operands.into_single()?;
        log::debug!("final result: {:.9}", result);
        Ok(result)
    }
}
