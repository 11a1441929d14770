use crate::error::{CalcError, CalcResult};
use crate::token::Operator;
use std::f64::consts::{FRAC_PI_2, PI};

// a shorthand for rejecting the forbidden region before computing a result,
// NaN never lands in it and flows through as NaN
macro_rules! domain {
    ($forbidden:expr, $err:expr, $ifok:expr) => {
        if $forbidden { Err($err) } else { Ok($ifok) }
    };
}

/// Round to 9 decimal places, taming float noise for display and comparison.
pub fn round9(value: f64) -> f64 {
    let scaled = value * 1e9;
    if !scaled.is_finite() {
        return value; // beyond 9 decimals of resolution anyway
    }
    scaled.round() / 1e9
}

/// Factorial of a non-negative integral value.
pub fn factorial(n: f64) -> CalcResult<f64> {
    if n < 0.0 || n.fract() != 0.0 {
        return Err(CalcError::Factorial(n));
    }
    let mut result = 1.0_f64;
    let mut i = 2.0;
    while i <= n && result.is_finite() {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}

/// Apply `op` to `a` (and `b` for binary operators), rounding the result.
/// Factorial is binary-shaped: it accepts `b` only when it is exactly 0.
pub fn apply(op: Operator, a: f64, b: Option<f64>) -> CalcResult<f64> {
    let value = match op {
        Operator::Sqrt => domain!(a < 0.0, CalcError::SquareRoot(a), a.sqrt()),
        Operator::Sin => Ok(a.sin()),
        Operator::Cos => Ok(a.cos()),
        Operator::Tan => domain!(a.abs() % PI == FRAC_PI_2, CalcError::Tan(a), a.tan()),
        Operator::Arcsin => domain!(a < -1.0 || a > 1.0, CalcError::Trig(a), a.asin()),
        Operator::Arccos => domain!(a < -1.0 || a > 1.0, CalcError::Trig(a), a.acos()),
        Operator::Arctan => Ok(a.atan()),
        Operator::Log => domain!(a <= 0.0, CalcError::Log(a), a.log10()),
        Operator::Ln => domain!(a <= 0.0, CalcError::Ln(a), a.ln()),
        Operator::Fact => match b {
            Some(b) if b != 0.0 => Err(CalcError::InvalidOperator(op.to_string())),
            _ => factorial(a),
        },
        Operator::Add | Operator::Sub | Operator::Mul | Operator::Div | Operator::Pow => {
            let b = b.ok_or(CalcError::StackUnderflow)?;
            match op {
                Operator::Add => Ok(a + b),
                Operator::Sub => Ok(a - b),
                Operator::Mul => Ok(a * b),
                Operator::Div => domain!(b == 0.0, CalcError::DivisionByZero, a / b),
                _ => Ok(a.powf(b)),
            }
        }
        Operator::Ans => Err(CalcError::InvalidOperator(op.to_string())),
    }?;
    Ok(round9(value))
}

/// Resolve an operator by name and apply it.
pub fn apply_named(name: &str, a: f64, b: Option<f64>) -> CalcResult<f64> {
    match name.parse::<Operator>() {
        Ok(op) => apply(op, a, b),
        Err(_) => Err(CalcError::InvalidOperator(name.to_string())),
    }
}
