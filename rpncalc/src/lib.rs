//! Evaluate postfix (RPN) math expressions and render them back as infix.
//!
//! ```
//! let tokens = ["2", "3", "4", "*", "+"];
//! assert_eq!(rpncalc::evaluate(Some(&tokens[..])).value, 14.0);
//! assert_eq!(rpncalc::convert_to_infix(Some(&tokens[..])).text, "2 + 3 * 4");
//! ```

pub use context::MathContext;
pub use error::{CalcError, CalcResult, CalculationResult, ConversionResult, ErrorKind};
pub use limits::Limits;
pub use parser::RPNExpr;
pub use token::{Operator, RPNToken};

mod context;
mod error;
mod limits;
pub mod ops;
mod parser;
mod rpneval;
pub mod rpnprint;
#[cfg(test)]
mod rpnprint_test;
pub mod token;

/// Evaluate `tokens` against a freshly seeded variable table. An absent
/// sequence is reported as `MemoryError`.
pub fn evaluate<S: AsRef<str>>(tokens: Option<&[S]>) -> CalculationResult {
    evaluate_with_limits(tokens, Limits::default())
}

pub fn evaluate_with_limits<S: AsRef<str>>(tokens: Option<&[S]>, limits: Limits) -> CalculationResult {
    let result = match tokens {
        Some(tokens) => MathContext::with_limits(limits).eval_tokens(tokens),
        None => Err(CalcError::Memory),
    };
    if let Err(ref e) = result {
        log::debug!("evaluation failed: {}", e);
    }
    CalculationResult::from(result)
}

/// Render `tokens` as infix. An absent sequence is reported as `MemoryError`.
pub fn convert_to_infix<S: AsRef<str>>(tokens: Option<&[S]>) -> ConversionResult {
    convert_to_infix_with_limits(tokens, Limits::default())
}

pub fn convert_to_infix_with_limits<S: AsRef<str>>(tokens: Option<&[S]>, limits: Limits) -> ConversionResult {
    let result = match tokens {
        Some(tokens) => rpnprint::to_infix(tokens, &limits),
        None => Err(CalcError::Memory),
    };
    if let Err(ref e) = result {
        log::debug!("conversion failed: {}", e);
    }
    ConversionResult::from(result)
}
