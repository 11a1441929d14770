use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Fact,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Arcsin,
    Arccos,
    Arctan,
    Log,
    Ln,
    Ans, // reserved "last answer", recognized but never applicable
}

pub const OPERATORS: [Operator; 16] = [
    Operator::Add,
    Operator::Sub,
    Operator::Mul,
    Operator::Div,
    Operator::Pow,
    Operator::Fact,
    Operator::Sqrt,
    Operator::Sin,
    Operator::Cos,
    Operator::Tan,
    Operator::Arcsin,
    Operator::Arccos,
    Operator::Arctan,
    Operator::Log,
    Operator::Ln,
    Operator::Ans,
];

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Pow => "^",
            Operator::Fact => "!",
            Operator::Sqrt => "sqrt",
            Operator::Sin => "sin",
            Operator::Cos => "cos",
            Operator::Tan => "tan",
            Operator::Arcsin => "arcsin",
            Operator::Arccos => "arccos",
            Operator::Arctan => "arctan",
            Operator::Log => "log",
            Operator::Ln => "ln",
            Operator::Ans => "ans",
        }
    }

    /// Operands popped by the evaluator. Factorial and the named functions
    /// take one, everything else (including `ans`) is binary-shaped.
    pub fn arity(self) -> usize {
        match self {
            Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => 2,
            Operator::Pow | Operator::Ans => 2,
            _ => 1,
        }
    }

    pub fn is_unary(self) -> bool {
        self.arity() == 1
    }
}

impl FromStr for Operator {
    type Err = ();
    fn from_str(s: &str) -> Result<Operator, ()> {
        OPERATORS.iter().copied().find(|op| op.symbol() == s).ok_or(())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// How a raw token is understood. Classification is purely structural.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RPNToken<'a> {
    Operator(Operator),
    Number(f64),
    Variable(&'a str),
}

impl<'a> RPNToken<'a> {
    // operator names win over numbers, anything else is a variable
    pub fn classify(token: &'a str) -> RPNToken<'a> {
        if let Ok(op) = token.parse::<Operator>() {
            RPNToken::Operator(op)
        } else if let Some(num) = parse_number(token) {
            RPNToken::Number(num)
        } else {
            RPNToken::Variable(token)
        }
    }
}

pub fn is_operator(token: &str) -> bool {
    token.parse::<Operator>().is_ok()
}

pub fn is_number(token: &str) -> bool {
    parse_number(token).is_some()
}

// the whole token must be a decimal float literal (Rust's f64 grammar, which
// also takes inf/nan), a single trailing newline is ok. No hex floats and no
// leading whitespace: those tokens are variables.
fn parse_number(token: &str) -> Option<f64> {
    let literal = token.strip_suffix('\n').unwrap_or(token);
    f64::from_str(literal).ok()
}

#[cfg(test)]
mod tests {
    use super::{is_number, is_operator, Operator, RPNToken, OPERATORS};

    #[test]
    fn operator_names() {
        for name in ["+", "-", "*", "/", "^", "!", "sqrt", "sin", "cos", "tan",
                     "arcsin", "arccos", "arctan", "log", "ln", "ans"] {
            assert!(is_operator(name), "{}", name);
        }
        for name in ["%", "**", "Sin", "sqrt ", "asin", "", "x"] {
            assert!(!is_operator(name), "{}", name);
        }
        for op in OPERATORS {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn numbers() {
        assert!(is_number("3"));
        assert!(is_number("-3.25"));
        assert!(is_number("3.4e-2"));
        assert!(is_number("7\n"));
        assert!(!is_number("7\n\n"));
        assert!(!is_number("12abc"));
        assert!(!is_number("pi"));
        assert!(!is_number(""));
    }

    #[test]
    fn classify_priority() {
        assert_eq!(RPNToken::classify("-"), RPNToken::Operator(Operator::Sub));
        assert_eq!(RPNToken::classify("-1"), RPNToken::Number(-1.0));
        assert_eq!(RPNToken::classify("ans"), RPNToken::Operator(Operator::Ans));
        assert_eq!(RPNToken::classify("pi"), RPNToken::Variable("pi"));
        assert_eq!(RPNToken::classify("%%"), RPNToken::Variable("%%"));
    }

    #[test]
    fn arity() {
        assert_eq!(Operator::Fact.arity(), 1);
        assert_eq!(Operator::Ln.arity(), 1);
        assert_eq!(Operator::Pow.arity(), 2);
        assert_eq!(Operator::Ans.arity(), 2);
        assert!(Operator::Sqrt.is_unary());
        assert!(!Operator::Div.is_unary());
    }
}
