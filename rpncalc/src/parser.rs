use crate::token::RPNToken;
use std::fmt;
use std::str::FromStr;

/// A postfix expression: an ordered sequence of raw tokens.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct RPNExpr(pub Vec<String>);

impl RPNExpr {
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> RPNExpr {
        RPNExpr(tokens.iter().map(|t| t.as_ref().to_string()).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|t| t.as_str())
    }

    pub fn tokens(&self) -> impl Iterator<Item = RPNToken<'_>> {
        self.iter().map(RPNToken::classify)
    }
}

// tokens are whitespace separated, eg: "2 3 4 * +"
impl FromStr for RPNExpr {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<RPNExpr, Self::Err> {
        Ok(RPNExpr(s.split_whitespace().map(String::from).collect()))
    }
}

impl<S: Into<String>> FromIterator<S> for RPNExpr {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> RPNExpr {
        RPNExpr(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for RPNExpr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}
