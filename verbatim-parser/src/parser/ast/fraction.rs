use crate::parser::ast::node::{fmt_operand, Node};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A quotient. Chains associate to the right: `a/b/c` is `a/(b/c)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    pub numerator: Box<Node>,
    pub denominator: Box<Node>,
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "(")?;
        fmt_operand(&self.numerator, false, f)?;
        write!(f, " / ")?;
        fmt_operand(&self.denominator, false, f)?;
        write!(f, ")")
    }
}
