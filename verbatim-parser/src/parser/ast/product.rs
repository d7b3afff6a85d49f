use crate::parser::ast::node::{fmt_operand, Node};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Factors multiplied together, in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product {
    /// The factors of the product.
    pub multiplicands: Vec<Node>,
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, multiplicand) in self.multiplicands.iter().enumerate() {
            if i > 0 {
                write!(f, "*")?;
            }
            fmt_operand(multiplicand, i == 0, f)?;
        }
        Ok(())
    }
}
