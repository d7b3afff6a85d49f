use crate::parser::ast::node::Node;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Terms added together, in the order they were written.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sum {
    /// The terms of the sum.
    pub summands: Vec<Node>,
}

impl fmt::Display for Sum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut iter = self.summands.iter();
        if let Some(first) = iter.next() {
            first.fmt(f)?;
            for summand in iter {
                write!(f, "+")?;
                summand.fmt(f)?;
            }
        }
        Ok(())
    }
}
