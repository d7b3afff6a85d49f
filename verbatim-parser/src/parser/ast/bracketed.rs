use crate::parser::ast::node::Node;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of bracket around a [`Bracketed`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Bracket {
    /// `( )`
    Paren,

    /// `[ ]`
    Square,

    /// `{ }`
    Curly,
}

impl Bracket {
    /// Returns the bracket kind opened by the given character.
    pub fn from_open(c: char) -> Option<Self> {
        match c {
            '(' => Some(Bracket::Paren),
            '[' => Some(Bracket::Square),
            '{' => Some(Bracket::Curly),
            _ => None,
        }
    }

    /// The opening character.
    pub fn open(self) -> char {
        match self {
            Bracket::Paren => '(',
            Bracket::Square => '[',
            Bracket::Curly => '{',
        }
    }

    /// The closing character.
    pub fn close(self) -> char {
        match self {
            Bracket::Paren => ')',
            Bracket::Square => ']',
            Bracket::Curly => '}',
        }
    }
}

/// A node wrapped in brackets, as written. Brackets have no meaning of their own; they are kept so
/// the expression prints back the way it was entered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bracketed {
    /// The inner node.
    pub inner: Box<Node>,

    /// The kind of bracket used.
    pub bracket: Bracket,
}

impl Bracketed {
    /// Returns the innermost node, looking through nested brackets.
    pub fn innermost(&self) -> &Node {
        let mut inner = &self.inner;
        while let Node::Bracketed(bracketed) = inner.as_ref() {
            inner = &bracketed.inner;
        }
        inner
    }
}

impl fmt::Display for Bracketed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.bracket.open(), self.inner, self.bracket.close())
    }
}
