use crate::parser::error::UnrecognizedExpr;
use std::{fmt, ops::Range};
use verbatim_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A free variable, written `{name}`. The braces are not part of the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Label {
    /// The name of the label.
    pub name: String,
}

impl Label {
    /// Creates a label with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.name)
    }
}

/// A function call. The arguments are kept as raw text and never parsed, which makes the call
/// opaque to every algebraic operation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Function {
    /// The name of the function.
    pub name: String,

    /// The text between the outer parentheses of the call.
    pub args: String,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args)
    }
}

/// Text that no parsing step could make sense of.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Raw {
    /// The trimmed text.
    pub text: String,

    /// The region of the input that the text was taken from.
    pub span: Range<usize>,
}

impl Raw {
    /// Converts the text into a reportable [`Error`].
    pub fn to_error(&self) -> Error {
        Error::new(vec![self.span.clone()], UnrecognizedExpr)
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
