use crate::parser::error::{NestingTooDeep, UnmatchedBracket};
use std::{fmt, ops::Range};
use verbatim_error::{Error, ErrorKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of failure recorded by a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DiagnosticKind {
    UnmatchedBracket(UnmatchedBracket),
    NestingTooDeep(NestingTooDeep),
}

impl DiagnosticKind {
    fn as_error_kind(&self) -> &dyn ErrorKind {
        match self {
            DiagnosticKind::UnmatchedBracket(kind) => kind,
            DiagnosticKind::NestingTooDeep(kind) => kind,
        }
    }
}

/// A terminal node recording that part of the input could not be parsed.
///
/// The rest of the tree is still built around it, and every operation passes it through
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Diagnostic {
    /// What went wrong.
    pub kind: DiagnosticKind,

    /// The offending input text.
    pub data: String,

    /// The region of the input that the text was taken from.
    pub span: Range<usize>,
}

impl Diagnostic {
    /// Returns the single-line description of the failure.
    pub fn message(&self) -> String {
        self.kind.as_error_kind().message()
    }

    /// Converts the diagnostic into a reportable [`Error`].
    pub fn to_error(&self) -> Error {
        let spans = vec![self.span.clone()];
        match &self.kind {
            DiagnosticKind::UnmatchedBracket(kind) => Error::new(spans, kind.clone()),
            DiagnosticKind::NestingTooDeep(kind) => Error::new(spans, kind.clone()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}
