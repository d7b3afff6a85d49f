//! Kinds of failure that can be embedded in a parsed tree.

use ariadne::Fmt;
use verbatim_attrs::ErrorKind;
use verbatim_error::EXPR;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A span started with an opening bracket, but did not end with the matching closer.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error(
    message = format!("unmatched bracket `{}`", opening),
    labels = [format!("I expected this group to end with `{}`", expected.fg(EXPR))],
    help = format!("add a closing `{}` at the end of the group, or remove the `{}`", expected, opening),
)]
pub struct UnmatchedBracket {
    /// The bracket the span started with.
    pub opening: char,

    /// The closer that would have matched it.
    pub expected: char,
}

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error(
    message = "expression is nested too deeply",
    labels = ["this part was not parsed"],
    note = format!("the parser stops after {} levels of nesting", max_depth),
)]
pub struct NestingTooDeep {
    /// The nesting limit that was exceeded.
    pub max_depth: usize,
}

/// No parsing step recognized the text.
#[derive(Debug, Clone, ErrorKind, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error(
    message = "unrecognized expression",
    labels = [format!("I could not read this as an {}", "expression".fg(EXPR))],
    help = "numbers are written like `2.5`, labels like `{X}`, and functions like `f(...)`",
)]
pub struct UnrecognizedExpr;
