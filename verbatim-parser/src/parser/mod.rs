//! Turns plain text into an expression tree that keeps the form the author wrote.
//!
//! Each span of text is trimmed and then tried against the following steps, in order. The first
//! step that applies decides the node, and its pieces are parsed recursively.
//!
//! 1. A fundamental token spanning the whole text: a number, a function call, or a `{label}`.
//! 2. Terms separated by `+` or `-` at bracket depth 0.
//! 3. A `^` at depth 0, when the span is not a product of several factors.
//! 4. A `/` at depth 0.
//! 5. Factors separated by `*` or by bracketed groups.
//! 6. A bracketed group, whose outer brackets are stripped.
//!
//! Text that matches none of these becomes a [`Node::Raw`]. Nothing here fails: malformed input
//! is recorded in the tree as a [`Node::Error`] or [`Node::Raw`].
//!
//! ```
//! use verbatim_parser::parser::{ast::Node, receive};
//!
//! let tree = receive("2*{X}");
//! assert_eq!(tree, Node::product(vec![Node::number(2.0), Node::label("X")]));
//! ```

pub mod ast;
pub mod error;
pub mod fundamental;
pub mod split;

use ast::{Bracket, Diagnostic, DiagnosticKind, Node, Raw};
use error::{NestingTooDeep, UnmatchedBracket};
use fundamental::{recognize, Fundamental};
use log::trace;
use split::{split_exponent, split_fraction, split_product, split_sum};
use std::ops::Range;

/// The default limit on how deeply the parser recurses into nested pieces of an expression.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// A configurable expression parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parser {
    /// Pieces nested more deeply than this become [`NestingTooDeep`] diagnostics.
    max_depth: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Parser {
    /// Creates a parser with the default nesting limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with the given nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the nesting limit of the parser.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parses the given text into a tree.
    pub fn receive(&self, text: &str) -> Node {
        self.parse_span(text, 0, 0)
    }

    /// Parses a piece of the input. `offset` is the position of `text` in the full input.
    fn parse_span(&self, text: &str, offset: usize, depth: usize) -> Node {
        let offset = offset + (text.len() - text.trim_start().len());
        let text = text.trim();
        let span = offset..offset + text.len();

        if depth > self.max_depth {
            trace!("nesting limit {} reached at {:?}", self.max_depth, span);
            return diagnostic(
                DiagnosticKind::NestingTooDeep(NestingTooDeep { max_depth: self.max_depth }),
                text,
                span,
            );
        }

        if let Some(fundamental) = recognize(text) {
            trace!("fundamental `{}` at {:?}", text, span);
            return match fundamental {
                Fundamental::Number(value) => Node::number(value),
                Fundamental::Function { name, args } => Node::function(name, args),
                Fundamental::Label(name) => Node::label(name),
            };
        }

        let summands = split_sum(text);
        let unary_plus = matches!(
            summands.as_slice(),
            [only] if only.span.start > 0 && !text[only.span.clone()].trim().is_empty()
        );
        if summands.len() > 1 || summands.iter().any(|s| s.negative) || unary_plus {
            trace!("sum of {} terms `{}` at {:?}", summands.len(), text, span);
            let terms = summands
                .iter()
                .map(|summand| {
                    let term = self.parse_span(
                        &text[summand.span.clone()],
                        offset + summand.span.start,
                        depth + 1,
                    );
                    if summand.negative {
                        Node::product(vec![Node::number(-1.0), term])
                    } else {
                        term
                    }
                })
                .collect();
            return Node::sum(terms).downgrade();
        }

        if split_product(text).len() <= 1 {
            if let Some((base, exponent)) = split_exponent(text) {
                trace!("exponent `{}` at {:?}", text, span);
                return Node::exponent(
                    self.parse_piece(text, base, offset, depth),
                    self.parse_piece(text, exponent, offset, depth),
                );
            }
        }

        if let Some((numerator, denominator)) = split_fraction(text) {
            trace!("fraction `{}` at {:?}", text, span);
            return Node::fraction(
                self.parse_piece(text, numerator, offset, depth),
                self.parse_piece(text, denominator, offset, depth),
            );
        }

        let multiplicands = split_product(text);
        if multiplicands.len() > 1 {
            trace!("product of {} factors `{}` at {:?}", multiplicands.len(), text, span);
            return Node::product(
                multiplicands
                    .into_iter()
                    .map(|piece| self.parse_piece(text, piece, offset, depth))
                    .collect(),
            );
        }

        if let Some(bracket) = text.chars().next().and_then(Bracket::from_open) {
            if text.len() >= 2 && text.ends_with(bracket.close()) {
                trace!("bracketed `{}` at {:?}", text, span);
                let inner = self.parse_span(&text[1..text.len() - 1], offset + 1, depth + 1);
                return Node::bracketed(inner, bracket);
            }

            trace!("unmatched `{}` at {:?}", bracket.open(), span);
            return diagnostic(
                DiagnosticKind::UnmatchedBracket(UnmatchedBracket {
                    opening: bracket.open(),
                    expected: bracket.close(),
                }),
                text,
                span,
            );
        }

        trace!("unrecognized `{}` at {:?}", text, span);
        Node::Raw(Raw { text: text.to_string(), span })
    }

    /// Parses the given range of `text`, one level deeper.
    fn parse_piece(&self, text: &str, piece: Range<usize>, offset: usize, depth: usize) -> Node {
        self.parse_span(&text[piece.clone()], offset + piece.start, depth + 1)
    }
}

/// Builds an error node.
fn diagnostic(kind: DiagnosticKind, text: &str, span: Range<usize>) -> Node {
    Node::Error(Diagnostic { kind, data: text.to_string(), span })
}

/// Parses the given text into a tree with the default [`Parser`].
pub fn receive(text: &str) -> Node {
    Parser::default().receive(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn num(value: f64) -> Node {
        Node::number(value)
    }

    fn label(name: &str) -> Node {
        Node::label(name)
    }

    fn neg(node: Node) -> Node {
        Node::product(vec![num(-1.0), node])
    }

    #[test]
    fn respects_depth() {
        assert_eq!(receive("(1+2)*3"), Node::product(vec![
            Node::bracketed(Node::sum(vec![num(1.0), num(2.0)]), Bracket::Paren),
            num(3.0),
        ]));
    }

    #[test]
    fn fundamentals() {
        assert_eq!(receive("  -2.5 "), num(-2.5));
        assert_eq!(receive("{X}"), label("X"));
        assert_eq!(receive("sqrt({X}^2)"), Node::function("sqrt", "{X}^2"));
    }

    #[test]
    fn powers_bind_tighter_than_products() {
        assert_eq!(receive("{X}^2*{Y}"), Node::product(vec![
            Node::exponent(label("X"), num(2.0)),
            label("Y"),
        ]));
        assert_eq!(receive("3*{X}^2"), Node::product(vec![
            num(3.0),
            Node::exponent(label("X"), num(2.0)),
        ]));
        assert_eq!(receive("2{X}"), Node::product(vec![num(2.0), label("X")]));
    }

    #[test]
    fn fractions() {
        assert_eq!(receive("{a}/{b}*{c}"), Node::fraction(
            label("a"),
            Node::product(vec![label("b"), label("c")]),
        ));
        assert_eq!(receive("{a}/{b}/{c}"), Node::fraction(
            label("a"),
            Node::fraction(label("b"), label("c")),
        ));
        assert_eq!(receive("{X}^2/{Y}"), Node::exponent(
            label("X"),
            Node::fraction(num(2.0), label("Y")),
        ));
    }

    #[test]
    fn negation() {
        assert_eq!(receive("1-{X}^2"), Node::sum(vec![
            num(1.0),
            neg(Node::exponent(label("X"), num(2.0))),
        ]));
        assert_eq!(receive("-{X}"), neg(label("X")));
        assert_eq!(receive("{X}^-1"), Node::exponent(label("X"), num(-1.0)));
        assert_eq!(receive("2*-{X}"), Node::product(vec![num(2.0), neg(label("X"))]));
        assert_eq!(receive("{X}^-(1+2)"), Node::exponent(
            label("X"),
            neg(Node::bracketed(Node::sum(vec![num(1.0), num(2.0)]), Bracket::Paren)),
        ));
    }

    #[test]
    fn unary_plus() {
        assert_eq!(receive("+{X}"), label("X"));
        assert_eq!(receive(" + (1+2)"), Node::bracketed(
            Node::sum(vec![num(1.0), num(2.0)]),
            Bracket::Paren,
        ));

        let tree = receive("2*+({X}+1)");
        assert_eq!(tree, Node::product(vec![
            num(2.0),
            Node::bracketed(Node::sum(vec![label("X"), num(1.0)]), Bracket::Paren),
        ]));
        assert!(tree.errors().is_empty());

        assert_eq!(receive("+"), Node::Raw(Raw { text: String::from("+"), span: 0..1 }));
    }

    #[test]
    fn unmatched_bracket() {
        let tree = receive("1 + (2");
        let Node::Sum(sum) = &tree else {
            panic!("expected a sum, got {:?}", tree);
        };
        assert_eq!(sum.summands[1], Node::Error(Diagnostic {
            kind: DiagnosticKind::UnmatchedBracket(UnmatchedBracket { opening: '(', expected: ')' }),
            data: String::from("(2"),
            span: 4..6,
        }));
    }

    #[test]
    fn nesting_limit() {
        let tree = Parser::with_max_depth(2).receive("((({X})))");
        let error = Node::Error(Diagnostic {
            kind: DiagnosticKind::NestingTooDeep(NestingTooDeep { max_depth: 2 }),
            data: String::from("{X}"),
            span: 3..6,
        });
        let expected = Node::bracketed(
            Node::bracketed(Node::bracketed(error, Bracket::Paren), Bracket::Paren),
            Bracket::Paren,
        );
        assert_eq!(tree, expected);
        assert_eq!(receive("((({X})))").errors().len(), 0);
    }

    #[test]
    fn raw_fallback() {
        assert_eq!(receive("1 + %"), Node::sum(vec![
            num(1.0),
            Node::Raw(Raw { text: String::from("%"), span: 4..5 }),
        ]));
    }
}
