//! Depth-aware scanners that find the operators of one precedence class in a span of text.
//!
//! Every scanner tokenizes its input and tracks bracket depth, incrementing it on any opener and
//! decrementing it on any closer. Operators are only considered at depth 0. All ranges returned
//! here are byte ranges into the scanned text.

use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Returns the kind of the closest non-whitespace token before index `i`.
fn prev_significant(tokens: &[Token], i: usize) -> Option<TokenKind> {
    tokens[..i].iter().rev().find(|t| !t.is_whitespace()).map(|t| t.kind)
}

/// Returns the kind of the closest non-whitespace token after index `i`.
fn next_significant(tokens: &[Token], i: usize) -> Option<TokenKind> {
    tokens[i + 1..].iter().find(|t| !t.is_whitespace()).map(|t| t.kind)
}

/// Returns true if the token at index `i` is the `(` of a function call: it directly follows a
/// character that can end a function name.
fn opens_call(tokens: &[Token], i: usize) -> bool {
    tokens[i].kind == TokenKind::OpenParen
        && i > 0
        && tokens[i - 1].kind == TokenKind::Symbol
        && !tokens[i - 1].lexeme.chars().all(|c| c.is_ascii_digit() || c == '.')
}

/// One term found by [`split_sum`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summand {
    /// The region of the scanned text holding the term, without its sign.
    pub span: Range<usize>,

    /// Whether the term was preceded by a `-`.
    pub negative: bool,
}

impl Summand {
    /// Returns the text of the term, with a `-1*` prefix if the term is negated.
    pub fn raw_text(&self, text: &str) -> String {
        let body = &text[self.span.clone()];
        if self.negative {
            format!("-1*{}", body)
        } else {
            body.to_string()
        }
    }
}

/// Splits `text` into summands at the `+` and `-` signs found at depth 0.
///
/// A sign at the very start of the current term (a leading sign, or the second of two adjacent
/// signs) does not produce an empty term. The last sign seen before a term decides whether it is
/// negated. A sign directly after `*`, `/` or `^` belongs to the operand that follows and is not a
/// separator. The final term is always returned, even when it is empty.
pub fn split_sum(text: &str) -> Vec<Summand> {
    let tokens = tokenize_complete(text);
    let mut summands = Vec::new();
    let mut depth = 0isize;
    let mut marker = 0;
    let mut negative = false;

    for (i, token) in tokens.iter().enumerate() {
        if token.kind.is_open() {
            depth += 1;
        } else if token.kind.is_close() {
            depth -= 1;
        } else if depth == 0 && token.kind.is_sign() {
            if prev_significant(&tokens, i).map_or(false, TokenKind::binds_sign) {
                continue;
            }

            if token.span.start != marker {
                summands.push(Summand { span: marker..token.span.start, negative });
            }
            negative = token.kind == TokenKind::Sub;
            marker = token.span.end;
        }
    }

    summands.push(Summand { span: marker..text.len(), negative });
    summands
}

/// Finds the first occurrence of `operator` at depth 0 that is not at index 0, and returns the
/// ranges of the text before and after it.
fn split_binary(text: &str, operator: TokenKind) -> Option<(Range<usize>, Range<usize>)> {
    let mut depth = 0isize;
    for token in tokenize_complete(text).iter() {
        if token.kind.is_open() {
            depth += 1;
        } else if token.kind.is_close() {
            depth -= 1;
        } else if depth == 0 && token.kind == operator && token.span.start != 0 {
            return Some((0..token.span.start, token.span.end..text.len()));
        }
    }

    None
}

/// Splits `text` into base and exponent at the first `^` found at depth 0.
pub fn split_exponent(text: &str) -> Option<(Range<usize>, Range<usize>)> {
    split_binary(text, TokenKind::Exp)
}

/// Splits `text` into numerator and denominator at the first `/` found at depth 0, so that
/// `a/b/c` splits into `a` and `b/c`.
pub fn split_fraction(text: &str) -> Option<(Range<usize>, Range<usize>)> {
    split_binary(text, TokenKind::Div)
}

/// Splits `text` into multiplicands.
///
/// Multiplicands are separated by `*` at depth 0, and by the boundaries of depth-1 bracketed
/// groups, so that `(a+b)(c+d)` and `2{X}` have two multiplicands each. A group boundary next to
/// `^` or `/` (a closer followed by the operator, or an opener preceded by it) is not a separator,
/// which keeps `({X}+1)^2` and `(a)/(b)` in one piece. An opener preceded by a unary sign stays
/// with its sign, as in `2*-(a)`. The `(` of a function call is not a separator either, so
/// `sin({X})` stays whole. Whitespace-only pieces are dropped.
pub fn split_product(text: &str) -> Vec<Range<usize>> {
    let tokens = tokenize_complete(text);
    let mut pieces = Vec::new();
    let mut depth = 0isize;
    let mut marker = 0;

    let joins = |kind: Option<TokenKind>| matches!(kind, Some(TokenKind::Exp | TokenKind::Div));

    for (i, token) in tokens.iter().enumerate() {
        if token.kind.is_open() {
            depth += 1;
            let prev = prev_significant(&tokens, i);
            let signed = prev.map_or(false, TokenKind::is_sign);
            if depth == 1 && !joins(prev) && !signed && !opens_call(&tokens, i) {
                if token.span.start != marker {
                    pieces.push(marker..token.span.start);
                }
                marker = token.span.start;
            }
        } else if token.kind.is_close() {
            depth -= 1;
            if depth == 0 && !joins(next_significant(&tokens, i)) {
                if token.span.start != marker {
                    pieces.push(marker..token.span.end);
                }
                marker = token.span.end;
            }
        } else if depth == 0 && token.kind == TokenKind::Mul {
            if token.span.start != marker {
                pieces.push(marker..token.span.start);
            }
            marker = token.span.end;
        }
    }

    if marker < text.len() {
        pieces.push(marker..text.len());
    }

    pieces.retain(|piece| !text[piece.clone()].trim().is_empty());
    pieces
}
