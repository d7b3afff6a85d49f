use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Only the characters the splitters care about are classified. Everything else, including the
/// digits and letters inside numbers, labels, and function names, becomes a [`TokenKind::Symbol`].
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("[")]
    OpenSquare,

    #[token("]")]
    CloseSquare,

    #[token("{")]
    OpenCurly,

    #[token("}")]
    CloseCurly,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if the token opens a bracketed region.
    pub fn is_open(self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::OpenSquare | TokenKind::OpenCurly)
    }

    /// Returns true if the token closes a bracketed region. Any closer ends any region; the kind of
    /// bracket is only checked when the outer pair of a span is stripped.
    pub fn is_close(self) -> bool {
        matches!(self, TokenKind::CloseParen | TokenKind::CloseSquare | TokenKind::CloseCurly)
    }

    /// Returns true if the token is one of the signs that separate summands.
    pub fn is_sign(self) -> bool {
        matches!(self, TokenKind::Add | TokenKind::Sub)
    }

    /// Returns true if the token is an operator after which a sign is unary rather than a summand
    /// separator.
    pub fn binds_sign(self) -> bool {
        matches!(self, TokenKind::Mul | TokenKind::Div | TokenKind::Exp)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
