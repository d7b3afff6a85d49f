pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, so that the
/// splitters can look at the neighbors of a token.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + {X}",
            [
                (TokenKind::Symbol, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::OpenCurly, "{"),
                (TokenKind::Symbol, "X"),
                (TokenKind::CloseCurly, "}"),
            ],
        );
    }

    #[test]
    fn brackets_and_operators() {
        compare_tokens(
            "[a]^(2)/-b*c",
            [
                (TokenKind::OpenSquare, "["),
                (TokenKind::Symbol, "a"),
                (TokenKind::CloseSquare, "]"),
                (TokenKind::Exp, "^"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Symbol, "2"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Div, "/"),
                (TokenKind::Sub, "-"),
                (TokenKind::Symbol, "b"),
                (TokenKind::Mul, "*"),
                (TokenKind::Symbol, "c"),
            ],
        );
    }

    #[test]
    fn multibyte_symbols() {
        let tokens = tokenize_complete("π·2");
        let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();
        assert_eq!(kinds, vec![TokenKind::Symbol, TokenKind::Symbol, TokenKind::Symbol]);
        assert_eq!(tokens[1].lexeme, "·");
        assert_eq!(tokens[2].span, 4..5);
    }
}
