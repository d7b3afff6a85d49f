//! Recognition of the fundamental tokens: spans that become leaves of the tree without any
//! further splitting.

use logos::Logos;

/// The fundamental tokens that can be recognized with a single regular expression.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
enum Lexeme {
    #[regex(r"[-+]?[0-9]+\.?[0-9]*")]
    Number,

    #[regex(r"\{[^0-9(){}\[\]]+\}")]
    Label,
}

/// Returns the kind of lexeme that spans all of `text`, if any.
fn whole_lexeme(text: &str) -> Option<Lexeme> {
    let mut lexer = Lexeme::lexer(text);
    match lexer.next() {
        Some(Ok(kind)) if lexer.span() == (0..text.len()) => Some(kind),
        _ => None,
    }
}

/// A fundamental token found in a span of text.
#[derive(Debug, Clone, PartialEq)]
pub enum Fundamental<'source> {
    /// A decimal number, possibly signed.
    Number(f64),

    /// A function call, with the raw, unparsed argument text.
    Function { name: &'source str, args: &'source str },

    /// A `{name}` label, with the braces removed.
    Label(&'source str),
}

/// Returns true if the character cannot appear in the name of a function.
fn forbidden_in_name(c: char) -> bool {
    c.is_ascii_digit()
        || c.is_whitespace()
        || matches!(c, '+' | '-' | '*' | '/' | '^' | '\\' | '(' | ')' | '[' | ']' | '{' | '}')
}

/// Recognizes `name(args)`, where the `(` directly after the name is closed by the final `)`.
fn function(text: &str) -> Option<Fundamental> {
    let open = text.find('(')?;
    let name = &text[..open];
    if name.is_empty() || name.chars().any(forbidden_in_name) || !text.ends_with(')') {
        return None;
    }

    let mut depth = 0usize;
    for (i, c) in text.char_indices().skip(name.chars().count()) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 && i != text.len() - 1 {
                    return None;
                }
            },
            _ => (),
        }
    }

    (depth == 0).then(|| Fundamental::Function {
        name,
        args: &text[open + 1..text.len() - 1],
    })
}

/// Tries, in order, to read `text` as a number, a function call, and a label. The whole of `text`
/// must be consumed by the token.
pub fn recognize(text: &str) -> Option<Fundamental> {
    if whole_lexeme(text) == Some(Lexeme::Number) {
        let value = text.trim_end_matches('.').parse::<f64>().ok()?;
        return Some(Fundamental::Number(value));
    }

    if let Some(function) = function(text) {
        return Some(function);
    }

    if whole_lexeme(text) == Some(Lexeme::Label) {
        return Some(Fundamental::Label(&text[1..text.len() - 1]));
    }

    None
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(recognize("42"), Some(Fundamental::Number(42.0)));
        assert_eq!(recognize("-0.25"), Some(Fundamental::Number(-0.25)));
        assert_eq!(recognize("+3."), Some(Fundamental::Number(3.0)));
        assert_eq!(recognize("1.2.3"), None);
        assert_eq!(recognize(".5"), None);
    }

    #[test]
    fn labels() {
        assert_eq!(recognize("{X}"), Some(Fundamental::Label("X")));
        assert_eq!(recognize("{rate of change}"), Some(Fundamental::Label("rate of change")));
        assert_eq!(recognize("{x2}"), None);
        assert_eq!(recognize("{X}{Y}"), None);
    }

    #[test]
    fn functions() {
        assert_eq!(
            recognize("sin({X}+1)"),
            Some(Fundamental::Function { name: "sin", args: "{X}+1" }),
        );
        assert_eq!(
            recognize("f((a)(b))"),
            Some(Fundamental::Function { name: "f", args: "(a)(b)" }),
        );
        assert_eq!(recognize("g()"), Some(Fundamental::Function { name: "g", args: "" }));
    }

    #[test]
    fn not_functions() {
        // the first call closes before the end
        assert_eq!(recognize("f(a)*g(b)"), None);
        assert_eq!(recognize("f(a)(b)"), None);
        assert_eq!(recognize("2f(a)"), None);
        assert_eq!(recognize("(a)"), None);
        assert_eq!(recognize("a b(c)"), None);
    }
}
