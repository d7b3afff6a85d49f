use crate::error::{ExpectedLabel, MissingAssignment, MissingExpression, UnknownCommand};
use std::ops::Range;
use verbatim_error::Error;
use verbatim_parser::parser::{ast::Label, fundamental::{recognize, Fundamental}};

/// A piece of a line, along with where it starts in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'a> {
    pub text: &'a str,
    pub offset: usize,
}

/// A line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `<expr>`
    Show(Piece<'a>),

    /// `:let {name} = <expr>`
    Let { label: Label, expr: Piece<'a> },

    /// `:group {name} <expr>`
    Group { label: Label, expr: Piece<'a> },

    /// `:degree {name} <expr>`
    Degree { label: Label, expr: Piece<'a> },

    /// `:bindings`
    Bindings,

    /// `:clear`
    Clear,
}

/// Returns the position of `piece` inside `line`. `piece` must be a subslice of `line`.
fn offset_of(line: &str, piece: &str) -> usize {
    piece.as_ptr() as usize - line.as_ptr() as usize
}

/// Returns the span of `piece` inside `line`.
fn span_of(line: &str, piece: &str) -> Range<usize> {
    let start = offset_of(line, piece);
    start..start + piece.len()
}

/// Reads a `{name}` label from the start of `text`, returning it and the text after it.
fn leading_label<'a>(line: &str, text: &'a str, command: &'static str) -> Result<(Label, &'a str), Error> {
    let text = text.trim_start();
    let end = text.find('}').map_or(0, |close| close + 1);
    match recognize(&text[..end]) {
        Some(Fundamental::Label(name)) => Ok((Label::new(name), &text[end..])),
        _ => {
            let span = span_of(line, text.split_whitespace().next().unwrap_or(text));
            Err(Error::new(vec![span], ExpectedLabel { command }))
        },
    }
}

/// Checks that `text` holds an expression.
fn expression<'a>(line: &'a str, text: &'a str, command: &'static str) -> Result<Piece<'a>, Error> {
    if text.trim().is_empty() {
        let end = offset_of(line, text);
        return Err(Error::new(vec![end.saturating_sub(1)..end], MissingExpression { command }));
    }
    Ok(Piece { text, offset: offset_of(line, text) })
}

/// Parses a line of input into a command.
pub fn parse_command(line: &str) -> Result<Command, Error> {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix(':') else {
        return Ok(Command::Show(Piece { text: line, offset: 0 }));
    };

    let name_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let (name, args) = rest.split_at(name_end);
    match name {
        "let" => {
            let Some((lhs, rhs)) = args.split_once('=') else {
                return Err(Error::new(vec![span_of(line, trimmed)], MissingAssignment));
            };
            let (label, after) = leading_label(line, lhs, "let")?;
            if !after.trim().is_empty() {
                return Err(Error::new(vec![span_of(line, lhs.trim())], ExpectedLabel { command: "let" }));
            }
            Ok(Command::Let { label, expr: expression(line, rhs, "let")? })
        },
        "group" => {
            let (label, expr) = leading_label(line, args, "group")?;
            Ok(Command::Group { label, expr: expression(line, expr, "group")? })
        },
        "degree" => {
            let (label, expr) = leading_label(line, args, "degree")?;
            Ok(Command::Degree { label, expr: expression(line, expr, "degree")? })
        },
        "bindings" => Ok(Command::Bindings),
        "clear" => Ok(Command::Clear),
        _ => Err(Error::new(
            vec![span_of(line, &trimmed[..name.len() + 1])],
            UnknownCommand { name: name.to_string() },
        )),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn plain_expression() {
        assert_eq!(
            parse_command("2*{X}").unwrap(),
            Command::Show(Piece { text: "2*{X}", offset: 0 }),
        );
    }

    #[test]
    fn let_binding() {
        assert_eq!(
            parse_command(":let {X} = 2+{Y}").unwrap(),
            Command::Let { label: Label::new("X"), expr: Piece { text: " 2+{Y}", offset: 10 } },
        );
    }

    #[test]
    fn label_commands() {
        assert_eq!(
            parse_command(":group {X} {X}^2+{X}").unwrap(),
            Command::Group { label: Label::new("X"), expr: Piece { text: " {X}^2+{X}", offset: 10 } },
        );
        assert_eq!(
            parse_command(":degree {rate}{rate}*2").unwrap(),
            Command::Degree { label: Label::new("rate"), expr: Piece { text: "{rate}*2", offset: 14 } },
        );
        assert_eq!(parse_command("  :clear").unwrap(), Command::Clear);
        assert_eq!(parse_command(":bindings").unwrap(), Command::Bindings);
    }

    #[test]
    fn malformed_commands() {
        let err = parse_command(":lte {X} = 2").unwrap_err();
        assert_eq!(err.message(), "unknown command `:lte`");
        assert_eq!(err.spans, vec![0..4]);

        let err = parse_command(":let {X} 2").unwrap_err();
        assert_eq!(err.message(), "missing `=` in `:let`");

        let err = parse_command(":group X {X}+1").unwrap_err();
        assert_eq!(err.message(), "`:group` expects a label");
        assert_eq!(err.spans, vec![7..8]);

        let err = parse_command(":degree {X}  ").unwrap_err();
        assert_eq!(err.message(), "`:degree` expects an expression");
    }
}
