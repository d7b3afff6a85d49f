use crate::{command::{parse_command, Command, Piece}, error::Error};
use log::{debug, info};
use std::collections::HashMap;
use verbatim_compute::{
    numerical::{approximate, exact_value},
    symbolic::{evaluate, expand, group_like_terms, monomial_degree},
};
use verbatim_error::Error as Diagnostic;
use verbatim_parser::parser::{ast::{stringify, Label, Node}, Parser};

/// What a line produced: parse failures found in the trees it read, followed by its output.
#[derive(Debug, Default)]
pub struct Outcome {
    pub diagnostics: Vec<Diagnostic>,
    pub lines: Vec<String>,
}

/// The state kept between lines: the parser and the labels bound with `:let`.
#[derive(Debug, Default)]
pub struct Session {
    parser: Parser,
    bindings: HashMap<String, Node>,
}

impl Session {
    /// Creates a session that reads expressions with the given parser.
    pub fn new(parser: Parser) -> Self {
        Self { parser, bindings: HashMap::new() }
    }

    /// Parses a piece of the line and applies the session bindings, except the binding of
    /// `keep`. Parse failures are added to `diagnostics`, with their spans relative to the line.
    fn read(&self, piece: Piece, keep: Option<&Label>, diagnostics: &mut Vec<Diagnostic>) -> Node {
        let tree = self.parser.receive(piece.text);
        diagnostics.extend(tree.errors().into_iter().map(|mut err| {
            err.spans.iter_mut().for_each(|span| {
                *span = span.start + piece.offset..span.end + piece.offset;
            });
            err
        }));

        match keep {
            Some(label) if self.bindings.contains_key(&label.name) => {
                let mut bindings = self.bindings.clone();
                bindings.remove(&label.name);
                evaluate(&tree, &bindings)
            },
            _ => evaluate(&tree, &self.bindings),
        }
    }

    /// Runs one line of input.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, Error> {
        let command = parse_command(line)?;
        debug!("running {:?}", command);

        let mut outcome = Outcome::default();
        match command {
            Command::Show(piece) => {
                let tree = self.read(piece, None, &mut outcome.diagnostics);
                let expanded = expand(&tree);
                outcome.lines.push(stringify(&tree));
                outcome.lines.push(format!("expanded: {}", expanded));
                if let Some(value) = exact_value(&expanded) {
                    if *value.denom() == 1 {
                        outcome.lines.push(format!("value: {}", value));
                    } else {
                        let approx = approximate(&expanded).unwrap_or_else(|| value.to_f64());
                        outcome.lines.push(format!("value: {} ≈ {}", value, approx));
                    }
                }
            },
            Command::Let { label, expr } => {
                let value = self.read(expr, None, &mut outcome.diagnostics);
                info!("binding {} to {}", label, value);
                outcome.lines.push(format!("{} = {}", label, value));
                self.bindings.insert(label.name, value);
            },
            Command::Group { label, expr } => {
                let tree = self.read(expr, Some(&label), &mut outcome.diagnostics);
                let grouped = group_like_terms(&expand(&tree), &label);
                outcome.lines.push(stringify(&grouped));
            },
            Command::Degree { label, expr } => {
                let tree = self.read(expr, Some(&label), &mut outcome.diagnostics);
                outcome.lines.push(match monomial_degree(&tree, &label) {
                    Some(degree) => degree.to_string(),
                    None => String::from("undefined"),
                });
            },
            Command::Bindings => {
                let mut bindings = self.bindings.iter().collect::<Vec<_>>();
                bindings.sort_by(|a, b| a.0.cmp(b.0));
                outcome.lines.extend(bindings.into_iter().map(|(name, value)| {
                    format!("{} = {}", Label::new(name.as_str()), value)
                }));
            },
            Command::Clear => {
                info!("dropping {} bindings", self.bindings.len());
                self.bindings.clear();
            },
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn run(session: &mut Session, line: &str) -> Vec<String> {
        session.execute(line).unwrap().lines
    }

    #[test]
    fn shows_expressions() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "2*({X}+1)"), vec![
            "2*({X}+1)",
            "expanded: 2*{X}+2",
        ]);
        assert_eq!(run(&mut session, "(1+2)/4"), vec![
            "((1+2) / 4)",
            "expanded: (3 / 4)",
            "value: 3/4 ≈ 0.75",
        ]);
    }

    #[test]
    fn bindings_apply_to_later_lines() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, ":let {X} = 1+2"), vec!["{X} = 1+2"]);
        assert_eq!(run(&mut session, "3*{X}"), vec![
            "3*(1+2)",
            "expanded: 9",
            "value: 9",
        ]);
        assert_eq!(run(&mut session, ":let {Y} = {X}*2"), vec!["{Y} = (1+2)*2"]);
        assert_eq!(run(&mut session, ":bindings"), vec!["{X} = 1+2", "{Y} = (1+2)*2"]);
        assert_eq!(run(&mut session, ":clear"), Vec::<String>::new());
        assert_eq!(run(&mut session, ":bindings"), Vec::<String>::new());
    }

    #[test]
    fn groups_and_degrees() {
        let mut session = Session::default();
        run(&mut session, ":let {X} = 5");
        assert_eq!(run(&mut session, ":group {X} ({X}+1)^2"), vec!["1+2*({X})^(1)+1*({X})^(2)"]);
        assert_eq!(run(&mut session, ":degree {X} {X}^2*{Y}"), vec!["2"]);
        assert_eq!(run(&mut session, ":degree {X} {X}^0.5"), vec!["1/2"]);
        assert_eq!(run(&mut session, ":degree {X} {X}+1"), vec!["undefined"]);
    }

    #[test]
    fn diagnostics_are_relative_to_the_line() {
        let mut session = Session::default();
        let outcome = session.execute(":group {X} 1+(2").unwrap();
        assert_eq!(outcome.diagnostics.len(), 1);
        assert_eq!(outcome.diagnostics[0].spans, vec![13..15]);
        assert_eq!(outcome.diagnostics[0].message(), "unmatched bracket `(`");
    }
}
