use ariadne::{Fmt, Source};
use std::io;
use verbatim_attrs::ErrorKind;
use verbatim_error::{Error as Diagnostic, EXPR};

/// The name of a command was not recognized.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown command `:{}`", name),
    labels = ["this command"],
    help = "available commands are `:let`, `:group`, `:degree`, `:bindings`, and `:clear`",
)]
pub struct UnknownCommand {
    pub name: String,
}

/// A command that needs a label did not start with one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`:{}` expects a label", command),
    labels = [format!("I expected a label like {} here", "{X}".fg(EXPR))],
)]
pub struct ExpectedLabel {
    pub command: &'static str,
}

/// `:let` was used without `=`.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing `=` in `:let`",
    labels = ["add `=` and a value after this"],
    help = format!("bindings are written as `:let {} = 2`", "{X}".fg(EXPR)),
)]
pub struct MissingAssignment;

/// A command that needs an expression was given none.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`:{}` expects an expression", command),
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct MissingExpression {
    pub command: &'static str,
}

/// Utility enum to package errors that can occur while running the front end.
#[derive(Debug)]
pub enum Error {
    /// A line was not a valid command.
    Command(Diagnostic),

    /// An input file could not be read.
    Io(io::Error),
}

impl Error {
    /// Report this error to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Command(err) => report_to_stderr(std::slice::from_ref(err), input),
            Self::Io(err) => eprintln!("error: {}", err),
        }
    }
}

impl From<Diagnostic> for Error {
    fn from(err: Diagnostic) -> Self {
        Self::Command(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Report each error to stderr, highlighting its spans in `input`.
///
/// The `ariadne` crate's `Report` type does not implement `Display`, so it can only be printed with
/// its `eprint` method.
pub fn report_to_stderr(errors: &[Diagnostic], input: &str) {
    for err in errors {
        if let Err(io_err) = err.build_report("input").eprint(("input", Source::from(input))) {
            eprintln!("error: {} ({})", err.message(), io_err);
        }
    }
}
