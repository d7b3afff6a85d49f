//! Contains the common [`ErrorKind`] trait used by all diagnostics to display user-facing error
//! messages.
//!
//! Nothing in the expression engine returns [`Err`]: malformed input is kept in the tree as data
//! (see `verbatim_parser::parser::ast::Diagnostic`). When a caller wants to show that failure to a
//! user, it converts the embedded diagnostic into an [`Error`] and builds an [`ariadne::Report`]
//! from it.

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of diagnostic that can be produced while reading an expression.
pub trait ErrorKind: Debug + Send {
    /// A short, single-line description of the problem.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Returns the single-line message of the error kind.
    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }
}

#[cfg(test)]
mod tests {
    use ariadne::{Label, ReportKind, Source};
    use super::*;

    #[derive(Debug)]
    struct Unbalanced;

    impl ErrorKind for Unbalanced {
        fn message(&self) -> String {
            String::from("unbalanced brackets")
        }

        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<(&'a str, Range<usize>)> {
            Report::build(ReportKind::Error, src_id, spans[0].start)
                .with_message(self.message())
                .with_label(Label::new((src_id, spans[0].clone())).with_message("opened here"))
                .finish()
        }
    }

    #[test]
    fn report_mentions_message() {
        let source = "({X}+1";
        let err = Error::new(vec![0..1], Unbalanced);
        assert_eq!(err.message(), "unbalanced brackets");

        let mut rendered = Vec::new();
        err.build_report("input")
            .write(("input", Source::from(source)), &mut rendered)
            .unwrap();
        let plain = String::from_utf8(strip_ansi_escapes::strip(rendered)).unwrap();
        assert!(plain.contains("unbalanced brackets"));
        assert!(plain.contains("opened here"));
    }
}
