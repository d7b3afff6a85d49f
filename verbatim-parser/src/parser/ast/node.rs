use crate::parser::ast::{
    bracketed::{Bracket, Bracketed},
    diagnostic::Diagnostic,
    exponent::Exponent,
    fraction::Fraction,
    iter::NodeIter,
    literal::{Function, Label, Raw},
    number::Number,
    product::Product,
    sum::Sum,
};
use std::{fmt, ops::Mul};
use verbatim_error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
///
/// The tree keeps exactly the structure that was written: `2*3` is a [`Node::Product`] of two
/// numbers, not the number `6`. Nodes own their children, and every operation on a tree builds a
/// new tree instead of modifying its input.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// An exact rational number, such as `2.5`.
    Number(Number),

    /// A free variable, such as `{X}`.
    Label(Label),

    /// Terms added together, such as `1+{X}`.
    Sum(Sum),

    /// Factors multiplied together, such as `2*{X}` or `(a)(b)`.
    Product(Product),

    /// A quotient, such as `{X}/2`.
    Fraction(Fraction),

    /// A power, such as `{X}^2`.
    Exponent(Exponent),

    /// A node wrapped in brackets, such as `({X}+1)`.
    Bracketed(Bracketed),

    /// An opaque function call, such as `sin({X})`.
    Function(Function),

    /// A part of the input that failed to parse.
    Error(Diagnostic),

    /// Text that no parsing step recognized.
    Raw(Raw),
}

impl Node {
    /// Creates a number node from a float.
    pub fn number(value: f64) -> Self {
        Node::Number(Number::from(value))
    }

    /// Creates a label node.
    pub fn label(name: impl Into<String>) -> Self {
        Node::Label(Label::new(name))
    }

    /// Creates a sum node.
    pub fn sum(summands: Vec<Node>) -> Self {
        Node::Sum(Sum { summands })
    }

    /// Creates a product node.
    pub fn product(multiplicands: Vec<Node>) -> Self {
        Node::Product(Product { multiplicands })
    }

    /// Creates a fraction node.
    pub fn fraction(numerator: Node, denominator: Node) -> Self {
        Node::Fraction(Fraction {
            numerator: Box::new(numerator),
            denominator: Box::new(denominator),
        })
    }

    /// Creates an exponent node.
    pub fn exponent(base: Node, exponent: Node) -> Self {
        Node::Exponent(Exponent {
            base: Box::new(base),
            exponent: Box::new(exponent),
        })
    }

    /// Creates a bracketed node.
    pub fn bracketed(inner: Node, bracket: Bracket) -> Self {
        Node::Bracketed(Bracketed { inner: Box::new(inner), bracket })
    }

    /// Creates a function node.
    pub fn function(name: impl Into<String>, args: impl Into<String>) -> Self {
        Node::Function(Function { name: name.into(), args: args.into() })
    }

    /// Returns the number if this node is a [`Node::Number`].
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Node::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Collapses single-element sums and products into their only element. Empty sums become
    /// zero and empty products become one.
    pub fn downgrade(self) -> Self {
        match self {
            Node::Sum(mut sum) => match sum.summands.len() {
                0 => Node::Number(Number::zero()),
                1 => sum.summands.remove(0),
                _ => Node::Sum(sum),
            },
            Node::Product(mut product) => match product.multiplicands.len() {
                0 => Node::Number(Number::one()),
                1 => product.multiplicands.remove(0),
                _ => Node::Product(product),
            },
            node => node,
        }
    }

    /// Returns the direct children of this node, from left to right.
    pub fn children(&self) -> Vec<&Node> {
        match self {
            Node::Sum(sum) => sum.summands.iter().collect(),
            Node::Product(product) => product.multiplicands.iter().collect(),
            Node::Fraction(fraction) => vec![fraction.numerator.as_ref(), fraction.denominator.as_ref()],
            Node::Exponent(exponent) => vec![exponent.base.as_ref(), exponent.exponent.as_ref()],
            Node::Bracketed(bracketed) => vec![bracketed.inner.as_ref()],
            Node::Number(_) | Node::Label(_) | Node::Function(_) | Node::Error(_) | Node::Raw(_) => Vec::new(),
        }
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order (i.e. depth-first).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }

    /// Returns true if the tree contains no [`Node::Label`].
    pub fn is_label_free(&self) -> bool {
        !self.post_order_iter().any(|node| matches!(node, Node::Label(_)))
    }

    /// Collects the parse failures embedded in the tree, in post-order.
    pub fn errors(&self) -> Vec<Error> {
        self.post_order_iter()
            .filter_map(|node| match node {
                Node::Error(diagnostic) => Some(diagnostic.to_error()),
                Node::Raw(raw) => Some(raw.to_error()),
                _ => None,
            })
            .collect()
    }
}

/// Multiplication appends to a product without evaluating anything: `a * b` is a
/// [`Node::Product`] holding the factors of `a` followed by the factors of `b`.
impl Mul for Node {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Node::Product(mut lhs), Node::Product(rhs)) => {
                lhs.multiplicands.extend(rhs.multiplicands);
                Node::Product(lhs)
            },
            (Node::Product(mut lhs), rhs) => {
                lhs.multiplicands.push(rhs);
                Node::Product(lhs)
            },
            (lhs, Node::Product(mut rhs)) => {
                rhs.multiplicands.insert(0, lhs);
                Node::Product(rhs)
            },
            (lhs, rhs) => Node::product(vec![lhs, rhs]),
        }
    }
}

/// Writes a node that is an operand of a product or a fraction, wrapping it in parentheses if it
/// would otherwise read back differently. Sums are always wrapped; negative numbers are wrapped
/// unless they lead a product.
pub(crate) fn fmt_operand(node: &Node, leading: bool, f: &mut fmt::Formatter) -> fmt::Result {
    let wrap = match node {
        Node::Sum(_) => true,
        Node::Number(n) => !leading && n.sign() < 0,
        _ => false,
    };
    if wrap {
        write!(f, "({})", node)
    } else {
        node.fmt(f)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Number(number) => number.fmt(f),
            Node::Label(label) => label.fmt(f),
            Node::Sum(sum) => sum.fmt(f),
            Node::Product(product) => product.fmt(f),
            Node::Fraction(fraction) => fraction.fmt(f),
            Node::Exponent(exponent) => exponent.fmt(f),
            Node::Bracketed(bracketed) => bracketed.fmt(f),
            Node::Function(function) => function.fmt(f),
            Node::Error(diagnostic) => diagnostic.fmt(f),
            Node::Raw(raw) => raw.fmt(f),
        }
    }
}

/// Writes a tree back to text.
///
/// Numbers are written with their value, exponents as `(base)^(exponent)`, and fractions as
/// `(numerator / denominator)`. The text parses back to a tree with the same value.
pub fn stringify(node: &Node) -> String {
    node.to_string()
}
