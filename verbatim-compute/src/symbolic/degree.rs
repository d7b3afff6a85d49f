use rug::Rational;
use verbatim_parser::parser::ast::{Label, Node};

/// Returns the degree of a monomial in the given label, or [`None`] if the degree is undefined.
///
/// Degrees add across products, subtract across fractions, and scale by numeric exponents. Sums,
/// functions, and anything that failed to parse have no degree.
pub fn monomial_degree(node: &Node, label: &Label) -> Option<Rational> {
    match node {
        Node::Number(_) => Some(Rational::new()),
        Node::Label(other) => Some(Rational::from(u8::from(other.name == label.name))),
        Node::Product(product) => product
            .multiplicands
            .iter()
            .try_fold(Rational::new(), |degree, factor| Some(degree + monomial_degree(factor, label)?)),
        Node::Fraction(fraction) => Some(
            monomial_degree(&fraction.numerator, label)?
                - monomial_degree(&fraction.denominator, label)?,
        ),
        Node::Bracketed(bracketed) => monomial_degree(&bracketed.inner, label),
        Node::Exponent(exponent) => match exponent.exponent.as_ref() {
            Node::Number(n) => Some(monomial_degree(&exponent.base, label)? * n.to_rational()),
            _ => None,
        },
        Node::Sum(_) | Node::Function(_) | Node::Error(_) | Node::Raw(_) => None,
    }
}
