use super::expand::expand;
use verbatim_parser::{parser::ast::{Node, Number}, primitive::int};

/// Raises `base` to the natural power `n`, without expanding the result.
///
/// - Any base to the power 0 is 1.
/// - Numbers are raised exactly.
/// - Brackets are looked through.
/// - Fractions raise their numerator and denominator separately.
/// - Powers of powers multiply their exponents.
/// - Sums and products become a product of `n` copies of the base.
///
/// Other bases are left as `base^n`. Returns [`None`] if raising a number overflows one of its
/// exponents.
pub fn power(base: &Node, n: u32) -> Option<Node> {
    if n == 0 {
        return Some(Node::Number(Number::one()));
    }

    Some(match base {
        Node::Number(number) => Node::Number(number.pow(i64::from(n))?),
        Node::Bracketed(bracketed) => power(&bracketed.inner, n)?,
        Node::Fraction(fraction) => Node::fraction(
            power(&fraction.numerator, n)?,
            power(&fraction.denominator, n)?,
        ),
        Node::Exponent(exponent) => Node::exponent(
            (*exponent.base).clone(),
            expand(&(exponent.exponent.as_ref().clone() * Node::Number(Number::from_integer(&int(n))))),
        ),
        Node::Sum(_) | Node::Product(_) => (0..n).fold(Node::Number(Number::one()), |acc, _| acc * base.clone()),
        Node::Label(_) | Node::Function(_) | Node::Error(_) | Node::Raw(_) => {
            Node::exponent(base.clone(), Node::Number(Number::from_integer(&int(n))))
        },
    })
}

/// Returns true if [`power`] rewrites the given base.
pub(crate) fn expands_power(base: &Node) -> bool {
    matches!(
        base,
        Node::Number(_)
            | Node::Bracketed(_)
            | Node::Fraction(_)
            | Node::Exponent(_)
            | Node::Sum(_)
            | Node::Product(_)
    )
}
