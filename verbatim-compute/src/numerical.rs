//! Numeric values of label-free trees.
//!
//! [`exact_value`] computes with rationals and only accepts integer exponents. [`approximate`]
//! computes with `f64` and accepts any real exponent.
//!
//! ```
//! use rug::Rational;
//! use verbatim_compute::numerical::exact_value;
//! use verbatim_parser::receive;
//!
//! assert_eq!(exact_value(&receive("(1/3+0.5)*6")), Some(Rational::from(5)));
//! assert_eq!(exact_value(&receive("2*{X}")), None);
//! ```

use rug::{ops::Pow, Rational};
use verbatim_parser::parser::ast::Node;

/// Returns the exact value of the tree, or [`None`] if it contains labels, functions, parse
/// failures, division by zero, or a non-integer exponent.
pub fn exact_value(node: &Node) -> Option<Rational> {
    match node {
        Node::Number(n) => Some(n.to_rational()),
        Node::Sum(sum) => sum
            .summands
            .iter()
            .try_fold(Rational::new(), |total, term| Some(total + exact_value(term)?)),
        Node::Product(product) => product
            .multiplicands
            .iter()
            .try_fold(Rational::from(1), |total, factor| Some(total * exact_value(factor)?)),
        Node::Fraction(fraction) => {
            let numerator = exact_value(&fraction.numerator)?;
            let denominator = exact_value(&fraction.denominator)?;
            if denominator == 0 {
                return None;
            }
            Some(numerator / denominator)
        },
        Node::Exponent(exponent) => {
            let base = exact_value(&exponent.base)?;
            let power = exact_value(&exponent.exponent)?;
            if *power.denom() != 1 {
                return None;
            }
            let power = power.numer().to_i32()?;
            if base == 0 && power < 0 {
                return None;
            }
            Some(base.pow(power))
        },
        Node::Bracketed(bracketed) => exact_value(&bracketed.inner),
        Node::Label(_) | Node::Function(_) | Node::Error(_) | Node::Raw(_) => None,
    }
}

/// Returns the approximate value of the tree, or [`None`] if it contains labels, functions, parse
/// failures, or evaluates to something that is not finite.
pub fn approximate(node: &Node) -> Option<f64> {
    let value = match node {
        Node::Number(n) => n.value(),
        Node::Sum(sum) => sum
            .summands
            .iter()
            .try_fold(0.0, |total, term| Some(total + approximate(term)?))?,
        Node::Product(product) => product
            .multiplicands
            .iter()
            .try_fold(1.0, |total, factor| Some(total * approximate(factor)?))?,
        Node::Fraction(fraction) => approximate(&fraction.numerator)? / approximate(&fraction.denominator)?,
        Node::Exponent(exponent) => approximate(&exponent.base)?.powf(approximate(&exponent.exponent)?),
        Node::Bracketed(bracketed) => approximate(&bracketed.inner)?,
        Node::Label(_) | Node::Function(_) | Node::Error(_) | Node::Raw(_) => return None,
    };

    value.is_finite().then_some(value)
}
