use super::ops::{expands_power, power};
use log::debug;
use verbatim_parser::parser::ast::{Node, Number};

/// Expands a tree: distributes products over sums, expands natural powers, and collects the
/// numbers of every sum and product.
///
/// The result is a fixed point: expanding it again returns the same tree.
pub fn expand(node: &Node) -> Node {
    match node {
        Node::Bracketed(bracketed) => expand(&bracketed.inner),
        Node::Fraction(fraction) => Node::fraction(
            expand(&fraction.numerator),
            expand(&fraction.denominator),
        ),
        Node::Exponent(exponent) => expand_exponent(&exponent.base, &exponent.exponent),
        Node::Sum(sum) => expand_sum(&sum.summands),
        Node::Product(product) => expand_product(&product.multiplicands),
        Node::Number(_) | Node::Label(_) | Node::Function(_) | Node::Error(_) | Node::Raw(_) => node.clone(),
    }
}

fn expand_exponent(base: &Node, exponent: &Node) -> Node {
    let base = expand(base);
    let exponent = expand(exponent);

    if let (Node::Number(number), Some(scale)) = (&base, exponent.as_number()) {
        return match number.pow_number(scale) {
            Some(result) => Node::Number(result),
            None => {
                debug!("keeping `{}^{}`, the power is not exact", number, scale);
                Node::exponent(base, exponent)
            },
        };
    }

    match exponent.as_number().and_then(Number::to_natural) {
        Some(n) if n == 0 || expands_power(&base) => match power(&base, n) {
            Some(result) => {
                debug!("expanding `{}` to the power {}", base, n);
                expand(&result)
            },
            None => {
                debug!("keeping `{}` to the power {}, an exponent overflows", base, n);
                Node::exponent(base, exponent)
            },
        },
        _ => Node::exponent(base, exponent),
    }
}

fn expand_sum(summands: &[Node]) -> Node {
    let mut terms = Vec::new();
    let mut total = Number::zero();

    let mut add = |term: Node| match term {
        Node::Number(n) => total = &total + &n,
        other => terms.push(other),
    };
    for summand in summands {
        match expand(summand) {
            Node::Sum(inner) => inner.summands.into_iter().for_each(&mut add),
            other => add(other),
        }
    }

    if terms.is_empty() {
        return Node::Number(total);
    }
    if !total.is_zero() {
        debug!("collected numeric total {}", total);
        terms.push(Node::Number(total));
    }
    Node::sum(terms).downgrade()
}

fn expand_product(multiplicands: &[Node]) -> Node {
    let mut factors = Vec::new();
    for multiplicand in multiplicands {
        match expand(multiplicand) {
            Node::Product(inner) => factors.extend(inner.multiplicands),
            other => factors.push(other),
        }
    }

    // each term is a list of factors; the empty list is the number 1
    let mut terms: Vec<Vec<Node>> = vec![Vec::new()];
    for factor in factors {
        match factor {
            Node::Sum(sum) => {
                terms = terms
                    .iter()
                    .flat_map(|term| sum.summands.iter().map(move |summand| {
                        let mut term = term.clone();
                        term.push(summand.clone());
                        term
                    }))
                    .collect();
            },
            other => terms.iter_mut().for_each(|term| term.push(other.clone())),
        }
    }

    match terms.len() {
        0 => Node::Number(Number::zero()),
        1 => fold_coefficient(terms.remove(0)),
        len => {
            debug!("distributed product into {} terms", len);
            expand(&Node::sum(terms.into_iter().map(Node::product).collect()))
        },
    }
}

/// Multiplies the numbers among `factors` into a single leading coefficient. A number that would
/// overflow the coefficient stays a separate factor.
fn fold_coefficient(factors: Vec<Node>) -> Node {
    let mut coefficient = Number::one();
    let mut symbols = Vec::new();
    for factor in factors {
        match factor {
            Node::Number(n) => match coefficient.checked_mul(&n) {
                Some(product) => coefficient = product,
                None => symbols.push(Node::Number(n)),
            },
            other => symbols.push(other),
        }
    }

    if coefficient.is_zero() {
        return Node::Number(coefficient);
    }
    if symbols.is_empty() {
        return Node::Number(coefficient);
    }
    if coefficient.is_one() && symbols.len() == 1 {
        return symbols.remove(0);
    }
    if !coefficient.is_one() {
        symbols.insert(0, Node::Number(coefficient));
    }
    Node::product(symbols)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use verbatim_parser::{parser::ast::number::Factors, primitive::int, receive};

    fn expanded(text: &str) -> Node {
        expand(&receive(text))
    }

    #[test]
    fn zero_absorbs() {
        assert_eq!(expanded("0*({X}+1)"), Node::number(0.0));
        assert_eq!(expanded("{X}*0*{Y}"), Node::number(0.0));
    }

    #[test]
    fn collects_numbers() {
        assert_eq!(expanded("1+{X}+2"), Node::sum(vec![Node::label("X"), Node::number(3.0)]));
        assert_eq!(expanded("0.1+0.2"), Node::number(0.3));
        assert_eq!(expanded("1-1"), Node::number(0.0));
        assert_eq!(expanded("2*{X}*3"), Node::product(vec![Node::number(6.0), Node::label("X")]));
        assert_eq!(expanded("0.5*2*{X}"), Node::label("X"));
    }

    #[test]
    fn distributes() {
        assert_eq!(expanded("2*({X}+1)"), Node::sum(vec![
            Node::product(vec![Node::number(2.0), Node::label("X")]),
            Node::number(2.0),
        ]));
        assert_eq!(expanded("({a}+{b})({c}+{d})"), Node::sum(vec![
            Node::product(vec![Node::label("a"), Node::label("c")]),
            Node::product(vec![Node::label("a"), Node::label("d")]),
            Node::product(vec![Node::label("b"), Node::label("c")]),
            Node::product(vec![Node::label("b"), Node::label("d")]),
        ]));
    }

    #[test]
    fn natural_powers() {
        assert_eq!(expanded("({X}+1)^2"), Node::sum(vec![
            Node::product(vec![Node::label("X"), Node::label("X")]),
            Node::label("X"),
            Node::label("X"),
            Node::number(1.0),
        ]));
        assert_eq!(expanded("(2*3)^2"), Node::number(36.0));
        assert_eq!(expanded("{X}^0"), Node::number(1.0));
        assert_eq!(expanded("({X}^2)^3"), Node::exponent(Node::label("X"), Node::number(6.0)));
    }

    #[test]
    fn number_powers() {
        assert_eq!(expanded("2^-1"), Node::number(0.5));
        assert_eq!(expanded("4^0.5"), Node::number(2.0));
        assert_eq!(expanded("2^-2*4"), Node::number(1.0));
        assert_eq!(expanded("(0.25)^-0.5*{X}"), Node::product(vec![
            Node::number(2.0),
            Node::label("X"),
        ]));
        assert_eq!(expanded("2^0.5"), Node::exponent(Node::number(2.0), Node::number(0.5)));
        assert_eq!(expanded("(-4)^0.5"), Node::exponent(Node::number(-4.0), Node::number(0.5)));
    }

    #[test]
    fn overflowing_powers_stay_unexpanded() {
        let big = Node::Number(Number::from_factors(Factors::from([(int(2), 4294967295)])));
        assert_eq!(
            expanded("(2^4294967295)^4294967295"),
            Node::exponent(big.clone(), Node::number(4294967295.0)),
        );

        let fraction = Node::fraction(big, Node::label("X"));
        let once = expanded("((2^4294967295)/{X})^4294967295");
        assert_eq!(once, Node::exponent(fraction, Node::number(4294967295.0)));
        assert_eq!(expand(&once), once);
    }

    #[test]
    fn keeps_other_powers() {
        assert_eq!(expanded("{X}^2"), Node::exponent(Node::label("X"), Node::number(2.0)));
        assert_eq!(expanded("({X}+1)^{n}"), Node::exponent(
            Node::sum(vec![Node::label("X"), Node::number(1.0)]),
            Node::label("n"),
        ));
        assert_eq!(expanded("({X}+1)^0.5"), Node::exponent(
            Node::sum(vec![Node::label("X"), Node::number(1.0)]),
            Node::number(0.5),
        ));
    }

    #[test]
    fn opaque_nodes_pass_through() {
        assert_eq!(expanded("sin({X}+1)"), Node::function("sin", "{X}+1"));
        // fractions are never divided out
        assert_eq!(
            expanded("2*(1+1)/(3)"),
            Node::fraction(Node::number(4.0), Node::number(3.0)),
        );
    }

    #[test]
    fn idempotent() {
        for text in [
            "({a}+{b})*({c}+{d})",
            "({X}+1)^3-2*{X}",
            "(({X}+1)^0.5)^2",
            "{X}/({X}+1)*2",
            "[{X}-{Y}]^2*{Z}",
            "1-{X}^2+sin({X})",
        ] {
            let once = expanded(text);
            assert_eq!(expand(&once), once, "expanding `{}` twice", text);
        }
    }
}
