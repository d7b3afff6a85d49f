use std::collections::HashMap;
use verbatim_parser::parser::ast::{Bracketed, Node};

/// Substitutes bound labels.
///
/// Every [`Node::Label`] whose name has a binding is replaced by a copy of the bound node. The
/// rest of the tree is copied as-is, so the input can be evaluated again with other bindings.
pub fn evaluate(node: &Node, bindings: &HashMap<String, Node>) -> Node {
    match node {
        Node::Label(label) => bindings.get(&label.name).cloned().unwrap_or_else(|| node.clone()),
        Node::Sum(sum) => Node::sum(
            sum.summands.iter().map(|summand| evaluate(summand, bindings)).collect(),
        ),
        Node::Product(product) => Node::product(
            product.multiplicands.iter().map(|factor| evaluate(factor, bindings)).collect(),
        ),
        Node::Fraction(fraction) => Node::fraction(
            evaluate(&fraction.numerator, bindings),
            evaluate(&fraction.denominator, bindings),
        ),
        Node::Exponent(exponent) => Node::exponent(
            evaluate(&exponent.base, bindings),
            evaluate(&exponent.exponent, bindings),
        ),
        Node::Bracketed(Bracketed { inner, bracket }) => Node::bracketed(evaluate(inner, bindings), *bracket),
        Node::Number(_) | Node::Function(_) | Node::Error(_) | Node::Raw(_) => node.clone(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use verbatim_parser::receive;

    #[test]
    fn substitutes_bound_labels() {
        let tree = receive("2*{X}+{Y}");
        let bindings = HashMap::from([(String::from("X"), receive("({a}+1)"))]);
        assert_eq!(evaluate(&tree, &bindings), receive("2*({a}+1)+{Y}"));
    }

    #[test]
    fn leaves_input_untouched() {
        let tree = receive("{X}^2/sin({X})");
        let before = tree.clone();
        let bindings = HashMap::from([(String::from("X"), Node::number(3.0))]);
        let evaluated = evaluate(&tree, &bindings);
        assert_eq!(tree, before);
        assert_eq!(evaluated, Node::exponent(
            Node::number(3.0),
            Node::fraction(Node::number(2.0), Node::function("sin", "{X}")),
        ));
    }
}
