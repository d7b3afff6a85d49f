use super::{degree::monomial_degree, evaluate::evaluate, expand::expand};
use log::debug;
use rug::Rational;
use std::collections::{BTreeMap, HashMap};
use verbatim_parser::parser::ast::{Label, Node, Number};

/// Groups the terms of a sum by their degree in `label`, producing a polynomial in that label.
///
/// Terms with a defined degree `d` are collected into a single term `coefficient*({label})^(d)`,
/// where the coefficient is the sum of the terms with the label replaced by 1, expanded. The
/// degree-0 term is the bare coefficient, and degrees whose coefficient expands to zero are
/// dropped. The grouped terms come first, by ascending degree.
///
/// Terms without a degree are grouped with identical terms (compared as text) and come last, in
/// order of first appearance, left as they are.
///
/// Input that is not a sum is returned as a sum with a single term.
pub fn group_like_terms(node: &Node, label: &Label) -> Node {
    let Node::Sum(sum) = node else {
        return Node::sum(vec![node.clone()]);
    };

    let unit = HashMap::from([(label.name.clone(), Node::Number(Number::one()))]);
    let mut by_degree = BTreeMap::<Rational, Vec<Node>>::new();
    let mut opaque = Vec::<(String, Vec<Node>)>::new();

    for summand in &sum.summands {
        match monomial_degree(summand, label) {
            Some(degree) => by_degree.entry(degree).or_default().push(evaluate(summand, &unit)),
            None => {
                let key = summand.to_string();
                match opaque.iter_mut().find(|(text, _)| *text == key) {
                    Some((_, terms)) => terms.push(summand.clone()),
                    None => opaque.push((key, vec![summand.clone()])),
                }
            },
        }
    }

    let mut grouped = Vec::new();
    for (degree, terms) in by_degree {
        let coefficient = expand(&Node::sum(terms));
        if coefficient.as_number().map_or(false, Number::is_zero) {
            debug!("dropping degree {} in {{{}}}: coefficient is zero", degree, label.name);
            continue;
        }

        debug!("degree {} in {{{}}} has coefficient {}", degree, label.name, coefficient);
        if degree == 0 {
            grouped.push(coefficient);
        } else {
            let power = Node::exponent(Node::Label(label.clone()), Node::Number(Number::from_rational(&degree)));
            grouped.push(Node::product(vec![coefficient, power]));
        }
    }
    grouped.extend(opaque.into_iter().map(|(_, terms)| Node::sum(terms).downgrade()));

    if grouped.is_empty() {
        grouped.push(Node::Number(Number::zero()));
    }
    Node::sum(grouped)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use verbatim_parser::{parser::ast::stringify, receive};

    fn grouped(text: &str) -> Node {
        group_like_terms(&expand(&receive(text)), &Label::new("X"))
    }

    fn power_of_x(d: f64) -> Node {
        Node::exponent(Node::label("X"), Node::number(d))
    }

    #[test]
    fn polynomial() {
        let result = grouped("2*{X}+3*{X}^2+5");
        assert_eq!(result, Node::sum(vec![
            Node::number(5.0),
            Node::product(vec![Node::number(2.0), power_of_x(1.0)]),
            Node::product(vec![Node::number(3.0), power_of_x(2.0)]),
        ]));
        assert_eq!(stringify(&result), "5+2*({X})^(1)+3*({X})^(2)");
    }

    #[test]
    fn collects_like_terms() {
        assert_eq!(grouped("({X}+1)^2"), Node::sum(vec![
            Node::number(1.0),
            Node::product(vec![Node::number(2.0), power_of_x(1.0)]),
            Node::product(vec![Node::number(1.0), power_of_x(2.0)]),
        ]));
        assert_eq!(grouped("{a}*{X}+{b}*{X}"), Node::sum(vec![
            Node::product(vec![
                Node::sum(vec![Node::label("a"), Node::label("b")]),
                power_of_x(1.0),
            ]),
        ]));
    }

    #[test]
    fn cancelled_terms() {
        assert_eq!(grouped("{X}-{X}+{Y}"), Node::sum(vec![Node::label("Y")]));
        assert_eq!(grouped("{X}-{X}+1-1"), Node::sum(vec![Node::number(0.0)]));
    }

    #[test]
    fn undefined_degrees_come_last() {
        assert_eq!(grouped("sin({X})+{X}+sin({X})+cos({X})"), Node::sum(vec![
            Node::product(vec![Node::number(1.0), power_of_x(1.0)]),
            Node::sum(vec![Node::function("sin", "{X}"), Node::function("sin", "{X}")]),
            Node::function("cos", "{X}"),
        ]));
    }

    #[test]
    fn non_sums_are_wrapped() {
        assert_eq!(grouped("3*{X}^2"), Node::sum(vec![
            Node::product(vec![Node::number(3.0), power_of_x(2.0)]),
        ]));
    }
}
