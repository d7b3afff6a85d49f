use super::node::Node;

/// An iterator that iteratively traverses a tree in left-to-right post-order (i.e. depth-first).
///
/// This iterator is created by [`Node::post_order_iter`].
pub struct NodeIter<'a> {
    stack: Vec<&'a Node>,
    last_visited: Option<&'a Node>,
}

impl<'a> NodeIter<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            stack: vec![node],
            last_visited: None,
        }
    }

    /// Pops the current node in the stack and marks it as the last visited node.
    fn visit(&mut self) -> Option<&'a Node> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given node is the last visited node.
    fn is_last_visited(&self, node: &'a Node) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, node),
            None => false,
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = *self.stack.last()?;
            let children = node.children();
            match children.last().copied() {
                Some(last) if !self.is_last_visited(last) => {
                    self.stack.extend(children.into_iter().rev());
                },
                _ => return self.visit(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::receive;
    use super::*;

    #[test]
    fn post_order() {
        let tree = receive("2*({X}+1)^3");
        let texts = tree.post_order_iter().map(|node| node.to_string()).collect::<Vec<_>>();
        assert_eq!(texts, vec![
            "2",
            "{X}",
            "1",
            "{X}+1",
            "({X}+1)",
            "3",
            "(({X}+1))^(3)",
            "2*(({X}+1))^(3)",
        ]);
    }
}
