// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Explicit tree release

use super::Node;

enum Visit {
    Enter(Box<Node>),
    Exit(Box<Node>, &'static str),
}

/// Release a whole tree in postorder: children first, left to right, then
/// the node itself. Returns the number of nodes released; `None` releases
/// nothing.
///
/// Nodes handed to `Node::unary` / `Node::binary` belong to their parent and
/// are released with it.
pub fn release(root: Option<Node>) -> usize {
    let Some(root) = root else {
        return 0;
    };

    let mut released = 0;
    let mut stack = vec![Visit::Enter(Box::new(root))];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(mut node) => {
                let label = node.label();
                let children = node.detach_children();
                stack.push(Visit::Exit(node, label));
                stack.extend(children.into_iter().rev().map(Visit::Enter));
            }
            Visit::Exit(node, label) => {
                log::trace!("release {}", label);
                drop(node);
                released += 1;
            }
        }
    }

    released
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PrimitiveKind;

    #[test]
    fn test_release_none() {
        assert_eq!(release(None), 0);
    }

    #[test]
    fn test_release_counts_every_node() {
        let tree = Node::superposition(
            Node::juxtaposition(
                Node::leaf(PrimitiveKind::Square),
                Node::rotation(Node::leaf(PrimitiveKind::Triangle)),
            ),
            Node::leaf(PrimitiveKind::Square),
        );
        let expected = tree.node_count();
        assert_eq!(release(Some(tree)), expected);
    }

    #[test]
    fn test_release_deep_chain() {
        let mut tree = Node::leaf(PrimitiveKind::Triangle);
        for _ in 0..50_000 {
            tree = Node::rotation(tree);
        }
        assert_eq!(release(Some(tree)), 50_001);
    }
}
