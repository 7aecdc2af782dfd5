// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Expression tree nodes and the operator registry

use crate::error::{DimensionMismatch, PatchworkError, Result};
use crate::grid::{self, Grid, PrimitiveKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of operands an operator takes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    Unary,
    Binary,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Unary => f.write_str("unary"),
            Arity::Binary => f.write_str("binary"),
        }
    }
}

/// Operators of the expression language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationKind {
    Rotation,
    Juxtaposition,
    Superposition,
}

/// How an operator turns evaluated operands into a grid
#[derive(Clone, Copy)]
pub enum Combinator {
    Unary(fn(&Grid) -> Grid),
    Binary(fn(&Grid, &Grid) -> std::result::Result<Grid, DimensionMismatch>),
}

impl Combinator {
    pub fn arity(&self) -> Arity {
        match self {
            Combinator::Unary(_) => Arity::Unary,
            Combinator::Binary(_) => Arity::Binary,
        }
    }
}

/// Registry entry for one operator
pub struct OperatorEntry {
    pub kind: OperationKind,
    pub name: &'static str,
    pub combinator: Combinator,
}

static ROTATION: OperatorEntry = OperatorEntry {
    kind: OperationKind::Rotation,
    name: "ROT",
    combinator: Combinator::Unary(grid::rotate),
};

static JUXTAPOSITION: OperatorEntry = OperatorEntry {
    kind: OperationKind::Juxtaposition,
    name: "JUXT",
    combinator: Combinator::Binary(grid::juxtapose),
};

static SUPERPOSITION: OperatorEntry = OperatorEntry {
    kind: OperationKind::Superposition,
    name: "SUPER",
    combinator: Combinator::Binary(grid::superpose),
};

/// Every registered operator, in declaration order
pub static OPERATIONS: [&OperatorEntry; 3] = [&ROTATION, &JUXTAPOSITION, &SUPERPOSITION];

impl OperationKind {
    /// Registry entry describing this operator
    pub fn entry(self) -> &'static OperatorEntry {
        match self {
            OperationKind::Rotation => &ROTATION,
            OperationKind::Juxtaposition => &JUXTAPOSITION,
            OperationKind::Superposition => &SUPERPOSITION,
        }
    }

    pub fn name(self) -> &'static str {
        self.entry().name
    }

    pub fn arity(self) -> Arity {
        self.entry().combinator.arity()
    }

    fn expect_arity(self, arity: Arity) -> Result<()> {
        if self.arity() == arity {
            Ok(())
        } else {
            Err(PatchworkError::InvalidOperationKind {
                name: self.name().to_string(),
                arity: Some(arity),
            })
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = PatchworkError;

    fn from_str(s: &str) -> Result<Self> {
        OPERATIONS
            .iter()
            .find(|entry| entry.name == s)
            .map(|entry| entry.kind)
            .ok_or_else(|| PatchworkError::InvalidOperationKind {
                name: s.to_string(),
                arity: None,
            })
    }
}

/// Expression tree node. A node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    kind: NodeKind,
}

/// Shape of an expression node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    Leaf(PrimitiveKind),
    Unary {
        op: OperationKind,
        operand: Box<Node>,
    },
    Binary {
        op: OperationKind,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn leaf(kind: PrimitiveKind) -> Self {
        Self {
            kind: NodeKind::Leaf(kind),
        }
    }

    /// Leaf from a primitive name such as `carre`
    pub fn leaf_named(name: &str) -> Result<Self> {
        Ok(Self::leaf(name.parse()?))
    }

    /// Unary node; `op` must be a unary operator
    pub fn unary(op: OperationKind, operand: Node) -> Result<Self> {
        op.expect_arity(Arity::Unary)?;
        Ok(Self {
            kind: NodeKind::Unary {
                op,
                operand: Box::new(operand),
            },
        })
    }

    /// Binary node; `op` must be a binary operator
    pub fn binary(op: OperationKind, left: Node, right: Node) -> Result<Self> {
        op.expect_arity(Arity::Binary)?;
        Ok(Self {
            kind: NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        })
    }

    pub fn rotation(operand: Node) -> Self {
        Self {
            kind: NodeKind::Unary {
                op: OperationKind::Rotation,
                operand: Box::new(operand),
            },
        }
    }

    pub fn juxtaposition(left: Node, right: Node) -> Self {
        Self::binary_unchecked(OperationKind::Juxtaposition, left, right)
    }

    pub fn superposition(top: Node, bottom: Node) -> Self {
        Self::binary_unchecked(OperationKind::Superposition, top, bottom)
    }

    fn binary_unchecked(op: OperationKind, left: Node, right: Node) -> Self {
        Self {
            kind: NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
        }
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Primitive or operator name of this node alone
    pub fn label(&self) -> &'static str {
        match &self.kind {
            NodeKind::Leaf(kind) => kind.name(),
            NodeKind::Unary { op, .. } | NodeKind::Binary { op, .. } => op.name(),
        }
    }

    /// Direct children, left to right
    pub fn children(&self) -> Vec<&Node> {
        match &self.kind {
            NodeKind::Leaf(_) => Vec::new(),
            NodeKind::Unary { operand, .. } => vec![&**operand],
            NodeKind::Binary { left, right, .. } => vec![&**left, &**right],
        }
    }

    /// Longest root-to-leaf chain, counting both ends
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(Node::node_count)
            .sum::<usize>()
    }

    /// Move the children out, leaving this node a childless leaf.
    pub(crate) fn detach_children(&mut self) -> Vec<Box<Node>> {
        let placeholder = NodeKind::Leaf(PrimitiveKind::Square);
        match std::mem::replace(&mut self.kind, placeholder) {
            NodeKind::Leaf(kind) => {
                self.kind = NodeKind::Leaf(kind);
                Vec::new()
            }
            NodeKind::Unary { operand, .. } => vec![operand],
            NodeKind::Binary { left, right, .. } => vec![left, right],
        }
    }
}

impl Drop for Node {
    // Unlinks the subtree iteratively so dropping a deep tree never
    // recurses once per level.
    fn drop(&mut self) {
        let mut pending = self.detach_children();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.detach_children());
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Leaf(kind) => write!(f, "{}", kind),
            NodeKind::Unary { op, operand } => write!(f, "{}[{}]", op, operand),
            NodeKind::Binary { op, left, right } => write!(f, "{}[{}, {}]", op, left, right),
        }
    }
}
