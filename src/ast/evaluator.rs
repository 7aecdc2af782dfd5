// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! AST Evaluator - folds an expression tree into a single grid

use super::{Combinator, Node, NodeKind, OperationKind};
use crate::error::{PatchworkError, Result};
use crate::grid::Grid;
use std::cell::Cell;
use std::fmt;

/// Position of a node: child indices taken from the root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePath(Vec<usize>);

impl TreePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[usize] {
        &self.0
    }

    fn push(&mut self, index: usize) {
        self.0.push(index);
    }

    fn pop(&mut self) {
        self.0.pop();
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("root")?;
        for index in &self.0 {
            write!(f, ".{}", index)?;
        }
        Ok(())
    }
}

/// Grid bookkeeping for the last evaluation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationStats {
    /// Grids built, leaves and combinations alike
    pub grids_created: usize,
    /// Intermediate grids consumed by a parent and dropped
    pub grids_released: usize,
}

/// Evaluates expression trees bottom-up
#[derive(Debug, Default)]
pub struct Evaluator {
    stats: Cell<EvaluationStats>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate `node` into a grid. The tree is only read, so a tree can be
    /// evaluated any number of times.
    pub fn evaluate(&self, node: &Node) -> Result<Grid> {
        self.stats.set(EvaluationStats::default());
        let mut path = TreePath::root();
        let grid = self.evaluate_node(node, &mut path)?;
        log::debug!("evaluated {} into {}", node, grid.dimensions());
        Ok(grid)
    }

    /// Counters from the most recent call to `evaluate`
    pub fn stats(&self) -> EvaluationStats {
        self.stats.get()
    }

    fn evaluate_node(&self, node: &Node, path: &mut TreePath) -> Result<Grid> {
        match node.kind() {
            NodeKind::Leaf(kind) => Ok(self.created(Grid::leaf(*kind))),

            NodeKind::Unary { op, operand } => {
                let Combinator::Unary(combine) = op.entry().combinator else {
                    return Err(misplaced(*op));
                };

                let base = self.evaluate_child(operand, 0, path)?;
                let result = combine(&base);
                self.release(base);
                Ok(self.created(result))
            }

            NodeKind::Binary { op, left, right } => {
                let Combinator::Binary(combine) = op.entry().combinator else {
                    return Err(misplaced(*op));
                };

                let left_grid = self.evaluate_child(left, 0, path)?;
                let right_grid = self.evaluate_child(right, 1, path)?;
                let merged = combine(&left_grid, &right_grid);
                self.release(left_grid);
                self.release(right_grid);

                let merged = merged.map_err(|mismatch| PatchworkError::DimensionMismatch {
                    operation: *op,
                    path: path.clone(),
                    expression: node.to_string(),
                    mismatch,
                })?;
                Ok(self.created(merged))
            }
        }
    }

    fn evaluate_child(&self, child: &Node, index: usize, path: &mut TreePath) -> Result<Grid> {
        path.push(index);
        let result = self.evaluate_node(child, path);
        path.pop();
        result
    }

    fn created(&self, grid: Grid) -> Grid {
        let mut stats = self.stats.get();
        stats.grids_created += 1;
        self.stats.set(stats);
        grid
    }

    fn release(&self, grid: Grid) {
        drop(grid);
        let mut stats = self.stats.get();
        stats.grids_released += 1;
        self.stats.set(stats);
    }
}

// Nodes built through the checked constructors never reach this.
fn misplaced(op: OperationKind) -> PatchworkError {
    PatchworkError::InvalidOperationKind {
        name: op.name().to_string(),
        arity: Some(op.arity()),
    }
}
