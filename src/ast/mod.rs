// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Abstract Syntax Tree module
//!
//! Expression nodes, the operator registry, evaluation into grids and
//! explicit tree release.

mod evaluator;
mod lifecycle;
mod node;

pub use evaluator::{EvaluationStats, Evaluator, TreePath};
pub use lifecycle::release;
pub use node::{Arity, Combinator, Node, NodeKind, OperationKind, OperatorEntry, OPERATIONS};
