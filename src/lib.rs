// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Patchwork
//!
//! Evaluates expressions such as `SUPER[JUXT[carre, triangle], ROT[...]]`
//! into a rectangular grid of oriented tiles, and renders that grid to a
//! raster image.

pub mod ast;
pub mod cli;
pub mod config;
pub mod error;
pub mod grid;
pub mod io;

pub use ast::{release, Evaluator, Node, NodeKind, OperationKind};
pub use config::{RenderConfig, TileSize};
pub use error::{DimensionMismatch, PatchworkError, RenderError, Result};
pub use grid::{Cell, Grid, Orientation, PrimitiveKind};
pub use io::{import_expression_file, parse_expression, render, TileSet};

/// Parse and evaluate an expression into its grid
pub fn evaluate(source: &str) -> Result<Grid> {
    let ast = parse_expression(source)?;
    let grid = Evaluator::new().evaluate(&ast);
    release(Some(ast));
    grid
}

/// Parse and evaluate an expression file into its grid
pub fn evaluate_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Grid> {
    let ast = import_expression_file(path)?;
    let grid = Evaluator::new().evaluate(&ast);
    release(Some(ast));
    Ok(grid?)
}
