// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for construction, evaluation and rendering

use crate::ast::{Arity, OperationKind, TreePath};
use crate::grid::Dimensions;
use std::fmt;
use thiserror::Error;

/// Direction in which two grids are merged
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeAxis {
    /// Side by side; heights must agree
    Horizontal,
    /// Stacked; widths must agree
    Vertical,
}

impl MergeAxis {
    /// The dimension both operands must share
    pub fn shared_measure(self) -> &'static str {
        match self {
            MergeAxis::Horizontal => "height",
            MergeAxis::Vertical => "width",
        }
    }
}

impl fmt::Display for MergeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeAxis::Horizontal => f.write_str("horizontal"),
            MergeAxis::Vertical => f.write_str("vertical"),
        }
    }
}

/// Two grids that cannot be merged along `axis`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{axis} merge needs equal {}, got {left} and {right}", shared_measure(.axis))]
pub struct DimensionMismatch {
    pub axis: MergeAxis,
    pub left: Dimensions,
    pub right: Dimensions,
}

/// Reference bitmaps that cannot be used to render a grid
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{role} bitmap must be square, got {width}x{height} pixels")]
    NotSquare {
        role: &'static str,
        width: u32,
        height: u32,
    },

    #[error("square and triangle bitmaps differ in size: {square} vs {triangle} pixels")]
    SideMismatch { square: u32, triangle: u32 },

    #[error("rendered image would be {width}x{height} pixels, which is too large")]
    TooLarge { width: usize, height: usize },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Every failure the library reports
#[derive(Debug, Error)]
pub enum PatchworkError {
    #[error("unknown primitive '{0}' (expected carre or triangle)")]
    InvalidPrimitiveKind(String),

    #[error("invalid operation '{name}'{}", describe_arity(.arity))]
    InvalidOperationKind { name: String, arity: Option<Arity> },

    #[error("{operation} failed at {path} in `{expression}`: {mismatch}")]
    DimensionMismatch {
        operation: OperationKind,
        path: TreePath,
        expression: String,
        #[source]
        mismatch: DimensionMismatch,
    },

    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("tile size {0} is not supported (expected 4, 15, 32 or 64)")]
    InvalidTileSize(u32),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn shared_measure(axis: &MergeAxis) -> &'static str {
    axis.shared_measure()
}

fn describe_arity(arity: &Option<Arity>) -> String {
    match arity {
        Some(arity) => format!(" for a {} node", arity),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, PatchworkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = DimensionMismatch {
            axis: MergeAxis::Horizontal,
            left: Dimensions { height: 1, width: 2 },
            right: Dimensions { height: 2, width: 1 },
        };
        assert_eq!(
            err.to_string(),
            "horizontal merge needs equal height, got 1x2 and 2x1"
        );
    }

    #[test]
    fn test_invalid_operation_message() {
        let unknown = PatchworkError::InvalidOperationKind {
            name: "SPIN".into(),
            arity: None,
        };
        assert_eq!(unknown.to_string(), "invalid operation 'SPIN'");

        let wrong_arity = PatchworkError::InvalidOperationKind {
            name: "ROT".into(),
            arity: Some(Arity::Binary),
        };
        assert_eq!(
            wrong_arity.to_string(),
            "invalid operation 'ROT' for a binary node"
        );
    }
}
