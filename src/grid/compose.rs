// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grid composition algebra: rotation, juxtaposition, superposition
//!
//! All operations are pure. Inputs are borrowed and never modified; the
//! result is always a freshly allocated grid.

use super::Grid;
use crate::error::{DimensionMismatch, MergeAxis};

/// Quarter turn counter-clockwise of the whole arrangement.
///
/// The result has the input's dimensions swapped and every cell's own
/// orientation advanced by one step, so four rotations give back the
/// input grid.
pub fn rotate(grid: &Grid) -> Grid {
    let height = grid.width();
    let width = grid.height();

    let rotated = Grid::from_fn(height, width, |i, j| grid.at(j, height - i - 1).rotated());
    log::debug!("rotation {} -> {}", grid.dimensions(), rotated.dimensions());
    rotated
}

/// Place `right` beside `left`. Both must have the same height.
pub fn juxtapose(left: &Grid, right: &Grid) -> Result<Grid, DimensionMismatch> {
    if left.height() != right.height() {
        return Err(DimensionMismatch {
            axis: MergeAxis::Horizontal,
            left: left.dimensions(),
            right: right.dimensions(),
        });
    }

    let split = left.width();
    let merged = Grid::from_fn(left.height(), split + right.width(), |i, j| {
        if j < split {
            left.at(i, j)
        } else {
            right.at(i, j - split)
        }
    });
    log::debug!(
        "juxtaposition {} + {} -> {}",
        left.dimensions(),
        right.dimensions(),
        merged.dimensions()
    );
    Ok(merged)
}

/// Stack `bottom` under `top`. Both must have the same width.
pub fn superpose(top: &Grid, bottom: &Grid) -> Result<Grid, DimensionMismatch> {
    if top.width() != bottom.width() {
        return Err(DimensionMismatch {
            axis: MergeAxis::Vertical,
            left: top.dimensions(),
            right: bottom.dimensions(),
        });
    }

    let split = top.height();
    let merged = Grid::from_fn(split + bottom.height(), top.width(), |i, j| {
        if i < split {
            top.at(i, j)
        } else {
            bottom.at(i - split, j)
        }
    });
    log::debug!(
        "superposition {} / {} -> {}",
        top.dimensions(),
        bottom.dimensions(),
        merged.dimensions()
    );
    Ok(merged)
}
