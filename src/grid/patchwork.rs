// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Rectangular grid of oriented tiles

use super::{Cell, Orientation, PrimitiveKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Height and width of a grid, in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.height, self.width)
    }
}

/// A patchwork: `height` rows of exactly `width` cells, stored row-major.
///
/// Both dimensions are at least 1. Grids are values: every composition
/// operation builds a fresh grid and leaves its inputs untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// 1x1 grid holding `kind` facing East
    pub fn leaf(kind: PrimitiveKind) -> Self {
        log::debug!("primitive {}", kind);
        Self {
            height: 1,
            width: 1,
            cells: vec![Cell::new(kind, Orientation::East)],
        }
    }

    /// Build a grid from explicit rows. Returns `None` if there are no
    /// rows, a row is empty, or rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }

        Some(Self {
            height,
            width,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Build a grid by calling `f(row, column)` for every position.
    /// Callers guarantee `height >= 1` and `width >= 1`.
    pub(crate) fn from_fn(
        height: usize,
        width: usize,
        mut f: impl FnMut(usize, usize) -> Cell,
    ) -> Self {
        debug_assert!(height >= 1 && width >= 1);
        let mut cells = Vec::with_capacity(height * width);
        for i in 0..height {
            for j in 0..width {
                cells.push(f(i, j));
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            height: self.height,
            width: self.width,
        }
    }

    /// Cell at `row`, `column`, or `None` when out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        if row < self.height && column < self.width {
            self.cells.get(row * self.width + column)
        } else {
            None
        }
    }

    /// Cell lookup for positions already known to be in bounds
    pub(crate) fn at(&self, row: usize, column: usize) -> Cell {
        self.cells[row * self.width + column]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
