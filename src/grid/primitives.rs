// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive tiles and their orientations

use crate::error::PatchworkError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two atomic tile shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Square,
    Triangle,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 2] = [PrimitiveKind::Square, PrimitiveKind::Triangle];

    /// Name used in expressions and when displaying a tree
    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Square => "carre",
            PrimitiveKind::Triangle => "triangle",
        }
    }

    /// Single letter used by the grid glyph dump
    pub fn glyph(self) -> char {
        match self {
            PrimitiveKind::Square => 'C',
            PrimitiveKind::Triangle => 'T',
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PrimitiveKind {
    type Err = PatchworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimitiveKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| PatchworkError::InvalidPrimitiveKind(s.to_string()))
    }
}

/// Facing of a cell. Rotation walks East -> North -> West -> South -> East.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    East,
    North,
    West,
    South,
}

impl Orientation {
    /// Number of quarter turns counter-clockwise from East
    pub fn quarter_turns(self) -> u8 {
        match self {
            Orientation::East => 0,
            Orientation::North => 1,
            Orientation::West => 2,
            Orientation::South => 3,
        }
    }

    /// Advance by one quarter turn
    pub fn advance(self) -> Self {
        match self {
            Orientation::East => Orientation::North,
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Orientation::East => '>',
            Orientation::North => '^',
            Orientation::West => '<',
            Orientation::South => 'v',
        }
    }
}

/// A single oriented tile of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub kind: PrimitiveKind,
    pub orientation: Orientation,
}

impl Cell {
    pub fn new(kind: PrimitiveKind, orientation: Orientation) -> Self {
        Self { kind, orientation }
    }

    /// Same tile turned a quarter counter-clockwise
    pub fn rotated(self) -> Self {
        Self {
            kind: self.kind,
            orientation: self.orientation.advance(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.glyph(), self.orientation.arrow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_cycle() {
        let mut o = Orientation::East;
        let seen: Vec<_> = (0..4)
            .map(|_| {
                let current = o;
                o = o.advance();
                current
            })
            .collect();
        assert_eq!(
            seen,
            vec![
                Orientation::East,
                Orientation::North,
                Orientation::West,
                Orientation::South
            ]
        );
        assert_eq!(o, Orientation::East);
    }

    #[test]
    fn test_primitive_names() {
        assert_eq!("carre".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Square);
        assert_eq!("triangle".parse::<PrimitiveKind>().unwrap(), PrimitiveKind::Triangle);
        assert!(matches!(
            "cercle".parse::<PrimitiveKind>(),
            Err(PatchworkError::InvalidPrimitiveKind(name)) if name == "cercle"
        ));
    }

    #[test]
    fn test_cell_glyph() {
        let cell = Cell::new(PrimitiveKind::Triangle, Orientation::South);
        assert_eq!(cell.to_string(), "Tv");
        assert_eq!(cell.rotated().to_string(), "T>");
    }
}
