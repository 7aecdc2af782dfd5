// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.
//
//! Raster rendering of evaluated grids
//!
//! Every cell of a grid is drawn as a copy of its reference tile, turned
//! by the cell's orientation. The two reference tiles must be square and
//! share the same side length.
//
use crate::error::RenderError;
use crate::grid::{Grid, Orientation, PrimitiveKind};
use image::{Rgb, RgbImage};
use std::path::Path;

const BACKGROUND: Rgb<u8> = Rgb([250, 248, 240]);
const SQUARE_FILL: Rgb<u8> = Rgb([52, 101, 164]);
const SQUARE_BORDER: Rgb<u8> = Rgb([20, 40, 70]);
const TRIANGLE_FILL: Rgb<u8> = Rgb([204, 85, 0]);

/// Reference bitmaps for both primitive kinds
#[derive(Debug, Clone)]
pub struct TileSet {
    square: RgbImage,
    triangle: RgbImage,
}

impl TileSet {
    /// Use the given bitmaps, checking they are square and the same size
    pub fn new(square: RgbImage, triangle: RgbImage) -> Result<Self, RenderError> {
        let square_side = checked_side("square", &square)?;
        let triangle_side = checked_side("triangle", &triangle)?;
        if square_side != triangle_side {
            return Err(RenderError::SideMismatch {
                square: square_side,
                triangle: triangle_side,
            });
        }

        Ok(Self { square, triangle })
    }

    /// Decode both bitmaps from disk (PPM or any format `image` reads)
    pub fn load(square: impl AsRef<Path>, triangle: impl AsRef<Path>) -> Result<Self, RenderError> {
        let square = image::open(square.as_ref())?.to_rgb8();
        let triangle = image::open(triangle.as_ref())?.to_rgb8();
        Self::new(square, triangle)
    }

    /// Built-in tiles: a framed square, and a triangle with its base on
    /// the west edge and its apex at the middle of the east edge.
    pub fn procedural(side: u32) -> Self {
        let side = side.max(1);
        let last = i64::from(side) - 1;
        let border = (side / 8).max(1);

        let square = RgbImage::from_fn(side, side, |x, y| {
            let edge = x < border || y < border || x >= side - border || y >= side - border;
            if edge {
                SQUARE_BORDER
            } else {
                SQUARE_FILL
            }
        });

        let triangle = RgbImage::from_fn(side, side, |x, y| {
            let spread = (2 * i64::from(y) - last).abs();
            if spread <= last - i64::from(x) {
                TRIANGLE_FILL
            } else {
                BACKGROUND
            }
        });

        Self { square, triangle }
    }

    /// Side length of both tiles, in pixels
    pub fn side(&self) -> u32 {
        self.square.width()
    }

    pub fn tile(&self, kind: PrimitiveKind) -> &RgbImage {
        match kind {
            PrimitiveKind::Square => &self.square,
            PrimitiveKind::Triangle => &self.triangle,
        }
    }
}

fn checked_side(role: &'static str, bitmap: &RgbImage) -> Result<u32, RenderError> {
    let (width, height) = bitmap.dimensions();
    if width == 0 || width != height {
        return Err(RenderError::NotSquare {
            role,
            width,
            height,
        });
    }
    Ok(width)
}

/// Tile pixel that lands at `(x, y)` once the tile is turned
/// counter-clockwise by `orientation`
fn source_pixel(orientation: Orientation, x: u32, y: u32, side: u32) -> (u32, u32) {
    let last = side - 1;
    match orientation {
        Orientation::East => (x, y),
        Orientation::North => (last - y, x),
        Orientation::West => (last - x, last - y),
        Orientation::South => (y, last - x),
    }
}

/// Draw `grid` with `tiles`; the image is `width * side` by `height * side`
pub fn render(grid: &Grid, tiles: &TileSet) -> Result<RgbImage, RenderError> {
    let side = tiles.side();
    let too_large = || RenderError::TooLarge {
        width: grid.width().saturating_mul(side as usize),
        height: grid.height().saturating_mul(side as usize),
    };
    let width = u32::try_from(grid.width())
        .ok()
        .and_then(|w| w.checked_mul(side))
        .ok_or_else(too_large)?;
    let height = u32::try_from(grid.height())
        .ok()
        .and_then(|h| h.checked_mul(side))
        .ok_or_else(too_large)?;

    let mut canvas = RgbImage::new(width, height);
    for (row, cells) in grid.rows().enumerate() {
        let top = row as u32 * side;
        for (column, cell) in cells.iter().enumerate() {
            let left = column as u32 * side;
            let tile = tiles.tile(cell.kind);
            for y in 0..side {
                for x in 0..side {
                    let (sx, sy) = source_pixel(cell.orientation, x, y, side);
                    canvas.put_pixel(left + x, top + y, *tile.get_pixel(sx, sy));
                }
            }
        }
    }

    log::debug!(
        "rendered {} grid into {}x{} pixels",
        grid.dimensions(),
        width,
        height
    );
    Ok(canvas)
}

/// Write a rendered image; the format follows the file extension
pub fn export_image(image: &RgbImage, path: impl AsRef<Path>) -> Result<(), RenderError> {
    image.save(path.as_ref())?;
    log::info!("wrote {}", path.as_ref().display());
    Ok(())
}
