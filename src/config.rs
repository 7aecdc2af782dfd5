// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Render configuration

use crate::error::PatchworkError;
use crate::io::TileSet;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Default configuration file looked up in the working directory
pub const CONFIG_FILE: &str = "patchwork.toml";

/// Pixel side of one tile; only 4, 15, 32 and 64 are supported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TileSize(u32);

impl TileSize {
    pub const SUPPORTED: [u32; 4] = [4, 15, 32, 64];

    pub fn pixels(self) -> u32 {
        self.0
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self(32)
    }
}

impl TryFrom<u32> for TileSize {
    type Error = PatchworkError;

    fn try_from(pixels: u32) -> Result<Self, Self::Error> {
        if Self::SUPPORTED.contains(&pixels) {
            Ok(Self(pixels))
        } else {
            Err(PatchworkError::InvalidTileSize(pixels))
        }
    }
}

impl From<TileSize> for u32 {
    fn from(size: TileSize) -> Self {
        size.0
    }
}

impl fmt::Display for TileSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How a grid is turned into an image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Side of one tile when using the built-in tiles
    pub tile_size: TileSize,
    /// Reference bitmap for squares
    pub square: Option<PathBuf>,
    /// Reference bitmap for triangles
    pub triangle: Option<PathBuf>,
    /// Output image path
    pub output: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            tile_size: TileSize::default(),
            square: None,
            triangle: None,
            output: PathBuf::from("patchwork.ppm"),
        }
    }
}

impl RenderConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        let config: RenderConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path.as_ref()))?;
        Ok(config)
    }

    /// Load `explicit`, else `patchwork.toml` if present, else defaults;
    /// then apply environment variable overrides
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(CONFIG_FILE).exists() => Self::from_file(CONFIG_FILE)?,
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Apply `PATCHWORK_*` overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(size) = lookup("PATCHWORK_TILE_SIZE") {
            let pixels: u32 = size
                .trim()
                .parse()
                .with_context(|| format!("PATCHWORK_TILE_SIZE is not a number: {}", size))?;
            self.tile_size = TileSize::try_from(pixels)?;
        }

        if let Some(square) = lookup("PATCHWORK_SQUARE") {
            self.square = Some(PathBuf::from(square));
        }

        if let Some(triangle) = lookup("PATCHWORK_TRIANGLE") {
            self.triangle = Some(PathBuf::from(triangle));
        }

        if let Some(output) = lookup("PATCHWORK_OUTPUT") {
            self.output = PathBuf::from(output);
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path.as_ref(), content)
            .with_context(|| format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }

    /// Reference tiles: the configured bitmaps, or built-in tiles of
    /// `tile_size` when neither is set
    pub fn tiles(&self) -> Result<TileSet> {
        match (&self.square, &self.triangle) {
            (Some(square), Some(triangle)) => {
                let tiles = TileSet::load(square, triangle).with_context(|| {
                    format!(
                        "Failed to load reference bitmaps {} and {}",
                        square.display(),
                        triangle.display()
                    )
                })?;
                if tiles.side() != self.tile_size.pixels() {
                    log::warn!(
                        "reference bitmaps are {} pixels wide, ignoring tile size {}",
                        tiles.side(),
                        self.tile_size
                    );
                }
                Ok(tiles)
            }
            (None, None) => Ok(TileSet::procedural(self.tile_size.pixels())),
            _ => bail!("Both a square and a triangle bitmap are needed, or neither"),
        }
    }
}
