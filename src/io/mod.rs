// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - parsing, importing, and rendering

mod importer;
mod parser;
mod raster;

pub use importer::{import_expression_file, read_expression};
pub use parser::parse_expression;
pub use raster::{export_image, render, TileSet};
