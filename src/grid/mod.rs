// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Grid module - patchwork representation and composition

mod compose;
mod patchwork;
mod primitives;

pub use compose::{juxtapose, rotate, superpose};
pub use patchwork::{Dimensions, Grid};
pub use primitives::{Cell, Orientation, PrimitiveKind};
