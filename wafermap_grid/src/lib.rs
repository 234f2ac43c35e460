// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wafermap_grid --heading-base-level=0

//! Wafermap Grid: die records, dense grid layout, and world-space metrics.
//!
//! A wafer map arrives as a *sparse* list of die records: `(column, row)`
//! indices plus a fill color and pass/fail flags. This crate materializes
//! that list into a [`DenseGrid`], a read-only 2D table sized to the maximum
//! observed indices, and defines [`GridMetrics`], the fixed die size and gap
//! that place each die on the world-space plane:
//!
//! ```text
//! world_x = col * (die_width + die_gap)
//! world_y = row * (die_height + die_gap)
//! ```
//!
//! It does **not** render anything or track view or selection state. Callers
//! are expected to:
//! - Build a [`DenseGrid`] once per data load and treat it as read-only.
//! - Use [`GridMetrics`] to position dies for painting and hit queries.
//! - Layer view transforms and selection on top (see the `wafermap_view2d`
//!   and `wafermap_selection` crates).
//!
//! ## Minimal example
//!
//! ```rust
//! use peniko::Color;
//! use wafermap_grid::{DenseGrid, DieFlags, DieRecord, GridMetrics};
//!
//! let records = [
//!     DieRecord::new(0, 0, Color::from_rgb8(0x33, 0xcc, 0x33), DieFlags::GOOD),
//!     DieRecord::new(2, 1, Color::from_rgb8(0xcc, 0x33, 0x33), DieFlags::empty()),
//! ];
//! let grid = DenseGrid::build(&records).unwrap();
//!
//! // Dimensions follow the maximum observed indices.
//! assert_eq!((grid.cols(), grid.rows()), (3, 2));
//! assert_eq!(grid.die_count(), 2);
//!
//! // Slots with no record are empty.
//! assert!(grid.get(1, 0).is_none());
//!
//! // World-space position of a die under the default metrics.
//! let metrics = GridMetrics::default();
//! let origin = metrics.die_origin(2, 1);
//! assert_eq!((origin.x, origin.y), (1.5, 0.75));
//! ```
//!
//! ## Design notes
//!
//! - Duplicate records at the same `(col, row)` are resolved last-write-wins;
//!   apart from that tie-break, grid content is independent of input order.
//! - An empty record list is not an error: it yields a zero-sized grid.
//! - Building is fallible only at the input-validation boundary: a record
//!   whose indices describe a grid larger than [`MAX_GRID_CELLS`] is rejected
//!   with [`GridError`] before any allocation happens.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod grid;
mod types;

pub use grid::{DenseGrid, MAX_GRID_CELLS};
pub use types::{DieFlags, DieRecord, GridError, GridMetrics};
