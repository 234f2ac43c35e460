// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the wafer grid: die records, flags, metrics, and errors.

use core::fmt;

use kurbo::{Point, Rect};
use peniko::Color;

bitflags::bitflags! {
    /// Per-die flags carried by a [`DieRecord`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DieFlags: u8 {
        /// Die passed test. Selection must never alter the appearance of a
        /// good die, no matter how it is covered by a selection rectangle.
        const GOOD = 0b0000_0001;
    }
}

/// One die of the sparse input: grid coordinates, fill color, and flags.
///
/// Records are immutable once loaded. Indices are grid coordinates, not
/// world coordinates; they need not be contiguous or start at zero. At most
/// one record is kept per `(col, row)` pair — see [`DenseGrid::build`] for
/// the duplicate tie-break.
///
/// [`DenseGrid::build`]: crate::DenseGrid::build
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DieRecord {
    /// Column index on the grid.
    pub col: u32,
    /// Row index on the grid.
    pub row: u32,
    /// Fill color used when the die is painted.
    pub color: Color,
    /// Pass/fail and related flags.
    pub flags: DieFlags,
}

impl DieRecord {
    /// Creates a record at `(col, row)` with the given fill color and flags.
    #[must_use]
    pub const fn new(col: u32, row: u32, color: Color, flags: DieFlags) -> Self {
        Self {
            col,
            row,
            color,
            flags,
        }
    }

    /// Returns `true` if the die passed test.
    #[must_use]
    pub const fn is_good(&self) -> bool {
        self.flags.contains(DieFlags::GOOD)
    }
}

/// Fixed die size and gap defining world-space positions of grid cells.
///
/// The world-space origin of the die at `(col, row)` is
/// `(col * (die_width + die_gap), row * (die_height + die_gap))`. All dies
/// share the same metrics; non-uniform grids are out of scope.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridMetrics {
    /// Width of one die in world units.
    pub die_width: f64,
    /// Height of one die in world units.
    pub die_height: f64,
    /// Gap between adjacent dies in world units, applied on both axes.
    pub die_gap: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            die_width: 0.5,
            die_height: 0.5,
            die_gap: 0.25,
        }
    }
}

impl GridMetrics {
    /// Creates metrics with explicit die size and gap.
    #[must_use]
    pub const fn new(die_width: f64, die_height: f64, die_gap: f64) -> Self {
        Self {
            die_width,
            die_height,
            die_gap,
        }
    }

    /// Returns the world-space origin (minimum corner) of the die at `(col, row)`.
    #[must_use]
    pub fn die_origin(&self, col: u32, row: u32) -> Point {
        Point::new(
            f64::from(col) * (self.die_width + self.die_gap),
            f64::from(row) * (self.die_height + self.die_gap),
        )
    }

    /// Returns the world-space rectangle covered by the die at `(col, row)`.
    #[must_use]
    pub fn die_rect(&self, col: u32, row: u32) -> Rect {
        let origin = self.die_origin(col, row);
        Rect::new(
            origin.x,
            origin.y,
            origin.x + self.die_width,
            origin.y + self.die_height,
        )
    }
}

/// Error returned when a batch of die records cannot be laid out.
///
/// This is the only fallible boundary of the crate: it rejects input whose
/// observed maximum indices describe a grid too large to materialize. A
/// failed build leaves any previously built grid untouched; callers swap in
/// the new grid only on success.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The records describe a `cols x rows` grid exceeding
    /// [`MAX_GRID_CELLS`](crate::MAX_GRID_CELLS) cells.
    TooLarge {
        /// Number of columns the input would require.
        cols: u64,
        /// Number of rows the input would require.
        rows: u64,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLarge { cols, rows } => write!(
                f,
                "die records describe a {cols}x{rows} grid, which exceeds the dense grid limit",
            ),
        }
    }
}

impl core::error::Error for GridError {}
