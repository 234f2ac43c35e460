// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense grid materialization of a sparse die record list.

use alloc::vec;
use alloc::vec::Vec;

use crate::types::{DieRecord, GridError};

/// Maximum number of cells a [`DenseGrid`] will materialize (2^24).
///
/// The grid is sized by the *maximum* observed indices, so a single record
/// with a bogus index would otherwise force an allocation proportional to
/// that index. Real wafer maps stay well below a million dies.
pub const MAX_GRID_CELLS: u64 = 1 << 24;

/// A fully materialized 2D table of die records.
///
/// Built once per data load from a sparse record list and read-only
/// thereafter. Dimensions are `(max col + 1) x (max row + 1)` over the input;
/// slots with no record are empty. Storage is column-major.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DenseGrid {
    cols: u32,
    rows: u32,
    cells: Vec<Option<DieRecord>>,
    die_count: usize,
}

impl DenseGrid {
    /// Creates a zero-sized grid with no dies.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cols: 0,
            rows: 0,
            cells: Vec::new(),
            die_count: 0,
        }
    }

    /// Builds a dense grid from a sparse record list.
    ///
    /// - Dimensions are `(max col + 1) x (max row + 1)` over the input.
    /// - Later records overwrite earlier ones at the same `(col, row)`; apart
    ///   from that tie-break the result is independent of input order.
    /// - An empty input yields [`DenseGrid::empty`], not an error.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::TooLarge`] if the observed maximum indices
    /// describe a grid exceeding [`MAX_GRID_CELLS`] cells. Nothing is
    /// allocated in that case.
    pub fn build(records: &[DieRecord]) -> Result<Self, GridError> {
        let Some(max_col) = records.iter().map(|r| r.col).max() else {
            return Ok(Self::empty());
        };
        // Non-empty input: the row maximum exists as well.
        let max_row = records.iter().map(|r| r.row).max().unwrap_or(0);

        let cols = u64::from(max_col) + 1;
        let rows = u64::from(max_row) + 1;
        let cell_count = cols
            .checked_mul(rows)
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or(GridError::TooLarge { cols, rows })?;
        let len = usize::try_from(cell_count).map_err(|_| GridError::TooLarge { cols, rows })?;

        let mut cells = vec![None; len];
        let rows_usize = max_row as usize + 1;
        for record in records {
            cells[record.col as usize * rows_usize + record.row as usize] = Some(*record);
        }
        let die_count = cells.iter().filter(|slot| slot.is_some()).count();

        Ok(Self {
            cols: max_col + 1,
            rows: max_row + 1,
            cells,
            die_count,
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> u32 {
        self.cols
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Returns `true` if the grid holds no dies.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.die_count == 0
    }

    /// Returns the number of occupied cells.
    ///
    /// Duplicate input records collapse into one die, so this can be smaller
    /// than the input record count.
    #[must_use]
    pub const fn die_count(&self) -> usize {
        self.die_count
    }

    /// Returns the die at `(col, row)`, if any.
    ///
    /// Out-of-range coordinates are not an error; they are simply empty.
    #[must_use]
    pub fn get(&self, col: u32, row: u32) -> Option<&DieRecord> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells[col as usize * self.rows as usize + row as usize].as_ref()
    }

    /// Iterates over occupied cells as `(col, row, record)` in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, &DieRecord)> + '_ {
        // `max(1)` only guards the empty grid, where `cells` is empty anyway.
        let rows = self.rows.max(1) as usize;
        self.cells.iter().enumerate().filter_map(move |(idx, slot)| {
            slot.as_ref()
                .map(|die| ((idx / rows) as u32, (idx % rows) as u32, die))
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use peniko::Color;

    use super::{DenseGrid, MAX_GRID_CELLS};
    use crate::types::{DieFlags, DieRecord, GridError, GridMetrics};

    fn die(col: u32, row: u32) -> DieRecord {
        DieRecord::new(col, row, Color::from_rgb8(0x40, 0x80, 0xc0), DieFlags::empty())
    }

    #[test]
    fn dimensions_follow_maximum_indices() {
        let grid = DenseGrid::build(&[die(0, 0), die(4, 2)]).unwrap();
        assert_eq!(grid.cols(), 5);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.die_count(), 2);
        assert!(grid.get(4, 2).is_some());
        assert!(grid.get(3, 1).is_none());
    }

    #[test]
    fn empty_input_yields_empty_grid() {
        let grid = DenseGrid::build(&[]).unwrap();
        assert_eq!(grid, DenseGrid::empty());
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
        assert!(grid.get(0, 0).is_none());
    }

    #[test]
    fn duplicate_records_resolve_last_write_wins() {
        let first = DieRecord::new(1, 1, Color::from_rgb8(0x11, 0x11, 0x11), DieFlags::empty());
        let second = DieRecord::new(1, 1, Color::from_rgb8(0xee, 0xee, 0xee), DieFlags::GOOD);

        let grid = DenseGrid::build(&[first, second]).unwrap();
        assert_eq!(grid.die_count(), 1);
        assert_eq!(grid.get(1, 1), Some(&second));
    }

    #[test]
    fn content_is_independent_of_input_order() {
        let records = [die(0, 1), die(2, 0), die(1, 2)];
        let mut reversed = records;
        reversed.reverse();

        let a = DenseGrid::build(&records).unwrap();
        let b = DenseGrid::build(&reversed).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn iteration_is_column_major() {
        let grid = DenseGrid::build(&[die(1, 0), die(0, 1), die(0, 0)]).unwrap();
        let order: Vec<(u32, u32)> = grid.iter().map(|(c, r, _)| (c, r)).collect();
        assert_eq!(order, [(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn oversized_indices_are_rejected() {
        let err = DenseGrid::build(&[die(u32::MAX, 0)]).unwrap_err();
        assert_eq!(
            err,
            GridError::TooLarge {
                cols: u64::from(u32::MAX) + 1,
                rows: 1,
            }
        );

        // Just past the cell limit, even though each index fits comfortably.
        let wide = die(4096, 4095);
        assert_eq!(
            DenseGrid::build(&[wide]).unwrap_err(),
            GridError::TooLarge {
                cols: 4097,
                rows: 4096,
            }
        );
        assert!(4097 * 4096 > MAX_GRID_CELLS, "limit sanity");
    }

    #[test]
    fn metrics_place_dies_on_the_world_plane() {
        let metrics = GridMetrics::default();
        let origin = metrics.die_origin(1, 1);
        assert_eq!((origin.x, origin.y), (0.75, 0.75));

        let rect = metrics.die_rect(2, 0);
        assert_eq!((rect.x0, rect.y0, rect.x1, rect.y1), (1.5, 0.0, 2.0, 0.5));
    }
}
