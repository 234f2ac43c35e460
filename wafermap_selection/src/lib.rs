// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wafermap_selection --heading-base-level=0

//! Wafermap Selection: rectangle coverage queries and mark bookkeeping.
//!
//! This crate answers one question — *which dies does a drag rectangle
//! cover?* — and tracks the answer across a session. It is split into a pure
//! query and a small container:
//!
//! - [`select_in_rect`] computes the dies newly covered by a world-space
//!   rectangle. It mutates nothing; callers apply the result to a [`MarkSet`]
//!   and use it to issue minimal repaint instructions.
//! - [`MarkSet`] is the set of marked `(col, row)` coordinates plus a
//!   monotonically increasing **revision** counter that bumps only when the
//!   set actually changes.
//!
//! ## Coverage rules
//!
//! - The rectangle is given by two corners in any order; min/max are taken
//!   per axis before testing.
//! - A die is covered iff its world-space origin lies **strictly** inside the
//!   rectangle. A rectangle that merely touches a die's origin selects
//!   nothing; in particular a zero-area rectangle never selects.
//! - Dies flagged [`DieFlags::GOOD`] are never selected, no matter how the
//!   rectangle covers them. This is a hard invariant, not a UI preference.
//! - Marking is monotonic for the session: there is no deselection, and
//!   re-selecting an already marked die is a harmless no-op.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use wafermap_grid::{DenseGrid, DieFlags, DieRecord, GridMetrics};
//! use wafermap_selection::{MarkSet, select_in_rect};
//!
//! let records = [
//!     DieRecord::new(0, 0, Color::from_rgb8(0xcc, 0x33, 0x33), DieFlags::empty()),
//!     DieRecord::new(1, 1, Color::from_rgb8(0x33, 0xcc, 0x33), DieFlags::GOOD),
//! ];
//! let grid = DenseGrid::build(&records).unwrap();
//! let metrics = GridMetrics::default();
//! let mut marks = MarkSet::new();
//!
//! // A rectangle enclosing both dies still only selects the failing one.
//! let covered = select_in_rect(
//!     Point::new(-1.0, -1.0),
//!     Point::new(2.0, 2.0),
//!     &grid,
//!     &metrics,
//!     &marks,
//! );
//! assert_eq!(covered, [(0, 0)]);
//!
//! marks.mark_all(covered);
//! assert!(marks.contains(0, 0));
//! assert_eq!(marks.revision(), 1);
//! ```
//!
//! [`DieFlags::GOOD`]: wafermap_grid::DieFlags::GOOD
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::{Point, Rect};
use wafermap_grid::{DenseGrid, GridMetrics};

/// The set of marked die coordinates plus a change-tracking revision.
///
/// Marking is monotonic: coordinates are only ever added, never removed,
/// except by [`MarkSet::clear`] on a data reload. The revision counter bumps
/// exactly when the set changes, giving observers a cheap "did anything
/// actually change?" marker without comparing contents.
#[derive(Clone, Debug, Default)]
pub struct MarkSet {
    marked: HashSet<(u32, u32)>,
    revision: u64,
}

impl MarkSet {
    /// Creates an empty mark set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no dies are marked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Returns the number of marked dies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Returns `true` if the die at `(col, row)` is marked.
    #[must_use]
    pub fn contains(&self, col: u32, row: u32) -> bool {
        self.marked.contains(&(col, row))
    }

    /// Iterates over the marked coordinates in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.marked.iter().copied()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is local to this `MarkSet` and bumps only when a mutation
    /// changes the set. No-op calls (re-marking, clearing an empty set) leave
    /// it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Marks the die at `(col, row)`, returning `true` if it was newly marked.
    pub fn mark(&mut self, col: u32, row: u32) -> bool {
        let added = self.marked.insert((col, row));
        if added {
            self.bump_revision();
        }
        added
    }

    /// Marks a batch of coordinates, returning how many were newly marked.
    ///
    /// The revision bumps at most once per call, regardless of batch size.
    pub fn mark_all<I>(&mut self, coords: I) -> usize
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut added = 0;
        for coord in coords {
            if self.marked.insert(coord) {
                added += 1;
            }
        }
        if added > 0 {
            self.bump_revision();
        }
        added
    }

    /// Removes all marks.
    ///
    /// Intended for data reloads; within a session marking is one-way.
    pub fn clear(&mut self) {
        if self.marked.is_empty() {
            return;
        }
        self.marked.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Computes the dies newly covered by a world-space selection rectangle.
///
/// `corner_a` and `corner_b` are opposite corners in any order. A die is
/// covered iff its world-space origin (per `metrics`) lies strictly inside
/// the rectangle, it is not flagged good, and it is not already in `marks`.
///
/// The returned coordinates are in the grid's column-major order. This
/// function mutates nothing; commit the result with [`MarkSet::mark_all`].
#[must_use]
pub fn select_in_rect(
    corner_a: Point,
    corner_b: Point,
    grid: &DenseGrid,
    metrics: &GridMetrics,
    marks: &MarkSet,
) -> Vec<(u32, u32)> {
    let rect = Rect::from_points(corner_a, corner_b);
    grid.iter()
        .filter(|(col, row, die)| {
            let origin = metrics.die_origin(*col, *row);
            origin.x > rect.x0
                && origin.x < rect.x1
                && origin.y > rect.y0
                && origin.y < rect.y1
                && !die.is_good()
                && !marks.contains(*col, *row)
        })
        .map(|(col, row, _)| (col, row))
        .collect()
}
