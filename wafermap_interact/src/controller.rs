// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Vec2};

use wafermap_grid::{DenseGrid, DieRecord, GridError, GridMetrics};
use wafermap_selection::{MarkSet, select_in_rect};
use wafermap_view2d::MapViewport;

use crate::drag::DragPhase;

/// What the host/renderer should redraw after an interaction event.
///
/// Controller methods return effect values instead of touching any drawing
/// state; the rendering backend applies them. Rectangles are in world space
/// and are expected to be drawn under the current viewport transform.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Nothing changed; nothing to redraw.
    None,
    /// Redraw the live selection outline at this world-space rectangle.
    Outline(Rect),
    /// Clear the live selection outline and repaint the listed dies, which
    /// are now marked. The list is empty when the drag covered nothing new.
    Committed {
        /// Newly marked `(col, row)` coordinates.
        marked: Vec<(u32, u32)>,
    },
    /// Clear the live selection outline without committing a selection.
    OutlineCleared,
    /// Repaint the whole map (data or view transform changed).
    Repaint,
}

/// Interaction controller and host facade for one wafer-map instance.
///
/// `WaferMap` owns the only mutable session state: the dense grid built from
/// the last data load, the viewport transform, the marked-die set, and the
/// drag phase. Pointer and wheel events arrive in view/device coordinates and
/// are processed strictly sequentially; every entry point is a synchronous
/// pure computation over in-memory state.
///
/// Spurious events are tolerated no-ops: a pointer-up or pointer-move with no
/// drag in progress does nothing, and a second pointer-down keeps the first
/// anchor.
#[derive(Clone, Debug, Default)]
pub struct WaferMap {
    grid: DenseGrid,
    metrics: GridMetrics,
    viewport: MapViewport,
    marks: MarkSet,
    drag: DragPhase,
}

impl WaferMap {
    /// Creates an empty map with the given layout metrics and an identity view.
    #[must_use]
    pub fn new(metrics: GridMetrics) -> Self {
        Self {
            grid: DenseGrid::empty(),
            metrics,
            viewport: MapViewport::new(),
            marks: MarkSet::new(),
            drag: DragPhase::Idle,
        }
    }

    /// Replaces the map contents with a new batch of die records.
    ///
    /// On success the grid is rebuilt, all marks are cleared, the view resets
    /// to identity, and any drag in progress is abandoned; the caller should
    /// repaint everything. An empty batch yields an empty map, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] if the records cannot be laid out. Prior state —
    /// grid, marks, view, and drag — is left untouched in that case.
    pub fn load_data(&mut self, records: &[DieRecord]) -> Result<Effect, GridError> {
        let grid = DenseGrid::build(records)?;
        self.grid = grid;
        self.marks.clear();
        self.viewport.reset();
        self.drag = DragPhase::Idle;
        Ok(Effect::Repaint)
    }

    /// Handles a pointer-down event at `pos` (view coordinates).
    ///
    /// Starts a drag when idle. A pointer-down while already dragging is a
    /// defined no-op that keeps the original anchor.
    pub fn pointer_down(&mut self, pos: Point) -> Effect {
        if let DragPhase::Idle = self.drag {
            self.drag = DragPhase::Dragging { anchor: pos };
        }
        Effect::None
    }

    /// Handles a pointer-move event at `pos` (view coordinates).
    ///
    /// While dragging, returns the live selection rectangle in world space so
    /// the renderer can draw the outline. No grid or mark state changes.
    pub fn pointer_move(&mut self, pos: Point) -> Effect {
        match self.drag.anchor() {
            Some(anchor) => Effect::Outline(self.world_selection_rect(anchor, pos)),
            None => Effect::None,
        }
    }

    /// Handles a pointer-up event at `pos` (view coordinates).
    ///
    /// Commits the drag rectangle: every failing, not-yet-marked die whose
    /// world origin lies strictly inside it becomes marked. A pointer-up with
    /// no drag in progress is a no-op.
    pub fn pointer_up(&mut self, pos: Point) -> Effect {
        let Some(anchor) = self.drag.anchor() else {
            return Effect::None;
        };
        let rect = self.world_selection_rect(anchor, pos);
        let marked = select_in_rect(
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y1),
            &self.grid,
            &self.metrics,
            &self.marks,
        );
        self.marks.mark_all(marked.iter().copied());
        self.drag = DragPhase::Idle;
        Effect::Committed { marked }
    }

    /// Abandons a drag in progress without committing a selection.
    ///
    /// Intended for host-driven cancellation such as focus loss.
    pub fn cancel_drag(&mut self) -> Effect {
        if !self.drag.is_dragging() {
            return Effect::None;
        }
        self.drag = DragPhase::Idle;
        Effect::OutlineCleared
    }

    /// Handles a wheel event with the given `delta_y` and view-space pivot.
    ///
    /// Positive `delta_y` zooms out, negative zooms in, by one discrete step.
    /// Valid mid-drag: the anchor is kept in view coordinates, so the next
    /// move reflects the new transform. A step rejected at a scale limit is a
    /// silent no-op.
    pub fn wheel(&mut self, delta_y: f64, pivot: Point) -> Effect {
        if self.viewport.zoom(delta_y, pivot) {
            Effect::Repaint
        } else {
            Effect::None
        }
    }

    /// Zooms in one step around `pivot`; the button-driven twin of [`wheel`](Self::wheel).
    pub fn zoom_in(&mut self, pivot: Point) -> Effect {
        self.wheel(-1.0, pivot)
    }

    /// Zooms out one step around `pivot`; the button-driven twin of [`wheel`](Self::wheel).
    pub fn zoom_out(&mut self, pivot: Point) -> Effect {
        self.wheel(1.0, pivot)
    }

    /// Pans the view by a delta in view/device space.
    pub fn pan_by_view(&mut self, delta: Vec2) -> Effect {
        if delta == Vec2::ZERO {
            return Effect::None;
        }
        self.viewport.pan_by_view(delta);
        Effect::Repaint
    }

    /// Resets the view to identity scale and translation.
    pub fn reset_view(&mut self) -> Effect {
        self.viewport.reset();
        Effect::Repaint
    }

    /// Returns the number of dies on the map ("total die count" readout).
    #[must_use]
    pub fn die_count(&self) -> usize {
        self.grid.die_count()
    }

    /// Returns the number of marked dies.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.marks.len()
    }

    /// Returns the mark-set revision, a cheap change marker for count readouts.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.marks.revision()
    }

    /// Returns the current dense grid.
    #[must_use]
    pub fn grid(&self) -> &DenseGrid {
        &self.grid
    }

    /// Returns the layout metrics.
    #[must_use]
    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    /// Returns the viewport transform.
    #[must_use]
    pub fn viewport(&self) -> &MapViewport {
        &self.viewport
    }

    /// Returns a mutable viewport, for hosts that configure scale limits.
    pub fn viewport_mut(&mut self) -> &mut MapViewport {
        &mut self.viewport
    }

    /// Returns the marked-die set.
    #[must_use]
    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    /// Returns the current drag phase.
    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag
    }

    /// Maps two view-space corners through the current transform into a
    /// normalized world-space rectangle.
    fn world_selection_rect(&self, anchor_view: Point, current_view: Point) -> Rect {
        Rect::from_points(
            self.viewport.view_to_world_point(anchor_view),
            self.viewport.view_to_world_point(current_view),
        )
    }
}
