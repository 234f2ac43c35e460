// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend seam: the draw primitives the map consumes, plus the paint passes.

use kurbo::Rect;
use peniko::Color;

use crate::controller::WaferMap;

/// Fill used for marked dies.
pub const MARKED_COLOR: Color = Color::BLACK;

/// Stroke used for the live selection outline.
pub const OUTLINE_COLOR: Color = Color::from_rgb8(0xff, 0x00, 0x00);

/// Draw primitives the map consumes from the rendering backend.
///
/// Rectangles are in world space; the backend is expected to render them
/// under the current viewport transform (scale plus translation). Hit
/// testing, stroke widths, and actual pixel output are entirely the
/// backend's business.
pub trait RenderBackend {
    /// Fills `rect` with a solid `color`.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes the boundary of `rect` with `color`.
    fn stroke_rect(&mut self, rect: Rect, color: Color);
}

/// Paints every die on the map: one filled rectangle per occupied cell.
///
/// Marked dies are filled with [`MARKED_COLOR`]; all others keep their record
/// color. Dies are emitted in the grid's column-major order, so output is
/// deterministic for a given map state.
pub fn paint_map<B: RenderBackend>(map: &WaferMap, backend: &mut B) {
    let metrics = map.metrics();
    for (col, row, die) in map.grid().iter() {
        let color = if map.marks().contains(col, row) {
            MARKED_COLOR
        } else {
            die.color
        };
        backend.fill_rect(metrics.die_rect(col, row), color);
    }
}

/// Paints the live selection outline at a world-space rectangle.
///
/// Callers pass the rectangle from [`Effect::Outline`](crate::Effect::Outline).
pub fn paint_outline<B: RenderBackend>(rect: Rect, backend: &mut B) {
    backend.stroke_rect(rect, OUTLINE_COLOR);
}
