// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit drag lifecycle state.

use kurbo::Point;

/// Phase of the drag-selection lifecycle.
///
/// The anchor is recorded in view/device coordinates, so it stays valid when
/// the viewport zooms mid-drag: the live rectangle computed on the next move
/// simply reflects the new transform.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is in progress.
    Dragging {
        /// Pointer-down position in view/device coordinates.
        anchor: Point,
    },
}

impl DragPhase {
    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Returns the view-space anchor of the drag in progress, if any.
    #[must_use]
    pub const fn anchor(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => Some(*anchor),
        }
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::DragPhase;

    #[test]
    fn idle_has_no_anchor() {
        let phase = DragPhase::default();
        assert!(!phase.is_dragging());
        assert_eq!(phase.anchor(), None);
    }

    #[test]
    fn dragging_reports_its_anchor() {
        let anchor = Point::new(12.0, 34.0);
        let phase = DragPhase::Dragging { anchor };
        assert!(phase.is_dragging());
        assert_eq!(phase.anchor(), Some(anchor));
    }
}
