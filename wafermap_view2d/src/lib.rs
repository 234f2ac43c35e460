// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wafermap_view2d --heading-base-level=0

//! Wafermap View 2D: viewport state for pan and discrete pivot-preserving zoom.
//!
//! This crate provides [`MapViewport`], a small, headless model of the
//! scale-plus-translation transform a wafer map is viewed through. It focuses
//! on:
//! - Coordinate conversion between world space and view/device (pixel) space.
//! - Discrete, pivot-preserving zoom steps with enforced scale limits.
//! - Panning in view space and resetting to the identity view.
//!
//! It does **not** own the grid, selection state, or any rendering backend.
//! Callers are expected to:
//! - Wire pointer/wheel events into zoom/pan operations at a higher layer
//!   (see the `wafermap_interact` crate).
//! - Use the conversion methods to map pointer positions into world space for
//!   selection and hit queries.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use wafermap_view2d::MapViewport;
//!
//! let mut view = MapViewport::new();
//!
//! // Zoom in one step around a pixel-space pivot.
//! let pivot = Point::new(400.0, 300.0);
//! assert!(view.zoom_in(pivot));
//! assert_eq!(view.scale().x, 2.0);
//!
//! // The world point under the pivot did not move.
//! let world = view.view_to_world_point(pivot);
//! assert!((view.world_to_view_point(world) - pivot).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom steps are discrete (factor 2 in, factor 0.5 out) so that wheel- and
//!   button-driven zoom behave identically.
//! - Scale is tracked per axis but every operation applies the same factor to
//!   both axes, so the aspect ratio is preserved. The scale limit is checked
//!   against the per-axis average.
//! - A zoom step that would cross a limit is rejected wholesale: the state is
//!   left bit-for-bit unchanged, making repeated steps at a limit idempotent.
//!   Hitting a limit is not an error.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{MapViewport, MapViewportDebugInfo};
