// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=wafermap_interact --heading-base-level=0

//! Wafermap Interact: the interaction controller and host facade.
//!
//! This crate composes the headless wafer-map building blocks — the dense
//! grid (`wafermap_grid`), the viewport transform (`wafermap_view2d`), and
//! selection (`wafermap_selection`) — behind one type, [`WaferMap`], that the
//! host application feeds pointer and wheel events into.
//!
//! Every event entry point returns an [`Effect`] value describing what to
//! redraw; nothing in this crate touches a drawing surface directly. The two
//! draw primitives the map consumes are expressed as the [`RenderBackend`]
//! trait, and [`paint_map`] / [`paint_outline`] turn map state and effects
//! into calls on it.
//!
//! ## Event model
//!
//! - `pointer_down` / `pointer_move` / `pointer_up` drive drag selection
//!   through an explicit two-phase state machine ([`DragPhase`]). Spurious
//!   events (up or move while idle, a second down mid-drag) are defined
//!   no-ops.
//! - `wheel`, `zoom_in`, `zoom_out`, and `reset_view` act on the viewport in
//!   either drag phase. The drag anchor lives in view coordinates, so a
//!   mid-drag zoom keeps it valid and the next move picks up the new scale.
//! - `cancel_drag` abandons a drag without committing, for host-driven
//!   cancellation such as focus loss.
//!
//! All events are expected to arrive strictly sequentially on one logical
//! thread; every operation is a synchronous computation over in-memory state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use peniko::Color;
//! use wafermap_grid::{DieFlags, DieRecord, GridMetrics};
//! use wafermap_interact::{Effect, WaferMap};
//!
//! let mut map = WaferMap::new(GridMetrics::default());
//! map.load_data(&[
//!     DieRecord::new(0, 0, Color::from_rgb8(0xcc, 0x33, 0x33), DieFlags::empty()),
//!     DieRecord::new(1, 1, Color::from_rgb8(0x33, 0xcc, 0x33), DieFlags::GOOD),
//! ])
//! .unwrap();
//!
//! // Drag a rectangle over the whole map (view == world at identity).
//! map.pointer_down(Point::new(-1.0, -1.0));
//! let effect = map.pointer_up(Point::new(2.0, 2.0));
//!
//! // Only the failing die was marked.
//! assert_eq!(effect, Effect::Committed { marked: vec![(0, 0)] });
//! assert_eq!(map.marked_count(), 1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod drag;
mod paint;

pub use controller::{Effect, WaferMap};
pub use drag::DragPhase;
pub use paint::{MARKED_COLOR, OUTLINE_COLOR, RenderBackend, paint_map, paint_outline};
