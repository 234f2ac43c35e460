// Copyright 2025 the Wafermap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

/// Multiplier applied by one zoom-in step.
const ZOOM_IN_FACTOR: f64 = 2.0;
/// Multiplier applied by one zoom-out step.
const ZOOM_OUT_FACTOR: f64 = 0.5;

/// Viewport over the wafer-map world plane.
///
/// `MapViewport` tracks a per-axis scale and a translation mapping world
/// coordinates into view/device coordinates:
///
/// ```text
/// view  = world * scale + translation
/// world = (view - translation) / scale
/// ```
///
/// It can be used to:
/// - Convert pointer positions between view and world space.
/// - Zoom in discrete steps around a chosen pivot point.
/// - Pan in view space and reset to the identity view.
#[derive(Clone, Debug, PartialEq)]
pub struct MapViewport {
    scale: Vec2,
    translation: Vec2,
    min_scale: f64,
    max_scale: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl MapViewport {
    /// Default lower bound on the per-axis average scale.
    pub const DEFAULT_MIN_SCALE: f64 = 0.25;
    /// Default upper bound on the per-axis average scale.
    pub const DEFAULT_MAX_SCALE: f64 = 64.0;

    /// Creates an identity viewport with the default scale limits.
    ///
    /// - Initial scale is `1.0` on both axes.
    /// - Initial translation is zero (world origin maps to the view origin).
    /// - The mean scale is limited to
    ///   [`DEFAULT_MIN_SCALE`](Self::DEFAULT_MIN_SCALE)..=[`DEFAULT_MAX_SCALE`](Self::DEFAULT_MAX_SCALE).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
            translation: Vec2::ZERO,
            min_scale: Self::DEFAULT_MIN_SCALE,
            max_scale: Self::DEFAULT_MAX_SCALE,
        }
    }

    /// Returns the current per-axis scale.
    #[must_use]
    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Returns the current translation in view coordinates.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Sets the minimum and maximum mean scale.
    ///
    /// The provided range is normalized so that `min_scale <= max_scale`, and
    /// the minimum is kept strictly positive. If the current mean scale falls
    /// outside the new range, the scale is adjusted uniformly onto the nearer
    /// bound (the translation is left as-is).
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale.max(f64::MIN_POSITIVE);
        self.max_scale = max_scale.max(self.min_scale);

        let mean = self.mean_scale();
        let clamped = mean.clamp(self.min_scale, self.max_scale);
        if (clamped - mean).abs() >= f64::EPSILON {
            self.scale = self.scale * (clamped / mean);
        }
    }

    /// Converts a view/device-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translation.x) / self.scale.x,
            (pt.y - self.translation.y) / self.scale.y,
        )
    }

    /// Converts a world-space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        Point::new(
            pt.x * self.scale.x + self.translation.x,
            pt.y * self.scale.y + self.translation.y,
        )
    }

    /// Applies one discrete zoom step around a pivot in view coordinates.
    ///
    /// `delta` follows the wheel-event sign convention: positive zooms out
    /// (factor 0.5), negative zooms in (factor 2), zero is a no-op. Only the
    /// sign is consulted, so wheel and button zoom share one code path.
    ///
    /// The step is rejected wholesale when the *attempted* mean scale would
    /// leave the configured limits; the state is then left unchanged, which
    /// makes repeated steps at a limit idempotent. On success the translation
    /// is re-solved so the world point under `pivot` stays visually fixed.
    ///
    /// Returns `true` if the step was applied.
    pub fn zoom(&mut self, delta: f64, pivot: Point) -> bool {
        if delta == 0.0 {
            return false;
        }
        let factor = if delta > 0.0 {
            ZOOM_OUT_FACTOR
        } else {
            ZOOM_IN_FACTOR
        };

        let new_scale = Vec2::new(self.scale.x * factor, self.scale.y * factor);
        let mean = (new_scale.x + new_scale.y) / 2.0;
        if mean < self.min_scale || mean > self.max_scale {
            return false;
        }

        let pivot_world = self.view_to_world_point(pivot);
        self.translation = pivot.to_vec2()
            - Vec2::new(pivot_world.x * new_scale.x, pivot_world.y * new_scale.y);
        self.scale = new_scale;
        true
    }

    /// Zooms in one step (factor 2) around `pivot`; see [`zoom`](Self::zoom).
    pub fn zoom_in(&mut self, pivot: Point) -> bool {
        self.zoom(-1.0, pivot)
    }

    /// Zooms out one step (factor 0.5) around `pivot`; see [`zoom`](Self::zoom).
    pub fn zoom_out(&mut self, pivot: Point) -> bool {
        self.zoom(1.0, pivot)
    }

    /// Pans the view by a delta in view/device space.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.translation += delta;
    }

    /// Resets to the identity view: scale `1.0` on both axes, zero translation.
    ///
    /// Scale limits are left untouched.
    pub fn reset(&mut self) {
        self.scale = Vec2::new(1.0, 1.0);
        self.translation = Vec2::ZERO;
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewportDebugInfo {
        MapViewportDebugInfo {
            scale: self.scale,
            translation: self.translation,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn mean_scale(&self) -> f64 {
        (self.scale.x + self.scale.y) / 2.0
    }
}

/// Debug snapshot of a [`MapViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewportDebugInfo {
    /// Current per-axis scale.
    pub scale: Vec2,
    /// Current translation in view coordinates.
    pub translation: Vec2,
    /// Minimum mean scale.
    pub min_scale: f64,
    /// Maximum mean scale.
    pub max_scale: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::MapViewport;

    #[test]
    fn world_view_roundtrip() {
        let mut vp = MapViewport::new();
        vp.pan_by_view(Vec2::new(37.5, -12.25));
        assert!(vp.zoom_in(Point::new(100.0, 50.0)));

        let world = Point::new(10.0, -5.0);
        let view = vp.world_to_view_point(world);
        let back = vp.view_to_world_point(view);
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_keeps_pivot_fixed() {
        let mut vp = MapViewport::new();
        vp.pan_by_view(Vec2::new(200.0, 80.0));

        let pivot = Point::new(400.0, 300.0);
        let world_before = vp.view_to_world_point(pivot);
        assert!(vp.zoom_in(pivot));
        let world_after = vp.view_to_world_point(pivot);

        assert!((world_after.x - world_before.x).abs() < 1e-9);
        assert!((world_after.y - world_before.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_in_is_idempotent_at_the_upper_limit() {
        let mut vp = MapViewport::new();
        let pivot = Point::new(10.0, 10.0);

        // 1 -> 2 -> 4 -> 8 -> 16 -> 32 -> 64.
        for _ in 0..6 {
            assert!(vp.zoom_in(pivot));
        }
        assert_eq!(vp.scale(), Vec2::new(64.0, 64.0));

        let before = vp.clone();
        assert!(!vp.zoom_in(pivot));
        assert_eq!(vp, before);
    }

    #[test]
    fn zoom_out_is_idempotent_at_the_lower_limit() {
        let mut vp = MapViewport::new();
        let pivot = Point::new(10.0, 10.0);

        // 1 -> 0.5 -> 0.25.
        assert!(vp.zoom_out(pivot));
        assert!(vp.zoom_out(pivot));
        assert_eq!(vp.scale(), Vec2::new(0.25, 0.25));

        let before = vp.clone();
        assert!(!vp.zoom_out(pivot));
        assert_eq!(vp, before);
    }

    #[test]
    fn wheel_sign_convention_maps_to_discrete_factors() {
        let mut vp = MapViewport::new();
        let pivot = Point::ZERO;

        // Positive wheel delta zooms out by exactly one half step.
        assert!(vp.zoom(120.0, pivot));
        assert_eq!(vp.scale(), Vec2::new(0.5, 0.5));

        // Negative delta zooms in by exactly one doubling, whatever its size.
        assert!(vp.zoom(-3.0, pivot));
        assert_eq!(vp.scale(), Vec2::new(1.0, 1.0));

        // Zero delta is a no-op.
        let before = vp.clone();
        assert!(!vp.zoom(0.0, pivot));
        assert_eq!(vp, before);
    }

    #[test]
    fn reset_restores_identity_regardless_of_prior_state() {
        let mut vp = MapViewport::new();
        vp.pan_by_view(Vec2::new(-400.0, 250.0));
        assert!(vp.zoom_in(Point::new(123.0, 45.0)));
        assert!(vp.zoom_in(Point::new(9.0, 9.0)));

        vp.reset();
        assert_eq!(vp.scale(), Vec2::new(1.0, 1.0));
        assert_eq!(vp.translation(), Vec2::ZERO);
    }

    #[test]
    fn pan_accumulates_in_view_space() {
        let mut vp = MapViewport::new();
        vp.pan_by_view(Vec2::new(10.0, 0.0));
        vp.pan_by_view(Vec2::new(-4.0, 7.0));
        assert_eq!(vp.translation(), Vec2::new(6.0, 7.0));
    }

    #[test]
    fn zoom_limits_are_normalized_and_applied() {
        let mut vp = MapViewport::new();

        // Swapped bounds are normalized.
        vp.set_zoom_limits(8.0, 0.5);
        assert!(vp.debug_info().min_scale <= vp.debug_info().max_scale);

        // Current scale (1.0) is inside the new range and stays put.
        assert_eq!(vp.scale(), Vec2::new(1.0, 1.0));

        // Narrowing the range below the current scale pulls it down.
        vp.set_zoom_limits(0.25, 0.5);
        assert_eq!(vp.scale(), Vec2::new(0.5, 0.5));

        // And the tightened limit now rejects zooming back in past it.
        assert!(!vp.zoom_in(Point::ZERO));
    }
}
