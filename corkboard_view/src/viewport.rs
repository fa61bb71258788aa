// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::error::ConfigError;

/// Smallest scale the canvas can be zoomed out to.
pub const MIN_SCALE: f64 = 0.3;
/// Largest scale the canvas can be zoomed in to.
pub const MAX_SCALE: f64 = 3.0;

/// Allowed zoom range.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportLimits {
    min_scale: f64,
    max_scale: f64,
}

impl ViewportLimits {
    /// The canvas default, `[0.3, 3.0]`.
    pub const DEFAULT: Self = Self {
        min_scale: MIN_SCALE,
        max_scale: MAX_SCALE,
    };

    /// Creates a zoom range.
    ///
    /// Both bounds must be finite, `min_scale` must be positive and not exceed
    /// `max_scale`.
    pub fn new(min_scale: f64, max_scale: f64) -> Result<Self, ConfigError> {
        if !min_scale.is_finite() || !max_scale.is_finite() {
            return Err(ConfigError::NonFinite { field: "scale" });
        }
        if min_scale <= 0.0 || min_scale > max_scale {
            return Err(ConfigError::InvertedRange {
                min: min_scale,
                max: max_scale,
            });
        }
        Ok(Self {
            min_scale,
            max_scale,
        })
    }

    /// Lower bound.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Upper bound.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Clamps `scale` into this range.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for ViewportLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// World-to-screen transform of the canvas.
///
/// A world point `w` is drawn at `w * scale + position`. `position` is the
/// screen-space translation, `scale` the uniform zoom factor.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    /// Uniform zoom factor.
    pub scale: f64,
    /// Screen-space translation applied after scaling.
    pub position: Vec2,
}

impl ViewportState {
    /// Unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        position: Vec2::ZERO,
    };

    /// Creates a transform, clamping `scale` into the default limits.
    #[must_use]
    pub fn new(scale: f64, position: Vec2) -> Self {
        Self {
            scale: ViewportLimits::DEFAULT.clamp(scale),
            position,
        }
    }

    /// Returns a copy with `scale` clamped into `limits`.
    #[must_use]
    pub fn clamped(self, limits: ViewportLimits) -> Self {
        Self {
            scale: limits.clamp(self.scale),
            position: self.position,
        }
    }

    /// The transform as an affine map from world to screen.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        Affine::translate(self.position) * Affine::scale(self.scale)
    }

    /// Converts a world point to screen pixels.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        (pt.to_vec2() * self.scale + self.position).to_point()
    }

    /// Converts a screen pixel to a world point.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        ((pt.to_vec2() - self.position) / self.scale).to_point()
    }

    /// Converts a screen-space delta (for example pointer movement) into
    /// world units.
    #[must_use]
    pub fn screen_to_world_delta(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    /// Converts a world rectangle to screen pixels.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.world_to_screen_point(rect.origin()),
            self.world_to_screen_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the world rectangle visible through a window of `window` pixels.
    ///
    /// This is `(0 - position) / scale .. (window - position) / scale` on
    /// each axis.
    #[must_use]
    pub fn visible_world_rect(&self, window: Size) -> Rect {
        Rect::from_points(
            self.screen_to_world_point(Point::ZERO),
            self.screen_to_world_point(Point::new(window.width, window.height)),
        )
    }

    /// Returns a copy translated by `delta` screen pixels.
    #[must_use]
    pub fn panned_by(self, delta: Vec2) -> Self {
        Self {
            scale: self.scale,
            position: self.position + delta,
        }
    }

    /// Returns a copy zoomed by `factor` about `anchor` (screen pixels).
    ///
    /// The world point under `anchor` stays under `anchor` unless the scale
    /// hits one of the `limits`, in which case the anchor is honoured for the
    /// clamped scale.
    #[must_use]
    pub fn zoomed_about(self, anchor: Point, factor: f64, limits: ViewportLimits) -> Self {
        if factor <= 0.0 || !factor.is_finite() {
            return self;
        }
        let new_scale = limits.clamp(self.scale * factor);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return self;
        }
        let world = self.screen_to_world_point(anchor);
        Self {
            scale: new_scale,
            position: anchor.to_vec2() - world.to_vec2() * new_scale,
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::{ViewportLimits, ViewportState};

    #[test]
    fn world_screen_roundtrip() {
        let vp = ViewportState::new(2.0, Vec2::new(30.0, -10.0));
        let world = Point::new(10.0, -5.0);
        let screen = vp.world_to_screen_point(world);
        assert_eq!(screen, Point::new(50.0, -20.0));
        let back = vp.screen_to_world_point(screen);
        assert!((back - world).hypot() < 1e-9);
        assert_eq!(vp.world_to_screen() * world, screen);
    }

    #[test]
    fn new_clamps_scale() {
        assert_eq!(ViewportState::new(10.0, Vec2::ZERO).scale, 3.0);
        assert_eq!(ViewportState::new(0.01, Vec2::ZERO).scale, 0.3);
    }

    #[test]
    fn visible_world_rect_inverts_transform() {
        let vp = ViewportState::new(2.0, Vec2::new(100.0, 50.0));
        let visible = vp.visible_world_rect(Size::new(800.0, 600.0));
        assert_eq!(visible, Rect::new(-50.0, -25.0, 350.0, 275.0));
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let vp = ViewportState::new(1.0, Vec2::new(40.0, 40.0));
        let anchor = Point::new(400.0, 300.0);
        let before = vp.screen_to_world_point(anchor);

        let zoomed = vp.zoomed_about(anchor, 2.0, ViewportLimits::DEFAULT);
        assert_eq!(zoomed.scale, 2.0);
        let after = zoomed.screen_to_world_point(anchor);
        assert!((after - before).hypot() < 1e-9);
    }

    #[test]
    fn zoom_at_limit_is_a_no_op() {
        let vp = ViewportState::new(3.0, Vec2::new(5.0, 5.0));
        let zoomed = vp.zoomed_about(Point::new(10.0, 10.0), 1.5, ViewportLimits::DEFAULT);
        assert_eq!(zoomed, vp);
        assert_eq!(
            vp.zoomed_about(Point::ZERO, 0.0, ViewportLimits::DEFAULT),
            vp
        );
    }

    #[test]
    fn limits_validate() {
        assert!(ViewportLimits::new(0.5, 2.0).is_ok());
        assert!(ViewportLimits::new(2.0, 0.5).is_err());
        assert!(ViewportLimits::new(0.0, 1.0).is_err());
        assert!(ViewportLimits::new(0.5, f64::INFINITY).is_err());
    }
}
