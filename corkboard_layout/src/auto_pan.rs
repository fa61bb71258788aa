// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-centring the viewport when an expanded group would be clipped.
//!
//! When a group is expanded its fanned cards may spill past the window. The
//! planner measures the expanded content, checks it against the visible world
//! rectangle and, if anything is clipped, proposes a new translation at the
//! current scale. Each axis is handled on its own: content that fits is
//! centred, content that does not fit is pinned a margin away from the
//! window's leading edge so as much of it as possible stays reachable.

use corkboard_view::{ConfigError, ViewportState, non_negative};
use kurbo::{Point, Rect, Size, Vec2};
use tracing::debug;

use crate::fan::{FanConfig, expanded_bounds};
use crate::size::CardSize;

/// Default distance kept between oversized content and the window edge.
pub const AUTO_PAN_MARGIN_PX: f64 = 40.0;

/// Slack used when testing for overflow, so a freshly planned transform is
/// not flagged again because of rounding.
const OVERFLOW_EPSILON: f64 = 1e-6;

/// Auto-pan tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoPanConfig {
    /// Screen-space margin used when content is too large to centre.
    pub margin_px: f64,
}

impl AutoPanConfig {
    /// Creates a config; the margin must be finite and non-negative.
    pub fn new(margin_px: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            margin_px: non_negative("margin_px", margin_px)?,
        })
    }
}

impl Default for AutoPanConfig {
    fn default() -> Self {
        Self {
            margin_px: AUTO_PAN_MARGIN_PX,
        }
    }
}

/// Geometry of the group being expanded.
#[derive(Clone, Copy, Debug)]
pub struct AutoPanGroup<'a> {
    /// World-space group origin.
    pub position: Point,
    /// Cover card, if any.
    pub cover: Option<CardSize>,
    /// Stacked cards, in fan order.
    pub stacked: &'a [CardSize],
}

/// How one axis of the new transform was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanStrategy {
    /// The content fits and was centred in the window.
    Center,
    /// The content is too large and its leading edge was pinned to the margin.
    Margin,
}

/// A proposed viewport change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoPan {
    /// The transform to move to. Scale is unchanged.
    pub target: ViewportState,
    /// Strategy used on the X axis.
    pub horizontal: PanStrategy,
    /// Strategy used on the Y axis.
    pub vertical: PanStrategy,
}

/// World-space bounds of `group` when expanded.
#[must_use]
pub fn expanded_world_bounds(group: &AutoPanGroup<'_>, fan: &FanConfig) -> Option<Rect> {
    expanded_bounds(group.cover, group.stacked, fan).map(|local| local + group.position.to_vec2())
}

/// Decides whether expanding `group` requires a pan, and where to.
///
/// Returns `None` when the expanded content is already fully visible.
#[must_use]
pub fn plan_auto_pan(
    group: &AutoPanGroup<'_>,
    fan: &FanConfig,
    viewport: ViewportState,
    window: Size,
    config: &AutoPanConfig,
) -> Option<AutoPan> {
    let content = expanded_world_bounds(group, fan)?;
    let visible = viewport.visible_world_rect(window);

    let overflows = content.x0 < visible.x0 - OVERFLOW_EPSILON
        || content.y0 < visible.y0 - OVERFLOW_EPSILON
        || content.x1 > visible.x1 + OVERFLOW_EPSILON
        || content.y1 > visible.y1 + OVERFLOW_EPSILON;
    if !overflows {
        return None;
    }

    let scale = viewport.scale;
    let margin = config.margin_px;
    let (x, horizontal) = plan_axis(content.x0, content.x1, window.width, scale, margin);
    let (y, vertical) = plan_axis(content.y0, content.y1, window.height, scale, margin);

    debug!(?horizontal, ?vertical, x, y, "auto-pan");
    Some(AutoPan {
        target: ViewportState {
            scale,
            position: Vec2::new(x, y),
        },
        horizontal,
        vertical,
    })
}

fn plan_axis(min: f64, max: f64, window: f64, scale: f64, margin: f64) -> (f64, PanStrategy) {
    if (max - min) * scale <= window - 2.0 * margin {
        let centre = (min + max) / 2.0;
        (window / 2.0 - centre * scale, PanStrategy::Center)
    } else {
        (margin - min * scale, PanStrategy::Margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Size = Size::new(1200.0, 800.0);

    fn cards() -> [CardSize; 2] {
        [CardSize::new(200.0, 300.0), CardSize::new(200.0, 300.0)]
    }

    #[test]
    fn visible_content_needs_no_pan() {
        let stacked = cards();
        let group = AutoPanGroup {
            position: Point::new(100.0, 100.0),
            cover: Some(CardSize::new(200.0, 300.0)),
            stacked: &stacked,
        };
        let plan = plan_auto_pan(
            &group,
            &FanConfig::default(),
            ViewportState::IDENTITY,
            WINDOW,
            &AutoPanConfig::default(),
        );
        assert_eq!(plan, None);
    }

    #[test]
    fn clipped_content_that_fits_is_centred() {
        let stacked = cards();
        let group = AutoPanGroup {
            position: Point::new(900.0, 100.0),
            cover: Some(CardSize::new(200.0, 300.0)),
            stacked: &stacked,
        };
        let fan = FanConfig::default();
        let config = AutoPanConfig::default();
        let plan = plan_auto_pan(&group, &fan, ViewportState::IDENTITY, WINDOW, &config).unwrap();
        assert_eq!(plan.horizontal, PanStrategy::Center);
        assert_eq!(plan.vertical, PanStrategy::Center);
        assert_eq!(plan.target.scale, 1.0);

        let bounds = expanded_world_bounds(&group, &fan).unwrap();
        let on_screen = plan.target.world_to_screen_rect(bounds);
        assert!((on_screen.center().x - 600.0).abs() < 1e-9);
        assert!((on_screen.center().y - 400.0).abs() < 1e-9);

        // Applying the plan reaches a fixed point.
        assert_eq!(plan_auto_pan(&group, &fan, plan.target, WINDOW, &config), None);
    }

    #[test]
    fn oversized_axis_is_pinned_to_margin() {
        let stacked = [CardSize::new(200.0, 300.0); 3];
        let group = AutoPanGroup {
            position: Point::new(-50.0, 100.0),
            cover: Some(CardSize::new(200.0, 300.0)),
            stacked: &stacked,
        };
        let fan = FanConfig::default();
        let viewport = ViewportState::new(1.5, Vec2::ZERO);
        let config = AutoPanConfig::default();
        let plan = plan_auto_pan(&group, &fan, viewport, WINDOW, &config).unwrap();

        assert_eq!(plan.horizontal, PanStrategy::Margin);
        assert_eq!(plan.vertical, PanStrategy::Center);

        let bounds = expanded_world_bounds(&group, &fan).unwrap();
        let on_screen = plan.target.world_to_screen_rect(bounds);
        assert!((on_screen.x0 - 40.0).abs() < 1e-9);
        assert!((on_screen.center().y - 400.0).abs() < 1e-9);

        // Still overflowing, but planning again proposes the same transform.
        let again = plan_auto_pan(&group, &fan, plan.target, WINDOW, &config).unwrap();
        assert!((again.target.position - plan.target.position).hypot() < 1e-9);
    }

    #[test]
    fn empty_group_never_pans() {
        let group = AutoPanGroup {
            position: Point::new(-5000.0, -5000.0),
            cover: None,
            stacked: &[],
        };
        assert_eq!(
            plan_auto_pan(
                &group,
                &FanConfig::default(),
                ViewportState::IDENTITY,
                WINDOW,
                &AutoPanConfig::default()
            ),
            None
        );
    }
}
