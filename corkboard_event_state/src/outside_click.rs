// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-click detection that tells taps apart from drag releases.
//!
//! A press only counts if it started outside the active region and outside
//! every excluded region (control panels and the like). It fires on release,
//! and only if the pointer stayed within the threshold of where it went down,
//! so dragging something and letting go outside the region does not count.

use corkboard_view::{ConfigError, non_negative};
use kurbo::Point;

use crate::drag::CLICK_THRESHOLD_PX;

/// Outside-click tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutsideClickConfig {
    /// Maximum movement, in screen pixels, between press and release.
    pub threshold_px: f64,
}

impl OutsideClickConfig {
    /// Creates a config; the threshold must be finite and non-negative.
    pub fn new(threshold_px: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            threshold_px: non_negative("threshold_px", threshold_px)?,
        })
    }
}

impl Default for OutsideClickConfig {
    fn default() -> Self {
        Self {
            threshold_px: CLICK_THRESHOLD_PX,
        }
    }
}

/// Where a press landed, as classified by the host's hit testing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressRegion {
    /// Inside the active region.
    Inside,
    /// Inside a region that opts out of outside-click handling.
    Excluded,
    /// Anywhere else.
    Outside,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    origin: Point,
    eligible: bool,
}

/// Outside-click detector.
#[derive(Clone, Debug)]
pub struct OutsideClick {
    config: OutsideClickConfig,
    active: bool,
    press: Option<Press>,
}

impl OutsideClick {
    /// Creates an inactive detector.
    #[must_use]
    pub fn new(config: OutsideClickConfig) -> Self {
        Self {
            config,
            active: false,
            press: None,
        }
    }

    /// Turns detection on or off. Turning it off forgets any press.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.press = None;
        }
    }

    /// Returns `true` while detection is on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Records a pointer-down.
    pub fn pointer_down(&mut self, point: Point, region: PressRegion) {
        if !self.active {
            return;
        }
        self.press = Some(Press {
            origin: point,
            eligible: region == PressRegion::Outside,
        });
    }

    /// Handles a pointer-up. Returns `true` if it completes an outside click.
    pub fn pointer_up(&mut self, point: Point) -> bool {
        let Some(press) = self.press.take() else {
            return false;
        };
        self.active && press.eligible && (point - press.origin).hypot() < self.config.threshold_px
    }

    /// Handles a pointer-cancel; same rules as [`Self::pointer_up`].
    pub fn pointer_cancel(&mut self, point: Point) -> bool {
        self.pointer_up(point)
    }
}

impl Default for OutsideClick {
    fn default() -> Self {
        Self::new(OutsideClickConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active() -> OutsideClick {
        let mut oc = OutsideClick::default();
        oc.set_active(true);
        oc
    }

    #[test]
    fn still_tap_outside_fires() {
        let mut oc = active();
        oc.pointer_down(Point::new(10.0, 10.0), PressRegion::Outside);
        assert!(oc.pointer_up(Point::new(12.0, 12.0)));
    }

    #[test]
    fn drag_released_outside_does_not_fire() {
        let mut oc = active();
        oc.pointer_down(Point::new(10.0, 10.0), PressRegion::Outside);
        assert!(!oc.pointer_up(Point::new(40.0, 10.0)));
    }

    #[test]
    fn press_inside_or_excluded_never_fires() {
        let mut oc = active();
        oc.pointer_down(Point::ZERO, PressRegion::Inside);
        assert!(!oc.pointer_up(Point::ZERO));

        // A press that starts on a control panel is bypassed even though the
        // release happens somewhere else entirely.
        oc.pointer_down(Point::ZERO, PressRegion::Excluded);
        assert!(!oc.pointer_up(Point::new(1.0, 0.0)));
    }

    #[test]
    fn inactive_detector_ignores_everything() {
        let mut oc = OutsideClick::default();
        oc.pointer_down(Point::ZERO, PressRegion::Outside);
        assert!(!oc.pointer_up(Point::ZERO));

        let mut oc = active();
        oc.pointer_down(Point::ZERO, PressRegion::Outside);
        oc.set_active(false);
        oc.set_active(true);
        assert!(!oc.pointer_up(Point::ZERO));
    }

    #[test]
    fn cancel_counts_like_release() {
        let mut oc = active();
        oc.pointer_down(Point::ZERO, PressRegion::Outside);
        assert!(oc.pointer_cancel(Point::new(1.0, 1.0)));
        // The press is consumed.
        assert!(!oc.pointer_up(Point::new(1.0, 1.0)));
    }
}
