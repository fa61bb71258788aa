// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous pan/zoom gesture handling.
//!
//! [`ViewportController`] folds wheel, pinch and background-drag input into a
//! working [`ViewportState`]. Gestures fire many times per displayed frame, so
//! the controller only marks itself dirty; the host calls
//! [`ViewportController::take_update`] once per frame and forwards the result
//! to the canvas store.

use kurbo::{Point, Size, Vec2};

use crate::error::{ConfigError, non_negative};
use crate::viewport::{ViewportLimits, ViewportState};

/// Tunables for wheel and button zooming.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomConfig {
    /// Exponential zoom rate per wheel pixel: `factor = exp(-dy * rate)`.
    pub wheel_zoom_rate: f64,
    /// Multiplicative step used by [`ViewportController::zoom_in`] and
    /// [`ViewportController::zoom_out`].
    pub button_step: f64,
    /// Pixels per line for line-based wheel deltas.
    pub line_height_px: f64,
    /// When `true`, an unmodified wheel pans and a modified wheel zooms.
    /// When `false`, every wheel event zooms.
    pub wheel_pans: bool,
}

impl ZoomConfig {
    /// Creates a zoom config; rates and steps must be finite and positive.
    pub fn new(
        wheel_zoom_rate: f64,
        button_step: f64,
        line_height_px: f64,
        wheel_pans: bool,
    ) -> Result<Self, ConfigError> {
        let wheel_zoom_rate = non_negative("wheel_zoom_rate", wheel_zoom_rate)?;
        let line_height_px = non_negative("line_height_px", line_height_px)?;
        let button_step = non_negative("button_step", button_step)?;
        if button_step <= 1.0 {
            return Err(ConfigError::InvertedRange {
                min: 1.0,
                max: button_step,
            });
        }
        Ok(Self {
            wheel_zoom_rate,
            button_step,
            line_height_px,
            wheel_pans,
        })
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            wheel_zoom_rate: 0.002,
            button_step: 1.2,
            line_height_px: 16.0,
            wheel_pans: true,
        }
    }
}

/// Wheel delta as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelDelta {
    /// Precise delta in pixels (trackpads).
    Pixels(Vec2),
    /// Delta in lines (notched mouse wheels).
    Lines(Vec2),
}

/// A single wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Scroll amount.
    pub delta: WheelDelta,
    /// Pointer location in screen pixels; zooming is anchored here.
    pub anchor: Point,
    /// Whether a zoom modifier (ctrl / cmd, or a trackpad pinch) was held.
    pub zoom_modifier: bool,
}

#[derive(Clone, Copy, Debug)]
struct Pinch {
    distance: f64,
    midpoint: Point,
}

/// Gesture state machine that drives the canvas viewport.
#[derive(Clone, Debug)]
pub struct ViewportController {
    current: ViewportState,
    initial: ViewportState,
    limits: ViewportLimits,
    zoom: ZoomConfig,
    window: Size,
    pan_anchor: Option<Point>,
    pinch: Option<Pinch>,
    dirty: bool,
}

impl ViewportController {
    /// Creates a controller that starts at, and resets to, `initial`.
    #[must_use]
    pub fn new(
        initial: ViewportState,
        limits: ViewportLimits,
        zoom: ZoomConfig,
        window: Size,
    ) -> Self {
        let initial = initial.clamped(limits);
        Self {
            current: initial,
            initial,
            limits,
            zoom,
            window,
            pan_anchor: None,
            pinch: None,
            dirty: false,
        }
    }

    /// The working transform, including changes not yet taken.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.current
    }

    /// The configured zoom limits.
    #[must_use]
    pub fn limits(&self) -> ViewportLimits {
        self.limits
    }

    /// The window size used for button zooming and centering.
    #[must_use]
    pub fn window_size(&self) -> Size {
        self.window
    }

    /// Updates the window size.
    pub fn set_window_size(&mut self, window: Size) {
        self.window = window;
    }

    /// Adopts a transform that was set elsewhere (auto-pan, state load).
    ///
    /// This does not mark the controller dirty: the store already holds it.
    pub fn sync(&mut self, state: ViewportState) {
        self.current = state.clamped(self.limits);
        self.dirty = false;
    }

    /// Returns `true` while a pan or pinch gesture is in progress.
    #[must_use]
    pub fn is_gesturing(&self) -> bool {
        self.pan_anchor.is_some() || self.pinch.is_some()
    }

    /// Applies one wheel event.
    pub fn wheel(&mut self, input: WheelInput) {
        let delta = match input.delta {
            WheelDelta::Pixels(d) => d,
            WheelDelta::Lines(d) => d * self.zoom.line_height_px,
        };
        if input.zoom_modifier || !self.zoom.wheel_pans {
            let factor = (-delta.y * self.zoom.wheel_zoom_rate).exp();
            self.apply(self.current.zoomed_about(input.anchor, factor, self.limits));
        } else {
            self.apply(self.current.panned_by(-delta));
        }
    }

    /// Starts a background drag-pan at `point` (screen pixels).
    pub fn begin_pan(&mut self, point: Point) {
        self.pan_anchor = Some(point);
    }

    /// Continues a background drag-pan.
    pub fn pan_to(&mut self, point: Point) {
        if let Some(anchor) = self.pan_anchor {
            self.pan_anchor = Some(point);
            self.apply(self.current.panned_by(point - anchor));
        }
    }

    /// Ends a background drag-pan.
    pub fn end_pan(&mut self) {
        self.pan_anchor = None;
    }

    /// Starts a two-finger pinch.
    pub fn begin_pinch(&mut self, a: Point, b: Point) {
        self.pan_anchor = None;
        self.pinch = Some(Pinch {
            distance: a.distance(b),
            midpoint: a.midpoint(b),
        });
    }

    /// Continues a pinch: zooms by the change in finger distance about the
    /// new midpoint and pans by the midpoint's movement.
    pub fn pinch_to(&mut self, a: Point, b: Point) {
        let Some(prev) = self.pinch else {
            return;
        };
        let distance = a.distance(b);
        let midpoint = a.midpoint(b);
        self.pinch = Some(Pinch { distance, midpoint });

        let mut next = self.current.panned_by(midpoint - prev.midpoint);
        if prev.distance > f64::EPSILON {
            next = next.zoomed_about(midpoint, distance / prev.distance, self.limits);
        }
        self.apply(next);
    }

    /// Ends a pinch.
    pub fn end_pinch(&mut self) {
        self.pinch = None;
    }

    /// Zooms in one button step about the window centre.
    pub fn zoom_in(&mut self) {
        self.zoom_by(self.zoom.button_step);
    }

    /// Zooms out one button step about the window centre.
    pub fn zoom_out(&mut self) {
        self.zoom_by(1.0 / self.zoom.button_step);
    }

    /// Returns to the initial transform and abandons any gesture.
    pub fn reset(&mut self) {
        self.pan_anchor = None;
        self.pinch = None;
        self.apply(self.initial);
    }

    /// Takes the transform accumulated since the last call, if it changed.
    pub fn take_update(&mut self) -> Option<ViewportState> {
        if core::mem::take(&mut self.dirty) {
            Some(self.current)
        } else {
            None
        }
    }

    fn zoom_by(&mut self, factor: f64) {
        let centre = Point::new(self.window.width / 2.0, self.window.height / 2.0);
        self.apply(self.current.zoomed_about(centre, factor, self.limits));
    }

    fn apply(&mut self, next: ViewportState) {
        if next != self.current {
            self.current = next;
            self.dirty = true;
        }
    }
}
