// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag controller: turn pointer movement into a world-space position.
//!
//! ## Usage
//!
//! 1) Create one [`DragController`] per draggable item, giving it the item's
//!    stored position, the current viewport scale and a [`PointerCapture`].
//! 2) On pointer-down over the item call [`DragController::begin`]. The
//!    controller acquires the capture (the host starts routing global
//!    move/up events to it) and reports [`DragEvent::Started`].
//! 3) Feed every global pointer-move to [`DragController::pointer_move`];
//!    call [`DragController::flush_frame`] once per displayed frame to commit
//!    the newest sample.
//! 4) On pointer-up or pointer-cancel call [`DragController::end`]. It
//!    releases the capture and reports [`DragEvent::Ended`] with the final
//!    position, which is the only value that should reach the canvas store.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use corkboard_event_state::drag::{
//!     DragConfig, DragController, DragEvent, DragTarget, PointerSample,
//! };
//!
//! let mut drag = DragController::new(Point::new(100.0, 100.0), 2.0, DragConfig::default(), ());
//!
//! drag.begin(PointerSample::mouse(Point::new(100.0, 100.0)), DragTarget::Draggable);
//! drag.pointer_move(PointerSample::mouse(Point::new(200.0, 200.0)));
//! drag.flush_frame();
//!
//! // 100 screen pixels at scale 2 is 50 world units.
//! assert_eq!(drag.rendered_position(), Point::new(150.0, 150.0));
//!
//! let ended = drag.end(PointerSample::mouse(Point::new(200.0, 200.0)));
//! assert_eq!(ended, Some(DragEvent::Ended { final_position: Point::new(150.0, 150.0) }));
//! assert!(drag.did_drag());
//! ```

use corkboard_view::{ConfigError, non_negative};
use kurbo::{Point, Vec2};

/// Default movement, in screen pixels, beyond which a press becomes a drag.
pub const CLICK_THRESHOLD_PX: f64 = 6.0;

/// Drag tunables.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragConfig {
    /// Movement, in screen pixels, a press must exceed to count as a drag.
    pub click_threshold_px: f64,
}

impl DragConfig {
    /// Creates a config; the threshold must be finite and non-negative.
    pub fn new(click_threshold_px: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            click_threshold_px: non_negative("click_threshold_px", click_threshold_px)?,
        })
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            click_threshold_px: CLICK_THRESHOLD_PX,
        }
    }
}

/// One pointer event, mouse or touch.
///
/// Touch events carry their touch-point list; the first touch drives the
/// drag. A touch event with an empty list (the last finger lifting) has no
/// position of its own.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample<'a> {
    /// Pointer position in screen pixels, used when `touches` is `None`.
    pub position: Point,
    /// Active touch points, present only for touch events.
    pub touches: Option<&'a [Point]>,
}

impl<'a> PointerSample<'a> {
    /// A mouse or pen sample.
    #[must_use]
    pub const fn mouse(position: Point) -> Self {
        Self {
            position,
            touches: None,
        }
    }

    /// A touch sample.
    #[must_use]
    pub fn touch(touches: &'a [Point]) -> Self {
        Self {
            position: touches.first().copied().unwrap_or(Point::ZERO),
            touches: Some(touches),
        }
    }

    /// The point that drives interaction, if the sample has one.
    #[must_use]
    pub fn point(&self) -> Option<Point> {
        match self.touches {
            Some(touches) => touches.first().copied(),
            None => Some(self.position),
        }
    }
}

/// Whether the element under a pointer-down may start a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    /// An ordinary part of the item.
    Draggable,
    /// An opt-out region such as a link or a button inside the card.
    NoDrag,
}

/// Transitions reported by [`DragController`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragEvent {
    /// A drag began.
    Started,
    /// A drag finished at `final_position` (world space).
    Ended {
        /// Start position plus the accumulated world-space offset.
        final_position: Point,
    },
}

/// Host capability that routes global pointer move/up events to a
/// controller while it holds the capture.
///
/// A controller acquires the capture when a drag starts and releases it when
/// the drag ends, when it is disabled, when it is unmounted and when it is
/// dropped; a capture is never released twice.
pub trait PointerCapture {
    /// Start routing global pointer events to the owner.
    fn acquire(&mut self);
    /// Stop routing global pointer events to the owner.
    fn release(&mut self);
}

impl PointerCapture for () {
    fn acquire(&mut self) {}
    fn release(&mut self) {}
}

/// Per-item drag state machine.
#[derive(Debug)]
pub struct DragController<C: PointerCapture> {
    position: Point,
    scale: f64,
    disabled: bool,
    config: DragConfig,
    capture: C,
    captured: bool,
    pointer_start: Option<Point>,
    pending: Option<Point>,
    offset: Vec2,
    did_drag: bool,
}

impl<C: PointerCapture> DragController<C> {
    /// Creates an idle controller for an item stored at `position`.
    pub fn new(position: Point, scale: f64, config: DragConfig, capture: C) -> Self {
        Self {
            position,
            scale,
            disabled: false,
            config,
            capture,
            captured: false,
            pointer_start: None,
            pending: None,
            offset: Vec2::ZERO,
            did_drag: false,
        }
    }

    /// Adopts the item's stored position. Ignored mid-drag; the drag's start
    /// position stays fixed until it ends.
    pub fn set_position(&mut self, position: Point) {
        if !self.is_dragging() {
            self.position = position;
        }
    }

    /// Adopts the current viewport scale.
    pub fn set_scale(&mut self, scale: f64) {
        if scale > 0.0 && scale.is_finite() {
            self.scale = scale;
        }
    }

    /// Enables or disables dragging. Disabling mid-drag abandons the drag
    /// without reporting an end and releases the capture.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.abandon();
        }
    }

    /// Returns `true` if dragging is disabled.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer_start.is_some()
    }

    /// Returns `true` if the most recent press moved past the click
    /// threshold. Stays set after the drag ends so the click that follows a
    /// release can be suppressed; cleared by the next [`Self::begin`].
    #[must_use]
    pub fn did_drag(&self) -> bool {
        self.did_drag
    }

    /// Committed world-space offset of the current drag.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Where the item should be drawn: stored position plus live offset.
    #[must_use]
    pub fn rendered_position(&self) -> Point {
        self.position + self.offset
    }

    /// Returns `true` while this controller holds the pointer capture.
    #[must_use]
    pub fn has_capture(&self) -> bool {
        self.captured
    }

    /// The capture handle.
    pub fn capture(&self) -> &C {
        &self.capture
    }

    /// Handles a pointer-down on the item.
    ///
    /// Ignored when disabled, when the press landed on a [`DragTarget::NoDrag`]
    /// region, or when the sample carries no point.
    pub fn begin(&mut self, sample: PointerSample<'_>, target: DragTarget) -> Option<DragEvent> {
        if self.disabled || target == DragTarget::NoDrag {
            return None;
        }
        let point = sample.point()?;
        self.abandon();
        self.pointer_start = Some(point);
        self.pending = None;
        self.offset = Vec2::ZERO;
        self.did_drag = false;
        self.capture.acquire();
        self.captured = true;
        Some(DragEvent::Started)
    }

    /// Records a global pointer-move.
    ///
    /// The click threshold is checked on every raw sample; the offset itself
    /// is only committed by [`Self::flush_frame`] or [`Self::end`].
    pub fn pointer_move(&mut self, sample: PointerSample<'_>) {
        let (Some(start), Some(point)) = (self.pointer_start, sample.point()) else {
            return;
        };
        if (point - start).hypot() > self.config.click_threshold_px {
            self.did_drag = true;
        }
        self.pending = Some(point);
    }

    /// Commits the newest pointer sample. Returns the new offset if it changed.
    pub fn flush_frame(&mut self) -> Option<Vec2> {
        let start = self.pointer_start?;
        let point = self.pending.take()?;
        let offset = (point - start) / self.scale;
        if offset == self.offset {
            return None;
        }
        self.offset = offset;
        Some(offset)
    }

    /// Handles a global pointer-up or pointer-cancel.
    ///
    /// Reports the final world position exactly once per drag.
    pub fn end(&mut self, sample: PointerSample<'_>) -> Option<DragEvent> {
        self.pointer_start?;
        self.pointer_move(sample);
        self.flush_frame();

        let final_position = self.position + self.offset;
        self.position = final_position;
        self.offset = Vec2::ZERO;
        self.pointer_start = None;
        self.release();
        Some(DragEvent::Ended { final_position })
    }

    /// Tears the controller down: abandons any drag and releases the capture.
    pub fn unmount(&mut self) {
        self.abandon();
    }

    fn abandon(&mut self) {
        self.pointer_start = None;
        self.pending = None;
        self.offset = Vec2::ZERO;
        self.release();
    }

    fn release(&mut self) {
        if self.captured {
            self.captured = false;
            self.capture.release();
        }
    }
}

impl<C: PointerCapture> Drop for DragController<C> {
    fn drop(&mut self) {
        self.release();
    }
}
