// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard Event State: pointer interaction state machines for the canvas.
//!
//! Each module tracks one interaction that spans several input events:
//!
//! - [`drag`]: turn pointer movement into a world-space item position,
//!   scale-compensated, with click-vs-drag disambiguation and scoped pointer
//!   capture.
//! - [`outside_click`]: detect taps outside an active region while ignoring
//!   drags that happen to be released there.
//! - [`escape`]: an Escape-key guard that can be locked.
//!
//! None of these know about a UI framework. The host classifies events
//! (which item was hit, whether a region opts out) and feeds plain points in;
//! the state machines hand transitions back.
//!
//! ## Drag and click
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_event_state::drag::{DragConfig, DragController, DragTarget, PointerSample};
//!
//! let mut drag = DragController::new(Point::ZERO, 1.0, DragConfig::default(), ());
//! drag.begin(PointerSample::mouse(Point::new(5.0, 5.0)), DragTarget::Draggable);
//! drag.end(PointerSample::mouse(Point::new(7.0, 6.0)));
//!
//! // Moved less than the click threshold: treat the release as a click.
//! assert!(!drag.did_drag());
//! ```
//!
//! ## Outside click
//!
//! ```rust
//! use kurbo::Point;
//! use corkboard_event_state::outside_click::{OutsideClick, PressRegion};
//!
//! let mut oc = OutsideClick::default();
//! oc.set_active(true);
//! oc.pointer_down(Point::new(10.0, 10.0), PressRegion::Outside);
//! assert!(oc.pointer_up(Point::new(11.0, 10.0)));
//! ```

pub mod drag;
pub mod escape;
pub mod outside_click;
