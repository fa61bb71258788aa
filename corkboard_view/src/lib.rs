// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Corkboard View: the canvas viewport transform and its gesture controller.
//!
//! The canvas is an unbounded world-space plane drawn through a uniform
//! pan+zoom transform, `screen = world * scale + position`. This crate
//! provides:
//! - [`ViewportState`]: the transform itself, with point/rect/delta
//!   conversion in both directions and anchor-preserving zoom.
//! - [`ViewportLimits`]: the allowed zoom range, `[0.3, 3.0]` by default.
//! - [`ViewportController`]: a headless state machine that folds wheel,
//!   pinch, background-drag and zoom-button input into a working transform
//!   and hands it out at most once per frame.
//! - [`ConfigError`]: the validation error shared by every Corkboard config
//!   constructor.
//!
//! It does **not** own any scene or rendering backend. Callers feed input
//! events in and forward [`ViewportController::take_update`] results to
//! whatever holds authoritative state.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use corkboard_view::{
//!     ViewportController, ViewportLimits, ViewportState, WheelDelta, WheelInput, ZoomConfig,
//! };
//!
//! let mut vc = ViewportController::new(
//!     ViewportState::IDENTITY,
//!     ViewportLimits::DEFAULT,
//!     ZoomConfig::default(),
//!     Size::new(1280.0, 800.0),
//! );
//!
//! // Ctrl+wheel zooms about the pointer.
//! vc.wheel(WheelInput {
//!     delta: WheelDelta::Pixels(Vec2::new(0.0, -120.0)),
//!     anchor: Point::new(640.0, 400.0),
//!     zoom_modifier: true,
//! });
//!
//! // Once per frame, pick up the batched result.
//! let update = vc.take_update().unwrap();
//! assert!(update.scale > 1.0);
//! assert!(vc.take_update().is_none());
//! ```
//!
//! ## Design notes
//!
//! - The zoom is uniform and there is no rotation.
//! - Scale is clamped whenever a transform is produced by this crate;
//!   `ViewportState` values built with a struct literal are clamped by the
//!   store when dispatched.

mod controller;
mod error;
mod viewport;

pub use controller::{ViewportController, WheelDelta, WheelInput, ZoomConfig};
pub use error::{ConfigError, non_negative};
pub use viewport::{MAX_SCALE, MIN_SCALE, ViewportLimits, ViewportState};
